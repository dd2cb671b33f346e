//! Services for simplified disclosure workflows.

pub mod disclosure_service;
pub mod error;
