//! Validation utilities for the Gateway
//!
//! Field-level checks for signup, feedback and admin listing parameters.

mod data_validator;
mod pagination;


pub use data_validator::DataValidator;
pub use pagination::{DayRange, Pagination};
