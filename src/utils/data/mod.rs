//! Data processing utilities
//!
//! Request field validation shared by the route handlers.

pub mod validation;

pub use validation::*;
