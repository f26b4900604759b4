//! Core data models for the Gateway
//!
//! Domain records and the JSON views the API returns. Field names serialize
//! in camelCase.

pub mod conversation;
pub mod feedback;
pub mod stats;
pub mod translation;
pub mod user;

// Re-export commonly used types
pub use conversation::*;
pub use feedback::*;
pub use stats::*;
pub use translation::*;
pub use user::*;
