//! Storage layer for the Gateway
//!
//! Relational persistence for users, translations, conversations and feedback.

/// Database storage module
pub mod database;

pub use database::{Database, DatabaseBackendType, FeedbackFilter};
