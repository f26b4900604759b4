//! Core functionality for the Gateway
//!
//! Domain models and the clients for the translation, speech and
//! chat-completion providers.

pub mod assistant;
pub mod models;
pub mod speech;
pub mod translation;
