// Module declarations
mod analytics_ops;
mod connection;
mod conversation_ops;
mod feedback_ops;
mod translation_ops;
mod types;
mod user_ops;

// Re-export public types
pub use types::{DatabaseBackendType, FeedbackFilter, SeaOrmDatabase};
