//! Common test utilities for lingua-gateway
//!
//! - In-memory SQLite database support
//! - Test fixtures and data factories
//! - Provider doubles and an in-process application
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TestApp, UserFactory};
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let app = TestApp::new().await;
//!     let session = app.signup(&UserFactory::create()).await;
//!     // ...
//! }
//! ```

pub mod app;
pub mod database;
pub mod providers;

// Re-export commonly used items
pub use app::{Session, TestApp};
pub use database::TestDatabase;
pub use fixtures::{TranslationFactory, UserFactory};

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
