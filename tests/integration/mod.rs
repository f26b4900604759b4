//! Integration tests for lingua-gateway
//!
//! These tests exercise the storage layer and the HTTP surface together
//! against a real in-memory database.

pub mod admin_api_tests;
pub mod auth_api_tests;
pub mod chat_api_tests;
pub mod database_tests;
pub mod middleware_tests;
