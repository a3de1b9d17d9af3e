//! Integration tests for sentiment-gateway
//!
//! These tests drive the public API across component boundaries. Only the
//! model is replaced, either in-process or by a mock HTTP server.

pub mod analyzer_tests;
pub mod api_tests;
pub mod service_tests;
