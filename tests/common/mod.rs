//! Common test utilities for sentiment-gateway
//!
//! - Analyzer and cache doubles that run in-process
//! - Configuration and request fixtures
//! - Custom assertions

pub mod fixtures;

// Re-export commonly used items
pub use doubles::{FailingCache, StubAnalyzer};
pub use fixtures::{ConfigFactory, ScoreFactory};
