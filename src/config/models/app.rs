//! Application-level settings

use super::*;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("Invalid version regex"));
static PREFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/[a-zA-Z0-9/_-]+$").expect("Invalid prefix regex"));

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
    Testing,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
            Environment::Testing => "testing",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            "testing" | "test" => Ok(Environment::Testing),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Environment the service runs in
    #[serde(default)]
    pub environment: Environment,
    /// Debug mode flag
    #[serde(default)]
    pub debug: bool,
    /// Human readable project name
    #[serde(default = "default_project_name")]
    pub project_name: String,
    /// Reported API version (semver)
    #[serde(default = "default_version")]
    pub version: String,
    /// Prefix for every route
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            debug: false,
            project_name: default_project_name(),
            version: default_version(),
            api_prefix: default_api_prefix(),
        }
    }
}

impl AppConfig {
    /// Validate application configuration
    pub fn validate(&self) -> Result<(), String> {
        if !VERSION_PATTERN.is_match(&self.version) {
            return Err(format!(
                "Version must look like MAJOR.MINOR.PATCH, got '{}'",
                self.version
            ));
        }

        if !PREFIX_PATTERN.is_match(&self.api_prefix) {
            return Err(format!("Invalid API prefix: '{}'", self.api_prefix));
        }

        if self.environment.is_production() && self.debug {
            return Err("Debug mode must be disabled in production".to_string());
        }

        Ok(())
    }
}

fn default_project_name() -> String {
    "Sentiment Analyzer".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
