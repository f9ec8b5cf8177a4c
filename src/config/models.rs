// src/config/models.rs
use super::catalog::default_catalog;
use crate::probe::ProbeCase;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Base URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),

    #[error("Base URL `{0}` has no host")]
    MissingHost(String),

    #[error("Base URL `{0}` must not carry a query or fragment")]
    QueryOrFragment(String),

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Case #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("Case `{name}` has path `{path}`, which must start with '/'")]
    RelativePath { name: String, path: String },
}

/// A probe run: where to send requests, how long to wait, and what to ask for.
/// Missing fields in a suite file fall back to the built-in values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub base_url: Url,
    pub timeout_ms: u64,
    /// Exit non-zero when any probe fails or errors.
    pub fail_on_error: bool,
    pub cases: Vec<ProbeCase>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            fail_on_error: false,
            cases: default_catalog(),
        }
    }
}

impl SuiteConfig {
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn enabled_cases(&self) -> impl Iterator<Item = &ProbeCase> {
        self.cases.iter().filter(|case| case.enabled)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(self.base_url.to_string()));
        }
        if self.base_url.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingHost(self.base_url.to_string()));
        }
        if self.base_url.query().is_some() || self.base_url.fragment().is_some() {
            return Err(ConfigError::QueryOrFragment(self.base_url.to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        for (index, case) in self.cases.iter().enumerate() {
            if case.name.trim().is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            if !case.path.starts_with('/') {
                return Err(ConfigError::RelativePath {
                    name: case.name.clone(),
                    path: case.path.clone(),
                });
            }
        }

        Ok(())
    }
}
