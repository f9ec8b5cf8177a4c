// src/config/mod.rs
mod catalog;
mod models;

pub use catalog::*;
pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load a probe suite from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<SuiteConfig> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read suite file {}", path.display()))?;

    let config: SuiteConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&contents).context("Failed to parse YAML suite")?
        }
        _ => serde_json::from_str(&contents).context("Failed to parse JSON suite")?,
    };

    config.validate()?;
    Ok(config)
}
