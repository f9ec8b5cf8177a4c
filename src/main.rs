// src/main.rs
use anyhow::{Context, Result};
use endpoint_prober::config::{self, SuiteConfig};
use endpoint_prober::runner::{exit_code, TestRunner};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("endpoint_prober=info".parse()?),
        )
        .init();

    // Built-in suite unless a suite file is given
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading suite from: {}", path);
            config::load_config(&path).await?
        }
        None => {
            let config = SuiteConfig::default();
            config.validate()?;
            config
        }
    };

    let runner = TestRunner::new(config.clone()).context("Failed to set up probe runner")?;
    let summary = runner.run_all().await;

    let code = exit_code(&config, &summary);
    if code != 0 {
        warn!("Exiting with status {}: fail_on_error is set", code);
        std::process::exit(code);
    }

    Ok(())
}
