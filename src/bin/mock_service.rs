//! src/bin/mock_service.rs
//! Run: cargo run --bin mock_service -- [port]
//! Env: BASE_DELAY_MS, JITTER_MS, FAIL_PCT

use anyhow::Result;
use endpoint_prober::mock::{self, StubSettings};
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("endpoint_prober=debug".parse()?),
        )
        .init();

    let port: u16 = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "8000".into())
        .parse()?;

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let stub = mock::spawn(addr, StubSettings::from_env()).await?;

    tokio::select! {
        _ = signal::ctrl_c() => info!("Shutdown signal received"),
        _ = stub.wait() => {}
    }

    Ok(())
}
