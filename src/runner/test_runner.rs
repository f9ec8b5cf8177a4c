// src/runner/test_runner.rs
use super::summary::RunSummary;
use crate::config::SuiteConfig;
use crate::probe::{ProbeError, Prober};
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

/// Drives a suite's enabled cases one at a time through a shared client.
pub struct TestRunner {
    config: SuiteConfig,
    prober: Prober,
}

impl TestRunner {
    pub fn new(config: SuiteConfig) -> Result<Self, ProbeError> {
        let client = Prober::build_client(config.timeout())?;
        let prober = Prober::new(client, config.base_url.clone(), config.timeout());

        Ok(Self { config, prober })
    }

    /// Probes every enabled case in order. A failing case never stops the
    /// run. Consumes the runner so the client is released when the run ends.
    pub async fn run_all(self) -> RunSummary {
        let run_id = Uuid::new_v4();
        let span = info_span!("probe_run", %run_id);

        async move {
            info!("Starting API tests against {}", self.prober.base_url());

            let mut summary = RunSummary::start(run_id);
            for case in self.config.enabled_cases() {
                let result = self.prober.probe(case).await;
                summary.record(result);
            }

            let skipped = self.config.cases.len() - summary.total();
            if skipped > 0 {
                debug!("Skipped {} disabled cases", skipped);
            }

            summary.finish();
            summary
        }
        .instrument(span)
        .await
    }
}
