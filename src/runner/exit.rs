// src/runner/exit.rs
use super::summary::RunSummary;
use crate::config::SuiteConfig;

/// Process exit status for a finished run. Always 0 unless the suite opts in
/// with `fail_on_error`, in which case any FAIL or ERROR yields 1.
pub fn exit_code(config: &SuiteConfig, summary: &RunSummary) -> i32 {
    if config.fail_on_error && !summary.is_success() {
        1
    } else {
        0
    }
}
