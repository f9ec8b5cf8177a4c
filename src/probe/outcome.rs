// src/probe/outcome.rs
use std::fmt;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The endpoint answered 200.
    Pass { status: u16 },
    /// The endpoint answered with any other status.
    Fail { status: u16, body: String },
    /// No usable response: timeout, refused connection, DNS, TLS, body read.
    Error { error: String },
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Pass { .. } => "PASS",
            Outcome::Fail { .. } => "FAIL",
            Outcome::Error { .. } => "ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub name: String,
    pub path: String,
    pub elapsed: Duration,
    pub outcome: Outcome,
}

impl ProbeResult {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        elapsed: Duration,
        outcome: Outcome,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            elapsed,
            outcome,
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Pass { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match &self.outcome {
            Outcome::Pass { status } | Outcome::Fail { status, .. } => Some(*status),
            Outcome::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error { error } => Some(error),
            _ => None,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Writes the single log line for this probe.
    pub fn emit(&self) {
        match &self.outcome {
            Outcome::Pass { status } => info!(
                test = %self.name,
                path = %self.path,
                elapsed_secs = self.elapsed_secs(),
                status = *status,
                "{}",
                self
            ),
            Outcome::Fail { status, .. } => error!(
                test = %self.name,
                path = %self.path,
                elapsed_secs = self.elapsed_secs(),
                status = *status,
                "{}",
                self
            ),
            Outcome::Error { .. } => error!(
                test = %self.name,
                path = %self.path,
                elapsed_secs = self.elapsed_secs(),
                "{}",
                self
            ),
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) - {}",
            self.outcome.label(),
            self.name,
            self.path,
            format_elapsed(self.elapsed)
        )?;

        match &self.outcome {
            Outcome::Pass { .. } => Ok(()),
            Outcome::Fail { status, body } => write!(f, " - Status: {} - {}", status, body),
            Outcome::Error { error } => write!(f, " - {}", error),
        }
    }
}

/// Seconds with two decimals, e.g. `0.25s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}
