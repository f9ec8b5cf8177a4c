// src/runner/mod.rs
mod exit;
mod summary;
mod test_runner;

pub use exit::exit_code;
pub use summary::RunSummary;
pub use test_runner::TestRunner;
