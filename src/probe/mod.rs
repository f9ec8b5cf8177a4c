// src/probe/mod.rs
mod case;
mod outcome;
mod prober;

pub use case::{ParamValue, ProbeCase};
pub use outcome::{format_elapsed, Outcome, ProbeResult};
pub use prober::{join_endpoint, ProbeError, Prober};
