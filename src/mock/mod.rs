// src/mock/mod.rs
//! In-process stand-in for the catalog service, answering the endpoint
//! shapes the probe suite expects.
mod routes;
mod server;

pub use routes::{resolve, Route, Verdict, ROUTES};
pub use server::{spawn, StubHandle, StubSettings};
