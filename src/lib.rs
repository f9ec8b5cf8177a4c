// src/lib.rs
pub mod config;
pub mod mock;
pub mod probe;
pub mod runner;
