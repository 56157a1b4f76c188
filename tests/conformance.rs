#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]
//! Conformance suite
//!
//! Table-driven canonicalization and resolution cases loaded from JSON.

#[path = "conformance/loader.rs"]
mod loader;

#[path = "conformance/runner.rs"]
mod runner;
