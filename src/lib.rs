#![doc(test(attr(deny(warnings))))]

//! Finance Core offers per-user transaction ledger, query, and recurring
//! transaction scheduling primitives that power higher level personal
//! finance workflows and CLIs.

pub mod config;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod query;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("finance_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
