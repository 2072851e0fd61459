#![doc(test(attr(deny(warnings))))]

//! Cashflow Core offers the monthly aggregation, forecasting, and carry-over
//! primitives that power dashboard summaries in personal finance apps.
//!
//! Every function in this crate is a pure computation over caller-owned
//! slices: no I/O, no caching, no shared mutable state. Malformed inputs
//! degrade to neutral values instead of failing, so a dashboard always has a
//! number to show.

pub mod dates;
pub mod errors;
pub mod forecast;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT: Once = Once::new();

/// One-time crate setup: installs the tracing subscriber and logs that the
/// engine is ready. Embedding apps call this once at startup; repeat calls
/// are no-ops.
pub fn init() {
    INIT.call_once(|| {
        utils::init_tracing();
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "cashflow engine ready");
    });
}
