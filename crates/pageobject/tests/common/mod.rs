// Shared test support: tracing setup, the scripted driver double, and
// fixture pages mirroring a small example site.

#![allow(dead_code)] // not every suite uses every helper

pub mod fixtures;
pub mod scripted;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes tracing for tests (call at the start of each test).
///
/// Uses RUST_LOG environment variable, defaults to no output.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
