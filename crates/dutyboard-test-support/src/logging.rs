//! Test logging — routes roster traces through the test harness.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber that writes through the test harness so log
/// lines show up next to the failing test. Filtered by `RUST_LOG`, defaulting
/// to `debug`. Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
