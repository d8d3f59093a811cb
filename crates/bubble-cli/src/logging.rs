//! Tracing setup
//!
//! Logs go to stderr so `bubble segments` output on stdout stays valid JSON.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Pick the filter: `--verbose`, then `RUST_LOG`, then the config file
fn build_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_FILTER)))
}

/// Install the global subscriber; returns false if one was already set
pub fn init(verbose: bool, configured: Option<&str>) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
