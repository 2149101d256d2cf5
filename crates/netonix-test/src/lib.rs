//! Integration test infrastructure for the Netonix driver
//!
//! Provides:
//! - An in-memory fake switch implementing the vendor client traits
//! - Test fixtures for status, configuration and MAC tables
//! - Call-log verification helpers
//! - Test logging setup

pub mod fake;
pub mod fixtures;
mod verification;

pub use fake::{FakeConnector, FakeSession, FakeSwitch, StagedConfig, SwitchState};
pub use verification::*;

use netdev_base::DriverConfig;
use netonix_driver::NetonixDriver;

/// Installs a tracing subscriber writing to the test harness output.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Builds a disconnected driver pointed at `switch` with its credentials.
pub fn driver_for(switch: &FakeSwitch) -> NetonixDriver<FakeConnector> {
    let (username, password) = switch.credentials();
    NetonixDriver::new(
        DriverConfig::new(fixtures::HOSTNAME, username, password),
        switch.connector(),
    )
}
