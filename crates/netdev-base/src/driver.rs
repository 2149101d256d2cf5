//! The driver trait implemented by every vendor adapter.

use std::path::Path;
use std::time::Duration;

use crate::models::{AliveRecord, ConfigRecord, ConfigRetrieve, Interfaces, InterfacesCounters, MacTableEntry};
use crate::{DriverError, DriverResult};

/// Capability set of a network device driver.
///
/// A driver owns at most one session to its device. Every operation other
/// than [`open`](NetworkDriver::open), [`close`](NetworkDriver::close) and
/// [`is_alive`](NetworkDriver::is_alive) fails with
/// [`DriverError::NotConnected`] while no session is open.
///
/// Configuration changes follow a load/commit workflow: one of the
/// `load_*_candidate` methods stages a candidate, [`compare_config`]
/// shows what would change and [`commit_config`] applies it.
///
/// [`compare_config`]: NetworkDriver::compare_config
/// [`commit_config`]: NetworkDriver::commit_config
pub trait NetworkDriver {
    /// Opens a session to the device.
    fn open(&mut self) -> DriverResult<()>;

    /// Drops the session. Closing a closed driver is a no-op.
    fn close(&mut self);

    /// Returns true if a session is held.
    fn is_open(&self) -> bool;

    /// Probes the session. Never fails; an unusable session reports
    /// `is_alive: false`.
    fn is_alive(&mut self) -> AliveRecord;

    /// Returns the interface inventory keyed by interface name.
    fn get_interfaces(&mut self) -> DriverResult<Interfaces>;

    /// Returns traffic counters keyed by interface name.
    fn get_interfaces_counters(&mut self) -> DriverResult<InterfacesCounters>;

    /// Returns the MAC address table.
    fn get_mac_address_table(&mut self) -> DriverResult<Vec<MacTableEntry>>;

    /// Returns the requested configuration stores as text.
    fn get_config(&mut self, retrieve: ConfigRetrieve) -> DriverResult<ConfigRecord>;

    /// Stages a candidate that replaces the whole configuration on commit.
    ///
    /// When both `filename` and `config` are given the file wins.
    fn load_replace_candidate(
        &mut self,
        filename: Option<&Path>,
        config: Option<&str>,
    ) -> DriverResult<()>;

    /// Stages a candidate that is merged into the configuration on commit.
    ///
    /// When both `filename` and `config` are given the file wins.
    fn load_merge_candidate(
        &mut self,
        filename: Option<&Path>,
        config: Option<&str>,
    ) -> DriverResult<()>;

    /// Returns the pending changes as text.
    fn compare_config(&mut self) -> DriverResult<String>;

    /// Applies the staged candidate.
    ///
    /// `revert_in` requests a confirmed commit that is rolled back unless
    /// confirmed within the given time.
    fn commit_config(&mut self, message: &str, revert_in: Option<Duration>) -> DriverResult<()>;

    /// Drops the staged candidate.
    fn discard_config(&mut self) -> DriverResult<()> {
        Err(DriverError::NotImplemented {
            operation: "discard_config",
        })
    }

    /// Restores the configuration that preceded the last commit.
    fn rollback(&mut self) -> DriverResult<()> {
        Err(DriverError::NotImplemented {
            operation: "rollback",
        })
    }

    /// Returns true while a confirmed commit awaits confirmation.
    fn has_pending_commit(&self) -> bool {
        false
    }
}
