//! Netonix switch driver.
//!
//! This crate implements [`netdev_base::NetworkDriver`] for Netonix WISP
//! switches by translating the switch's management API into the
//! vendor-neutral records.
//!
//! # Responsibilities
//!
//! - Open and drop a session through a [`Connector`]
//! - Merge port status and port configuration into the interface inventory
//! - Report octet and error counters per port
//! - Reshape the MAC table
//! - Forward candidate configurations, diffs and commits to the switch
//!
//! # Vendor calls
//!
//! | Call | Used by |
//! |------|---------|
//! | `getID` | `is_alive` |
//! | `getStatus` | `get_interfaces`, `get_interfaces_counters` |
//! | `getConfig` | `get_interfaces`, `get_config`, `load_*_candidate` |
//! | `getMAC` | `get_mac_address_table` |
//! | `getDiff` | `compare_config` |
//! | `replaceConfig` / `mergeConfig` | `load_replace_candidate` / `load_merge_candidate` |
//! | `putConfig` | `commit_config` |
//!
//! # Example
//!
//! ```ignore
//! use netdev_base::{DriverConfig, NetworkDriver};
//! use netonix_driver::NetonixDriver;
//!
//! let config = DriverConfig::new("192.0.2.10", "admin", "secret");
//! let mut driver = NetonixDriver::new(config, my_connector);
//! driver.open()?;
//! let interfaces = driver.get_interfaces()?;
//! driver.close();
//! ```

mod api;
mod driver;
mod records;
mod tables;

pub use api::{ApiError, ApiResult, ConnectParams, Connector, NetonixApi};
pub use driver::NetonixDriver;
pub use records::{MacEntry, PortConfig, PortStatus, Status};
pub use tables::*;
