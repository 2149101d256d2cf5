//! Vendor-neutral contract for network device drivers.
//!
//! Automation tooling talks to every switch through the same small surface,
//! regardless of how the vendor exposes its management plane:
//!
//! - [`NetworkDriver`]: lifecycle, inventory, counters, MAC table and
//!   configuration operations
//! - [`models`]: the standardized records those operations return, with the
//!   exact key names consumers depend on
//! - [`DriverConfig`]: connection parameters handed to a driver
//! - [`error`]: the [`DriverError`] taxonomy shared by all drivers
//!
//! # Example
//!
//! ```ignore
//! use netdev_base::{ConfigRetrieve, NetworkDriver};
//!
//! fn dump(driver: &mut impl NetworkDriver) -> netdev_base::DriverResult<()> {
//!     driver.open()?;
//!     for (name, iface) in driver.get_interfaces()? {
//!         println!("{name}: up={} speed={}", iface.is_up, iface.speed);
//!     }
//!     println!("{}", driver.get_config(ConfigRetrieve::Running)?.running);
//!     driver.close();
//!     Ok(())
//! }
//! ```

pub mod candidate;
pub mod config;
pub mod driver;
pub mod error;
pub mod models;

// Re-export commonly used items at crate root
pub use candidate::read_candidate;
pub use config::DriverConfig;
pub use driver::NetworkDriver;
pub use error::{BoxError, DriverError, DriverResult};
pub use models::{
    AliveRecord, ConfigRecord, ConfigRetrieve, InterfaceCounters, InterfaceRecord, Interfaces,
    InterfacesCounters, MacTableEntry,
};
