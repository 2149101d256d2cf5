//! Vendor call names, field names and defaults.
//!
//! These match the Netonix management API's JSON trees.

/// Top-level key of the port array in both the status and config trees.
pub const PORTS_KEY: &str = "Ports";

/// Vendor call names, as reported in [`DriverError::Api`](netdev_base::DriverError::Api).
pub mod calls {
    pub const OPEN: &str = "open";
    pub const GET_ID: &str = "getID";
    pub const GET_STATUS: &str = "getStatus";
    pub const GET_CONFIG: &str = "getConfig";
    pub const GET_MAC: &str = "getMAC";
    pub const GET_DIFF: &str = "getDiff";
    pub const REPLACE_CONFIG: &str = "replaceConfig";
    pub const MERGE_CONFIG: &str = "mergeConfig";
    pub const PUT_CONFIG: &str = "putConfig";
}

/// Field names inside `Ports[]` of the configuration tree.
pub mod fields {
    /// Port number.
    pub const NUMBER: &str = "Number";

    /// Port description.
    pub const NAME: &str = "Name";

    /// Admin state.
    pub const ENABLE: &str = "Enable";

    pub const MTU: &str = "MTU";
}

/// Values reported for a port before its configuration is merged in.
pub mod defaults {
    pub const DEFAULT_MTU: u32 = 1500;

    pub const DEFAULT_ENABLED: bool = true;

    pub const DEFAULT_DESCRIPTION: &str = "";

    /// The switch exposes no per-port MAC address.
    pub const MAC_ADDRESS: &str = "";
}
