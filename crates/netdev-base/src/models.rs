//! Standardized records returned by [`NetworkDriver`](crate::NetworkDriver).
//!
//! Field names are part of the cross-vendor contract and serialize
//! byte-for-byte as consumers expect them (`is_up`, `tx_octets`,
//! `last_move`, ...). Every record is rebuilt on each call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::DriverError;

/// Sentinel for `last_flapped` when the device does not report it.
pub const LAST_FLAPPED_UNKNOWN: f64 = -1.0;

/// Interface inventory keyed by interface name.
pub type Interfaces = BTreeMap<String, InterfaceRecord>;

/// Interface counters keyed by interface name.
pub type InterfacesCounters = BTreeMap<String, InterfaceCounters>;

/// Status of a single interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    /// Operational (link) state.
    pub is_up: bool,
    /// Administrative state.
    pub is_enabled: bool,
    pub description: String,
    /// Seconds since the epoch of the last flap, or -1.0 if unknown.
    pub last_flapped: f64,
    /// Speed in Mbit/s.
    pub speed: f64,
    /// MTU in bytes.
    pub mtu: u32,
    pub mac_address: String,
}

/// Traffic counters of a single interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceCounters {
    pub tx_errors: u64,
    pub rx_errors: u64,
    pub tx_discards: u64,
    pub rx_discards: u64,
    pub tx_octets: u64,
    pub rx_octets: u64,
    pub tx_unicast_packets: u64,
    pub rx_unicast_packets: u64,
    pub tx_multicast_packets: u64,
    pub rx_multicast_packets: u64,
    pub tx_broadcast_packets: u64,
    pub rx_broadcast_packets: u64,
}

/// One entry of the MAC address table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacTableEntry {
    /// Colon-separated MAC address.
    pub mac: String,
    pub interface: String,
    pub vlan: u16,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub active: bool,
    /// Number of moves, if the device tracks them.
    pub moves: Option<u64>,
    /// Seconds since the epoch of the last move, if the device tracks it.
    pub last_move: Option<f64>,
}

/// Textual configuration per store. Stores the device lacks are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    pub running: String,
    pub candidate: String,
    pub startup: String,
}

/// Result of a liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliveRecord {
    pub is_alive: bool,
}

impl AliveRecord {
    pub const ALIVE: AliveRecord = AliveRecord { is_alive: true };
    pub const DEAD: AliveRecord = AliveRecord { is_alive: false };
}

/// Which configuration stores `get_config` should populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigRetrieve {
    /// All stores (default).
    #[default]
    All,
    Running,
    Candidate,
    Startup,
}

impl ConfigRetrieve {
    /// Returns true if the running store is requested.
    pub const fn wants_running(&self) -> bool {
        matches!(self, ConfigRetrieve::All | ConfigRetrieve::Running)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigRetrieve::All => "all",
            ConfigRetrieve::Running => "running",
            ConfigRetrieve::Candidate => "candidate",
            ConfigRetrieve::Startup => "startup",
        }
    }
}

impl fmt::Display for ConfigRetrieve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigRetrieve {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ConfigRetrieve::All),
            "running" => Ok(ConfigRetrieve::Running),
            "candidate" => Ok(ConfigRetrieve::Candidate),
            "startup" => Ok(ConfigRetrieve::Startup),
            _ => Err(DriverError::invalid_config(
                "retrieve",
                format!("unknown configuration store: {}", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_interface_record_keys() {
        let record = InterfaceRecord {
            is_up: true,
            is_enabled: true,
            description: "uplink".to_string(),
            last_flapped: LAST_FLAPPED_UNKNOWN,
            speed: 1000.0,
            mtu: 1500,
            mac_address: String::new(),
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "is_up": true,
                "is_enabled": true,
                "description": "uplink",
                "last_flapped": -1.0,
                "speed": 1000.0,
                "mtu": 1500,
                "mac_address": "",
            })
        );
    }

    #[test]
    fn test_mac_entry_keys() {
        let entry = MacTableEntry {
            mac: "00:1C:58:29:4A:71".to_string(),
            interface: "Port 3".to_string(),
            vlan: 100,
            is_static: false,
            active: true,
            moves: None,
            last_move: None,
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "mac": "00:1C:58:29:4A:71",
                "interface": "Port 3",
                "vlan": 100,
                "static": false,
                "active": true,
                "moves": null,
                "last_move": null,
            })
        );
    }

    #[test]
    fn test_counters_key_set() {
        let value = serde_json::to_value(InterfaceCounters::default()).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        assert_eq!(
            keys,
            vec![
                "rx_broadcast_packets",
                "rx_discards",
                "rx_errors",
                "rx_multicast_packets",
                "rx_octets",
                "rx_unicast_packets",
                "tx_broadcast_packets",
                "tx_discards",
                "tx_errors",
                "tx_multicast_packets",
                "tx_octets",
                "tx_unicast_packets",
            ]
        );
    }

    #[test]
    fn test_config_retrieve() {
        assert_eq!(ConfigRetrieve::default(), ConfigRetrieve::All);
        assert!(ConfigRetrieve::All.wants_running());
        assert!(ConfigRetrieve::Running.wants_running());
        assert!(!ConfigRetrieve::Candidate.wants_running());
        assert_eq!(
            "Startup".parse::<ConfigRetrieve>().unwrap(),
            ConfigRetrieve::Startup
        );
        assert!("rescue".parse::<ConfigRetrieve>().is_err());
    }
}
