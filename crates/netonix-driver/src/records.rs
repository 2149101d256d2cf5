//! Vendor records returned by the Netonix management API.
//!
//! Field names follow the switch's JSON verbatim. Counters and numbers are
//! accepted both as JSON numbers and as numeric strings, since firmware
//! versions disagree on which they send.

use std::fmt;
use std::str::FromStr;

use netonix_types::PortId;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Live status tree (`getStatus`). Only the port array is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "Ports", default)]
    pub ports: Vec<PortStatus>,
}

/// Live status of one port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortStatus {
    #[serde(rename = "Number")]
    pub number: PortId,

    /// Link state name, e.g. `"1G"` or `"Down"`.
    #[serde(rename = "Link")]
    pub link: String,

    #[serde(rename = "TxOctets", deserialize_with = "number")]
    pub tx_octets: u64,

    #[serde(rename = "TxErrors", deserialize_with = "number")]
    pub tx_errors: u64,

    #[serde(rename = "RxOctets", deserialize_with = "number")]
    pub rx_octets: u64,

    #[serde(rename = "RxErrors", deserialize_with = "number")]
    pub rx_errors: u64,
}

/// Configuration of one port, from the `Ports` array of the config tree.
///
/// Absent fields leave the driver's defaults in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortConfig {
    #[serde(rename = "Number")]
    pub number: PortId,

    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "Enable", default)]
    pub enable: Option<bool>,

    #[serde(rename = "MTU", default, deserialize_with = "optional_number")]
    pub mtu: Option<u32>,
}

/// One MAC table entry (`getMAC`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacEntry {
    /// Hyphen-separated MAC address.
    #[serde(rename = "MAC")]
    pub mac: String,

    #[serde(rename = "Port")]
    pub port: PortId,

    #[serde(rename = "VLAN_ID", deserialize_with = "number")]
    pub vlan_id: u16,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

fn parse_text<T, E>(text: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: fmt::Display,
    E: serde::de::Error,
{
    text.trim()
        .parse()
        .map_err(|e| E::custom(format!("invalid number {:?}: {}", text, e)))
}

fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match NumberOrText::<T>::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => parse_text(&s),
    }
}

fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => parse_text(&s).map(Some),
    }
}

impl PortConfig {
    /// Extracts the port array from a full configuration tree.
    ///
    /// A tree without a `Ports` key yields no ports.
    pub fn from_config_tree(tree: &serde_json::Value) -> Result<Vec<PortConfig>, serde_json::Error> {
        match tree.get(crate::PORTS_KEY) {
            Some(ports) => Vec::<PortConfig>::deserialize(ports),
            None => Ok(Vec::new()),
        }
    }
}
