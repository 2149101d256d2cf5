//! Port identifiers.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Front-panel port number as reported in `Ports[].Number`.
///
/// Rendered as `"Port <n>"`, which is the interface name the driver exposes.
///
/// # Examples
///
/// ```
/// use netonix_types::PortId;
///
/// let port = PortId::new(7);
/// assert_eq!(port.to_string(), "Port 7");
/// assert_eq!("Port 7".parse::<PortId>().unwrap(), port);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPortNumber", into = "u32")]
pub struct PortId(u32);

/// Port numbers arrive as JSON numbers on most firmware and as strings on some.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPortNumber {
    Number(u32),
    Text(String),
}

impl TryFrom<RawPortNumber> for PortId {
    type Error = ParseError;

    fn try_from(raw: RawPortNumber) -> Result<Self, Self::Error> {
        match raw {
            RawPortNumber::Number(n) => Ok(PortId(n)),
            RawPortNumber::Text(s) => s
                .trim()
                .parse()
                .map(PortId)
                .map_err(|_| ParseError::InvalidPortId(s)),
        }
    }
}

impl From<PortId> for u32 {
    fn from(port: PortId) -> u32 {
        port.0
    }
}

impl PortId {
    /// Prefix of the rendered interface name.
    pub const PREFIX: &'static str = "Port ";

    /// Creates a port identifier from its number.
    pub const fn new(number: u32) -> Self {
        PortId(number)
    }

    /// Returns the port number.
    pub const fn number(&self) -> u32 {
        self.0
    }

    /// Returns the interface name, `"Port <n>"`.
    pub fn interface_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl FromStr for PortId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(Self::PREFIX)
            .and_then(|n| n.parse::<u32>().ok())
            .map(PortId)
            .ok_or_else(|| ParseError::InvalidPortId(s.to_string()))
    }
}

impl From<u32> for PortId {
    fn from(number: u32) -> Self {
        PortId(number)
    }
}
