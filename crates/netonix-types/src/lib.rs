//! Typed primitives for the Netonix switch management API.
//!
//! The Netonix API reports everything as loosely typed JSON. This crate
//! gives the few values the driver interprets a real type:
//!
//! - [`LinkState`]: the port link state reported in the status tree, with
//!   its speed in Mbit/s
//! - [`PortId`]: a front-panel port number, rendered as `"Port <n>"`
//! - [`normalize_mac`]: vendor hyphen notation to colon notation

mod link;
mod mac;
mod port;

pub use link::LinkState;
pub use mac::normalize_mac;
pub use port::PortId;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown link state: {0:?}")]
    UnknownLinkState(String),

    #[error("invalid port identifier: {0:?}")]
    InvalidPortId(String),
}
