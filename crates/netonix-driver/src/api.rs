//! Vendor client contract.
//!
//! The driver never talks HTTP itself. A [`Connector`] produces an
//! authenticated session implementing [`NetonixApi`], and the driver only
//! reshapes what that session returns.

use std::time::Duration;

use thiserror::Error;

use crate::records::{MacEntry, Status};

/// Result type alias for vendor client calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures raised by a Netonix API client.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The switch could not be reached or the connection dropped.
    #[error("Transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
    },

    /// The switch refused the credentials or the session expired.
    #[error("Authentication failed for user '{username}'")]
    Authentication {
        /// The user that was refused.
        username: String,
    },

    /// The switch answered with something the client could not decode.
    #[error("Unexpected response to {call}: {message}")]
    Protocol {
        /// The vendor call (e.g., "getStatus").
        call: String,
        /// Error message.
        message: String,
    },

    /// The switch understood the request and rejected it.
    #[error("Switch rejected {call}: {message}")]
    Rejected {
        /// The vendor call (e.g., "replaceConfig").
        call: String,
        /// The switch's error message.
        message: String,
    },
}

impl ApiError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    pub fn authentication(username: impl Into<String>) -> Self {
        Self::Authentication {
            username: username.into(),
        }
    }

    /// Creates a protocol error.
    pub fn protocol(call: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Protocol {
            call: call.into(),
            message: message.into(),
        }
    }

    /// Creates a rejection error.
    pub fn rejected(call: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            call: call.into(),
            message: message.into(),
        }
    }

    /// Returns true if the failure is in the connection rather than the
    /// request, so the same call may succeed on a new session.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Transport { .. } | ApiError::Authentication { .. }
        )
    }
}

/// An authenticated session against one switch.
///
/// Calls block until the switch answers. Implementations may cache cookies
/// or the last fetched tree, hence `&mut self`.
#[cfg_attr(test, mockall::automock)]
pub trait NetonixApi {
    /// Fetches the device identity.
    fn get_id(&mut self) -> ApiResult<serde_json::Value>;

    /// Fetches the live status tree.
    fn get_status(&mut self) -> ApiResult<Status>;

    /// Fetches the full configuration tree.
    fn get_config(&mut self) -> ApiResult<serde_json::Value>;

    /// Fetches the MAC address table.
    fn get_mac(&mut self) -> ApiResult<Vec<MacEntry>>;

    /// Fetches the switch's diff between pending and running configuration.
    fn get_diff(&mut self) -> ApiResult<serde_json::Value>;

    /// Stages `config` to replace the configuration.
    fn replace_config(&mut self, config: serde_json::Value) -> ApiResult<()>;

    /// Stages `config` to be merged into the configuration.
    fn merge_config(&mut self, config: serde_json::Value) -> ApiResult<()>;

    /// Persists the staged configuration.
    fn put_config(&mut self) -> ApiResult<()>;
}

impl<T: NetonixApi + ?Sized> NetonixApi for Box<T> {
    fn get_id(&mut self) -> ApiResult<serde_json::Value> {
        (**self).get_id()
    }

    fn get_status(&mut self) -> ApiResult<Status> {
        (**self).get_status()
    }

    fn get_config(&mut self) -> ApiResult<serde_json::Value> {
        (**self).get_config()
    }

    fn get_mac(&mut self) -> ApiResult<Vec<MacEntry>> {
        (**self).get_mac()
    }

    fn get_diff(&mut self) -> ApiResult<serde_json::Value> {
        (**self).get_diff()
    }

    fn replace_config(&mut self, config: serde_json::Value) -> ApiResult<()> {
        (**self).replace_config(config)
    }

    fn merge_config(&mut self, config: serde_json::Value) -> ApiResult<()> {
        (**self).merge_config(config)
    }

    fn put_config(&mut self) -> ApiResult<()> {
        (**self).put_config()
    }
}

/// Parameters for opening a session.
#[derive(Clone, Copy)]
pub struct ConnectParams<'a> {
    pub hostname: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    /// Connect timeout. Enforcement is up to the client.
    pub timeout: Duration,
}

impl std::fmt::Debug for ConnectParams<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectParams")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Opens authenticated sessions.
pub trait Connector {
    type Session: NetonixApi;

    /// Creates a client and logs in.
    fn connect(&self, params: &ConnectParams<'_>) -> ApiResult<Self::Session>;
}
