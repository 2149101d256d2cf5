//! Error types for driver operations.
//!
//! Every driver operation returns [`DriverResult`]. Vendor client failures
//! are carried unmodified as the `source` of [`DriverError::Connection`] or
//! [`DriverError::Api`], so callers that need vendor-specific detail can
//! downcast them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed vendor error carried as an error source.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors that can occur during driver operations.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Operation requires an open session.
    #[error("'{operation}' requires an open connection; call open() first")]
    NotConnected {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// Opening the session failed (unreachable host, bad credentials).
    #[error("Failed to connect to {host}: {source}")]
    Connection {
        /// The device hostname.
        host: String,
        /// The vendor client error.
        #[source]
        source: BoxError,
    },

    /// A vendor API call failed on an open session.
    #[error("Device call '{operation}' failed: {source}")]
    Api {
        /// The vendor operation that failed (e.g., "getStatus").
        operation: &'static str,
        /// The vendor client error.
        #[source]
        source: BoxError,
    },

    /// Vendor data could not be translated into a standard record.
    #[error("Cannot translate {context}: {source}")]
    Translation {
        /// What was being translated (e.g., "link state of Port 3").
        context: String,
        /// The underlying lookup or parse error.
        #[source]
        source: BoxError,
    },

    /// The candidate for a replace operation is malformed.
    #[error("Invalid replace candidate: {reason}")]
    ReplaceConfig {
        /// Why the candidate was rejected.
        reason: String,
    },

    /// The candidate for a merge operation is malformed.
    #[error("Invalid merge candidate: {reason}")]
    MergeConfig {
        /// Why the candidate was rejected.
        reason: String,
    },

    /// Reading a candidate file failed.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Rendering a record to text failed.
    #[error("Failed to render {what}: {source}")]
    Render {
        /// What was being rendered.
        what: &'static str,
        /// The serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// Driver configuration validation error.
    #[error("Invalid driver configuration for {field}: {message}")]
    InvalidConfig {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },

    /// The driver does not implement this operation.
    #[error("'{operation}' is not implemented by this driver")]
    NotImplemented {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// The operation exists but a requested feature of it does not.
    #[error("{feature} is not supported by this driver")]
    Unsupported {
        /// The unsupported feature.
        feature: &'static str,
    },
}

impl DriverError {
    /// Creates a connection error.
    pub fn connection(host: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Connection {
            host: host.into(),
            source: source.into(),
        }
    }

    /// Creates a vendor API error.
    pub fn api(operation: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Api {
            operation,
            source: source.into(),
        }
    }

    /// Creates a translation error.
    pub fn translation(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Translation {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if the caller's candidate configuration was invalid,
    /// as opposed to the device rejecting it.
    pub fn is_bad_candidate(&self) -> bool {
        matches!(
            self,
            DriverError::ReplaceConfig { .. } | DriverError::MergeConfig { .. }
        )
    }

    /// Returns true if the operation was refused before reaching the device.
    pub fn is_precondition(&self) -> bool {
        matches!(self, DriverError::NotConnected { .. })
    }
}
