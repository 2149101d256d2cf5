//! Verification helpers for driver tests
//!
//! Every call a [`FakeSwitch`](crate::FakeSwitch) receives is recorded as a
//! [`VendorCall`]; these helpers assert on that log.

use netonix_driver::calls;
use serde_json::Value;
use thiserror::Error;

/// One call received by the fake switch.
#[derive(Debug, Clone, PartialEq)]
pub enum VendorCall {
    Open { username: String },
    GetId,
    GetStatus,
    GetConfig,
    GetMac,
    GetDiff,
    ReplaceConfig(Value),
    MergeConfig(Value),
    PutConfig,
}

impl VendorCall {
    /// Returns the vendor name of the call (e.g., "getStatus").
    pub fn name(&self) -> &'static str {
        match self {
            VendorCall::Open { .. } => calls::OPEN,
            VendorCall::GetId => calls::GET_ID,
            VendorCall::GetStatus => calls::GET_STATUS,
            VendorCall::GetConfig => calls::GET_CONFIG,
            VendorCall::GetMac => calls::GET_MAC,
            VendorCall::GetDiff => calls::GET_DIFF,
            VendorCall::ReplaceConfig(_) => calls::REPLACE_CONFIG,
            VendorCall::MergeConfig(_) => calls::MERGE_CONFIG,
            VendorCall::PutConfig => calls::PUT_CONFIG,
        }
    }

    /// Returns the payload of a staging call.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            VendorCall::ReplaceConfig(v) | VendorCall::MergeConfig(v) => Some(v),
            _ => None,
        }
    }
}

/// Verification error types
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Expected calls {expected:?}, got {actual:?}")]
    SequenceMismatch {
        expected: Vec<&'static str>,
        actual: Vec<&'static str>,
    },

    #[error("Expected a {call} call, none was made")]
    CallNotFound { call: &'static str },

    #[error("Payload mismatch for {call}: expected {expected}, got {actual}")]
    PayloadMismatch {
        call: &'static str,
        expected: Value,
        actual: Value,
    },
}

/// Result type for verification operations
pub type VerifyResult<T> = Result<T, VerificationError>;

/// Verify the call log matches `expected` by call name, in order.
pub fn assert_call_sequence(log: &[VendorCall], expected: &[&'static str]) -> VerifyResult<()> {
    let actual: Vec<&'static str> = log.iter().map(VendorCall::name).collect();
    if actual != expected {
        return Err(VerificationError::SequenceMismatch {
            expected: expected.to_vec(),
            actual,
        });
    }
    Ok(())
}

/// Verify the last call named `call` carried `expected` as its payload.
pub fn assert_last_payload(
    log: &[VendorCall],
    call: &'static str,
    expected: &Value,
) -> VerifyResult<()> {
    let found = log
        .iter()
        .rev()
        .find(|c| c.name() == call)
        .ok_or(VerificationError::CallNotFound { call })?;

    let actual = found.payload().cloned().unwrap_or(Value::Null);
    if &actual != expected {
        return Err(VerificationError::PayloadMismatch {
            call,
            expected: expected.clone(),
            actual,
        });
    }
    Ok(())
}

/// Counts calls named `call` in the log.
pub fn count_calls(log: &[VendorCall], call: &'static str) -> usize {
    log.iter().filter(|c| c.name() == call).count()
}
