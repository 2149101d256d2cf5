//! Candidate configuration sources for the load operations.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{DriverError, DriverResult};

/// Resolves the candidate text from a file path or inline text.
///
/// The file takes precedence when both are given; the inline text is then
/// ignored. Returns `Ok(None)` when neither is supplied.
pub fn read_candidate(filename: Option<&Path>, config: Option<&str>) -> DriverResult<Option<String>> {
    match (filename, config) {
        (Some(path), _) => {
            debug!("Reading candidate from {}", path.display());
            fs::read_to_string(path)
                .map(Some)
                .map_err(|source| DriverError::Io {
                    path: path.to_path_buf(),
                    source,
                })
        }
        (None, Some(text)) => Ok(Some(text.to_string())),
        (None, None) => Ok(None),
    }
}
