//! Stable labels for reporting.
//!
//! Cases in the same group often share a builder name, so the label carries a
//! digest of the payload to tell them apart. Labels never affect outcomes.

use sha2::{Digest, Sha256};

use crate::alias::NormalizedCase;

/// Uppercase hex SHA-256 of the payload text.
pub fn identify(payload: &str) -> String {
    hex::encode_upper(Sha256::digest(payload.as_bytes()))
}

/// `"{filename} - {builder} - {identity}"`
pub fn case_label(case: &NormalizedCase) -> String {
    format!("{} - {} - {}", case.filename, case.builder, identify(&case.payload))
}
