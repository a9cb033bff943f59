//! Decode -> encode -> compare, one case at a time.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::alias::NormalizedCase;
use crate::error::VerifyError;
use crate::hex_codec::{decode_hex, encode_hex, normalize_hex};
use crate::identity::case_label;
use crate::registry::BuilderRegistry;

/// How to schedule a batch of cases. Results are identical either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    Sequential,
    /// One rayon task per case; falls back to sequential without the
    /// `parallel` feature.
    #[default]
    Parallel,
}

#[derive(Debug)]
pub enum Outcome {
    Pass { out_hex: String },
    Fail(VerifyError),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass { .. })
    }
}

#[derive(Debug)]
pub struct VerificationResult {
    pub label: String,
    pub case: NormalizedCase,
    pub outcome: Outcome,
}

/// Round-trip one case's payload through its builder.
///
/// Returns the re-encoded hex on success.
pub fn round_trip(case: &NormalizedCase, registry: &BuilderRegistry) -> Result<String, VerifyError> {
    let bytes = decode_hex(&case.payload)?;
    let capability = registry.resolve(&case.builder)?;

    let value = capability.decode(&bytes).map_err(|source| VerifyError::Decode {
        builder: case.builder.clone(),
        source,
    })?;
    let out = capability
        .encode(value.as_ref())
        .map_err(|source| VerifyError::Encode {
            builder: case.builder.clone(),
            source,
        })?;

    let expected = normalize_hex(&case.payload);
    let actual = encode_hex(&out);
    if actual != expected {
        return Err(VerifyError::RoundTripMismatch { expected, actual });
    }
    Ok(actual)
}

/// Verify one case and label it.
pub fn verify(case: NormalizedCase, registry: &BuilderRegistry) -> VerificationResult {
    let label = case_label(&case);
    let outcome = match round_trip(&case, registry) {
        Ok(out_hex) => {
            debug!(case = %label, "round-trip ok");
            Outcome::Pass { out_hex }
        }
        Err(err) => {
            warn!(case = %label, kind = err.kind(), error = %err, "round-trip failed");
            Outcome::Fail(err)
        }
    };
    VerificationResult { label, case, outcome }
}

/// Verify every case, keeping input order in the output.
pub fn verify_all(
    cases: Vec<NormalizedCase>,
    registry: &BuilderRegistry,
    mode: ExecutionMode,
) -> Vec<VerificationResult> {
    match mode {
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => cases
            .into_par_iter()
            .map(|case| verify(case, registry))
            .collect(),
        _ => cases.into_iter().map(|case| verify(case, registry)).collect(),
    }
}
