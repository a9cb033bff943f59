//! Run summary.

use serde::Serialize;

use crate::error::{VectorFormatError, VerifyError};
use crate::verify::{Outcome, VerificationResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureEntry {
    pub label: String,
    pub filename: String,
    pub builder: String,
    pub kind: &'static str,
    pub message: String,
    /// Set for round-trip mismatches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedGroup {
    pub group: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FailureEntry>,
    pub skipped_groups: Vec<SkippedGroup>,
}

impl RunReport {
    pub fn new(results: &[VerificationResult], skipped: &[VectorFormatError]) -> Self {
        let failures: Vec<FailureEntry> = results
            .iter()
            .filter_map(|result| match &result.outcome {
                Outcome::Pass { .. } => None,
                Outcome::Fail(err) => Some(failure_entry(result, err)),
            })
            .collect();

        Self {
            total: results.len(),
            passed: results.len() - failures.len(),
            failed: failures.len(),
            failures,
            skipped_groups: skipped
                .iter()
                .map(|e| SkippedGroup {
                    group: e.group.clone(),
                    detail: e.detail.clone(),
                })
                .collect(),
        }
    }

    /// No failed cases and no skipped groups.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.skipped_groups.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn failure_entry(result: &VerificationResult, err: &VerifyError) -> FailureEntry {
    let (expected, actual) = match err {
        VerifyError::RoundTripMismatch { expected, actual } => (Some(expected.clone()), Some(actual.clone())),
        _ => (None, None),
    };
    FailureEntry {
        label: result.label.clone(),
        filename: result.case.filename.clone(),
        builder: result.case.builder.clone(),
        kind: err.kind(),
        message: err.to_string(),
        expected,
        actual,
    }
}
