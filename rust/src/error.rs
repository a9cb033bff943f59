//! Error types for the conformance harness.
//!
//! Corpus-level errors ([`LoadError`]) are fatal to a run. Everything a single
//! case can hit is a [`VerifyError`] and only fails that case.

use std::path::PathBuf;

use thiserror::Error;

/// Payload string is not a whole number of hex-encoded bytes.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("malformed hex payload: {0}")]
pub struct MalformedHexError(#[from] pub hex::FromHexError);

/// No capability is registered under the requested builder name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown builder: '{name}'")]
pub struct UnknownBuilderError {
    pub name: String,
}

/// A builder rejected its input or could not produce output.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Input ended before the builder finished reading.
    #[error("unexpected end of input: needed {needed} bytes at offset {offset}, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Structurally invalid content.
    #[error("invalid {field}: {detail}")]
    Invalid { field: &'static str, detail: String },

    /// Error raised by the bincode wire format.
    #[error("bincode: {0}")]
    Bincode(#[from] Box<bincode::ErrorKind>),

    /// Free-form failure reported by a hand-written builder.
    #[error("{0}")]
    Message(String),
}

/// Source could not be read; no cases can be produced from it.
#[derive(Error, Debug)]
#[error("cannot read vector source '{source_name}': {cause}")]
pub struct VectorSourceError {
    pub source_name: String,
    #[source]
    pub cause: std::io::Error,
}

/// A group's content is not a list of `{builder, payload}` records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed vector group '{group}': {detail}")]
pub struct VectorFormatError {
    pub group: String,
    pub detail: String,
}

/// Fatal corpus-level failure.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] VectorSourceError),

    #[error(transparent)]
    Format(#[from] VectorFormatError),
}

/// Per-case failure. Exactly one of these, or a pass, is reported for each case.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error(transparent)]
    MalformedHex(#[from] MalformedHexError),

    #[error(transparent)]
    UnknownBuilder(#[from] UnknownBuilderError),

    #[error("builder '{builder}' failed to decode payload: {source}")]
    Decode {
        builder: String,
        #[source]
        source: CodecError,
    },

    #[error("builder '{builder}' failed to encode decoded value: {source}")]
    Encode {
        builder: String,
        #[source]
        source: CodecError,
    },

    #[error("round-trip mismatch: expected {expected}, got {actual}")]
    RoundTripMismatch { expected: String, actual: String },
}

impl VerifyError {
    /// Stable snake_case tag used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            VerifyError::MalformedHex(_) => "malformed_hex",
            VerifyError::UnknownBuilder(_) => "unknown_builder",
            VerifyError::Decode { .. } => "decode",
            VerifyError::Encode { .. } => "encode",
            VerifyError::RoundTripMismatch { .. } => "round_trip_mismatch",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("builder '{0}' registered twice")]
    Duplicate(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    /// `from -> to` where `to` is itself renamed; single-hop resolution would not be final.
    #[error("alias '{from}' maps to '{to}', which is itself an alias")]
    Chained { from: String, to: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Anything that stops a whole run.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
