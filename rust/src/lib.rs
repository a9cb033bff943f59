//! # Limcode conformance
//!
//! Golden-vector round-trip harness for generated binary builders. Every
//! vector names a builder and a canonical payload; the harness decodes the
//! payload through that builder, encodes the value again and requires the
//! same bytes back.
//!
//! ```rust
//! use limcode_conformance::{Harness, HarnessConfig, InMemorySource, RegistryBuilder, SerdeBuilder};
//!
//! let mut registry = RegistryBuilder::new();
//! registry
//!     .register("TransferTransactionBuilder", SerdeBuilder::<(u16, u16)>::new())
//!     .unwrap();
//!
//! let harness = Harness::new(HarnessConfig::new("unused"), registry.build());
//! let sources = [InMemorySource::new(
//!     "v1.yaml",
//!     "- builder: TransferTransactionBuilder\n  payload: 0102AABB\n",
//! )];
//! let run = harness.run_sources(&sources).unwrap();
//! assert!(run.report.is_success());
//! assert_eq!(run.report.passed, 1);
//! ```

pub mod alias;
pub mod builder;
pub mod config;
pub mod error;
pub mod harness;
pub mod hex_codec;
pub mod identity;
pub mod registry;
pub mod report;
pub mod vectors;
pub mod verify;
pub mod wire;

pub use alias::{AliasTable, NormalizedCase};
pub use builder::{Builder, BuilderAdapter, BuilderCapability, BuilderValue, SerdeBuilder};
pub use config::HarnessConfig;
pub use error::{
    AliasError, CodecError, ConfigError, HarnessError, LoadError, MalformedHexError, RegistryError,
    UnknownBuilderError, VectorFormatError, VectorSourceError, VerifyError,
};
pub use harness::{Harness, RunOutput};
pub use hex_codec::{decode_hex, encode_hex, normalize_hex};
pub use identity::{case_label, identify};
pub use registry::{BuilderCatalog, BuilderRegistry, RegistryBuilder};
pub use report::{FailureEntry, RunReport, SkippedGroup};
pub use vectors::{
    discover, load, load_dir, parse_group, FileSource, FormatErrorPolicy, InMemorySource, LoadedCorpus,
    TestVectorItem, VectorSource,
};
pub use verify::{round_trip, verify, verify_all, ExecutionMode, Outcome, VerificationResult};
