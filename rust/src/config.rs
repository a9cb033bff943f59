//! Harness configuration.
//!
//! ```yaml
//! vector_dir: test/vector
//! aliases:
//!   AggregateTransactionBuilder: AggregateCompleteTransactionBuilder
//! on_format_error: skip
//! execution: sequential
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::alias::AliasTable;
use crate::error::ConfigError;
use crate::vectors::FormatErrorPolicy;
use crate::verify::ExecutionMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Root of the vector corpus, walked recursively
    pub vector_dir: PathBuf,
    /// Builder renames; defaults to [`AliasTable::catalog_default`]
    #[serde(default = "AliasTable::catalog_default")]
    pub aliases: AliasTable,
    #[serde(default)]
    pub on_format_error: FormatErrorPolicy,
    #[serde(default)]
    pub execution: ExecutionMode,
}

impl HarnessConfig {
    pub fn new(vector_dir: impl Into<PathBuf>) -> Self {
        Self {
            vector_dir: vector_dir.into(),
            aliases: AliasTable::catalog_default(),
            on_format_error: FormatErrorPolicy::default(),
            execution: ExecutionMode::default(),
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}
