//! Legacy builder-name remapping.
//!
//! Old corpora keep referring to builders that were renamed in the catalog.
//! Resolution is exact-match and single-hop; anything not in the table passes
//! through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AliasError;
use crate::vectors::TestVectorItem;

/// A vector whose builder name has been through alias resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedCase {
    pub filename: String,
    pub builder: String,
    pub payload: String,
}

/// Immutable `old -> new` builder rename table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct AliasTable {
    renames: BTreeMap<String, String>,
}

impl AliasTable {
    /// Renames the builder catalog has gone through.
    pub fn catalog_default() -> Self {
        let mut renames = BTreeMap::new();
        renames.insert(
            "AggregateTransactionBuilder".to_string(),
            "AggregateCompleteTransactionBuilder".to_string(),
        );
        Self { renames }
    }

    /// Rejects chains (`a -> b`, `b -> c`) and cycles.
    pub fn new<I, K, V>(renames: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let renames: BTreeMap<String, String> = renames
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        for (from, to) in &renames {
            if renames.contains_key(to) {
                return Err(AliasError::Chained {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }
        Ok(Self { renames })
    }

    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.renames.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn normalize(&self, item: TestVectorItem) -> NormalizedCase {
        let resolved = self.resolve(&item.builder);
        let builder = if resolved == item.builder {
            item.builder
        } else {
            tracing::trace!(from = %item.builder, to = %resolved, "builder alias applied");
            resolved.to_string()
        };
        NormalizedCase {
            filename: item.filename,
            builder,
            payload: item.payload,
        }
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}

impl TryFrom<BTreeMap<String, String>> for AliasTable {
    type Error = AliasError;

    fn try_from(renames: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Self::new(renames)
    }
}

impl From<AliasTable> for BTreeMap<String, String> {
    fn from(table: AliasTable) -> Self {
        table.renames
    }
}
