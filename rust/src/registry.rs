//! Name -> capability lookup, built once at startup.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::builder::{Builder, BuilderAdapter, BuilderCapability};
use crate::error::{RegistryError, UnknownBuilderError};

/// Implemented by a codec library to enumerate every builder it exports.
///
/// ```rust
/// use limcode_conformance::{BuilderCatalog, RegistryBuilder, RegistryError, SerdeBuilder};
///
/// struct Catalog;
///
/// impl BuilderCatalog for Catalog {
///     fn register_all(registry: &mut RegistryBuilder) -> Result<(), RegistryError> {
///         registry.register("AmountDto", SerdeBuilder::<u64>::new())?;
///         registry.register("HeightDto", SerdeBuilder::<u64>::new())?;
///         Ok(())
///     }
/// }
///
/// let registry = RegistryBuilder::from_catalog::<Catalog>().unwrap();
/// assert_eq!(registry.names().collect::<Vec<_>>(), ["AmountDto", "HeightDto"]);
/// ```
pub trait BuilderCatalog {
    fn register_all(registry: &mut RegistryBuilder) -> Result<(), RegistryError>;
}

/// Mutable stage of a [`BuilderRegistry`]
#[derive(Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<String, Arc<dyn BuilderCapability>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from everything a catalog exports.
    pub fn from_catalog<C: BuilderCatalog>() -> Result<BuilderRegistry, RegistryError> {
        let mut builder = Self::new();
        C::register_all(&mut builder)?;
        Ok(builder.build())
    }

    pub fn register<C>(&mut self, name: impl Into<String>, capability: C) -> Result<&mut Self, RegistryError>
    where
        C: BuilderCapability + 'static,
    {
        self.register_shared(name, Arc::new(capability))
    }

    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        capability: Arc<dyn BuilderCapability>,
    ) -> Result<&mut Self, RegistryError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.entries.insert(name, capability);
        Ok(self)
    }

    /// Register a generated builder under its declared name.
    pub fn register_builder<T: Builder>(&mut self) -> Result<&mut Self, RegistryError> {
        self.register(T::NAME, BuilderAdapter::<T>::new())
    }

    pub fn build(self) -> BuilderRegistry {
        tracing::debug!(builders = self.entries.len(), "builder registry sealed");
        BuilderRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable map from canonical builder name to capability.
///
/// Shared read-only across verification workers.
pub struct BuilderRegistry {
    entries: BTreeMap<String, Arc<dyn BuilderCapability>>,
}

impl BuilderRegistry {
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn BuilderCapability>, UnknownBuilderError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| UnknownBuilderError { name: name.to_string() })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("builders", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
