//! The capability seam between the harness and a codec library.
//!
//! The harness never looks inside a decoded value. It only needs to turn bytes
//! into *something* and turn that something back into bytes.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CodecError;

/// A decoded, type-erased builder instance.
pub trait BuilderValue: Send {
    fn serialize(&self) -> Result<Vec<u8>, CodecError>;
}

/// Decode/encode capability registered under a builder name.
pub trait BuilderCapability: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn BuilderValue>, CodecError>;

    fn encode(&self, value: &dyn BuilderValue) -> Result<Vec<u8>, CodecError> {
        value.serialize()
    }
}

/// A generated builder type: loads itself from a binary payload and
/// serializes back to bytes.
pub trait Builder: Sized + Send + 'static {
    /// Declared type name, the registry key.
    const NAME: &'static str;

    fn load_from_binary(bytes: &[u8]) -> Result<Self, CodecError>;

    fn serialize(&self) -> Vec<u8>;
}

struct Loaded<T>(T);

impl<T: Builder> BuilderValue for Loaded<T> {
    fn serialize(&self) -> Result<Vec<u8>, CodecError> {
        Ok(self.0.serialize())
    }
}

/// Capability for a [`Builder`] type.
pub struct BuilderAdapter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> BuilderAdapter<T> {
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for BuilderAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Builder> BuilderCapability for BuilderAdapter<T> {
    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn BuilderValue>, CodecError> {
        Ok(Box::new(Loaded(T::load_from_binary(bytes)?)))
    }
}

struct SerdeValue<T>(T);

impl<T: Serialize + Send> BuilderValue for SerdeValue<T> {
    fn serialize(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(&self.0)?)
    }
}

/// Capability for any serde type, using bincode's fixed-int little-endian
/// wire format.
///
/// ```rust
/// use limcode_conformance::{BuilderCapability, SerdeBuilder};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Header {
///     version: u8,
///     network: u8,
///     kind: u16,
/// }
///
/// let cap = SerdeBuilder::<Header>::new();
/// let value = cap.decode(&[0x01, 0x90, 0x54, 0x41]).unwrap();
/// assert_eq!(cap.encode(value.as_ref()).unwrap(), vec![0x01, 0x90, 0x54, 0x41]);
/// ```
pub struct SerdeBuilder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeBuilder<T> {
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for SerdeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BuilderCapability for SerdeBuilder<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn BuilderValue>, CodecError> {
        let value: T = bincode::deserialize(bytes)?;
        Ok(Box::new(SerdeValue(value)))
    }
}
