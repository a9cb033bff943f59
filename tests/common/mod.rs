//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use limcode_conformance::wire::{Reader, Writer};
use limcode_conformance::{Builder, BuilderCapability, BuilderValue, CodecError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per test binary. Honors `RUST_LOG`.
pub fn init_test_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,limcode_conformance=debug"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_test_writer().compact())
            .init();
    });
}

/// Golden transfer transaction: three mosaics and the plain message "NEM".
pub const TRANSFER_PAYLOAD: &str = concat!(
    "D4000000000000006AE7B860A2F24F9E5618C25E9175761A051AAEE3910BCC8B3B42AFC0A50F586F7CDD0CE9272E",
    "CA801D3912628B8A761AAEF55FFB89E73F06E133B78ACA3EB30DC2F93346E27CE6AD1A9F8F5E3066F8326593A406",
    "BDF357ACB041E2F9AB402EFE0000000001905441000000000000000077224DFB010000009050B9837EFAB4BBE8A4",
    "B9BB32D812F9885C00D8FC1650E14203040000000000BA36BD286FB7F2670A00000000000000D787D9329996A177",
    "060000000000000029CF5FD941AD25D50500000000000000004E454D",
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mosaic {
    pub id: u64,
    pub amount: u64,
}

/// Hand-written transfer transaction builder in the generated-code layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTransactionBuilder {
    pub size: u32,
    pub signature: [u8; 64],
    pub signer: [u8; 32],
    pub version: u8,
    pub network: u8,
    pub kind: u16,
    pub fee: u64,
    pub deadline: u64,
    pub recipient: [u8; 25],
    pub mosaics: Vec<Mosaic>,
    pub message: Vec<u8>,
}

impl Builder for TransferTransactionBuilder {
    const NAME: &'static str = "TransferTransactionBuilder";

    fn load_from_binary(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut r = Reader::new(bytes);
        let size = r.read_u32()?;
        r.read_u32()?; // reserved
        let signature = r.read_array()?;
        let signer = r.read_array()?;
        r.read_u32()?; // reserved
        let version = r.read_u8()?;
        let network = r.read_u8()?;
        let kind = r.read_u16()?;
        let fee = r.read_u64()?;
        let deadline = r.read_u64()?;
        let recipient = r.read_array()?;
        let mosaics_count = r.read_u8()?;
        let message_size = r.read_u16()?;
        let reserved = r.read_u32()?;
        if reserved != 0 {
            return Err(CodecError::Invalid {
                field: "transfer_reserved",
                detail: format!("expected 0, got {reserved}"),
            });
        }
        let mosaics = (0..mosaics_count)
            .map(|_| -> Result<Mosaic, CodecError> {
                Ok(Mosaic {
                    id: r.read_u64()?,
                    amount: r.read_u64()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let message = r.read_bytes(message_size as usize)?.to_vec();

        Ok(Self {
            size,
            signature,
            signer,
            version,
            network,
            kind,
            fee,
            deadline,
            recipient,
            mosaics,
            message,
        })
    }

    fn serialize(&self) -> Vec<u8> {
        let mut w = Writer::with_capacity(self.size as usize);
        w.write_u32(self.size);
        w.write_u32(0);
        w.write_bytes(&self.signature);
        w.write_bytes(&self.signer);
        w.write_u32(0);
        w.write_u8(self.version);
        w.write_u8(self.network);
        w.write_u16(self.kind);
        w.write_u64(self.fee);
        w.write_u64(self.deadline);
        w.write_bytes(&self.recipient);
        w.write_u8(self.mosaics.len() as u8);
        w.write_u16(self.message.len() as u16);
        w.write_u32(0);
        for mosaic in &self.mosaics {
            w.write_u64(mosaic.id);
            w.write_u64(mosaic.amount);
        }
        w.write_bytes(&self.message);
        w.into_vec()
    }
}

pub struct RawBytes(pub Vec<u8>);

impl BuilderValue for RawBytes {
    fn serialize(&self) -> Result<Vec<u8>, CodecError> {
        Ok(self.0.clone())
    }
}

/// Keeps the payload as-is; always round-trips.
pub struct Passthrough;

impl BuilderCapability for Passthrough {
    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn BuilderValue>, CodecError> {
        Ok(Box::new(RawBytes(bytes.to_vec())))
    }
}

/// Appends a zero byte on encode.
pub struct TrailingZero;

impl BuilderCapability for TrailingZero {
    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn BuilderValue>, CodecError> {
        Ok(Box::new(RawBytes(bytes.to_vec())))
    }

    fn encode(&self, value: &dyn BuilderValue) -> Result<Vec<u8>, CodecError> {
        let mut out = value.serialize()?;
        out.push(0);
        Ok(out)
    }
}

/// Rejects every payload.
pub struct Rejecting;

impl BuilderCapability for Rejecting {
    fn decode(&self, _bytes: &[u8]) -> Result<Box<dyn BuilderValue>, CodecError> {
        Err(CodecError::Message("unsupported entity type".into()))
    }
}

/// Decodes anything, refuses to encode it back.
pub struct FailingEncode;

impl BuilderCapability for FailingEncode {
    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn BuilderValue>, CodecError> {
        Ok(Box::new(RawBytes(bytes.to_vec())))
    }

    fn encode(&self, _value: &dyn BuilderValue) -> Result<Vec<u8>, CodecError> {
        Err(CodecError::Message("mosaic id out of range".into()))
    }
}
