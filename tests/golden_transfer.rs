//! Golden transfer-transaction vector through a hand-written builder.

mod common;

use common::{init_test_tracing, Mosaic, TransferTransactionBuilder, TRANSFER_PAYLOAD};
use limcode_conformance::{
    case_label, decode_hex, round_trip, verify, Builder, BuilderRegistry, CodecError, NormalizedCase, Outcome,
    RegistryBuilder, VerifyError,
};

fn registry() -> BuilderRegistry {
    let mut b = RegistryBuilder::new();
    b.register_builder::<TransferTransactionBuilder>().unwrap();
    b.build()
}

fn transfer_case(payload: &str) -> NormalizedCase {
    NormalizedCase {
        filename: "transfer.yml".into(),
        builder: "TransferTransactionBuilder".into(),
        payload: payload.into(),
    }
}

#[test]
fn test_golden_transfer_round_trips() {
    init_test_tracing();

    let result = verify(transfer_case(TRANSFER_PAYLOAD), &registry());
    match result.outcome {
        Outcome::Pass { out_hex } => assert_eq!(out_hex, TRANSFER_PAYLOAD),
        Outcome::Fail(err) => panic!("golden transfer failed: {err}"),
    }
    assert_eq!(
        result.label,
        "transfer.yml - TransferTransactionBuilder - \
         5C4A5F54BB809053B689773DF88A287CFF591D497B0D91A7971D763928275D98"
    );
    assert_eq!(result.label, case_label(&transfer_case(TRANSFER_PAYLOAD)));
}

#[test]
fn test_golden_transfer_fields() {
    let tx = TransferTransactionBuilder::load_from_binary(&decode_hex(TRANSFER_PAYLOAD).unwrap()).unwrap();

    assert_eq!(tx.size, 212);
    assert_eq!(tx.version, 1);
    assert_eq!(tx.network, 144);
    assert_eq!(tx.kind, 16724);
    assert_eq!(tx.deadline, 8511103607);
    assert_eq!(tx.message, b"\0NEM");
    assert_eq!(
        tx.mosaics.iter().map(|m| m.id).collect::<Vec<_>>(),
        [0x67F2B76F28BD36BAu64, 0x77A1969932D987D7, 0xD525AD41D95FCF29]
    );
    assert_eq!(tx.mosaics[0], Mosaic { id: 7490250818323297978, amount: 10 });
    assert_eq!(tx.serialize().len(), 212);
}

#[test]
fn test_lowercase_corpus_compares_uppercase() {
    let lower = TRANSFER_PAYLOAD.to_ascii_lowercase();
    assert_eq!(round_trip(&transfer_case(&lower), &registry()).unwrap(), TRANSFER_PAYLOAD);
}

#[test]
fn test_truncated_transfer_is_decode_error() {
    let truncated = &TRANSFER_PAYLOAD[..TRANSFER_PAYLOAD.len() - 4];
    match round_trip(&transfer_case(truncated), &registry()) {
        Err(VerifyError::Decode { builder, source }) => {
            assert_eq!(builder, "TransferTransactionBuilder");
            assert!(matches!(source, CodecError::UnexpectedEof { offset: 208, needed: 4, available: 2 }));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_trailing_garbage_is_mismatch() {
    let padded = format!("{TRANSFER_PAYLOAD}00");
    match round_trip(&transfer_case(&padded), &registry()) {
        Err(VerifyError::RoundTripMismatch { expected, actual }) => {
            assert_eq!(expected, padded);
            assert_eq!(actual, TRANSFER_PAYLOAD);
        }
        other => panic!("expected mismatch, got {other:?}"),
    }
}

#[test]
fn test_nonzero_reserved_is_decode_error() {
    // reserved u32 after the message size sits at bytes 156..160
    let mut bytes = decode_hex(TRANSFER_PAYLOAD).unwrap();
    bytes[156] = 1;
    let tampered = limcode_conformance::encode_hex(&bytes);
    let err = round_trip(&transfer_case(&tampered), &registry()).unwrap_err();
    assert_eq!(err.kind(), "decode");
}
