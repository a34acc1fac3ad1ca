//! Property Tests
//!
//! Algebraic laws of the codec over arbitrary byte sequences:
//! - decode → encode reproduces the original bytes for every kind and order
//! - every byte order transform is self-inverse
//! - signed and unsigned decodes carry identical bits

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use proptest::prelude::*;
use regscope_codec::{
    bytes_to_binary_text, bytes_to_hex_text, decode, encode, parse_binary, parse_hex, transform,
    ByteOrder, NumericKind,
};

fn any_order() -> impl Strategy<Value = ByteOrder> {
    prop::sample::select(ByteOrder::ALL.to_vec())
}

fn any_kind() -> impl Strategy<Value = NumericKind> {
    prop::sample::select(NumericKind::ALL.to_vec())
}

/// A kind together with a byte sequence of exactly its width
fn kind_and_bytes() -> impl Strategy<Value = (NumericKind, Vec<u8>)> {
    any_kind().prop_flat_map(|kind| (Just(kind), prop::collection::vec(any::<u8>(), kind.width())))
}

fn supported_width_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![1usize, 2, 4, 8])
        .prop_flat_map(|width| prop::collection::vec(any::<u8>(), width))
}

proptest! {
    #[test]
    fn decode_then_encode_is_identity((kind, bytes) in kind_and_bytes(), order in any_order()) {
        let value = decode(&bytes, kind, order).unwrap();
        prop_assert_eq!(encode(&value, order), bytes);
    }

    #[test]
    fn transform_is_involution(bytes in supported_width_bytes(), order in any_order()) {
        let once = transform(&bytes, order);
        prop_assert_eq!(transform(&once, order), bytes);
    }

    #[test]
    fn transform_preserves_multiset(bytes in supported_width_bytes(), order in any_order()) {
        let mut permuted = transform(&bytes, order);
        let mut original = bytes.clone();
        permuted.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(permuted, original);
    }

    #[test]
    fn signed_and_unsigned_share_bits(bytes in supported_width_bytes(), order in any_order()) {
        let width = bytes.len();
        let unsigned = decode(&bytes, NumericKind::integer(width, false).unwrap(), order).unwrap();
        let signed = decode(&bytes, NumericKind::integer(width, true).unwrap(), order).unwrap();
        prop_assert_eq!(unsigned.bits(), signed.bits());
        prop_assert_eq!(signed.as_i64().unwrap() as u64 & mask(width), unsigned.as_u64().unwrap());
    }

    #[test]
    fn wrong_length_never_decodes(kind in any_kind(), len in 0usize..16, order in any_order()) {
        prop_assume!(len != kind.width());
        prop_assert!(decode(&vec![0xA5; len], kind, order).is_err());
    }

    #[test]
    fn rendered_text_parses_back(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        prop_assert_eq!(parse_hex(&bytes_to_hex_text(&bytes)).unwrap(), bytes.clone());
        prop_assert_eq!(parse_binary(&bytes_to_binary_text(&bytes)).unwrap(), bytes);
    }
}

fn mask(width: usize) -> u64 {
    if width == 8 {
        u64::MAX
    } else {
        (1u64 << (width * 8)) - 1
    }
}
