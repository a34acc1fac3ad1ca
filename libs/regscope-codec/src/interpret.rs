//! Per-combination interpretation of one input
//!
//! Normalizes the input once and attempts every requested kind/order
//! combination. A combination whose width does not match the byte count is
//! recorded as absent rather than reported as an error.

use serde::Serialize;
use tracing::{debug, trace};

use crate::byte_order::ByteOrder;
use crate::codec::{decode, NumericKind, Value};
use crate::error::Result;
use crate::hex::{bytes_to_binary_text, bytes_to_hex_text, parse_input, InputFormat};

/// Outcome of one kind/order attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub kind: NumericKind,
    pub order: ByteOrder,
    /// `None` when the byte count does not match the kind's width
    pub value: Option<Value>,
}

impl Field {
    /// Attempt a single decode, folding length mismatches into `None`
    pub fn attempt(bytes: &[u8], kind: NumericKind, order: ByteOrder) -> Self {
        let value = match decode(bytes, kind, order) {
            Ok(value) => Some(value),
            Err(e) => {
                trace!("Omitting {} {}: {}", kind, order, e);
                None
            },
        };
        Self { kind, order, value }
    }
}

/// All interpretations of one normalized input
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub hex: String,
    pub binary: String,
    pub fields: Vec<Field>,
}

impl Interpretation {
    /// Attempt every kind in every requested order
    pub fn from_bytes(bytes: Vec<u8>, orders: &[ByteOrder]) -> Self {
        let fields = NumericKind::ALL
            .iter()
            .flat_map(|&kind| orders.iter().map(move |&order| (kind, order)))
            .map(|(kind, order)| Field::attempt(&bytes, kind, order))
            .collect();

        Self {
            hex: bytes_to_hex_text(&bytes),
            binary: bytes_to_binary_text(&bytes),
            bytes,
            fields,
        }
    }

    /// Fields that decoded successfully
    pub fn present(&self) -> impl Iterator<Item = (&Field, &Value)> {
        self.fields
            .iter()
            .filter_map(|field| field.value.as_ref().map(|value| (field, value)))
    }

    pub fn get(&self, kind: NumericKind, order: ByteOrder) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.kind == kind && f.order == order)
            .and_then(|f| f.value.as_ref())
    }
}

/// Normalize `text` and interpret it in every order of `orders`
///
/// Only normalization failures are returned as errors.
pub fn interpret(text: &str, format: InputFormat, orders: &[ByteOrder]) -> Result<Interpretation> {
    let bytes = parse_input(text, format)?;
    debug!("Interpreting {} bytes in {} orders", bytes.len(), orders.len());
    Ok(Interpretation::from_bytes(bytes, orders))
}
