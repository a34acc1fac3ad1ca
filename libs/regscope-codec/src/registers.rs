//! Combining consecutive 16-bit registers into 32/64-bit values
//!
//! Input is a list of register tokens (`"41C8 0000"`, `"0x41C8,0x0000"`).
//! Every contiguous run of 2 registers is read as u32/i32/f32, and every
//! run of 4 as u64/i64/f64, in each requested order.

use serde::Serialize;
use tracing::debug;

use crate::byte_order::ByteOrder;
use crate::codec::NumericKind;
use crate::error::{CodecError, Result};
use crate::hex::{bytes_to_hex_text, parse_hex};
use crate::interpret::Field;

/// Bytes per register
pub const REGISTER_WIDTH: usize = 2;

/// One window of consecutive registers
#[derive(Debug, Clone, Serialize)]
pub struct RegisterWindow {
    /// Index of the first register in the window
    pub start: usize,
    /// Window size in bytes (4 or 8)
    pub width: usize,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub hex: String,
    pub fields: Vec<Field>,
}

/// Parse whitespace/comma separated register tokens
///
/// Each token must normalize to exactly two bytes.
pub fn parse_registers(text: &str) -> Result<Vec<[u8; REGISTER_WIDTH]>> {
    let registers = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let bytes = parse_hex(token)?;
            <[u8; REGISTER_WIDTH]>::try_from(bytes.as_slice())
                .map_err(|_| CodecError::invalid_length(REGISTER_WIDTH, bytes.len()))
        })
        .collect::<Result<Vec<_>>>()?;

    if registers.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    Ok(registers)
}

/// Decode every 2- and 4-register window of `text` in each of `orders`
pub fn combine_registers(text: &str, orders: &[ByteOrder]) -> Result<Vec<RegisterWindow>> {
    let registers = parse_registers(text)?;
    debug!("Combining {} registers", registers.len());

    let mut windows = Vec::new();
    for width in [4, 8] {
        let count = width / REGISTER_WIDTH;
        let kinds = NumericKind::ALL
            .into_iter()
            .filter(|kind| kind.width() == width);

        for (start, run) in registers.windows(count).enumerate() {
            let bytes = run.concat();
            let fields = kinds
                .clone()
                .flat_map(|kind| orders.iter().map(move |&order| (kind, order)))
                .map(|(kind, order)| Field::attempt(&bytes, kind, order))
                .collect();

            windows.push(RegisterWindow {
                start,
                width,
                hex: bytes_to_hex_text(&bytes),
                bytes,
                fields,
            });
        }
    }
    Ok(windows)
}
