//! Width-parametric numeric codec
//!
//! One routine covers all ten numeric kinds: bytes are permuted into BE,
//! folded into a `u64` bit pattern of the kind's width, and only then
//! labelled as unsigned, two's-complement signed or IEEE-754. Encoding
//! runs the same steps backwards. Nothing is ever cast arithmetically, so
//! NaN payloads and negative zero survive untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::byte_order::{transform_in_place, ByteOrder};
use crate::error::{CodecError, Result};
use crate::format;

/// Fixed-width numeric representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    // Unsigned integers
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    // Signed integers
    Int8,
    Int16,
    Int32,
    Int64,
    // Floating point
    Float32,
    Float64,
}

impl NumericKind {
    /// All kinds, unsigned then signed then float, narrowest first
    pub const ALL: [NumericKind; 10] = [
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
    ];

    /// Integer kind for a byte width; `None` unless width is 1, 2, 4 or 8
    pub fn integer(width: usize, signed: bool) -> Option<Self> {
        let kind = match (width, signed) {
            (1, false) => Self::UInt8,
            (2, false) => Self::UInt16,
            (4, false) => Self::UInt32,
            (8, false) => Self::UInt64,
            (1, true) => Self::Int8,
            (2, true) => Self::Int16,
            (4, true) => Self::Int32,
            (8, true) => Self::Int64,
            _ => return None,
        };
        Some(kind)
    }

    /// Float kind for a byte width; `None` unless width is 4 or 8
    pub fn float(width: usize) -> Option<Self> {
        match width {
            4 => Some(Self::Float32),
            8 => Some(Self::Float64),
            _ => None,
        }
    }

    /// Parse from string representation (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uint8" | "u8" => Some(Self::UInt8),
            "uint16" | "u16" => Some(Self::UInt16),
            "uint32" | "u32" => Some(Self::UInt32),
            "uint64" | "u64" => Some(Self::UInt64),
            "int8" | "i8" => Some(Self::Int8),
            "int16" | "i16" => Some(Self::Int16),
            "int32" | "i32" => Some(Self::Int32),
            "int64" | "i64" => Some(Self::Int64),
            "float32" | "f32" | "float" => Some(Self::Float32),
            "float64" | "f64" | "double" => Some(Self::Float64),
            _ => None,
        }
    }

    /// Size in bytes
    pub fn width(&self) -> usize {
        match self {
            Self::UInt8 | Self::Int8 => 1,
            Self::UInt16 | Self::Int16 => 2,
            Self::UInt32 | Self::Int32 | Self::Float32 => 4,
            Self::UInt64 | Self::Int64 | Self::Float64 => 8,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    /// Mask selecting the low `width * 8` bits
    fn mask(&self) -> u64 {
        match self.width() {
            8 => u64::MAX,
            w => (1u64 << (w * 8)) - 1,
        }
    }

    /// Inclusive integer range, `None` for floats
    fn integer_range(&self) -> Option<(i128, i128)> {
        if self.is_float() {
            return None;
        }
        let bits = (self.width() * 8) as u32;
        if self.is_signed() {
            let half = 1i128 << (bits - 1);
            Some((-half, half - 1))
        } else {
            Some((0, (1i128 << bits) - 1))
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded number, held as its raw bit pattern
///
/// Signed and unsigned views of the same bytes share `bits`; only the kind
/// label differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value {
    kind: NumericKind,
    bits: u64,
}

impl Value {
    /// Build from a bit pattern; bits above the kind's width are dropped
    pub fn from_bits(kind: NumericKind, bits: u64) -> Self {
        Self {
            kind,
            bits: bits & kind.mask(),
        }
    }

    pub fn from_f32(value: f32) -> Self {
        Self::from_bits(NumericKind::Float32, u64::from(value.to_bits()))
    }

    pub fn from_f64(value: f64) -> Self {
        Self::from_bits(NumericKind::Float64, value.to_bits())
    }

    /// Build an integer value, checking it fits `kind`
    pub fn from_integer(kind: NumericKind, value: i128) -> Result<Self> {
        let (min, max) = kind
            .integer_range()
            .ok_or(CodecError::UnsupportedWidth {
                kind: "integer",
                width: kind.width(),
            })?;
        if value < min || value > max {
            return Err(CodecError::out_of_range(value, kind.as_str()));
        }
        // Truncating to the low bits yields the two's-complement pattern
        Ok(Self::from_bits(kind, value as u64))
    }

    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    /// Raw bit pattern, zero-extended to 64 bits
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Unsigned view, for unsigned kinds only
    pub fn as_u64(&self) -> Option<u64> {
        (!self.kind.is_signed() && !self.kind.is_float()).then_some(self.bits)
    }

    /// Two's-complement view, for signed kinds only
    pub fn as_i64(&self) -> Option<i64> {
        if !self.kind.is_signed() {
            return None;
        }
        let shift = 64 - (self.kind.width() * 8) as u32;
        Some(((self.bits << shift) as i64) >> shift)
    }

    /// Integer view for any integer kind
    pub fn as_i128(&self) -> Option<i128> {
        self.as_i64()
            .map(i128::from)
            .or_else(|| self.as_u64().map(i128::from))
    }

    /// Float view; binary32 values are widened
    pub fn as_f64(&self) -> Option<f64> {
        match self.kind {
            NumericKind::Float32 => Some(f64::from(f32::from_bits(self.bits as u32))),
            NumericKind::Float64 => Some(f64::from_bits(self.bits)),
            _ => None,
        }
    }

    /// Encode into `order`
    pub fn to_bytes(&self, order: ByteOrder) -> Vec<u8> {
        encode(self, order)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.kind {
            NumericKind::Float32 => format::format_f32(f32::from_bits(self.bits as u32)),
            NumericKind::Float64 => format::format_f64(f64::from_bits(self.bits)),
            kind if kind.is_signed() => format::format_i64(self.as_i64().unwrap_or_default()),
            _ => format::format_u64(self.bits),
        };
        f.write_str(&text)
    }
}

impl Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Decode `bytes` as `kind` stored in `order`
///
/// Fails with `InvalidLength` unless `bytes.len()` equals the kind's width.
pub fn decode(bytes: &[u8], kind: NumericKind, order: ByteOrder) -> Result<Value> {
    let width = kind.width();
    if bytes.len() != width {
        return Err(CodecError::invalid_length(width, bytes.len()));
    }

    let mut be = [0u8; 8];
    let be = &mut be[..width];
    be.copy_from_slice(bytes);
    transform_in_place(be, order);

    let bits = be.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
    Ok(Value::from_bits(kind, bits))
}

/// Encode `value` into `order`
pub fn encode(value: &Value, order: ByteOrder) -> Vec<u8> {
    let width = value.kind.width();
    let mut bytes = value.bits.to_be_bytes()[8 - width..].to_vec();
    transform_in_place(&mut bytes, order);
    bytes
}

fn integer_kind(width: usize, signed: bool) -> Result<NumericKind> {
    NumericKind::integer(width, signed).ok_or(CodecError::UnsupportedWidth {
        kind: "integer",
        width,
    })
}

fn float_kind(width: usize) -> Result<NumericKind> {
    NumericKind::float(width).ok_or(CodecError::UnsupportedWidth {
        kind: "float",
        width,
    })
}

/// Decode an integer of `width` bytes
pub fn decode_integer(bytes: &[u8], width: usize, signed: bool, order: ByteOrder) -> Result<Value> {
    decode(bytes, integer_kind(width, signed)?, order)
}

/// Decode a binary32 (width 4) or binary64 (width 8) float
pub fn decode_float(bytes: &[u8], width: usize, order: ByteOrder) -> Result<Value> {
    decode(bytes, float_kind(width)?, order)
}

/// Encode an integer; fails if it does not fit `width`/`signed`
pub fn encode_integer(value: i128, width: usize, signed: bool, order: ByteOrder) -> Result<Vec<u8>> {
    let kind = integer_kind(width, signed)?;
    Ok(encode(&Value::from_integer(kind, value)?, order))
}

/// Encode a float; width 4 rounds to nearest binary32
pub fn encode_float(value: f64, width: usize, order: ByteOrder) -> Result<Vec<u8>> {
    let value = match float_kind(width)? {
        NumericKind::Float32 => Value::from_f32(value as f32),
        _ => Value::from_f64(value),
    };
    Ok(encode(&value, order))
}

/// Parse a user-supplied number as `kind`
///
/// Integers accept decimal or `0x`-prefixed hex; floats accept decimal,
/// `NaN`, `Inf`, `+Inf` and `-Inf`.
pub fn parse_value_text(text: &str, kind: NumericKind) -> Result<Value> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    if kind.is_float() {
        let value: f64 = match text.to_ascii_lowercase().as_str() {
            "nan" => f64::NAN,
            "inf" | "+inf" | "infinity" => f64::INFINITY,
            "-inf" | "-infinity" => f64::NEG_INFINITY,
            _ => text
                .parse()
                .map_err(|_| CodecError::invalid_number(text, kind.as_str()))?,
        };
        return Ok(match kind {
            NumericKind::Float32 => Value::from_f32(value as f32),
            _ => Value::from_f64(value),
        });
    }

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(CodecError::invalid_number(text, kind.as_str()));
    }
    // Digits are validated, so the only remaining failure is i128 overflow
    let magnitude = i128::from_str_radix(digits, radix)
        .map_err(|_| CodecError::out_of_range(text, kind.as_str()))?;

    Value::from_integer(kind, if negative { -magnitude } else { magnitude })
}
