//! Regscope Codec Library
//!
//! Byte-order-aware numeric conversion for register-oriented industrial data.
//!
//! # Architecture
//!
//! - **Normalizer** (`hex`): lenient hex/binary text → bytes, and back to text
//! - **Byte order** (`byte_order`): BE, LE and the mid-endian BADC/CDAB permutations
//! - **Codec** (`codec`): one width/kind-parametric decode/encode for all ten numeric kinds
//! - **Format** (`format`): display text for decoded numbers, including NaN/±Inf
//! - **Interpret** / **Registers**: per-combination records built on the codec
//!
//! Every function is pure; there is no shared state and nothing blocks.

pub mod byte_order;
pub mod codec;
pub mod error;
pub mod format;
pub mod hex;
pub mod interpret;
pub mod registers;

// Re-export core types
pub use byte_order::{transform, ByteOrder, Permutation};
pub use codec::{
    decode, decode_float, decode_integer, encode, encode_float, encode_integer, parse_value_text,
    NumericKind, Value,
};
pub use error::{CodecError, Result};
pub use hex::{
    bytes_to_binary_text, bytes_to_hex_text, encode_upper, parse_binary, parse_hex, parse_input,
    InputFormat,
};
pub use interpret::{interpret, Field, Interpretation};
pub use registers::{combine_registers, parse_registers, RegisterWindow};
