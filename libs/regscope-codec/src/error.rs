//! Codec Error Types
//!
//! Every failure here signals malformed input or a caller mistake. None of
//! them are transient, so nothing is retryable.

use thiserror::Error;

/// Result type for regscope-codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input reduced to zero meaningful characters
    #[error("Empty input")]
    EmptyInput,

    /// Character outside the hex alphabet (position is a char index into the raw input)
    #[error("Invalid hex character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// Character outside {0, 1}
    #[error("Invalid binary character '{ch}' at position {position}")]
    InvalidBinaryCharacter { ch: char, position: usize },

    /// Byte count does not match the decode width
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Width not defined for the requested kind
    #[error("Unsupported width {width} for {kind}")]
    UnsupportedWidth { kind: &'static str, width: usize },

    /// Text is not a number
    #[error("Cannot parse '{text}' as {kind}")]
    InvalidNumber { text: String, kind: &'static str },

    /// Integer does not fit the requested width/signedness
    #[error("Value {value} out of range for {kind}")]
    ValueOutOfRange { value: String, kind: &'static str },
}

impl CodecError {
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        CodecError::InvalidLength { expected, actual }
    }

    pub fn out_of_range(value: impl ToString, kind: &'static str) -> Self {
        CodecError::ValueOutOfRange {
            value: value.to_string(),
            kind,
        }
    }

    pub fn invalid_number(text: impl Into<String>, kind: &'static str) -> Self {
        CodecError::InvalidNumber {
            text: text.into(),
            kind,
        }
    }

    /// Check if this error comes from text normalization
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CodecError::EmptyInput
                | CodecError::InvalidCharacter { .. }
                | CodecError::InvalidBinaryCharacter { .. }
        )
    }
}
