//! Byte order representation and permutation for 8/16/32/64-bit values
//!
//! Register-oriented protocols carry wide values as sequences of 16-bit
//! words, and devices disagree about both word order and the byte order
//! inside each word. Every ordering here is a fixed permutation that turns
//! the transmitted bytes into big-endian, so the codec only ever decodes BE.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte/word arrangement of a transmitted value
///
/// # Naming Convention
/// Uses ABCD notation where A is the most significant byte.
///
/// For 32-bit value `0x12345678`:
/// - `BigEndian (ABCD)`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian (DCBA)`: [0x78, 0x56, 0x34, 0x12]
/// - `Badc`: [0x34, 0x12, 0x78, 0x56]
/// - `Cdab`: [0x56, 0x78, 0x12, 0x34] (Modbus common)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ByteOrder {
    /// Big-endian: most significant byte first
    #[default]
    #[serde(rename = "BE")]
    BigEndian,

    /// Little-endian: least significant byte first
    #[serde(rename = "LE")]
    LittleEndian,

    /// Mid-big endian
    ///
    /// 16-bit: AB. 32-bit: BADC (bytes swapped inside each word).
    /// 64-bit: EFGHABCD (32-bit halves swapped, BE inside each half).
    #[serde(rename = "BADC")]
    Badc,

    /// Mid-little endian
    ///
    /// 16-bit: BA. 32-bit: CDAB (words swapped, BE inside each word).
    /// 64-bit: CDABGHEF (words swapped inside each 32-bit half).
    #[serde(rename = "CDAB")]
    Cdab,
}

impl ByteOrder {
    /// All orderings in canonical display order
    pub const ALL: [ByteOrder; 4] = [
        ByteOrder::BigEndian,
        ByteOrder::LittleEndian,
        ByteOrder::Badc,
        ByteOrder::Cdab,
    ];

    /// Convert from common field/config spellings
    ///
    /// - "BE", "ABCD", "AB", "BIG_ENDIAN" → BigEndian
    /// - "LE", "DCBA", "BA", "LITTLE_ENDIAN" → LittleEndian
    /// - "BADC", "BA-DC", "MID_BIG" → Badc
    /// - "CDAB", "CD-AB", "MID_LITTLE" → Cdab
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "BE" | "ABCD" | "AB" | "ABCDEFGH" | "BIG_ENDIAN" | "BIGENDIAN" => {
                Some(Self::BigEndian)
            },
            "LE" | "DCBA" | "BA" | "HGFEDCBA" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => {
                Some(Self::LittleEndian)
            },
            "BADC" | "MID_BIG" | "MIDBIG" => Some(Self::Badc),
            "CDAB" | "MID_LITTLE" | "MIDLITTLE" => Some(Self::Cdab),
            _ => None,
        }
    }

    /// Short name, as used in config files and output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "BE",
            Self::LittleEndian => "LE",
            Self::Badc => "BADC",
            Self::Cdab => "CDAB",
        }
    }

    /// Permutation that maps a `width`-byte value in this order to BE
    ///
    /// Each permutation is its own inverse, so the same one maps BE back.
    pub fn permutation(&self, width: usize) -> Permutation {
        match (self, width) {
            (_, 0 | 1) | (Self::BigEndian, _) => Permutation::Identity,
            (Self::LittleEndian, _) => Permutation::Reverse,
            (Self::Badc, 4) => Permutation::SwapHalves { group: 2 },
            (Self::Badc, 8) => Permutation::SwapHalves { group: 8 },
            (Self::Cdab, 2) => Permutation::SwapHalves { group: 2 },
            (Self::Cdab, 4 | 8) => Permutation::SwapHalves { group: 4 },
            // BADC at 16 bits degenerates to BE
            _ => Permutation::Identity,
        }
    }
}

impl TryFrom<String> for ByteOrder {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("unknown byte order '{}'", s))
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two primitive byte shuffles every ordering reduces to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permutation {
    Identity,
    /// Reverse the whole sequence
    Reverse,
    /// Swap the two halves of every `group`-byte chunk, keeping byte order inside each half
    SwapHalves { group: usize },
}

impl Permutation {
    pub fn apply(&self, bytes: &mut [u8]) {
        match *self {
            Permutation::Identity => {},
            Permutation::Reverse => bytes.reverse(),
            Permutation::SwapHalves { group } => {
                debug_assert!(group >= 2 && group % 2 == 0, "odd swap group: {}", group);
                for chunk in bytes.chunks_exact_mut(group) {
                    let (head, tail) = chunk.split_at_mut(group / 2);
                    head.swap_with_slice(tail);
                }
            },
        }
    }
}

/// Check whether `width` is a supported numeric width
#[inline]
pub fn is_supported_width(width: usize) -> bool {
    matches!(width, 1 | 2 | 4 | 8)
}

/// Rearrange `bytes` between `order` and big-endian (in either direction)
///
/// Length must be 1, 2, 4 or 8; callers validate this before calling.
pub fn transform_in_place(bytes: &mut [u8], order: ByteOrder) {
    debug_assert!(
        is_supported_width(bytes.len()),
        "Unsupported width for byte order transform: {}",
        bytes.len()
    );
    order.permutation(bytes.len()).apply(bytes);
}

/// Copying variant of [`transform_in_place`]
pub fn transform(bytes: &[u8], order: ByteOrder) -> Vec<u8> {
    let mut out = bytes.to_vec();
    transform_in_place(&mut out, order);
    out
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    const W8: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

    #[test]
    fn test_parse_valid() {
        assert_eq!(ByteOrder::parse("ABCD"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::parse("be"), Some(ByteOrder::BigEndian));
        assert_eq!(ByteOrder::parse("DC-BA"), Some(ByteOrder::LittleEndian));
        assert_eq!(ByteOrder::parse("LE"), Some(ByteOrder::LittleEndian));
        assert_eq!(ByteOrder::parse("BA-DC"), Some(ByteOrder::Badc));
        assert_eq!(ByteOrder::parse("mid_big"), Some(ByteOrder::Badc));
        assert_eq!(ByteOrder::parse("cdab"), Some(ByteOrder::Cdab));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(ByteOrder::parse("invalid"), None);
        assert_eq!(ByteOrder::parse(""), None);
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for order in ByteOrder::ALL {
            assert_eq!(ByteOrder::parse(&order.to_string()), Some(order));
        }
    }

    #[test]
    fn test_width_2() {
        let b = [0x12, 0x34];
        assert_eq!(transform(&b, ByteOrder::BigEndian), [0x12, 0x34]);
        assert_eq!(transform(&b, ByteOrder::LittleEndian), [0x34, 0x12]);
        assert_eq!(transform(&b, ByteOrder::Badc), [0x12, 0x34]);
        assert_eq!(transform(&b, ByteOrder::Cdab), [0x34, 0x12]);
    }

    #[test]
    fn test_width_4() {
        let b = [0x12, 0x34, 0x56, 0x78];
        assert_eq!(transform(&b, ByteOrder::LittleEndian), [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(transform(&b, ByteOrder::Badc), [0x34, 0x12, 0x78, 0x56]);
        assert_eq!(transform(&b, ByteOrder::Cdab), [0x56, 0x78, 0x12, 0x34]);
    }

    #[test]
    fn test_width_8() {
        assert_eq!(
            transform(&W8, ByteOrder::LittleEndian),
            [7, 6, 5, 4, 3, 2, 1, 0]
        );
        assert_eq!(transform(&W8, ByteOrder::Badc), [4, 5, 6, 7, 0, 1, 2, 3]);
        assert_eq!(transform(&W8, ByteOrder::Cdab), [2, 3, 0, 1, 6, 7, 4, 5]);
    }

    #[test]
    fn test_single_byte_is_untouched() {
        for order in ByteOrder::ALL {
            assert_eq!(transform(&[0xAB], order), [0xAB]);
        }
    }

    #[test]
    fn test_every_order_is_an_involution() {
        for order in ByteOrder::ALL {
            for width in [1, 2, 4, 8] {
                let once = transform(&W8[..width], order);
                assert_eq!(transform(&once, order), &W8[..width], "{} width {}", order, width);
            }
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ByteOrder::ALL).unwrap();
        assert_eq!(json, r#"["BE","LE","BADC","CDAB"]"#);
        let parsed: Vec<ByteOrder> = serde_json::from_str(r#"["ABCD","cdab"]"#).unwrap();
        assert_eq!(parsed, vec![ByteOrder::BigEndian, ByteOrder::Cdab]);
    }

    #[test]
    fn test_serde_accepts_parse_spellings() {
        let parsed: Vec<ByteOrder> =
            serde_json::from_str(r#"["MID_BIG","BA-DC","BIG_ENDIAN","mid_little","dcba"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                ByteOrder::Badc,
                ByteOrder::Badc,
                ByteOrder::BigEndian,
                ByteOrder::Cdab,
                ByteOrder::LittleEndian,
            ]
        );
        assert!(serde_json::from_str::<ByteOrder>(r#""XYZW""#).is_err());
    }
}
