//! Display formatting for decoded numbers
//!
//! Uses `itoa` for integers and `ryu` for floats. Finite floats render as the
//! shortest decimal that parses back to the same bits; non-finite values get
//! fixed labels.

pub const NAN_TEXT: &str = "NaN";
pub const POS_INF_TEXT: &str = "+Inf";
pub const NEG_INF_TEXT: &str = "-Inf";

fn special(is_nan: bool, is_infinite: bool, negative: bool) -> Option<&'static str> {
    if is_nan {
        Some(NAN_TEXT)
    } else if is_infinite {
        Some(if negative { NEG_INF_TEXT } else { POS_INF_TEXT })
    } else {
        None
    }
}

/// Format an f32 for display
pub fn format_f32(value: f32) -> String {
    match special(value.is_nan(), value.is_infinite(), value.is_sign_negative()) {
        Some(text) => text.to_string(),
        None => ryu::Buffer::new().format_finite(value).to_string(),
    }
}

/// Format an f64 for display
pub fn format_f64(value: f64) -> String {
    match special(value.is_nan(), value.is_infinite(), value.is_sign_negative()) {
        Some(text) => text.to_string(),
        None => ryu::Buffer::new().format_finite(value).to_string(),
    }
}

#[inline]
pub fn format_u64(value: u64) -> String {
    itoa::Buffer::new().format(value).to_string()
}

#[inline]
pub fn format_i64(value: i64) -> String {
    itoa::Buffer::new().format(value).to_string()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_special_values() {
        assert_eq!(format_f32(f32::NAN), "NaN");
        assert_eq!(format_f32(f32::INFINITY), "+Inf");
        assert_eq!(format_f32(f32::NEG_INFINITY), "-Inf");
        assert_eq!(format_f64(-f64::NAN), "NaN");
        assert_eq!(format_f64(f64::INFINITY), "+Inf");
        assert_eq!(format_f64(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn test_common_values() {
        let test_cases = [(25.0f32, "25.0"), (0.1, "0.1"), (-1.5, "-1.5"), (0.0, "0.0")];
        for (input, expected) in test_cases {
            assert_eq!(format_f32(input), expected, "Failed for input: {}", input);
        }
        assert_eq!(format_f64(220.0), "220.0");
        assert_eq!(format_f64(-0.0), "-0.0");
    }

    #[test]
    fn test_shortest_text_roundtrips_bits() {
        for value in [0.1f32, 1.0e-40, f32::MAX, f32::MIN_POSITIVE, 3.402_823_4e38] {
            let parsed: f32 = format_f32(value).parse().unwrap();
            assert_eq!(parsed.to_bits(), value.to_bits());
        }
        for value in [0.1f64, 5e-324, f64::MAX, 1.0 / 3.0] {
            let parsed: f64 = format_f64(value).parse().unwrap();
            assert_eq!(parsed.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_integers() {
        assert_eq!(format_u64(u64::MAX), "18446744073709551615");
        assert_eq!(format_i64(i64::MIN), "-9223372036854775808");
    }
}
