//! Table and JSON rendering for command results

use colored::*;
use regscope_codec::{
    bytes_to_binary_text, bytes_to_hex_text, ByteOrder, Field, Interpretation, NumericKind,
    RegisterWindow, Value,
};
use serde::Serialize;
use std::fmt::Write;

const KIND_COLUMN: usize = 9;
const VALUE_COLUMN: usize = 22;

/// One encoded representation of a value
#[derive(Debug, Clone, Serialize)]
pub struct Encoding {
    pub order: ByteOrder,
    pub hex: String,
    pub binary: String,
}

impl Encoding {
    pub fn new(value: &Value, order: ByteOrder) -> Self {
        let bytes = value.to_bytes(order);
        Self {
            order,
            hex: bytes_to_hex_text(&bytes),
            binary: bytes_to_binary_text(&bytes),
        }
    }
}

fn header(orders: &[ByteOrder]) -> String {
    let mut line = format!("{:<width$}", "", width = KIND_COLUMN);
    for order in orders {
        let _ = write!(line, "{:>width$}", order.as_str(), width = VALUE_COLUMN);
    }
    line.bold().to_string()
}

/// Render fields as one row per kind, one column per order
///
/// Kinds with no decoded value in any order are left out.
fn field_rows(fields: &[Field], orders: &[ByteOrder]) -> Vec<String> {
    NumericKind::ALL
        .iter()
        .filter_map(|&kind| {
            let row: Vec<Option<&Value>> = orders
                .iter()
                .map(|&order| {
                    fields
                        .iter()
                        .find(|f| f.kind == kind && f.order == order)
                        .and_then(|f| f.value.as_ref())
                })
                .collect();
            if row.iter().all(Option::is_none) {
                return None;
            }

            let mut line = format!("{:<width$}", kind.as_str(), width = KIND_COLUMN)
                .cyan()
                .to_string();
            for cell in row {
                let text = cell.map_or_else(|| "-".to_string(), ToString::to_string);
                let _ = write!(line, "{:>width$}", text, width = VALUE_COLUMN);
            }
            Some(line)
        })
        .collect()
}

pub fn render_interpretation(result: &Interpretation, orders: &[ByteOrder]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "hex:   ".dimmed(), result.hex);
    let _ = writeln!(out, "{} {}", "binary:".dimmed(), result.binary);
    let _ = writeln!(out, "{} {}", "bytes: ".dimmed(), result.bytes.len());

    let rows = field_rows(&result.fields, orders);
    if rows.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            "No numeric interpretation: byte count is not 1, 2, 4 or 8".yellow()
        );
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", header(orders));
    for row in rows {
        let _ = writeln!(out, "{}", row);
    }
    out
}

pub fn render_windows(windows: &[RegisterWindow], orders: &[ByteOrder]) -> String {
    let mut out = String::new();
    if windows.is_empty() {
        let _ = writeln!(out, "{}", "Need at least 2 registers to combine".yellow());
        return out;
    }

    for window in windows {
        let registers = window.width / regscope_codec::registers::REGISTER_WIDTH;
        let _ = writeln!(
            out,
            "{} {}",
            format!(
                "[{}..{}] {}-bit",
                window.start,
                window.start + registers - 1,
                window.width * 8
            )
            .green()
            .bold(),
            window.hex
        );
        let _ = writeln!(out, "{}", header(orders));
        for row in field_rows(&window.fields, orders) {
            let _ = writeln!(out, "{}", row);
        }
        let _ = writeln!(out);
    }
    out
}

pub fn render_encodings(value: &Value, encodings: &[Encoding]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", value.kind().as_str().cyan(), value);
    for encoding in encodings {
        let _ = writeln!(
            out,
            "{}  {:<24} {}",
            format!("{:>6}", encoding.order.as_str()).bold(),
            encoding.hex,
            encoding.binary.dimmed()
        );
    }
    out
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use regscope_codec::{combine_registers, interpret, parse_value_text, InputFormat};

    #[test]
    fn test_interpretation_table_rows() {
        colored::control::set_override(false);
        let orders = [ByteOrder::BigEndian, ByteOrder::LittleEndian];
        let result = interpret("41 C8 00 00", InputFormat::Hex, &orders).unwrap();
        let table = render_interpretation(&result, &orders);

        assert!(table.contains("41 C8 00 00"));
        assert!(table.contains("uint32"));
        assert!(table.contains("float32"));
        assert!(table.contains("25.0"));
        assert!(!table.contains("uint16"));
        assert!(!table.contains("float64"));
    }

    #[test]
    fn test_interpretation_without_fields() {
        colored::control::set_override(false);
        let result = interpret("010203", InputFormat::Hex, &ByteOrder::ALL).unwrap();
        let table = render_interpretation(&result, &ByteOrder::ALL);
        assert!(table.contains("No numeric interpretation"));
    }

    #[test]
    fn test_windows_render_ranges() {
        colored::control::set_override(false);
        let windows = combine_registers("0000 41C8 0000", &[ByteOrder::Cdab]).unwrap();
        let text = render_windows(&windows, &[ByteOrder::Cdab]);
        assert!(text.contains("[0..1] 32-bit"));
        assert!(text.contains("[1..2] 32-bit"));
        assert!(text.contains("25.0"));
    }

    #[test]
    fn test_encodings() {
        colored::control::set_override(false);
        let value = parse_value_text("1", NumericKind::UInt16).unwrap();
        let encodings: Vec<Encoding> = ByteOrder::ALL
            .iter()
            .map(|&order| Encoding::new(&value, order))
            .collect();
        assert_eq!(encodings[0].hex, "00 01");
        assert_eq!(encodings[1].hex, "01 00");

        let text = render_encodings(&value, &encodings);
        assert!(text.contains("uint16 1"));
        let json = to_json(&encodings).unwrap();
        assert!(json.contains("\"order\": \"CDAB\""));
    }
}
