//! Configuration for the regscope CLI

use common::LoggingConfig;
use regscope_codec::{ByteOrder, InputFormat};
use serde::{Deserialize, Serialize};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Complete CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegscopeConfig {
    /// Byte orders to try when none are given on the command line
    pub orders: Vec<ByteOrder>,
    /// How `decode` reads its input
    pub input: InputFormat,
    pub output: OutputFormat,
    pub logging: LoggingConfig,
}

impl Default for RegscopeConfig {
    fn default() -> Self {
        Self {
            orders: ByteOrder::ALL.to_vec(),
            input: InputFormat::Hex,
            output: OutputFormat::Table,
            logging: LoggingConfig::default(),
        }
    }
}

impl RegscopeConfig {
    /// Orders from the command line, falling back to config, then to all four
    pub fn effective_orders(&self, requested: &[ByteOrder]) -> Vec<ByteOrder> {
        if !requested.is_empty() {
            requested.to_vec()
        } else if !self.orders.is_empty() {
            self.orders.clone()
        } else {
            ByteOrder::ALL.to_vec()
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_effective_orders() {
        let mut config = RegscopeConfig::default();
        assert_eq!(config.effective_orders(&[]), ByteOrder::ALL.to_vec());
        assert_eq!(
            config.effective_orders(&[ByteOrder::Cdab]),
            vec![ByteOrder::Cdab]
        );
        config.orders.clear();
        assert_eq!(config.effective_orders(&[]), ByteOrder::ALL.to_vec());
    }

    #[test]
    fn test_load_from_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regscope.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"orders: [CDAB, ABCD, MID_BIG]\ninput: binary\noutput: json\nlogging:\n  level: debug\n")
            .unwrap();

        let config: RegscopeConfig = common::load_config("regscope_cli_test", Some(&path)).unwrap();
        assert_eq!(
            config.orders,
            vec![ByteOrder::Cdab, ByteOrder::BigEndian, ByteOrder::Badc]
        );
        assert_eq!(config.input, InputFormat::Binary);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.ansi);
    }
}
