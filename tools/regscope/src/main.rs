//! Regscope - raw register inspection tool
//!
//! Reads hex or binary text and shows every integer and float it could
//! represent under BE, LE, BADC and CDAB byte orders.

mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use regscope_codec::{
    combine_registers, interpret, parse_value_text, ByteOrder, CodecError, InputFormat,
    NumericKind,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::config::{OutputFormat, RegscopeConfig};
use crate::output::Encoding;

#[derive(Parser)]
#[command(name = "regscope")]
#[command(about = "Inspect raw bytes as integers and floats in every byte order")]
#[command(long_about = "Inspect raw bytes as integers and floats in every byte order

Commands:
  decode      Show every numeric interpretation of hex/binary input
  encode      Show the bytes of a value in each byte order
  registers   Combine consecutive 16-bit registers into 32/64-bit values

Examples:
  regscope decode 0x41C80000              # 25.0 as float32 BE
  regscope decode 41:C8:00:00 -o CDAB     # Only the CDAB column
  regscope decode --binary 0100_0001      # Binary input
  regscope encode f32 25.0                # Bytes of 25.0 in all orders
  regscope registers 0000 41C8 0000 4248  # Modbus holding registers

Use 'regscope <command> --help' for more information on a specific command.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (yaml, toml or json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every numeric interpretation of hex/binary input
    Decode {
        /// Input text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,

        /// Read input as a bit string instead of hex
        #[arg(short, long)]
        binary: bool,

        /// Byte order to show (repeatable): BE, LE, BADC, CDAB
        #[arg(short = 'o', long = "order", value_parser = parse_order)]
        orders: Vec<ByteOrder>,
    },

    /// Show the bytes of a value in each byte order
    Encode {
        /// Numeric kind: u8..u64, i8..i64, f32, f64
        #[arg(value_parser = parse_kind)]
        kind: NumericKind,

        /// Value: decimal, 0x-prefixed hex, NaN, +Inf, -Inf
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Byte order to show (repeatable): BE, LE, BADC, CDAB
        #[arg(short = 'o', long = "order", value_parser = parse_order)]
        orders: Vec<ByteOrder>,
    },

    /// Combine consecutive 16-bit registers into 32/64-bit values
    Registers {
        /// Register tokens, 4 hex digits each
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,

        /// Byte order to show (repeatable): BE, LE, BADC, CDAB
        #[arg(short = 'o', long = "order", value_parser = parse_order)]
        orders: Vec<ByteOrder>,
    },
}

fn parse_order(s: &str) -> std::result::Result<ByteOrder, String> {
    ByteOrder::parse(s).ok_or_else(|| format!("unknown byte order '{}' (BE, LE, BADC, CDAB)", s))
}

fn parse_kind(s: &str) -> std::result::Result<NumericKind, String> {
    NumericKind::parse(s).ok_or_else(|| format!("unknown numeric kind '{}' (u8..u64, i8..i64, f32, f64)", s))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            if let Some(hint) = input_hint(&e) {
                eprintln!("{} {}", "hint:".yellow(), hint);
            }
            ExitCode::FAILURE
        },
    }
}

/// Usage hint for errors caused by malformed input text
fn input_hint(error: &anyhow::Error) -> Option<&'static str> {
    let codec = error.downcast_ref::<CodecError>()?;
    if !codec.is_input_error() {
        return None;
    }
    Some(match codec {
        CodecError::InvalidBinaryCharacter { .. } => {
            "binary input takes 0/1 digits with optional _ , : - or space separators"
        },
        _ => "hex input takes hex digits with optional 0x prefixes and , : - or space separators",
    })
}

fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config: RegscopeConfig = common::load_config("regscope", cli.config.as_deref())
        .context("Failed to load configuration")?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if cli.no_color {
        config.logging.ansi = false;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }
    common::init_logging(&config.logging).context("Failed to initialize logging")?;
    debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Decode {
            input,
            binary,
            orders,
        } => {
            let format = if binary {
                InputFormat::Binary
            } else {
                config.input
            };
            let orders = config.effective_orders(&orders);
            let result = interpret(&input.join(" "), format, &orders)
                .context("Cannot parse input")?;

            match config.output {
                OutputFormat::Json => println!("{}", output::to_json(&result)?),
                OutputFormat::Table => print!("{}", output::render_interpretation(&result, &orders)),
            }
        },

        Commands::Encode {
            kind,
            value,
            orders,
        } => {
            let value = parse_value_text(&value, kind)
                .with_context(|| format!("Cannot encode '{}' as {}", value, kind))?;
            let encodings: Vec<Encoding> = config
                .effective_orders(&orders)
                .into_iter()
                .map(|order| Encoding::new(&value, order))
                .collect();

            match config.output {
                OutputFormat::Json => println!("{}", output::to_json(&encodings)?),
                OutputFormat::Table => print!("{}", output::render_encodings(&value, &encodings)),
            }
        },

        Commands::Registers { input, orders } => {
            let orders = config.effective_orders(&orders);
            let windows = combine_registers(&input.join(" "), &orders)
                .context("Cannot parse registers")?;

            match config.output {
                OutputFormat::Json => println!("{}", output::to_json(&windows)?),
                OutputFormat::Table => print!("{}", output::render_windows(&windows, &orders)),
            }
        },
    }

    Ok(())
}
