//! Regscope basic library
//!
//! Provides functions shared by all regscope binaries:
//! - logging initialization
//! - layered configuration loading

pub mod config_loader;
pub mod error;
pub mod logging;

pub use config_loader::load_config;
pub use error::{Error, Result};
pub use logging::{init_logging, LoggingConfig};
