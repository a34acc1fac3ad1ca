//! Layered configuration loading
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`<APP>_` prefix, `__` separates nesting)
//! 2. Explicit config file passed on the command line
//! 3. `config/<app>.toml`
//! 4. `config/<app>.yaml`
//! 5. `T::default()`

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Build the layered figment for `app_name`
pub fn figment_for<T>(app_name: &str, explicit: Option<&Path>) -> Result<Figment>
where
    T: Serialize + Default,
{
    let mut figment = Figment::from(Serialized::defaults(T::default()))
        .merge(Yaml::file(format!("config/{}.yaml", app_name)))
        .merge(Toml::file(format!("config/{}.toml", app_name)));

    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::Config("Config file must have an extension".to_string()))?;

        figment = match extension {
            "toml" => figment.merge(Toml::file(path)),
            "yaml" | "yml" => figment.merge(Yaml::file(path)),
            "json" => figment.merge(Json::file(path)),
            _ => {
                return Err(Error::Config(format!(
                    "Unsupported config file format: {}",
                    extension
                )))
            },
        };
        debug!("Using config file {}", path.display());
    }

    Ok(figment.merge(Env::prefixed(&format!("{}_", app_name.to_uppercase())).split("__")))
}

/// Load configuration for `app_name` from all layers
pub fn load_config<T>(app_name: &str, explicit: Option<&Path>) -> Result<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    figment_for::<T>(app_name, explicit)?
        .extract()
        .map_err(|e| Error::Config(format!("Failed to load configuration: {}", e)))
}
