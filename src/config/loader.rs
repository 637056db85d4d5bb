//! Load [`Config`] from `<dir>/app.env`, overlaid by the process environment.

use crate::config::types::{Config, CONFIG_KEYS};
use crate::error::ConfigError;
use serde::de::value::{Error as DeError, MapDeserializer};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "app.env";

/// Load configuration from `dir/app.env`; set environment variables take precedence over the file.
pub fn load_config(dir: impl AsRef<Path>) -> Result<Config, ConfigError> {
    load_config_with(dir, process_env)
}

/// Same as [`load_config`] with an explicit environment lookup.
/// Nothing is read from or written to process-wide state besides what `lookup` does.
pub fn load_config_with<F>(dir: impl AsRef<Path>, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    let path = dir.as_ref().join(CONFIG_FILE);
    let read_err = |source| ConfigError::Read {
        path: path.clone(),
        source,
    };

    let mut values: HashMap<String, String> = HashMap::new();
    for item in dotenvy::from_path_iter(&path).map_err(read_err)? {
        let (key, value) = item.map_err(read_err)?;
        values.insert(key, value);
    }
    tracing::debug!(path = %path.display(), keys = values.len(), "config file read");

    for key in CONFIG_KEYS {
        if let Some(value) = lookup(key)? {
            tracing::debug!(key, "config value taken from environment");
            values.insert(key.to_string(), value);
        }
    }

    Config::deserialize(MapDeserializer::<_, DeError>::new(values.into_iter()))
        .map_err(|e| ConfigError::Decode(e.to_string()))
}

/// Environment lookup used by [`load_config`]. Empty values count as unset.
pub fn process_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if v.is_empty() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => {
            Err(ConfigError::Decode(format!("{} is not valid unicode", key)))
        }
    }
}
