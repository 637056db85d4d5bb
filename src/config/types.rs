//! Typed application configuration.

use serde::{Deserialize, Serialize};

/// Keys recognized in `app.env` and in the process environment.
pub const CONFIG_KEYS: [&str; 3] = ["DB_DRIVER", "DB_SOURCE", "SERVER_ADDRESS"];

/// Values missing from both the file and the environment stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "DB_DRIVER")]
    pub db_driver: String,
    #[serde(rename = "DB_SOURCE")]
    pub db_source: String,
    #[serde(rename = "SERVER_ADDRESS")]
    pub server_address: String,
}
