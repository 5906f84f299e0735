//! Runtime configuration read from the environment.
//!
//! Supported environment variables:
//! - FOLLOUT_DATA_DIR: directory holding the snapshot files (default `./data`)
//! - FOLLOUT_LOAD_ON_START: load every extent before running (default `true`)

use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_LOAD_ON_START: bool = true;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub load_on_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            load_on_start: DEFAULT_LOAD_ON_START,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment, falling back to
    /// defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("FOLLOUT_DATA_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(val) = lookup("FOLLOUT_LOAD_ON_START") {
            match parse_flag(&val) {
                Some(flag) => config.load_on_start = flag,
                None => tracing::warn!(
                    val = %val,
                    "FOLLOUT_LOAD_ON_START is not a valid boolean, ignoring"
                ),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
