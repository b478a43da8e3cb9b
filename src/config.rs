use std::env;
use std::path::PathBuf;

use log::warn;

use crate::db::slot::is_valid_slot_name;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_SLOT_NAME: &str = "departments";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub slot_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            slot_name: DEFAULT_SLOT_NAME.into(),
        }
    }
}

impl Config {
    /// Reads `BIND_ADDR`, `DATA_DIR` and `STORAGE_SLOT` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(v) = non_blank(lookup("BIND_ADDR")) {
            config.bind_addr = v;
        }

        if let Some(v) = non_blank(lookup("DATA_DIR")) {
            config.data_dir = PathBuf::from(v);
        }

        if let Some(v) = non_blank(lookup("STORAGE_SLOT")) {
            if is_valid_slot_name(&v) {
                config.slot_name = v;
            } else {
                warn!("ignoring STORAGE_SLOT '{}', using '{}'", v, DEFAULT_SLOT_NAME);
            }
        }

        config
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
