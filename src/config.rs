//! Server configuration from environment variables

use std::env;
use std::path::{Path, PathBuf};

/// Path of the JSONL store; relative paths resolve against the working directory
pub const DATA_FILE_VAR: &str = "MANUAL_DATA_FILE";
/// Socket address to listen on
pub const ADDR_VAR: &str = "MANUAL_ADDR";

const DEFAULT_DATA_FILE: &str = "manuals.jsonl";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Runtime settings for the server binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_file: PathBuf,
    pub addr: String,
}

impl ServerConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve(|key| env::var(key).ok(), &current_dir)
    }

    /// Build settings from a variable lookup, resolving relative paths against `base_dir`
    pub fn resolve<F>(lookup: F, base_dir: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_file = match lookup(DATA_FILE_VAR).filter(|v| !v.trim().is_empty()) {
            Some(path) if Path::new(&path).is_absolute() => PathBuf::from(path),
            Some(path) => base_dir.join(path),
            None => base_dir.join(DEFAULT_DATA_FILE),
        };

        let addr = lookup(ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());

        Self { data_file, addr }
    }
}
