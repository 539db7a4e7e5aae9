//! Server config loader (strict parsing).
//!
//! The config file is optional: without it the service listens on
//! `0.0.0.0:3000` and persists to `./status`.

pub mod schema;

use std::{fs, io, path::Path};

use redblue_core::error::{RedBlueError, Result};

pub use schema::{ServerConfig, ServerSection, StoreSection};

pub const DEFAULT_CONFIG_PATH: &str = "redblue.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        RedBlueError::Config(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(RedBlueError::Config(format!(
            "read config {} failed: {e}",
            path.display()
        ))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| RedBlueError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
