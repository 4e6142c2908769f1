//! Client config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use feeds_core::error::{FeedsError, Result};

pub use schema::{ClientConfig, ConnectionSection, ErrorAction, EventsSection};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        FeedsError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ClientConfig> {
    let cfg: ClientConfig =
        serde_yaml::from_str(s).map_err(|e| FeedsError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
