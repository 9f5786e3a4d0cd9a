use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every field has a sensible default — a bare `stipend` invocation works.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the per-collection JSON files (the local-storage
    /// stand-in). Defaults to the platform data dir, e.g.
    /// `~/.local/share/stipend` on Linux.
    pub data_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = match std::env::var("STIPEND_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };

        Ok(Config {
            data_dir,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("could not determine a platform data directory")?;
    Ok(base.join("stipend"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        // Env mutation is process-global; keep this the only test touching it.
        std::env::set_var("STIPEND_DATA_DIR", "/tmp/stipend-test");
        let config = Config::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/stipend-test"));
        std::env::remove_var("STIPEND_DATA_DIR");
    }
}
