//! Configuration module for Libris
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LIBRIS_*)
//! 3. `--config` file, else `./libris.toml`, else `~/.config/libris/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_resolved, resolve_config_path, ConfigError, ConfigWarning, LOCAL_CONFIG_FILE,
};
pub use types::{ColorMode, Config, LendingConfig, OutputConfig};
