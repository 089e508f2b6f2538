//! CLI configuration management.
//!
//! Configuration is stored as TOML:
//! - Linux/macOS: `~/.config/actorid/config.toml`
//! - Windows: `%APPDATA%/actorid/config.toml`

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Identity source: `auto`, `windows`, `linux` or `macos`.
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Machine-id file read on Linux.
    #[serde(default = "default_machine_id_path")]
    pub machine_id_path: PathBuf,

    /// Time limit for one platform query, in seconds.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Use the OS-backed UUID generator (fallback randomness otherwise).
    #[serde(default = "default_true")]
    pub native_uuid: bool,

    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_platform() -> String {
    "auto".into()
}

fn default_machine_id_path() -> PathBuf {
    PathBuf::from(actorid_machine::linux::MACHINE_ID_PATH)
}

fn default_probe_timeout_secs() -> u64 {
    actorid_machine::DEFAULT_PROBE_TIMEOUT.as_secs()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            machine_id_path: default_machine_id_path(),
            probe_timeout_secs: default_probe_timeout_secs(),
            native_uuid: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location, creating it with
    /// defaults if not found.
    ///
    /// A failure to write the defaults is returned alongside the config
    /// rather than failing the load.
    pub fn load() -> anyhow::Result<(Self, Option<anyhow::Error>)> {
        Self::load_or_create(&config_path()?)
    }

    /// Loads `path`, or writes defaults there if it does not exist.
    pub fn load_or_create(path: &Path) -> anyhow::Result<(Self, Option<anyhow::Error>)> {
        if path.exists() {
            return Ok((Self::load_from(path)?, None));
        }

        let config = Config::default();
        let save_error = config
            .save_to(path)
            .with_context(|| format!("writing {}", path.display()))
            .err();
        Ok((config, save_error))
    }

    /// Loads configuration from an explicit file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> anyhow::Result<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        Ok(PathBuf::from(appdata).join("actorid").join("config.toml"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        Ok(PathBuf::from(home)
            .join(".config")
            .join("actorid")
            .join("config.toml"))
    }
}
