use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{BrowserEnvironment, MachineError};

/// Source of the machine identity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Registry `MachineGuid`.
    Windows,
    /// `/etc/machine-id`.
    Linux,
    /// `IOPlatformUUID` from the I/O registry.
    MacOs,
    /// Fingerprint of injected browser properties.
    Browser,
}

impl Platform {
    /// Returns the platform of the running host.
    pub fn detect() -> Result<Platform, MachineError> {
        Platform::from_os_family(std::env::consts::OS)
    }

    /// Maps an OS family name to a platform.
    ///
    /// Accepts Rust target names (`windows`, `linux`, `macos`) and their
    /// Node-style aliases (`win32`, `darwin`).
    pub fn from_os_family(os: &str) -> Result<Platform, MachineError> {
        match os {
            "windows" | "win32" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::MacOs),
            other => Err(MachineError::UnsupportedEnvironment(format!(
                "cannot determine machine identifier on OS family `{other}`"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Browser => "browser",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "browser" => Ok(Platform::Browser),
            other => Platform::from_os_family(other),
        }
    }
}

/// Facts about the runtime host used to select a [`Platform`] once.
///
/// An OS family takes precedence over browser properties; with neither, the
/// environment is unsupported.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub os_family: Option<String>,
    pub browser: Option<BrowserEnvironment>,
}

impl Environment {
    /// Environment of the running native process.
    pub fn host() -> Self {
        Self {
            os_family: Some(std::env::consts::OS.to_string()),
            browser: None,
        }
    }

    /// Environment of a browser host with the given properties.
    pub fn browser(browser: BrowserEnvironment) -> Self {
        Self {
            os_family: None,
            browser: Some(browser),
        }
    }

    /// Selects the identity strategy for this environment.
    pub fn select(&self) -> Result<Platform, MachineError> {
        match (&self.os_family, &self.browser) {
            (Some(os), _) => Platform::from_os_family(os),
            (None, Some(_)) => Ok(Platform::Browser),
            (None, None) => Err(MachineError::UnsupportedEnvironment(
                "neither an OS family nor a browser environment is available".into(),
            )),
        }
    }
}
