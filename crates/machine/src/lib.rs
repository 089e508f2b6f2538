//! Machine identity lookup for actorid.
//!
//! Resolves a raw string that identifies the current host (Windows machine
//! GUID, Linux machine-id, macOS platform UUID) or, in a browser host, a
//! fingerprint synthesized from injected browser properties. All OS access
//! goes through a [`SystemProbe`] so every platform can be simulated.

pub mod browser;
mod error;
pub mod linux;
pub mod macos;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;
pub mod platform;
pub mod probe;
pub mod provider;
pub mod windows;

pub use browser::{BrowserEnvironment, browser_fingerprint, browser_platform_token};
pub use error::MachineError;
pub use linux::parse_machine_id_file;
pub use macos::parse_ioreg_output;
pub use platform::{Environment, Platform};
pub use probe::{HostProbe, ProbeFuture, SystemProbe};
pub use provider::{DEFAULT_PROBE_TIMEOUT, MachineIdentityProvider};
pub use windows::parse_registry_output;
