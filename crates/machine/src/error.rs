//! Error types for machine identity lookup.

use std::path::PathBuf;
use std::time::Duration;

use crate::Platform;

/// Errors produced while resolving the machine identity.
///
/// Every variant except [`MachineError::UnsupportedEnvironment`] is a
/// platform query failure: the platform is known but its identity could not
/// be read. No variant is ever replaced by an empty identity string.
#[derive(Debug, thiserror::Error)]
pub enum MachineError {
    #[error("unsupported environment: {0}")]
    UnsupportedEnvironment(String),

    #[error("command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} returned an empty machine identity")]
    EmptyIdentity(Platform),

    #[error("unexpected {platform} output: {reason}")]
    Malformed { platform: Platform, reason: String },

    #[error("platform query timed out after {0:?}")]
    Timeout(Duration),
}

impl MachineError {
    /// Returns `true` when the platform was recognized but its query failed.
    pub fn is_platform_query_failure(&self) -> bool {
        !matches!(self, MachineError::UnsupportedEnvironment(_))
    }
}
