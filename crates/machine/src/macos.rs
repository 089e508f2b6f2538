//! macOS platform UUID from the I/O registry.

use crate::{MachineError, Platform};

pub const IOREG_PROGRAM: &str = "ioreg";

/// Arguments dumping the platform expert device.
pub const IOREG_ARGS: [&str; 3] = ["-rd1", "-c", "IOPlatformExpertDevice"];

/// Property holding the platform UUID.
pub const PLATFORM_UUID_KEY: &str = "IOPlatformUUID";

/// Extracts the platform UUID from an `ioreg` dump.
///
/// Uses the first line mentioning `IOPlatformUUID` and returns the text
/// between its last pair of double quotes:
///
/// ```text
///   "IOPlatformUUID" = "12345678-1234-5678-9012-345678901234"
/// ```
pub fn parse_ioreg_output(output: &str) -> Result<String, MachineError> {
    let line = output
        .lines()
        .find(|line| line.contains(PLATFORM_UUID_KEY))
        .ok_or_else(|| MachineError::Malformed {
            platform: Platform::MacOs,
            reason: format!("no {PLATFORM_UUID_KEY} property"),
        })?;

    let parts: Vec<&str> = line.split('"').collect();
    if parts.len() < 3 {
        return Err(MachineError::Malformed {
            platform: Platform::MacOs,
            reason: format!("{PLATFORM_UUID_KEY} value is not quoted"),
        });
    }

    let uuid = parts[parts.len() - 2].trim();
    if uuid.is_empty() {
        return Err(MachineError::EmptyIdentity(Platform::MacOs));
    }
    Ok(uuid.to_string())
}
