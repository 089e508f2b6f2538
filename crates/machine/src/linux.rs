//! Linux machine id from the systemd/dbus machine-id file.

use crate::{MachineError, Platform};

/// Default location of the machine id.
pub const MACHINE_ID_PATH: &str = "/etc/machine-id";

/// Trims the machine-id file contents, rejecting an empty file.
pub fn parse_machine_id_file(contents: &str) -> Result<String, MachineError> {
    let id = contents.trim();
    if id.is_empty() {
        return Err(MachineError::EmptyIdentity(Platform::Linux));
    }
    Ok(id.to_string())
}
