//! Windows machine GUID from the cryptography registry key.

use crate::{MachineError, Platform};

/// Registry tool invoked for the lookup.
pub const REG_PROGRAM: &str = "reg";

/// Key holding the machine GUID.
pub const CRYPTOGRAPHY_KEY: &str = r"HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\Cryptography";

/// Value name of the machine GUID.
pub const MACHINE_GUID_VALUE: &str = "MachineGuid";

/// Arguments for `reg query <key> /v MachineGuid`.
pub fn query_args() -> [&'static str; 4] {
    ["query", CRYPTOGRAPHY_KEY, "/v", MACHINE_GUID_VALUE]
}

/// Extracts the trailing whitespace-delimited token of `reg query` output.
///
/// ```text
/// HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\Cryptography
///     MachineGuid    REG_SZ    1c2a9e7b-...
/// ```
pub fn parse_registry_output(output: &str) -> Result<String, MachineError> {
    output
        .split_whitespace()
        .next_back()
        .map(str::to_string)
        .ok_or(MachineError::EmptyIdentity(Platform::Windows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trailing_token() {
        let output = "    MachineGuid    REG_SZ    {12345678-1234-5678-9012-345678901234}";
        assert_eq!(
            parse_registry_output(output).unwrap(),
            "{12345678-1234-5678-9012-345678901234}"
        );
    }

    #[test]
    fn ignores_trailing_blank_lines() {
        let output = "\r\nHKEY_LOCAL_MACHINE\\SOFTWARE\\Microsoft\\Cryptography\r\n    \
                      MachineGuid    REG_SZ    1c2a9e7b-0000-4000-8000-00000000abcd\r\n\r\n";
        assert_eq!(
            parse_registry_output(output).unwrap(),
            "1c2a9e7b-0000-4000-8000-00000000abcd"
        );
    }

    #[test]
    fn empty_output_is_an_error() {
        assert!(matches!(
            parse_registry_output("  \r\n "),
            Err(MachineError::EmptyIdentity(Platform::Windows))
        ));
    }

    #[test]
    fn query_targets_machine_guid() {
        let args = query_args();
        assert_eq!(args[0], "query");
        assert_eq!(args[3], "MachineGuid");
        assert!(args[1].ends_with("Cryptography"));
    }
}
