//! Browser fingerprint used in place of a machine GUID.
//!
//! A browser host cannot read an OS identity, so the identity string is
//! built from properties the host reads off `navigator`, `screen` and the
//! local clock and hands over as a [`BrowserEnvironment`].

use serde::{Deserialize, Serialize};

/// Separator between fingerprint fields.
pub const FINGERPRINT_DELIMITER: &str = "|";

/// Platform token used when none can be derived.
pub const UNKNOWN_PLATFORM: &str = "unknown";

/// Browser properties that make up the fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserEnvironment {
    /// Full `navigator.userAgent`.
    pub user_agent: String,
    /// `navigator.userAgentData.platform` when client hints are available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent_data_platform: Option<String>,
    /// `navigator.language`.
    pub language: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub color_depth: u32,
    /// `Date#getTimezoneOffset()`: minutes to add to local time to reach UTC.
    pub timezone_offset_minutes: i32,
}

/// Best-effort OS platform token.
///
/// Client-hint platform first, then the first non-empty parenthesized group
/// of the user agent, then [`UNKNOWN_PLATFORM`].
pub fn browser_platform_token(env: &BrowserEnvironment) -> String {
    if let Some(platform) = env
        .user_agent_data_platform
        .as_deref()
        .filter(|p| !p.is_empty())
    {
        return platform.to_string();
    }
    first_parenthesized_group(&env.user_agent)
        .unwrap_or(UNKNOWN_PLATFORM)
        .to_string()
}

/// Joins the fingerprint fields in their fixed order.
pub fn browser_fingerprint(env: &BrowserEnvironment) -> String {
    [
        env.user_agent.clone(),
        browser_platform_token(env),
        env.language.clone(),
        env.screen_width.to_string(),
        env.screen_height.to_string(),
        env.color_depth.to_string(),
        env.timezone_offset_minutes.to_string(),
    ]
    .join(FINGERPRINT_DELIMITER)
}

fn first_parenthesized_group(s: &str) -> Option<&str> {
    let mut rest = s;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let close = after.find(')')?;
        if close > 0 {
            return Some(&after[..close]);
        }
        rest = &after[close + 1..];
    }
    None
}
