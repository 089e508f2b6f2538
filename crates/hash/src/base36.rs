//! Fixed-width base-36 rendering.

/// Base-36 digit alphabet indexed by digit value.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Numeric base of a segment.
pub const RADIX: u64 = 36;

/// Renders `value` in lowercase base 36, left-padded with `'0'` to `width`.
///
/// Zero yields `width` zero characters. A value needing more than `width`
/// digits is never truncated; callers keep `value < 36^width` by reducing
/// with [`crate::reduce_modulo`] first.
pub fn encode_base36(mut value: u64, width: usize) -> String {
    // Digits are produced least significant first.
    let mut digits = Vec::with_capacity(width.max(crate::MAX_WIDTH + 1));
    while value > 0 {
        digits.push(ALPHABET[(value % RADIX) as usize]);
        value /= RADIX;
    }
    while digits.len() < width {
        digits.push(b'0');
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// Parses a base-36 string (either case). Returns `None` for empty input,
/// characters outside `0-9a-zA-Z`, or values that overflow a `u64`.
pub fn decode_base36(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    u64::from_str_radix(s, RADIX as u32).ok()
}
