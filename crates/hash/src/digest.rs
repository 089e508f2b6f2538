//! SHA-256 digests and their reduction to segment-sized integers.

use sha2::{Digest, Sha256};

use crate::base36::RADIX;
use crate::{HashError, MAX_WIDTH};

/// Raw SHA-256 output.
pub type DigestBytes = [u8; 32];

/// How the SHA-256 implementation is driven.
///
/// Both shapes produce identical output; they mirror the two interfaces a
/// digest backend may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestFacility {
    /// Incremental hasher: `new` / `update` / `finalize`.
    #[default]
    Streaming,
    /// Single call over the whole input.
    OneShot,
}

impl DigestFacility {
    /// Computes SHA-256 of `data`.
    pub fn sha256(self, data: &[u8]) -> DigestBytes {
        match self {
            DigestFacility::Streaming => {
                let mut hasher = Sha256::new();
                hasher.update(data);
                hasher.finalize().into()
            }
            DigestFacility::OneShot => Sha256::digest(data).into(),
        }
    }
}

/// A 256-bit unsigned integer stored as its big-endian bytes.
///
/// Ordering follows the numeric value since the bytes are compared most
/// significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigestInteger([u8; 32]);

impl DigestInteger {
    pub fn from_be_bytes(bytes: DigestBytes) -> Self {
        Self(bytes)
    }

    pub fn to_be_bytes(&self) -> DigestBytes {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Returns `self mod modulus`. `modulus` must be non-zero.
    pub fn rem_u64(&self, modulus: u64) -> u64 {
        debug_assert!(modulus != 0);
        let m = u128::from(modulus);
        // acc < m <= u64::MAX, so acc * 256 + 255 fits in a u128.
        let acc = self
            .0
            .iter()
            .fold(0u128, |acc, &byte| ((acc << 8) | u128::from(byte)) % m);
        acc as u64
    }

    /// Lowercase hex of the big-endian bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// SHA-256 of the UTF-8 bytes of `input` using the built-in facility.
pub fn digest(input: &str) -> DigestBytes {
    DigestFacility::default().sha256(input.as_bytes())
}

/// SHA-256 of `input` through an optional facility.
///
/// Fails closed with [`HashError::CryptoUnavailable`] when no facility is
/// configured.
pub fn digest_with(facility: Option<DigestFacility>, input: &str) -> Result<DigestBytes, HashError> {
    let facility = facility.ok_or(HashError::CryptoUnavailable)?;
    Ok(facility.sha256(input.as_bytes()))
}

/// Interprets digest bytes as a big-endian unsigned integer.
pub fn to_integer(bytes: DigestBytes) -> DigestInteger {
    DigestInteger::from_be_bytes(bytes)
}

/// Returns `36^width`.
pub fn segment_modulus(width: usize) -> Result<u64, HashError> {
    if width == 0 || width > MAX_WIDTH {
        return Err(HashError::WidthOutOfRange(width));
    }
    Ok(RADIX.pow(width as u32))
}

/// Returns `value mod 36^width`, always in `0..36^width`.
pub fn reduce_modulo(value: &DigestInteger, width: usize) -> Result<u64, HashError> {
    let modulus = segment_modulus(width)?;
    Ok(value.rem_u64(modulus))
}

/// `digest` then `to_integer` then `reduce_modulo`.
pub fn reduce_str(input: &str, width: usize) -> Result<u64, HashError> {
    reduce_modulo(&to_integer(digest(input)), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_base36;

    const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const SHA256_TEST: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";

    #[test]
    fn digest_known_vectors() {
        assert_eq!(hex::encode(digest("")), SHA256_EMPTY);
        assert_eq!(hex::encode(digest("test")), SHA256_TEST);
    }

    #[test]
    fn facilities_agree() {
        for input in ["", "test", "test!@#$%^&*()_+{}|:\"<>?", "测试 🚀"] {
            assert_eq!(
                DigestFacility::Streaming.sha256(input.as_bytes()),
                DigestFacility::OneShot.sha256(input.as_bytes()),
            );
        }
    }

    #[test]
    fn missing_facility_fails_closed() {
        assert!(matches!(
            digest_with(None, "test"),
            Err(HashError::CryptoUnavailable)
        ));
        let bytes = digest_with(Some(DigestFacility::OneShot), "test").unwrap();
        assert_eq!(hex::encode(bytes), SHA256_TEST);
    }

    #[test]
    fn to_integer_is_big_endian() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert_eq!(to_integer(bytes).rem_u64(u64::MAX), 1);

        bytes[30] = 1;
        assert_eq!(to_integer(bytes).rem_u64(u64::MAX), 257);

        let mut high = [0u8; 32];
        high[0] = 1;
        assert!(to_integer(high) > to_integer(bytes));
    }

    #[test]
    fn to_integer_is_deterministic() {
        let a = to_integer(digest("test"));
        let b = to_integer(digest("test"));
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), SHA256_TEST);
        assert_ne!(a, to_integer(digest("")));
    }

    #[test]
    fn zero_integer() {
        let zero = to_integer([0u8; 32]);
        assert!(zero.is_zero());
        assert_eq!(reduce_modulo(&zero, 6).unwrap(), 0);
        assert!(!to_integer(digest("")).is_zero());
    }

    #[test]
    fn rem_matches_small_values() {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&123_456_789_u64.to_be_bytes());
        let value = to_integer(bytes);
        assert_eq!(value.rem_u64(36), 123_456_789 % 36);
        assert_eq!(value.rem_u64(1_000), 789);
    }

    #[test]
    fn reduce_modulo_stays_in_range() {
        let inputs = ["", "test", "a1b2c3d4e5f6g7h8i9j0", &"a".repeat(10_000)];
        for input in inputs {
            let value = to_integer(digest(input));
            for width in 1..=MAX_WIDTH {
                let reduced = reduce_modulo(&value, width).unwrap();
                assert!(reduced < segment_modulus(width).unwrap());
            }
        }
    }

    #[test]
    fn reduce_modulo_rejects_bad_widths() {
        let value = to_integer(digest("test"));
        assert!(matches!(
            reduce_modulo(&value, 0),
            Err(HashError::WidthOutOfRange(0))
        ));
        assert!(matches!(
            reduce_modulo(&value, MAX_WIDTH + 1),
            Err(HashError::WidthOutOfRange(13))
        ));
    }

    #[test]
    fn pinned_reductions() {
        assert_eq!(reduce_str("a1b2c3d4e5f6g7h8i9j0", 6).unwrap(), 419_114_341);
        assert_eq!(
            encode_base36(reduce_str("a1b2c3d4e5f6g7h8i9j0", 6).unwrap(), 6),
            "6xj2p1"
        );
        assert_eq!(reduce_str("", 6).unwrap(), 1_601_624_149);
        assert_eq!(encode_base36(reduce_str("test", 9).unwrap(), 9), "oidytq9zc");
    }
}
