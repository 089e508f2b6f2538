//! Reduces arbitrary strings to fixed-width base-36 segments.
//!
//! A string is hashed with SHA-256, the 32-byte digest is read as a
//! big-endian unsigned integer, reduced modulo `36^width`, and rendered as
//! exactly `width` lowercase base-36 characters.

pub mod base36;
pub mod digest;

pub use base36::{decode_base36, encode_base36};
pub use digest::{
    DigestBytes, DigestFacility, DigestInteger, digest, digest_with, reduce_modulo, reduce_str,
    segment_modulus, to_integer,
};

/// Widest segment whose modulus `36^width` still fits in a `u64`.
pub const MAX_WIDTH: usize = 12;

/// Errors for hashing and reduction.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("SHA-256 digest facility is not available")]
    CryptoUnavailable,

    #[error("segment width {0} is outside 1..={MAX_WIDTH}")]
    WidthOutOfRange(usize),
}
