//! Random UUIDs feeding the unique segment.

use rand::Rng;
use uuid::{Builder, Uuid};

/// Source of version-4 UUIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UuidFacility {
    /// `uuid::Uuid::new_v4`, backed by the OS random number generator.
    #[default]
    Native,
}

impl UuidFacility {
    pub fn new_v4(self) -> Uuid {
        match self {
            UuidFacility::Native => Uuid::new_v4(),
        }
    }
}

/// Builds a v4 UUID from `rng` when no native facility is configured.
///
/// Sixteen random bytes with the version nibble forced to `4` and the
/// variant bits forced to `10`, rendered lowercase and hyphenated.
pub fn fallback_uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}
