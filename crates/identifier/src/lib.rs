//! Actor machine identifiers.
//!
//! An identifier joins three base-36 segments with `-`:
//!
//! - a 3-character segment of plain randomness,
//! - a 6-character segment reduced from the machine identity,
//! - a 9-character segment reduced from a fresh v4 UUID,
//!
//! in an order shuffled once per generation, e.g. `k3x9z0a1b-7qp-f00baa`
//! or `7qp-f00baa-k3x9z0a1b`.

mod error;
pub mod generator;
pub mod identifier;
pub mod uuid_source;

pub use error::IdentifierError;
pub use generator::{Generator, SegmentOrder, generate_actor_machine_identifier, machine_segment};
pub use identifier::{ActorIdentifier, ParseIdentifierError, Segment, SegmentKind};
pub use uuid_source::{UuidFacility, fallback_uuid_v4};
