//! Assembles actor identifiers from randomness, machine identity and a UUID.

use actorid_hash::{
    DigestFacility, digest_with, encode_base36, reduce_modulo, segment_modulus, to_integer,
};
use actorid_machine::MachineIdentityProvider;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::identifier::{ActorIdentifier, Segment, SegmentKind};
use crate::uuid_source::{UuidFacility, fallback_uuid_v4};
use crate::IdentifierError;

/// Order of segments in a generated identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentOrder {
    /// Uniform random permutation per identifier.
    #[default]
    Shuffled,
    /// Always random, machine, unique (`XXX-XXXXXX-XXXXXXXXX`).
    Canonical,
}

/// Generates actor identifiers.
///
/// Holds the machine identity provider and the cryptographic facilities;
/// every call to [`Generator::generate`] performs a fresh identity lookup
/// and shares no state with other calls.
#[derive(Debug, Clone)]
pub struct Generator {
    provider: MachineIdentityProvider,
    digest: Option<DigestFacility>,
    uuid: Option<UuidFacility>,
    order: SegmentOrder,
}

impl Generator {
    pub fn new(provider: MachineIdentityProvider) -> Self {
        Self {
            provider,
            digest: Some(DigestFacility::default()),
            uuid: Some(UuidFacility::default()),
            order: SegmentOrder::default(),
        }
    }

    /// Generator for the running host.
    pub fn detect() -> Result<Self, IdentifierError> {
        Ok(Self::new(MachineIdentityProvider::detect()?))
    }

    /// Sets the digest facility; `None` makes generation fail with
    /// [`IdentifierError::CryptoUnavailable`].
    pub fn with_digest_facility(mut self, digest: Option<DigestFacility>) -> Self {
        self.digest = digest;
        self
    }

    /// Sets the UUID facility; `None` switches to [`fallback_uuid_v4`].
    pub fn with_uuid_facility(mut self, uuid: Option<UuidFacility>) -> Self {
        self.uuid = uuid;
        self
    }

    pub fn with_segment_order(mut self, order: SegmentOrder) -> Self {
        self.order = order;
        self
    }

    pub fn provider(&self) -> &MachineIdentityProvider {
        &self.provider
    }

    /// Generates an identifier using a freshly seeded random source.
    pub async fn generate(&self) -> Result<ActorIdentifier, IdentifierError> {
        let mut rng = StdRng::from_entropy();
        self.generate_with(&mut rng).await
    }

    /// Generates an identifier drawing all non-UUID randomness from `rng`.
    pub async fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<ActorIdentifier, IdentifierError> {
        let digest = self.digest.ok_or(IdentifierError::CryptoUnavailable)?;

        let random = rng.gen_range(0..segment_modulus(SegmentKind::Random.width())?);

        let identity = self.provider.machine_identity().await?;
        let machine = reduce(digest, &identity, SegmentKind::Machine)?;

        let uuid = match self.uuid {
            Some(facility) => facility.new_v4().to_string(),
            None => {
                warn!("no UUID facility configured, building v4 UUID from fallback randomness");
                fallback_uuid_v4(rng)
            }
        };
        let unique = reduce(digest, &uuid, SegmentKind::Unique)?;

        let mut segments = [
            segment(SegmentKind::Random, random),
            segment(SegmentKind::Machine, machine),
            segment(SegmentKind::Unique, unique),
        ];
        if self.order == SegmentOrder::Shuffled {
            segments.shuffle(rng);
        }

        let id = ActorIdentifier::from_segments(segments);
        debug!(
            platform = %self.provider.platform(),
            machine_segment = id.machine_segment(),
            "actor identifier generated"
        );
        Ok(id)
    }
}

/// Generates an identifier for the running host with default facilities.
pub async fn generate_actor_machine_identifier() -> Result<ActorIdentifier, IdentifierError> {
    Generator::detect()?.generate().await
}

/// The 6-character segment a machine identity string always reduces to.
pub fn machine_segment(identity: &str) -> Result<String, IdentifierError> {
    let value = reduce(DigestFacility::default(), identity, SegmentKind::Machine)?;
    Ok(encode_base36(value, SegmentKind::Machine.width()))
}

fn reduce(digest: DigestFacility, input: &str, kind: SegmentKind) -> Result<u64, IdentifierError> {
    let bytes = digest_with(Some(digest), input)?;
    Ok(reduce_modulo(&to_integer(bytes), kind.width())?)
}

fn segment(kind: SegmentKind, value: u64) -> Segment {
    Segment::new(kind, encode_base36(value, kind.width()))
}
