use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator between segments.
pub const SEPARATOR: char = '-';

/// Length of a rendered identifier: 3 + 6 + 9 characters and two separators.
pub const IDENTIFIER_LEN: usize = 20;

/// What a segment was derived from. Each kind has a distinct width, so the
/// kind of a segment is recoverable from its length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Raw randomness, 3 characters.
    Random,
    /// Reduced machine identity, 6 characters.
    Machine,
    /// Reduced random UUID, 9 characters.
    Unique,
}

impl SegmentKind {
    /// All kinds in canonical order.
    pub const ALL: [SegmentKind; 3] = [SegmentKind::Random, SegmentKind::Machine, SegmentKind::Unique];

    pub fn width(self) -> usize {
        match self {
            SegmentKind::Random => 3,
            SegmentKind::Machine => 6,
            SegmentKind::Unique => 9,
        }
    }

    pub fn from_width(width: usize) -> Option<SegmentKind> {
        SegmentKind::ALL.into_iter().find(|k| k.width() == width)
    }
}

/// One base-36 segment of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    kind: SegmentKind,
    value: String,
}

impl Segment {
    pub(crate) fn new(kind: SegmentKind, value: String) -> Self {
        debug_assert_eq!(value.len(), kind.width());
        Self { kind, value }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// A generated or parsed actor identifier.
///
/// Rendered as three lowercase base-36 segments joined by `-`. The segment
/// order is part of the value: two identifiers with the same segments in a
/// different order are different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActorIdentifier {
    segments: [Segment; 3],
}

impl ActorIdentifier {
    pub(crate) fn from_segments(segments: [Segment; 3]) -> Self {
        Self { segments }
    }

    /// Segments in rendered order.
    pub fn segments(&self) -> &[Segment; 3] {
        &self.segments
    }

    /// Segment of the given kind.
    pub fn segment(&self, kind: SegmentKind) -> &str {
        self.segments
            .iter()
            .find(|s| s.kind == kind)
            .map(Segment::as_str)
            .unwrap_or_default()
    }

    /// The reproducible segment derived from the machine identity.
    pub fn machine_segment(&self) -> &str {
        self.segment(SegmentKind::Machine)
    }

    /// Returns `true` when segments appear as random, machine, unique,
    /// i.e. the string matches `^[a-z0-9]{3}-[a-z0-9]{6}-[a-z0-9]{9}$`.
    pub fn is_canonical_order(&self) -> bool {
        self.segments
            .iter()
            .map(Segment::kind)
            .eq(SegmentKind::ALL)
    }
}

impl fmt::Display for ActorIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.segments;
        write!(f, "{}{SEPARATOR}{}{SEPARATOR}{}", a.value, b.value, c.value)
    }
}

/// Error returned when a string is not a well-formed actor identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid actor identifier `{input}`: {reason}")]
pub struct ParseIdentifierError {
    input: String,
    reason: &'static str,
}

impl FromStr for ActorIdentifier {
    type Err = ParseIdentifierError;

    /// Parses an identifier in any segment order; letters may be either case
    /// and are normalized to lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| ParseIdentifierError {
            input: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        let &[a, b, c] = parts.as_slice() else {
            return Err(invalid("expected three segments"));
        };

        let mut segments = Vec::with_capacity(3);
        for part in [a, b, c] {
            if !part.bytes().all(|byte| byte.is_ascii_alphanumeric()) {
                return Err(invalid("segments must be base-36 alphanumerics"));
            }
            let kind = SegmentKind::from_width(part.len())
                .ok_or_else(|| invalid("segment widths must be 3, 6 and 9"))?;
            if segments.iter().any(|seg: &Segment| seg.kind == kind) {
                return Err(invalid("segment widths must be 3, 6 and 9"));
            }
            segments.push(Segment::new(kind, part.to_ascii_lowercase()));
        }

        let segments: [Segment; 3] = segments
            .try_into()
            .map_err(|_| invalid("expected three segments"))?;
        Ok(Self { segments })
    }
}

impl Serialize for ActorIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ActorIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
