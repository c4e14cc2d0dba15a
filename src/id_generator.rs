use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Single static counter for all elements in the session.
static NEXT_ELEMENT_SEQ: AtomicU64 = AtomicU64::new(1);

/// Identifier for a canvas element.
///
/// Combines a session-monotonic sequence number with a random nonce, so ids
/// stay unique under rapid repeated generation and cannot collide with ids
/// that arrived in a loaded document (see [`register_existing`]).
///
/// The string form is `"{seq:x}-{nonce:08x}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    seq: u64,
    nonce: u32,
}

/// Produce a fresh session-unique element id.
pub fn generate_id() -> ElementId {
    let seq = NEXT_ELEMENT_SEQ.fetch_add(1, Ordering::SeqCst);
    // The low bits of a v4 uuid are as good a nonce source as any.
    let nonce = uuid::Uuid::new_v4().as_u128() as u32;
    ElementId { seq, nonce }
}

/// Keep future generated ids clear of an id that came in with a loaded
/// document. Called for every element id during template normalization.
pub fn register_existing(id: ElementId) {
    NEXT_ELEMENT_SEQ.fetch_max(id.seq + 1, Ordering::SeqCst);
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}-{:08x}", self.seq, self.nonce)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid element id `{0}`")]
pub struct ParseElementIdError(String);

impl FromStr for ElementId {
    type Err = ParseElementIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (seq, nonce) = s
            .split_once('-')
            .ok_or_else(|| ParseElementIdError(s.to_owned()))?;
        let seq = u64::from_str_radix(seq, 16).map_err(|_| ParseElementIdError(s.to_owned()))?;
        let nonce = u32::from_str_radix(nonce, 16).map_err(|_| ParseElementIdError(s.to_owned()))?;
        Ok(ElementId { seq, nonce })
    }
}

impl Serialize for ElementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_round_trip() {
        let id = generate_id();
        let parsed: ElementId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_garbage() {
        assert!("not-an-id-at-all".parse::<ElementId>().is_err());
        assert!("12345".parse::<ElementId>().is_err());
    }
}
