use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

///
/// Id
///
/// Row identity for every entity in the platform. ULIDs keep ids sortable by
/// creation time while staying opaque to clients.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Deref,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(Ulid);

impl Id {
    /// Construct an id from raw ULID parts.
    ///
    /// Intended for fixtures and deterministic test data; production ids come
    /// from the persistence layer.
    #[must_use]
    pub const fn from_parts(timestamp_ms: u64, random: u128) -> Self {
        Self(Ulid::from_parts(timestamp_ms, random))
    }

    /// The all-zero id.
    #[must_use]
    pub const fn nil() -> Self {
        Self(Ulid(0))
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.0.0 == 0
    }
}

///
/// TESTS
///
