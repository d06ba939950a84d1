use crate::id::Id;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ContextError
///

#[derive(Debug, ThisError)]
pub enum ContextError {
    #[error("viewer-scoped data requested without an authenticated viewer")]
    MissingViewer,
}

///
/// ProfileRef
///
/// Identity of an authenticated viewer: the learner profile acting in this
/// request plus the account that owns it.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProfileRef {
    pub profile: Id,
    pub user: Id,
}

///
/// Viewer
///
/// The requesting identity as a closed two-variant sum. Consumers must match
/// on the variant; there is no truthiness shortcut, so an anonymous request
/// can never be mistaken for an authenticated one.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Viewer {
    Authenticated(ProfileRef),
    Anonymous,
}

impl Viewer {
    /// Construct an authenticated viewer from its profile/user pair.
    #[must_use]
    pub const fn authenticated(profile: Id, user: Id) -> Self {
        Self::Authenticated(ProfileRef { profile, user })
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The single gate every viewer-scoped filter and annotation goes
    /// through. Fails before any query is issued.
    pub const fn require_profile(&self) -> Result<&ProfileRef, ContextError> {
        match self {
            Self::Authenticated(profile) => Ok(profile),
            Self::Anonymous => Err(ContextError::MissingViewer),
        }
    }
}

///
/// TESTS
///
