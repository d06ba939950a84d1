use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Every resolver failure is a programming-contract violation: the request
/// boundary converts it to a server error, never retries, never coerces.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    /// Construct an error from its classification parts.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a missing-viewer error for the given origin.
    ///
    /// Raised when a viewer-scoped relation or annotation is resolved with an
    /// anonymous viewer in context; silently degrading to public data would
    /// be a confidentiality bug.
    pub(crate) fn missing_viewer(origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(ErrorClass::MissingViewer, origin, message)
    }

    /// Construct a load-origin internal error, for [`Loader`] implementations.
    ///
    /// [`Loader`]: crate::load::Loader
    pub fn load_internal(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Internal, ErrorOrigin::Load, message)
    }

    /// Construct a load-origin not-found error, for [`Loader`] implementations.
    ///
    /// [`Loader`]: crate::load::Loader
    pub fn load_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::NotFound, ErrorOrigin::Load, message)
    }

    /// Construct an annotate-origin invariant violation.
    pub(crate) fn annotate_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Annotate,
            message,
        )
    }

    #[must_use]
    pub const fn is_spec_mismatch(&self) -> bool {
        matches!(self.class, ErrorClass::SpecMismatch)
    }

    #[must_use]
    pub const fn is_missing_viewer(&self) -> bool {
        matches!(self.class, ErrorClass::MissingViewer)
    }

    #[must_use]
    pub const fn is_undefined_field(&self) -> bool {
        matches!(self.class, ErrorClass::UndefinedField)
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// A view referenced a field or relation absent from the fetch spec.
    SpecMismatch,
    /// Viewer-scoped data was requested without an authenticated viewer.
    MissingViewer,
    /// A serializer read a field the fetch plan never loaded.
    UndefinedField,
    NotFound,
    Internal,
    Unsupported,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SpecMismatch => "spec_mismatch",
            Self::MissingViewer => "missing_viewer",
            Self::UndefinedField => "undefined_field",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
            Self::Unsupported => "unsupported",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Spec,
    Registry,
    Plan,
    Load,
    Annotate,
    Serialize,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Spec => "spec",
            Self::Registry => "registry",
            Self::Plan => "plan",
            Self::Load => "load",
            Self::Annotate => "annotate",
            Self::Serialize => "serialize",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
