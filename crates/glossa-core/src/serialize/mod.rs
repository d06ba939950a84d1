//! The serializer family: hand-authored output shapes over loaded records.
//!
//! Each serializer carries a companion [`View`] describing what its
//! `serialize` body reads; the field lists are deliberately duplicated
//! between spec, view, and serializer, and the strict mode below is the
//! runtime discipline that catches drift: reading an
//! attribute the fetch plan never loaded fails hard instead of silently
//! emitting partial data. Strictness defaults on outside release builds so
//! every test and dev request enforces it, while production degrades to
//! `null` on a non-fatal symptom.

pub mod collection;
pub mod course;
pub mod language;
pub mod lesson;
pub mod term;

use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    record::{Record, Related},
    view::View,
};
use serde_json::Value as JsonValue;
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    /// The serializer and its fetch plan drifted out of sync.
    #[error("serializer read undefined field '{entity}.{field}'")]
    UndefinedField {
        entity: &'static str,
        field: String,
    },

    #[error("serializer read relation '{entity}.{field}' with the wrong arity")]
    ArityMismatch {
        entity: &'static str,
        field: String,
    },
}

impl SerializeError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::UndefinedField { .. } => ErrorClass::UndefinedField,
            Self::ArityMismatch { .. } => ErrorClass::InvariantViolation,
        }
    }
}

impl From<SerializeError> for InternalError {
    fn from(err: SerializeError) -> Self {
        Self::new(err.class(), ErrorOrigin::Serialize, err.to_string())
    }
}

///
/// SerializeOpts
///

#[derive(Clone, Copy, Debug)]
pub struct SerializeOpts {
    /// Fail on reads of unloaded fields instead of emitting `null`.
    pub strict: bool,
}

impl SerializeOpts {
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    #[must_use]
    pub const fn lenient() -> Self {
        Self { strict: false }
    }
}

impl Default for SerializeOpts {
    fn default() -> Self {
        Self {
            strict: cfg!(debug_assertions),
        }
    }
}

///
/// EntitySerializer
///
/// One output shape for one entity. Multiple serializers per entity are the
/// norm — summary vs detail vs owner vs public differ in fields and relation
/// depth, so each carries its own companion view.
///

pub trait EntitySerializer {
    /// The view that must have been fetched for `serialize` to succeed.
    fn view() -> &'static View;

    fn serialize(record: &Record, opts: &SerializeOpts) -> Result<JsonValue, InternalError>;

    fn serialize_list(
        records: &[Record],
        opts: &SerializeOpts,
    ) -> Result<JsonValue, InternalError> {
        let items = records
            .iter()
            .map(|record| Self::serialize(record, opts))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(JsonValue::Array(items))
    }
}

/// Read an attribute for output; absent means the plan never loaded it.
pub(crate) fn require(
    record: &Record,
    field: &str,
    opts: &SerializeOpts,
) -> Result<JsonValue, InternalError> {
    match record.attr(field) {
        Some(value) => Ok(value.to_json()),
        None if opts.strict => Err(SerializeError::UndefinedField {
            entity: record.entity(),
            field: field.to_string(),
        }
        .into()),
        None => Ok(JsonValue::Null),
    }
}

/// Read a populated to-one relation; `Ok(None)` is a legitimate null
/// reference, an unpopulated slot is drift.
pub(crate) fn require_one<'a>(
    record: &'a Record,
    field: &str,
    opts: &SerializeOpts,
) -> Result<Option<&'a Record>, InternalError> {
    match record.relation(field) {
        Some(Related::One(target)) => Ok(target.as_deref()),
        Some(Related::Many(_)) => Err(SerializeError::ArityMismatch {
            entity: record.entity(),
            field: field.to_string(),
        }
        .into()),
        None if opts.strict => Err(SerializeError::UndefinedField {
            entity: record.entity(),
            field: field.to_string(),
        }
        .into()),
        None => Ok(None),
    }
}

/// Read a populated to-many relation.
pub(crate) fn require_many<'a>(
    record: &'a Record,
    field: &str,
    opts: &SerializeOpts,
) -> Result<&'a [Record], InternalError> {
    match record.relation(field) {
        Some(Related::Many(children)) => Ok(children),
        Some(Related::One(_)) => Err(SerializeError::ArityMismatch {
            entity: record.entity(),
            field: field.to_string(),
        }
        .into()),
        None if opts.strict => Err(SerializeError::UndefinedField {
            entity: record.entity(),
            field: field.to_string(),
        }
        .into()),
        None => Ok(&[]),
    }
}

///
/// TESTS
///
