use crate::{
    entities,
    error::{ErrorClass, ErrorOrigin, InternalError},
    spec::{EntitySpec, FieldSpec, SpecThunk},
};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// RegistryError
///

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("entity spec '{0}' not found")]
    SpecNotFound(String),

    #[error("duplicate entity spec '{0}'")]
    DuplicateSpec(&'static str),

    #[error("duplicate field '{entity}.{field}'")]
    DuplicateField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("relation '{entity}.{field}' targets unregistered spec '{target}'")]
    UnregisteredTarget {
        entity: &'static str,
        field: &'static str,
        target: &'static str,
    },
}

impl RegistryError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::SpecNotFound(_) => ErrorClass::SpecMismatch,
            Self::DuplicateSpec(_) | Self::DuplicateField { .. } | Self::UnregisteredTarget { .. } => {
                ErrorClass::InvariantViolation
            }
        }
    }
}

impl From<RegistryError> for InternalError {
    fn from(err: RegistryError) -> Self {
        Self::new(err.class(), ErrorOrigin::Registry, err.to_string())
    }
}

// Every shipped entity spec, thunked. Initialization order is irrelevant;
// thunks resolve on first use.
static SPECS: &[SpecThunk] = &[
    entities::bookmark::spec,
    entities::collection::spec,
    entities::course::spec,
    entities::language::spec,
    entities::lesson::spec,
    entities::meaning::spec,
    entities::profile::spec,
    entities::term::spec,
    entities::term_progress::spec,
    entities::text::spec,
    entities::user::spec,
];

/// Iterate every registered entity spec.
pub fn specs() -> impl Iterator<Item = &'static EntitySpec> {
    SPECS.iter().map(|thunk| thunk())
}

/// Resolve an entity spec by its stable external name.
pub fn spec_of(entity_name: &str) -> Result<&'static EntitySpec, RegistryError> {
    specs()
        .find(|spec| spec.entity_name == entity_name)
        .ok_or_else(|| RegistryError::SpecNotFound(entity_name.to_string()))
}

/// Validate the whole registry: unique entity and field names, and every
/// relation thunk resolving to a registered spec.
///
/// Cheap and total; run it from tests (and optionally at process startup) so
/// a malformed spec never survives to serve a request.
pub fn validate() -> Result<(), RegistryError> {
    let mut names = BTreeSet::new();
    for spec in specs() {
        if !names.insert(spec.entity_name) {
            return Err(RegistryError::DuplicateSpec(spec.entity_name));
        }

        let mut fields = BTreeSet::new();
        for entry in spec.fields {
            if !fields.insert(entry.name) {
                return Err(RegistryError::DuplicateField {
                    entity: spec.entity_name,
                    field: entry.name,
                });
            }
        }
    }

    for spec in specs() {
        for entry in spec.fields {
            if let FieldSpec::Relation(rel) = &entry.spec {
                let target = (rel.target)();
                if !names.contains(target.entity_name) {
                    return Err(RegistryError::UnregisteredTarget {
                        entity: spec.entity_name,
                        field: entry.name,
                        target: target.entity_name,
                    });
                }
            }
        }
    }

    Ok(())
}

///
/// TESTS
///
