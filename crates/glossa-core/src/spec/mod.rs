//! Fetch specifications: the static, per-entity declaration of every
//! exposable field and its kind. Specs are process-wide read-only state,
//! constructed in statics and safe to share across concurrent requests.

pub mod registry;

use crate::{
    context::Context,
    criteria::Criterion,
    error::InternalError,
    record::Record,
    viewer::{ContextError, Viewer},
};

///
/// SpecThunk
///
/// Deferred reference to a related entity's spec. Entity graphs are mutually
/// recursive (Language ↔ Course ↔ Lesson); holding a function pointer instead
/// of the spec itself lets construction terminate, and the plan builder only
/// resolves the thunk when a view actually recurses into the relation.
///

pub type SpecThunk = fn() -> &'static EntitySpec;

///
/// ScopeFn
///
/// Default context filter for a viewer-scoped relation: builds the criterion
/// that constrains which related rows are considered (e.g. "learner =
/// viewer.profile"). Fails with `MissingViewer` for anonymous viewers.
///

pub type ScopeFn = fn(&Viewer) -> Result<Criterion, ContextError>;

///
/// AnnotateFn
///
/// Batch post-load computation: exactly one query over the whole loaded set,
/// then a write of the computed value onto each record as a transient
/// attribute. Mutation in place, no return value.
///

pub type AnnotateFn = fn(&mut [&mut Record], &Context<'_>) -> Result<(), InternalError>;

///
/// RelationArity
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RelationArity {
    ToOne,
    ToMany,
}

///
/// RelationSpec
///

#[derive(Clone, Copy, Debug)]
pub struct RelationSpec {
    pub target: SpecThunk,
    pub arity: RelationArity,
    pub scope: Option<ScopeFn>,
}

///
/// AnnotatedSpec
///
/// `viewer_scoped` is declared up front so the plan builder can fail an
/// anonymous request before any query runs, not halfway through annotation.
///

#[derive(Clone, Copy, Debug)]
pub struct AnnotatedSpec {
    pub run: AnnotateFn,
    pub viewer_scoped: bool,
}

///
/// FieldSpec
///
/// Closed sum over the four field kinds. The plan builder matches
/// exhaustively; adding a kind is a compile-wide change by design.
///

#[derive(Clone, Copy, Debug)]
pub enum FieldSpec {
    /// Stored attribute.
    Column,
    /// Computed by the data store per row at query time; never writable.
    Formula,
    Relation(RelationSpec),
    Annotated(AnnotatedSpec),
}

///
/// FieldSpecEntry
///

#[derive(Clone, Copy, Debug)]
pub struct FieldSpecEntry {
    pub name: &'static str,
    pub spec: FieldSpec,
}

/// Declare a stored column.
#[must_use]
pub const fn column(name: &'static str) -> FieldSpecEntry {
    FieldSpecEntry {
        name,
        spec: FieldSpec::Column,
    }
}

/// Declare a store-computed formula field.
#[must_use]
pub const fn formula(name: &'static str) -> FieldSpecEntry {
    FieldSpecEntry {
        name,
        spec: FieldSpec::Formula,
    }
}

/// Declare a relation to another entity spec.
#[must_use]
pub const fn relation(
    name: &'static str,
    target: SpecThunk,
    arity: RelationArity,
) -> FieldSpecEntry {
    FieldSpecEntry {
        name,
        spec: FieldSpec::Relation(RelationSpec {
            target,
            arity,
            scope: None,
        }),
    }
}

/// Declare a viewer-scoped relation carrying a default context filter.
#[must_use]
pub const fn scoped_relation(
    name: &'static str,
    target: SpecThunk,
    arity: RelationArity,
    scope: ScopeFn,
) -> FieldSpecEntry {
    FieldSpecEntry {
        name,
        spec: FieldSpec::Relation(RelationSpec {
            target,
            arity,
            scope: Some(scope),
        }),
    }
}

/// Declare an annotated field computed by a batch step after load.
#[must_use]
pub const fn annotated(name: &'static str, run: AnnotateFn, viewer_scoped: bool) -> FieldSpecEntry {
    FieldSpecEntry {
        name,
        spec: FieldSpec::Annotated(AnnotatedSpec { run, viewer_scoped }),
    }
}

///
/// EntitySpec
///
/// Static per-entity declaration: stable external name plus the ordered
/// field list, the single source of truth for planning and validation.
///

#[derive(Clone, Copy, Debug)]
pub struct EntitySpec {
    pub entity_name: &'static str,
    pub fields: &'static [FieldSpecEntry],
}

impl EntitySpec {
    /// Look up a field entry by name.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&'static FieldSpecEntry> {
        self.fields.iter().find(|entry| entry.name == name)
    }

    /// Look up a field descriptor by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.entry(name).map(|entry| &entry.spec)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|entry| entry.name)
    }

    /// Names of plain column fields (no formulas, relations, annotations).
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|entry| matches!(entry.spec, FieldSpec::Column))
            .map(|entry| entry.name)
    }
}

///
/// TESTS
///
