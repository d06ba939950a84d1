use crate::{
    context::Context,
    criteria::Criterion,
    error::{ErrorClass, ErrorOrigin, InternalError},
    spec::{AnnotateFn, EntitySpec, FieldSpec},
    view::View,
    viewer::Viewer,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// PlanError
///
/// A view referenced something its entity spec does not declare. Programming
/// error, not a data error: serializers and specs drifted apart, and the only
/// safe response is to fail the request loudly (silent under-fetching is the
/// bug this taxonomy exists to prevent).
///

#[derive(Debug, ThisError)]
pub enum PlanError {
    #[error("view references unknown field '{entity}.{field}'")]
    UnknownField {
        entity: &'static str,
        field: String,
    },

    #[error("view nests into '{entity}.{field}', which is not a relation")]
    NotARelation {
        entity: &'static str,
        field: String,
    },

    #[error("view lists relation '{entity}.{field}' as a leaf field")]
    RelationAsLeaf {
        entity: &'static str,
        field: String,
    },
}

impl PlanError {
    pub(crate) const fn class() -> ErrorClass {
        ErrorClass::SpecMismatch
    }
}

impl From<PlanError> for InternalError {
    fn from(err: PlanError) -> Self {
        Self::new(PlanError::class(), ErrorOrigin::Plan, err.to_string())
    }
}

///
/// FieldPath
///
/// Dot-separated path into the nested relation graph, e.g.
/// `added_by.user.username`. The empty path is the root.
///

#[derive(
    Clone, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct FieldPath(String);

impl FieldPath {
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Extend this path by one segment.
    #[must_use]
    pub fn join(&self, segment: &str) -> Self {
        if self.0.is_empty() {
            Self(segment.to_string())
        } else {
            Self(format!("{}.{segment}", self.0))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|segment| !segment.is_empty())
    }

    /// The trailing segment under `prefix`, if this path is exactly one
    /// level below it. Loaders use this to project fields level by level.
    #[must_use]
    pub fn leaf_under(&self, prefix: &Self) -> Option<&str> {
        let rest = if prefix.is_root() {
            self.0.as_str()
        } else {
            self.0
                .strip_prefix(prefix.as_str())?
                .strip_prefix('.')?
        };

        (!rest.is_empty() && !rest.contains('.')).then_some(rest)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

///
/// ScopedCriterion
///
/// A relation's default context filter, resolved against the current viewer
/// and bound to the relation path it constrains.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ScopedCriterion {
    pub path: FieldPath,
    pub criterion: Criterion,
}

///
/// PlannedAnnotation
///
/// An annotation callback bound to the relation path whose loaded records it
/// runs against. Equality is by path and field, not callback address —
/// two plans built from the same view are structurally equal.
///

#[derive(Clone, Debug)]
pub struct PlannedAnnotation {
    pub path: FieldPath,
    pub field: &'static str,
    pub run: AnnotateFn,
}

impl PartialEq for PlannedAnnotation {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.field == other.field
    }
}

impl Eq for PlannedAnnotation {}

///
/// FetchPlan
///
/// The flattened result of resolving one view against one entity spec: which
/// column/formula paths to select, which relation paths to eager-populate,
/// the viewer-scoping criteria per relation path, and the annotation
/// callbacks to run after load. Built fresh per request — the walk is cheap
/// and the viewer varies — and never cached.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchPlan {
    pub fields: Vec<FieldPath>,
    pub populate: Vec<FieldPath>,
    pub scopes: Vec<ScopedCriterion>,
    pub annotations: Vec<PlannedAnnotation>,
}

impl FetchPlan {
    /// Field names to project at `path` (one level, no relation traversal).
    ///
    /// `path` carries its own lifetime so callers can pass a temporary and
    /// still keep the collected field names around.
    pub fn fields_at<'a, 'b>(
        &'a self,
        path: &'b FieldPath,
    ) -> impl Iterator<Item = &'a str> + use<'a, 'b> {
        self.fields
            .iter()
            .filter_map(move |field| field.leaf_under(path))
    }

    /// Scoping criteria bound to exactly `path`.
    pub fn scopes_at<'a, 'b>(
        &'a self,
        path: &'b FieldPath,
    ) -> impl Iterator<Item = &'a Criterion> + use<'a, 'b> {
        self.scopes
            .iter()
            .filter(move |scope| &scope.path == path)
            .map(|scope| &scope.criterion)
    }

    #[must_use]
    pub fn populates(&self, path: &FieldPath) -> bool {
        self.populate.contains(path)
    }
}

/// Resolve a view against an entity spec into a [`FetchPlan`].
///
/// Recursion depth equals the view's nesting depth; no cycle guard is needed
/// because views are finite and acyclic even though specs are mutually
/// recursive. Fails with a spec-mismatch on any unknown name and with
/// missing-viewer when a viewer-scoped relation or annotation is requested
/// anonymously — before any query executes.
pub fn build_fetch_plan(
    view: &View,
    spec: &'static EntitySpec,
    ctx: &Context<'_>,
) -> Result<FetchPlan, InternalError> {
    let mut plan = FetchPlan::default();
    build_into(view, spec, &FieldPath::root(), ctx.viewer(), &mut plan)?;

    tracing::debug!(
        entity = spec.entity_name,
        fields = plan.fields.len(),
        populate = plan.populate.len(),
        annotations = plan.annotations.len(),
        "fetch plan built"
    );

    Ok(plan)
}

fn build_into(
    view: &View,
    spec: &'static EntitySpec,
    prefix: &FieldPath,
    viewer: &Viewer,
    plan: &mut FetchPlan,
) -> Result<(), InternalError> {
    for name in view.fields() {
        let entry = spec.entry(name).ok_or_else(|| PlanError::UnknownField {
            entity: spec.entity_name,
            field: name.clone(),
        })?;

        match &entry.spec {
            FieldSpec::Column | FieldSpec::Formula => {
                plan.fields.push(prefix.join(name));
            }
            FieldSpec::Annotated(annotated) => {
                if annotated.viewer_scoped {
                    viewer.require_profile().map_err(|err| {
                        InternalError::missing_viewer(
                            ErrorOrigin::Plan,
                            format!("{}.{}: {err}", spec.entity_name, entry.name),
                        )
                    })?;
                }
                plan.annotations.push(PlannedAnnotation {
                    path: prefix.clone(),
                    field: entry.name,
                    run: annotated.run,
                });
            }
            FieldSpec::Relation(_) => {
                return Err(PlanError::RelationAsLeaf {
                    entity: spec.entity_name,
                    field: name.clone(),
                }
                .into());
            }
        }
    }

    for (name, nested) in view.relations() {
        let entry = spec.entry(name).ok_or_else(|| PlanError::UnknownField {
            entity: spec.entity_name,
            field: name.clone(),
        })?;

        let FieldSpec::Relation(rel) = &entry.spec else {
            return Err(PlanError::NotARelation {
                entity: spec.entity_name,
                field: name.clone(),
            }
            .into());
        };

        let path = prefix.join(name);
        plan.populate.push(path.clone());

        if let Some(scope) = rel.scope {
            let criterion = scope(viewer).map_err(|err| {
                InternalError::missing_viewer(
                    ErrorOrigin::Plan,
                    format!("{}.{}: {err}", spec.entity_name, entry.name),
                )
            })?;
            plan.scopes.push(ScopedCriterion {
                path: path.clone(),
                criterion,
            });
        }

        build_into(nested, (rel.target)(), &path, viewer, plan)?;
    }

    Ok(())
}

///
/// TESTS
///
