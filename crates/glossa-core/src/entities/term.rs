use crate::{
    criteria::Criterion,
    entities::{language, meaning},
    spec::{EntitySpec, FieldSpecEntry, RelationArity, column, relation, scoped_relation},
    value::Value,
    viewer::{ContextError, Viewer},
};

pub const NAME: &str = "term";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    column("lemma"),
    column("romanization"),
    relation("language", language::spec, RelationArity::ToOne),
    // a term is shared vocabulary; its meanings are per learner
    scoped_relation(
        "meanings",
        meaning::spec,
        RelationArity::ToMany,
        learner_meanings,
    ),
];

static SPEC: EntitySpec = EntitySpec {
    entity_name: NAME,
    fields: FIELDS,
};

#[must_use]
pub const fn spec() -> &'static EntitySpec {
    &SPEC
}

/// Default context filter for `term.meanings`: only the viewer's own
/// meanings are ever considered.
fn learner_meanings(viewer: &Viewer) -> Result<Criterion, ContextError> {
    let learner = viewer.require_profile()?;

    Ok(Criterion::eq("learner", Value::Id(learner.profile)))
}
