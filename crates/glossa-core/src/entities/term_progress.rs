use crate::{
    entities::{course, profile, term},
    spec::{EntitySpec, FieldSpecEntry, RelationArity, column, relation},
};

pub const NAME: &str = "term_progress";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    // mastery level 1..=5
    column("level"),
    column("updated_at"),
    relation("term", term::spec, RelationArity::ToOne),
    // denormalized so tallies stay one grouped count per page
    relation("course", course::spec, RelationArity::ToOne),
    relation("learner", profile::spec, RelationArity::ToOne),
];

static SPEC: EntitySpec = EntitySpec {
    entity_name: NAME,
    fields: FIELDS,
};

#[must_use]
pub const fn spec() -> &'static EntitySpec {
    &SPEC
}
