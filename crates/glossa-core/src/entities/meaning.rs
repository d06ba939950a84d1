use crate::{
    entities::{profile, term},
    spec::{EntitySpec, FieldSpecEntry, RelationArity, column, relation},
};

pub const NAME: &str = "meaning";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    column("gloss"),
    column("note"),
    column("created_at"),
    relation("term", term::spec, RelationArity::ToOne),
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
