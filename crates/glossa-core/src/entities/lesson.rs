use crate::{
    entities::{course, text},
    spec::{EntitySpec, FieldSpecEntry, RelationArity, column, relation},
};

pub const NAME: &str = "lesson";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    column("title"),
    column("position"),
    column("created_at"),
    relation("course", course::spec, RelationArity::ToOne),
    relation("texts", text::spec, RelationArity::ToMany),
];

static SPEC: EntitySpec = EntitySpec {
    entity_name: NAME,
    fields: FIELDS,
};

#[must_use]
pub const fn spec() -> &'static EntitySpec {
    &SPEC
}
