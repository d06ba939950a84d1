use crate::{
    entities::{collection, profile},
    spec::{EntitySpec, FieldSpecEntry, RelationArity, column, relation},
};

pub const NAME: &str = "bookmark";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    column("created_at"),
    relation("collection", collection::spec, RelationArity::ToOne),
    relation("profile", profile::spec, RelationArity::ToOne),
];

static SPEC: EntitySpec = EntitySpec {
    entity_name: NAME,
    fields: FIELDS,
};

#[must_use]
pub const fn spec() -> &'static EntitySpec {
    &SPEC
}
