use crate::{
    entities::{language, user},
    spec::{EntitySpec, FieldSpecEntry, RelationArity, column, relation},
};

pub const NAME: &str = "profile";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    column("display_name"),
    column("bio"),
    relation("user", user::spec, RelationArity::ToOne),
    relation("language", language::spec, RelationArity::ToOne),
];

static SPEC: EntitySpec = EntitySpec {
    entity_name: NAME,
    fields: FIELDS,
};

#[must_use]
pub const fn spec() -> &'static EntitySpec {
    &SPEC
}
