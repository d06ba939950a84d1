use crate::{
    entities::course,
    spec::{EntitySpec, FieldSpecEntry, RelationArity, column, relation},
};

pub const NAME: &str = "language";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    column("code"),
    column("name"),
    column("right_to_left"),
    relation("courses", course::spec, RelationArity::ToMany),
];

static SPEC: EntitySpec = EntitySpec {
    entity_name: NAME,
    fields: FIELDS,
};

#[must_use]
pub const fn spec() -> &'static EntitySpec {
    &SPEC
}
