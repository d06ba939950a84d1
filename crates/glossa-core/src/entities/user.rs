use crate::spec::{EntitySpec, FieldSpecEntry, column};

pub const NAME: &str = "user";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    column("username"),
    column("email"),
    column("joined_at"),
];

static SPEC: EntitySpec = EntitySpec {
    entity_name: NAME,
    fields: FIELDS,
};

#[must_use]
pub const fn spec() -> &'static EntitySpec {
    &SPEC
}
