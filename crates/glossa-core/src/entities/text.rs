use crate::{
    entities::lesson,
    spec::{EntitySpec, FieldSpecEntry, RelationArity, column, formula, relation},
};

pub const NAME: &str = "text";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    column("title"),
    column("slug"),
    column("body"),
    column("audio_url"),
    column("position"),
    column("published"),
    column("archived"),
    column("created_at"),
    column("updated_at"),
    formula("word_count"),
    relation("lesson", lesson::spec, RelationArity::ToOne),
];

static SPEC: EntitySpec = EntitySpec {
    entity_name: NAME,
    fields: FIELDS,
};

#[must_use]
pub const fn spec() -> &'static EntitySpec {
    &SPEC
}
