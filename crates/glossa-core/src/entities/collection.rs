use crate::{
    annotate::unique_ids,
    context::Context,
    criteria::Criterion,
    entities::{bookmark, profile, text},
    error::{ErrorOrigin, InternalError},
    load::BatchQuery,
    record::Record,
    spec::{
        EntitySpec, FieldSpecEntry, RelationArity, annotated, column, formula, relation,
    },
    value::Value,
};

pub const NAME: &str = "collection";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    column("title"),
    column("description"),
    column("created_at"),
    formula("text_count"),
    relation("added_by", profile::spec, RelationArity::ToOne),
    relation("texts", text::spec, RelationArity::ToMany),
    annotated("is_bookmarked", annotate_is_bookmarked, true),
];

static SPEC: EntitySpec = EntitySpec {
    entity_name: NAME,
    fields: FIELDS,
};

#[must_use]
pub const fn spec() -> &'static EntitySpec {
    &SPEC
}

/// Whether the viewer bookmarked each loaded collection: one membership
/// batch over `bookmark` keyed by collection id. Unbookmarked collections
/// read `false`, never an absent attribute.
pub(crate) fn annotate_is_bookmarked(
    targets: &mut [&mut Record],
    ctx: &Context<'_>,
) -> Result<(), InternalError> {
    let viewer = ctx.viewer().require_profile().map_err(|err| {
        InternalError::missing_viewer(
            ErrorOrigin::Annotate,
            format!("collection.is_bookmarked: {err}"),
        )
    })?;

    if targets.is_empty() {
        return Ok(());
    }

    let query = BatchQuery::exists(bookmark::NAME, "collection", unique_ids(targets))
        .criterion(Criterion::eq("profile", Value::Id(viewer.profile)));
    let bookmarked = ctx.loader().batch(&query)?;

    for record in targets.iter_mut() {
        let hit = bookmarked
            .get(&record.id())
            .and_then(Value::as_bool)
            .unwrap_or(false);
        record.set_attr("is_bookmarked", Value::Bool(hit));
    }

    Ok(())
}
