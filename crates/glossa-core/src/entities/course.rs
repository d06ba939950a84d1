use crate::{
    annotate::unique_ids,
    context::Context,
    criteria::Criterion,
    entities::{language, lesson, profile, term_progress},
    error::{ErrorOrigin, InternalError},
    load::BatchQuery,
    record::Record,
    spec::{
        EntitySpec, FieldSpecEntry, RelationArity, annotated, column, formula, relation,
    },
    value::Value,
};
use std::collections::BTreeMap;

pub const NAME: &str = "course";

static FIELDS: &[FieldSpecEntry] = &[
    column("id"),
    column("title"),
    column("description"),
    column("is_public"),
    column("created_at"),
    // evaluated by the store per row (correlated subqueries)
    formula("lesson_count"),
    formula("term_count"),
    relation("language", language::spec, RelationArity::ToOne),
    relation("added_by", profile::spec, RelationArity::ToOne),
    relation("lessons", lesson::spec, RelationArity::ToMany),
    annotated("mastery_tally", annotate_mastery_tally, true),
];

static SPEC: EntitySpec = EntitySpec {
    entity_name: NAME,
    fields: FIELDS,
};

#[must_use]
pub const fn spec() -> &'static EntitySpec {
    &SPEC
}

/// Per-viewer vocabulary tally: for each loaded course, how many of the
/// viewer's tracked terms sit at each mastery level. One grouped-count batch
/// over `term_progress`, keyed by course id.
pub(crate) fn annotate_mastery_tally(
    targets: &mut [&mut Record],
    ctx: &Context<'_>,
) -> Result<(), InternalError> {
    let learner = ctx.viewer().require_profile().map_err(|err| {
        InternalError::missing_viewer(ErrorOrigin::Annotate, format!("course.mastery_tally: {err}"))
    })?;

    if targets.is_empty() {
        return Ok(());
    }

    let query = BatchQuery::count_by(term_progress::NAME, "course", unique_ids(targets), "level")
        .criterion(Criterion::eq("learner", Value::Id(learner.profile)));
    let tally = ctx.loader().batch(&query)?;

    for record in targets.iter_mut() {
        let value = tally
            .get(&record.id())
            .cloned()
            .unwrap_or_else(|| Value::Map(BTreeMap::new()));
        record.set_attr("mastery_tally", value);
    }

    Ok(())
}
