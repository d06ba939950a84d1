use crate::{
    annotate::run_annotations,
    context::Context,
    criteria::Criteria,
    error::InternalError,
    plan::build_fetch_plan,
    record::Record,
    spec::EntitySpec,
    view::View,
};

/// Resolve one read request end to end: plan, load, annotate.
///
/// The stages are strictly sequential — annotations need the loaded record
/// identities to scope their batch queries, so nothing overlaps the primary
/// load. Serialization is the caller's step (serializers pick their own
/// output shape over the returned records).
pub fn fetch_view(
    spec: &'static EntitySpec,
    view: &View,
    criteria: &Criteria,
    ctx: &Context<'_>,
) -> Result<Vec<Record>, InternalError> {
    let plan = build_fetch_plan(view, spec, ctx)?;

    let mut records = ctx.loader().load(spec.entity_name, criteria, &plan)?;
    tracing::debug!(
        entity = spec.entity_name,
        rows = records.len(),
        "primary load complete"
    );

    run_annotations(&mut records, &plan, ctx)?;

    Ok(records)
}

/// [`fetch_view`] for a single row; `None` when no row matches.
pub fn fetch_one(
    spec: &'static EntitySpec,
    view: &View,
    criteria: &Criteria,
    ctx: &Context<'_>,
) -> Result<Option<Record>, InternalError> {
    let mut records = fetch_view(spec, view, criteria, ctx)?;

    Ok(if records.is_empty() {
        None
    } else {
        Some(records.swap_remove(0))
    })
}

///
/// TESTS
///
