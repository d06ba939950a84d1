use crate::{
    context::Context,
    error::InternalError,
    id::Id,
    plan::{FetchPlan, FieldPath},
    record::{Record, Related},
};
use std::collections::BTreeSet;

/// Run every planned annotation against the loaded record graph, in declared
/// order, mutating records in place.
///
/// Root-level annotations receive the whole result set; an annotation bound
/// to a nested relation path receives the flattened set of related records
/// reachable at that path across all roots. Duplicate entities at a path are
/// distinct nodes in the graph and each receives the write; annotations
/// deduplicate ids themselves (see [`unique_ids`]) so the batch query still
/// runs once.
///
/// Everything here completes before serialization begins — serializers read
/// attributes that do not exist until this step has run.
pub fn run_annotations(
    roots: &mut [Record],
    plan: &FetchPlan,
    ctx: &Context<'_>,
) -> Result<(), InternalError> {
    for planned in &plan.annotations {
        let mut targets = collect_at_path_mut(roots, &planned.path);

        tracing::trace!(
            path = %planned.path,
            field = planned.field,
            targets = targets.len(),
            "running annotation"
        );

        (planned.run)(&mut targets, ctx)?;

        // the contract is total: every target carries the attribute afterward
        for target in &targets {
            if !target.has_attr(planned.field) {
                return Err(InternalError::annotate_invariant(format!(
                    "annotation left '{}.{}' unset on {}",
                    target.entity(),
                    planned.field,
                    target.id()
                )));
            }
        }
    }

    Ok(())
}

/// Ids of the target records, deduplicated, first-seen order preserved.
///
/// Annotation helpers use this to key their single batch query.
#[must_use]
pub fn unique_ids(targets: &[&mut Record]) -> Vec<Id> {
    let mut seen = BTreeSet::new();
    let mut ids = Vec::new();

    for record in targets {
        if seen.insert(record.id()) {
            ids.push(record.id());
        }
    }

    ids
}

// Collect mutable references to every record reachable at `path` across all
// roots. The root path yields the roots themselves; unpopulated relations
// contribute nothing.
fn collect_at_path_mut<'a>(roots: &'a mut [Record], path: &FieldPath) -> Vec<&'a mut Record> {
    let mut current: Vec<&mut Record> = roots.iter_mut().collect();

    for segment in path.segments() {
        let mut next = Vec::new();
        for record in current {
            match record.relation_mut(segment) {
                Some(Related::One(Some(child))) => next.push(&mut **child),
                Some(Related::Many(children)) => next.extend(children.iter_mut()),
                Some(Related::One(None)) | None => {}
            }
        }
        current = next;
    }

    current
}

///
/// TESTS
///
