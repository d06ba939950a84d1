use crate::{
    criteria::{Criteria, Criterion},
    error::InternalError,
    id::Id,
    plan::FetchPlan,
    record::Record,
    value::Value,
};
use std::collections::BTreeMap;

///
/// BatchAggregate
///
/// What a batch query computes per key: membership, a row count, or counts
/// grouped by a second field (e.g. vocabulary counts by mastery level).
///

#[derive(Clone, Debug, PartialEq)]
pub enum BatchAggregate {
    Exists,
    Count,
    CountBy { field: String },
}

///
/// BatchQuery
///
/// One query over a set of entity ids, returning id → computed value. This
/// is the contract annotations use to stay at exactly one query per page of
/// results instead of one per row.
///

#[derive(Clone, Debug, PartialEq)]
pub struct BatchQuery {
    /// Entity whose rows are aggregated (e.g. `bookmark`, `term_progress`).
    pub entity: &'static str,
    /// Attribute on those rows holding the key id (e.g. `collection`).
    pub key_field: &'static str,
    /// Key ids the caller loaded; implementations must not return other keys.
    pub keys: Vec<Id>,
    /// Extra row constraints (typically the viewer-scoping criterion).
    pub criteria: Criteria,
    pub aggregate: BatchAggregate,
}

impl BatchQuery {
    /// Membership check: which keys have at least one matching row.
    #[must_use]
    pub fn exists(entity: &'static str, key_field: &'static str, keys: Vec<Id>) -> Self {
        Self {
            entity,
            key_field,
            keys,
            criteria: Criteria::new(),
            aggregate: BatchAggregate::Exists,
        }
    }

    /// Matching-row count per key.
    #[must_use]
    pub fn count(entity: &'static str, key_field: &'static str, keys: Vec<Id>) -> Self {
        Self {
            entity,
            key_field,
            keys,
            criteria: Criteria::new(),
            aggregate: BatchAggregate::Count,
        }
    }

    /// Matching-row counts per key, grouped by `group_field`.
    #[must_use]
    pub fn count_by(
        entity: &'static str,
        key_field: &'static str,
        keys: Vec<Id>,
        group_field: impl Into<String>,
    ) -> Self {
        Self {
            entity,
            key_field,
            keys,
            criteria: Criteria::new(),
            aggregate: BatchAggregate::CountBy {
                field: group_field.into(),
            },
        }
    }

    /// Add a row constraint.
    #[must_use]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }
}

///
/// Loader
///
/// The persistence collaborator boundary. Implementations execute the
/// primary query for a fetch plan and the batch queries annotations issue.
///
/// Contract:
/// - `load` honors the plan's `fields` (projection), `populate` (eager
///   relation paths), and `scopes` (per-path criteria on related rows).
///   Projections are read-only; they must never null out unprojected stored
///   attributes on a later write.
/// - `batch` runs one query and returns a mapping keyed only by ids in
///   `query.keys`; absent keys mean "no matching rows".
///

pub trait Loader {
    fn load(
        &self,
        entity: &'static str,
        criteria: &Criteria,
        plan: &FetchPlan,
    ) -> Result<Vec<Record>, InternalError>;

    fn batch(&self, query: &BatchQuery) -> Result<BTreeMap<Id, Value>, InternalError>;
}

///
/// TESTS
///
