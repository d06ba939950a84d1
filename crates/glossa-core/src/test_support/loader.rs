use crate::{
    criteria::Criteria,
    error::InternalError,
    id::Id,
    load::{BatchAggregate, BatchQuery, Loader},
    plan::{FetchPlan, FieldPath},
    record::{Record, Related},
    value::Value,
};
use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};

/// One stored row: attributes by name, including `id` and any foreign keys.
/// Formula values are precomputed here — the real store evaluates them per
/// row at query time, the test loader just reads them like columns.
pub(crate) type Row = BTreeMap<String, Value>;

///
/// WiringKind
///
/// How a relation field maps onto stored keys. `Local` relations keep the
/// target id in an attribute named after the relation (to-one); `Foreign`
/// relations are discovered on target rows via a back-pointing key (to-many).
///

#[derive(Clone, Copy, Debug)]
enum WiringKind {
    Local,
    Foreign(&'static str),
}

#[derive(Clone, Copy, Debug)]
struct RelationWiring {
    entity: &'static str,
    field: &'static str,
    target: &'static str,
    kind: WiringKind,
}

///
/// MemLoader
///
/// In-memory [`Loader`] for tests: plain row tables plus relation wiring.
/// Honors the fetch plan's projection, populate paths, and per-path scoping
/// criteria, and counts queries so tests can assert fail-fast behavior
/// ("raises before any query executes").
///

#[derive(Default)]
pub(crate) struct MemLoader {
    tables: BTreeMap<&'static str, Vec<Row>>,
    wiring: Vec<RelationWiring>,
    queries: Cell<u32>,
}

impl MemLoader {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, entity: &'static str, row: Row) {
        self.tables.entry(entity).or_default().push(row);
    }

    /// Wire a to-one relation whose fk lives on the source row under the
    /// relation's own name.
    pub(crate) fn wire_local(
        &mut self,
        entity: &'static str,
        field: &'static str,
        target: &'static str,
    ) {
        self.wiring.push(RelationWiring {
            entity,
            field,
            target,
            kind: WiringKind::Local,
        });
    }

    /// Wire a to-many relation discovered via `fk` on target rows.
    pub(crate) fn wire_foreign(
        &mut self,
        entity: &'static str,
        field: &'static str,
        target: &'static str,
        fk: &'static str,
    ) {
        self.wiring.push(RelationWiring {
            entity,
            field,
            target,
            kind: WiringKind::Foreign(fk),
        });
    }

    /// Queries issued so far (primary loads and batches alike).
    pub(crate) fn query_count(&self) -> u32 {
        self.queries.get()
    }

    fn rows(&self, entity: &str) -> &[Row] {
        self.tables.get(entity).map_or(&[], Vec::as_slice)
    }

    fn wirings_for(&self, entity: &str) -> impl Iterator<Item = &RelationWiring> {
        self.wiring.iter().filter(move |w| w.entity == entity)
    }

    fn row_by_id(&self, entity: &str, id: Id) -> Option<&Row> {
        self.rows(entity)
            .iter()
            .find(|row| row.get("id") == Some(&Value::Id(id)))
    }

    fn build_record(
        &self,
        entity: &'static str,
        row: &Row,
        plan: &FetchPlan,
        path: &FieldPath,
    ) -> Result<Record, InternalError> {
        let id = row
            .get("id")
            .and_then(Value::as_id)
            .ok_or_else(|| InternalError::load_internal(format!("{entity} row without an id")))?;
        let mut record = Record::new(entity, id);

        // project exactly the planned fields; a column absent from the row
        // loads as null, same as a NULL column in the store
        for field in plan.fields_at(path) {
            if field != "id" {
                record.set_attr(field, row.get(field).cloned().unwrap_or(Value::Null));
            }
        }

        for wiring in self.wirings_for(entity) {
            let child_path = path.join(wiring.field);
            if !plan.populates(&child_path) {
                continue;
            }

            let related = match wiring.kind {
                WiringKind::Local => {
                    let target_row = row
                        .get(wiring.field)
                        .and_then(Value::as_id)
                        .and_then(|fk| self.row_by_id(wiring.target, fk))
                        .filter(|target| {
                            plan.scopes_at(&child_path)
                                .all(|scope| scope.matches(target.get(scope.field())))
                        });

                    Related::One(match target_row {
                        Some(target) => Some(Box::new(self.build_record(
                            wiring.target,
                            target,
                            plan,
                            &child_path,
                        )?)),
                        None => None,
                    })
                }
                WiringKind::Foreign(fk) => {
                    let children = self
                        .rows(wiring.target)
                        .iter()
                        .filter(|child| child.get(fk) == Some(&Value::Id(id)))
                        .filter(|child| {
                            plan.scopes_at(&child_path)
                                .all(|scope| scope.matches(child.get(scope.field())))
                        })
                        .map(|child| self.build_record(wiring.target, child, plan, &child_path))
                        .collect::<Result<Vec<_>, _>>()?;

                    Related::Many(children)
                }
            };

            record.set_relation(wiring.field, related);
        }

        Ok(record)
    }
}

impl Loader for MemLoader {
    fn load(
        &self,
        entity: &'static str,
        criteria: &Criteria,
        plan: &FetchPlan,
    ) -> Result<Vec<Record>, InternalError> {
        self.queries.set(self.queries.get() + 1);

        self.rows(entity)
            .iter()
            .filter(|row| criteria.matches_with(|field| row.get(field)))
            .map(|row| self.build_record(entity, row, plan, &FieldPath::root()))
            .collect()
    }

    fn batch(&self, query: &BatchQuery) -> Result<BTreeMap<Id, Value>, InternalError> {
        self.queries.set(self.queries.get() + 1);

        let keys: BTreeSet<Id> = query.keys.iter().copied().collect();
        let matching = self
            .rows(query.entity)
            .iter()
            .filter(|row| query.criteria.matches_with(|field| row.get(field)))
            .filter_map(|row| {
                row.get(query.key_field)
                    .and_then(Value::as_id)
                    .filter(|key| keys.contains(key))
                    .map(|key| (key, row))
            });

        let mut out = BTreeMap::new();
        match &query.aggregate {
            BatchAggregate::Exists => {
                for (key, _) in matching {
                    out.insert(key, Value::Bool(true));
                }
            }
            BatchAggregate::Count => {
                let mut counts: BTreeMap<Id, u64> = BTreeMap::new();
                for (key, _) in matching {
                    *counts.entry(key).or_default() += 1;
                }
                out.extend(counts.into_iter().map(|(key, n)| (key, Value::Uint(n))));
            }
            BatchAggregate::CountBy { field } => {
                let mut groups: BTreeMap<Id, BTreeMap<String, u64>> = BTreeMap::new();
                for (key, row) in matching {
                    let label = row.get(field).map_or_else(String::new, Value::group_key);
                    *groups.entry(key).or_default().entry(label).or_default() += 1;
                }
                out.extend(groups.into_iter().map(|(key, counts)| {
                    let map = counts
                        .into_iter()
                        .map(|(label, n)| (label, Value::Uint(n)))
                        .collect();
                    (key, Value::Map(map))
                }));
            }
        }

        Ok(out)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{criteria::Criterion, test_support::fixtures};

    #[test]
    fn load_projects_only_planned_fields() {
        let fx = fixtures::language_platform();
        let plan = FetchPlan {
            fields: vec![FieldPath::from("id"), FieldPath::from("title")],
            ..FetchPlan::default()
        };

        let records = fx
            .loader
            .load("course", &Criteria::all(), &plan)
            .unwrap();

        assert!(!records.is_empty());
        for record in &records {
            assert!(record.has_attr("title"));
            assert!(!record.has_attr("description"));
            assert!(!record.has_attr("is_public"));
        }
    }

    #[test]
    fn load_skips_unplanned_relations() {
        let fx = fixtures::language_platform();
        let plan = FetchPlan {
            fields: vec![FieldPath::from("id")],
            ..FetchPlan::default()
        };

        let records = fx
            .loader
            .load("course", &Criteria::all(), &plan)
            .unwrap();

        assert!(records.iter().all(|rec| rec.relation("language").is_none()));
    }

    #[test]
    fn populate_follows_local_and_foreign_wiring() {
        let fx = fixtures::language_platform();
        let plan = FetchPlan {
            fields: vec![
                FieldPath::from("id"),
                FieldPath::from("language.code"),
                FieldPath::from("lessons.title"),
            ],
            populate: vec![FieldPath::from("language"), FieldPath::from("lessons")],
            ..FetchPlan::default()
        };
        let criteria = Criteria::from(Criterion::eq("id", Value::Id(fx.course_prinz)));

        let records = fx.loader.load("course", &criteria, &plan).unwrap();

        let course = &records[0];
        assert_eq!(
            course.related_one("language").unwrap().attr("code"),
            Some(&Value::from("de"))
        );
        assert_eq!(course.related_many("lessons").len(), 3);
    }

    #[test]
    fn batch_count_by_groups_only_requested_keys() {
        let fx = fixtures::language_platform();
        let query = BatchQuery::count_by(
            "term_progress",
            "course",
            vec![fx.course_prinz],
            "level",
        )
        .criterion(Criterion::eq("learner", Value::Id(fx.profile_annika)));

        let out = fx.loader.batch(&query).unwrap();

        let Some(Value::Map(tally)) = out.get(&fx.course_prinz) else {
            panic!("expected a grouped tally");
        };
        assert_eq!(tally.get("1"), Some(&Value::Uint(2)));
        assert_eq!(tally.get("2"), Some(&Value::Uint(1)));
        assert_eq!(tally.get("5"), Some(&Value::Uint(1)));
        // the other learner's rows must not leak into the tally
        assert_eq!(tally.get("3"), None);
    }

    #[test]
    fn batch_exists_reports_membership_only() {
        let fx = fixtures::language_platform();
        let query = BatchQuery::exists(
            "bookmark",
            "collection",
            vec![fx.collection_fables, fx.collection_news],
        )
        .criterion(Criterion::eq("profile", Value::Id(fx.profile_annika)));

        let out = fx.loader.batch(&query).unwrap();

        assert_eq!(out.get(&fx.collection_fables), Some(&Value::Bool(true)));
        assert_eq!(out.get(&fx.collection_news), None);
    }
}
