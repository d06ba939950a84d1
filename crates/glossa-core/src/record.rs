use crate::{id::Id, value::Value};
use std::collections::BTreeMap;

///
/// Related
///
/// A populated relation slot on a loaded record. `One(None)` is a legitimate
/// null reference; a relation absent from the record's map was simply never
/// requested by the fetch plan.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Related {
    One(Option<Box<Record>>),
    Many(Vec<Record>),
}

///
/// Record
///
/// One loaded entity node: identity, projected attributes, and populated
/// relations. Attribute presence mirrors the fetch plan exactly, which is
/// what lets serializers detect drift (a read of an unplanned field).
///
/// Invariant: the `id` attribute is always present, mirroring [`Record::id`].
///

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    entity: &'static str,
    id: Id,
    attrs: BTreeMap<String, Value>,
    relations: BTreeMap<String, Related>,
}

impl Record {
    #[must_use]
    pub fn new(entity: &'static str, id: Id) -> Self {
        Self {
            entity,
            id,
            attrs: BTreeMap::from([("id".to_string(), Value::Id(id))]),
            relations: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    #[must_use]
    pub const fn id(&self) -> Id {
        self.id
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Write an attribute, loader-side (projection) or annotator-side
    /// (transient computed value).
    pub fn set_attr(&mut self, name: impl Into<String>, value: Value) {
        self.attrs.insert(name.into(), value);
    }

    #[must_use]
    pub fn relation(&self, name: &str) -> Option<&Related> {
        self.relations.get(name)
    }

    pub(crate) fn relation_mut(&mut self, name: &str) -> Option<&mut Related> {
        self.relations.get_mut(name)
    }

    pub fn set_relation(&mut self, name: impl Into<String>, related: Related) {
        self.relations.insert(name.into(), related);
    }

    /// The populated to-one target, if the relation was populated and non-null.
    #[must_use]
    pub fn related_one(&self, name: &str) -> Option<&Record> {
        match self.relations.get(name) {
            Some(Related::One(target)) => target.as_deref(),
            _ => None,
        }
    }

    /// The populated to-many children; empty when unpopulated.
    #[must_use]
    pub fn related_many(&self, name: &str) -> &[Record] {
        match self.relations.get(name) {
            Some(Related::Many(children)) => children,
            _ => &[],
        }
    }
}

///
/// TESTS
///
