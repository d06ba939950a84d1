use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// View
///
/// A caller- or serializer-supplied description of exactly which fields and
/// nested relations one request wants: leaf field names at this level plus a
/// nested view per relation. Finite and acyclic by construction, which is
/// what bounds the plan builder's recursion even though the underlying specs
/// are mutually recursive.
///
/// Built once (often as a `LazyLock` static next to its serializer, or per
/// request from a selection set), consumed by the plan builder, never
/// mutated. Order is irrelevant; names must be a subset of the entity spec's
/// keys at each level — the plan builder enforces that loudly.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct View {
    fields: Vec<String>,
    relations: BTreeMap<String, View>,
}

impl View {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            relations: BTreeMap::new(),
        }
    }

    /// Request one leaf field (column, formula, or annotated) at this level.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Request several leaf fields at this level.
    #[must_use]
    pub fn with_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Request a relation with its nested view.
    #[must_use]
    pub fn relation(mut self, name: impl Into<String>, nested: Self) -> Self {
        self.relations.insert(name.into(), nested);
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub const fn relations(&self) -> &BTreeMap<String, Self> {
        &self.relations
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.relations.is_empty()
    }
}

///
/// TESTS
///
