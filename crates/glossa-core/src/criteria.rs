use crate::value::Value;
use derive_more::Deref;
use serde::{Deserialize, Serialize};

///
/// Criterion
///
/// One equality or membership constraint on a stored attribute. This is the
/// whole filter vocabulary the resolver needs: row selection by key, viewer
/// scoping, and batch key sets.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Criterion {
    Eq { field: String, value: Value },
    In { field: String, values: Vec<Value> },
}

impl Criterion {
    /// Constrain `field` to exactly `value`.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Constrain `field` to any of `values`.
    pub fn is_in(field: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Self {
        Self::In {
            field: field.into(),
            values: values.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Eq { field, .. } | Self::In { field, .. } => field,
        }
    }

    /// Check a stored attribute value against this criterion.
    ///
    /// A missing attribute (`None`) never matches; absent data must not
    /// satisfy a filter.
    #[must_use]
    pub fn matches(&self, attr: Option<&Value>) -> bool {
        let Some(attr) = attr else {
            return false;
        };

        match self {
            Self::Eq { value, .. } => attr == value,
            Self::In { values, .. } => values.contains(attr),
        }
    }
}

///
/// Criteria
///
/// Conjunction of criteria; empty means "all rows".
///

#[derive(Clone, Debug, Default, Deref, Deserialize, PartialEq, Serialize)]
pub struct Criteria {
    items: Vec<Criterion>,
}

impl Criteria {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Unconstrained selection.
    #[must_use]
    pub const fn all() -> Self {
        Self::new()
    }

    #[must_use]
    pub fn with(mut self, criterion: Criterion) -> Self {
        self.items.push(criterion);
        self
    }

    pub fn push(&mut self, criterion: Criterion) {
        self.items.push(criterion);
    }

    /// Check a row (as attribute lookups) against every criterion.
    pub fn matches_with<'a>(&self, mut attr: impl FnMut(&str) -> Option<&'a Value>) -> bool {
        self.items
            .iter()
            .all(|criterion| criterion.matches(attr(criterion.field())))
    }
}

impl From<Criterion> for Criteria {
    fn from(criterion: Criterion) -> Self {
        Self::new().with(criterion)
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

///
/// TESTS
///
