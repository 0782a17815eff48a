//! Criteria types and the collection filter
//!
//! A criteria object is a set of optional predicates combined with AND
//! semantics: an absent predicate imposes no constraint. Filtering is a
//! total function over well-typed inputs; inverted ranges and unmatched
//! searches degrade to empty results rather than errors.

use chrono::{DateTime, Utc};
use serde::de::{Deserialize, Deserializer, IntoDeserializer};

/// A single-field predicate: either no constraint, or an exact match.
///
/// This replaces the common "all" sentinel mixed into status/category
/// enumerations. When deserialized from a query string, the literal `"all"`
/// maps to [`FieldFilter::Any`]; any other value must parse as `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFilter<T> {
    /// Impose no constraint on this field
    Any,
    /// Match only records whose field equals the given value
    Exactly(T),
}

impl<T> Default for FieldFilter<T> {
    fn default() -> Self {
        FieldFilter::Any
    }
}

impl<T: PartialEq> FieldFilter<T> {
    /// Check whether a field value satisfies this predicate
    pub fn matches(&self, value: &T) -> bool {
        match self {
            FieldFilter::Any => true,
            FieldFilter::Exactly(expected) => expected == value,
        }
    }

    /// Whether this predicate imposes no constraint
    pub fn is_any(&self) -> bool {
        matches!(self, FieldFilter::Any)
    }
}

impl<'de, T> Deserialize<'de> for FieldFilter<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == "all" {
            return Ok(FieldFilter::Any);
        }
        T::deserialize(raw.into_deserializer()).map(FieldFilter::Exactly)
    }
}

/// Inclusive timestamp range over a designated timestamp field.
///
/// An unbounded side imposes no constraint. A range with `start > end`
/// matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Check whether a timestamp falls within the range (inclusive)
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| at >= start) && self.end.is_none_or(|end| at <= end)
    }
}

/// Inclusive numeric range over a designated numeric field.
///
/// An unbounded side imposes no constraint. A range with `min > max`
/// matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmountRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AmountRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Check whether an amount falls within the range (inclusive)
    pub fn contains(&self, amount: f64) -> bool {
        self.min.is_none_or(|min| amount >= min) && self.max.is_none_or(|max| amount <= max)
    }
}

/// Case-insensitive substring match of `query` against a set of text fields.
///
/// A blank query imposes no constraint.
pub fn matches_search(query: &str, fields: &[String]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Trait for records that can be matched against a domain criteria object
pub trait Filterable: Clone {
    /// The criteria type for this record; its default imposes no constraint
    type Criteria: Default;

    /// Whether this record satisfies every supplied criterion
    fn matches(&self, criteria: &Self::Criteria) -> bool;
}

/// Return the subset of `records` matching all supplied criteria.
///
/// The output preserves input order, so a subsequent stable sort keeps
/// filter-order for equal keys.
pub fn filter<T: Filterable>(records: &[T], criteria: &T::Criteria) -> Vec<T> {
    records
        .iter()
        .filter(|record| record.matches(criteria))
        .cloned()
        .collect()
}
