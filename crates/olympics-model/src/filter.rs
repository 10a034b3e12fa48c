//! Selection filters for query parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label shown for [`Filter::NoFilter`] in selection controls.
pub const OVERALL_LABEL: &str = "Overall";

/// A query axis that is either unrestricted or pinned to one value.
///
/// Selection controls show `NoFilter` as "Overall"; the label is only
/// interpreted at the UI boundary via [`Filter::parse_overall`], so a real
/// value spelled "Overall" can never be mistaken for "no filter" inside the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Filter<T> {
    #[default]
    NoFilter,
    Exact(T),
}

impl<T> Filter<T> {
    pub fn is_no_filter(&self) -> bool {
        matches!(self, Filter::NoFilter)
    }

    pub fn as_exact(&self) -> Option<&T> {
        match self {
            Filter::NoFilter => None,
            Filter::Exact(value) => Some(value),
        }
    }

    pub fn as_ref(&self) -> Filter<&T> {
        match self {
            Filter::NoFilter => Filter::NoFilter,
            Filter::Exact(value) => Filter::Exact(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Filter<U> {
        match self {
            Filter::NoFilter => Filter::NoFilter,
            Filter::Exact(value) => Filter::Exact(f(value)),
        }
    }

    /// Returns true when `candidate` passes this filter.
    pub fn accepts<Q>(&self, candidate: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        match self {
            Filter::NoFilter => true,
            Filter::Exact(value) => value == candidate,
        }
    }
}

impl Filter<String> {
    /// Maps the "Overall" label (case-insensitive) or an empty string to
    /// `NoFilter`; anything else becomes an exact match on the trimmed text.
    pub fn parse_overall(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(OVERALL_LABEL) {
            Filter::NoFilter
        } else {
            Filter::Exact(trimmed.to_string())
        }
    }

    pub fn as_str_filter(&self) -> Filter<&str> {
        match self {
            Filter::NoFilter => Filter::NoFilter,
            Filter::Exact(value) => Filter::Exact(value.as_str()),
        }
    }
}

impl Filter<&str> {
    /// String comparison without the double reference `accepts` would need.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Filter::NoFilter => true,
            Filter::Exact(expected) => *expected == value,
        }
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Filter::Exact(value),
            None => Filter::NoFilter,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::NoFilter => f.write_str(OVERALL_LABEL),
            Filter::Exact(value) => value.fmt(f),
        }
    }
}
