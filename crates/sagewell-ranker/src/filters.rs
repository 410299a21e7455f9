//! Per-request search filters.

use serde::{Deserialize, Serialize};

/// Sentinel meaning "no restriction".
pub const ALL: &str = "all";

/// A category or source restriction: either the `"all"` sentinel or a code.
///
/// A code that names nothing in the corpus is kept as-is and simply matches no
/// passage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterValue {
    #[default]
    All,
    Code(String),
}

impl FilterValue {
    pub fn code(code: impl Into<String>) -> Self {
        Self::from(code.into())
    }

    pub fn matches(&self, code: &str) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Code(c) => c == code,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::All => ALL,
            FilterValue::Code(c) => c,
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        if value == ALL {
            FilterValue::All
        } else {
            FilterValue::Code(value)
        }
    }
}

impl From<FilterValue> for String {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::All => ALL.to_string(),
            FilterValue::Code(c) => c,
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Descending score
    #[default]
    Relevance,
    /// Ascending composition year of the source work
    Date,
    /// Ascending title collation
    Title,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub category: FilterValue,
    #[serde(default)]
    pub source: FilterValue,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl SearchFilters {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = FilterValue::code(category);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = FilterValue::code(source);
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}
