//! Regression cases and their filters.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// What a filter's values refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterType {
    /// Concept unique identifier
    Cui,
    /// Concept unique identifier, including its children in the ontology
    CuiAndChildren,
    /// Concept name
    Name,
    /// Type unique identifier (semantic type)
    TypeId,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Cui => "CUI",
            Self::CuiAndChildren => "CUI_AND_CHILDREN",
            Self::Name => "NAME",
            Self::TypeId => "TYPE_ID",
        };
        f.write_str(s)
    }
}

/// A (kind, values) pair restricting which concepts a case targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedFilter {
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub values: BTreeSet<String>,
}

impl TypedFilter {
    pub fn new<I, S>(filter_type: FilterType, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter_type,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// True if any of this filter's values is in `targets`
    pub fn intersects(&self, targets: &BTreeSet<String>) -> bool {
        self.values.iter().any(|v| targets.contains(v))
    }
}

/// A single regression case
///
/// Cases are compared and hashed structurally so they can be used as keys
/// when tracking which category a case was separated into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegressionCase {
    pub name: String,
    #[serde(default)]
    pub phrases: Vec<String>,
    #[serde(default)]
    pub filters: Vec<TypedFilter>,
}

impl RegressionCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phrases: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn with_filter<I, S>(mut self, filter_type: FilterType, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.push(TypedFilter::new(filter_type, values));
        self
    }

    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrases.push(phrase.into());
        self
    }

    /// First filter of the given kind, if the case has one
    pub fn filter(&self, filter_type: FilterType) -> Option<&TypedFilter> {
        self.filters.iter().find(|f| f.filter_type == filter_type)
    }
}

impl fmt::Display for RegressionCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for filter in &self.filters {
            write!(f, " {}={:?}", filter.filter_type, filter.values)?;
        }
        Ok(())
    }
}
