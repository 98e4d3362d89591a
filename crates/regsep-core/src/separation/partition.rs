//! Separation results: the partition and what `save` wrote.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::category::Category;
use crate::regression::{MetaData, RegressionCase, RegressionSuite};

/// Cases assigned to each category after a separation run
///
/// Categories appear in declaration order, cases in input order. Only
/// categories with at least one case are present.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    buckets: IndexMap<Category, Vec<RegressionCase>>,
    unmatched: Vec<RegressionCase>,
}

impl Partition {
    pub(crate) fn new(
        buckets: IndexMap<Category, Vec<RegressionCase>>,
        unmatched: Vec<RegressionCase>,
    ) -> Self {
        Self { buckets, unmatched }
    }

    /// True if no case was assigned to any category
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of non-empty categories
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Cases of the category with the given name
    pub fn get(&self, name: &str) -> Option<&[RegressionCase]> {
        self.buckets
            .iter()
            .find(|(cat, _)| cat.name() == name)
            .map(|(_, cases)| cases.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[RegressionCase])> {
        self.buckets.iter().map(|(cat, cases)| (cat, cases.as_slice()))
    }

    /// Number of cases per category name
    pub fn category_counts(&self) -> IndexMap<String, usize> {
        self.buckets
            .iter()
            .map(|(cat, cases)| (cat.name().to_string(), cases.len()))
            .collect()
    }

    /// Cases that fit no category
    pub fn unmatched(&self) -> &[RegressionCase] {
        &self.unmatched
    }

    /// One suite per category, all sharing `metadata`
    pub fn to_suites(&self, metadata: &MetaData) -> Vec<(&Category, RegressionSuite)> {
        self.buckets
            .iter()
            .map(|(cat, cases)| (cat, RegressionSuite::new(cases.clone(), metadata.clone())))
            .collect()
    }
}

/// A single partition file written by `save`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPartition {
    pub category: String,
    pub path: PathBuf,
    pub cases: usize,
    /// `sha256:<hex>` of the written content
    pub digest: String,
}

/// Everything written by one `save` call, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    pub files: Vec<SavedPartition>,
}

impl SaveReport {
    pub fn total_cases(&self) -> usize {
        self.files.iter().map(|f| f.cases).sum()
    }
}
