//! Separation Observer
//!
//! Bidirectional ledger of which case went into which category.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use crate::category::Category;
use crate::regression::RegressionCase;

/// Records case <-> category assignments
///
/// Both directions are updated together in [`SeparationObserver::observe`],
/// so a case is listed under a category iff that category is listed under
/// the case.
#[derive(Debug, Default, Clone)]
pub struct SeparationObserver {
    separated: IndexMap<Category, IndexSet<RegressionCase>>,
    cases: HashMap<RegressionCase, IndexSet<Category>>,
}

impl SeparationObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `case` under `category`. Repeating a pair is a no-op.
    pub fn observe(&mut self, case: &RegressionCase, category: &Category) {
        tracing::debug!(case = %case.name, category = %category.name(), "observed");
        self.separated
            .entry(category.clone())
            .or_default()
            .insert(case.clone());
        self.cases
            .entry(case.clone())
            .or_default()
            .insert(category.clone());
    }

    /// True if the case has been recorded under at least one category
    pub fn has_observed(&self, case: &RegressionCase) -> bool {
        self.cases.contains_key(case)
    }

    /// Clear all recorded assignments
    pub fn reset(&mut self) {
        self.separated.clear();
        self.cases.clear();
    }

    /// True if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.separated.is_empty()
    }

    /// Category -> cases, in order of first observation
    pub fn separated(&self) -> &IndexMap<Category, IndexSet<RegressionCase>> {
        &self.separated
    }

    /// Cases recorded under a category
    pub fn cases_in(&self, category: &Category) -> Option<&IndexSet<RegressionCase>> {
        self.separated.get(category)
    }

    /// Categories a case was recorded under
    pub fn categories_of(&self, case: &RegressionCase) -> Option<&IndexSet<Category>> {
        self.cases.get(case)
    }
}
