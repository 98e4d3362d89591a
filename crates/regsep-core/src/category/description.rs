//! Category Description
//!
//! The target sets a category is described by, and the membership tests
//! run against a regression case's filters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::regression::{FilterType, RegressionCase};

/// Target CUIs, names and type IDs of a category
///
/// Equality and hashing are over the three sets and do not depend on the
/// order the targets were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryDescription {
    pub target_cuis: BTreeSet<String>,
    pub target_names: BTreeSet<String>,
    pub target_tuis: BTreeSet<String>,
}

impl CategoryDescription {
    pub fn new<C, N, T>(cuis: C, names: N, tuis: T) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            target_cuis: cuis.into_iter().map(Into::into).collect(),
            target_names: names.into_iter().map(Into::into).collect(),
            target_tuis: tuis.into_iter().map(Into::into).collect(),
        }
    }

    /// True if all three target sets are empty
    pub fn is_empty(&self) -> bool {
        self.target_cuis.is_empty() && self.target_names.is_empty() && self.target_tuis.is_empty()
    }

    // Only the first filter of a kind is inspected.
    fn has_specific_from(
        case: &RegressionCase,
        targets: &BTreeSet<String>,
        filter_type: FilterType,
    ) -> bool {
        case.filter(filter_type)
            .is_some_and(|filter| filter.intersects(targets))
    }

    /// True if the case has a CUI (or CUI-and-children) filter value in the target CUIs
    pub fn has_cui_from(&self, case: &RegressionCase) -> bool {
        Self::has_specific_from(case, &self.target_cuis, FilterType::Cui)
            || Self::has_specific_from(case, &self.target_cuis, FilterType::CuiAndChildren)
    }

    /// True if the case has a name filter value in the target names
    pub fn has_name_from(&self, case: &RegressionCase) -> bool {
        Self::has_specific_from(case, &self.target_names, FilterType::Name)
    }

    /// True if the case has a type ID filter value in the target TUIs
    pub fn has_tui_from(&self, case: &RegressionCase) -> bool {
        Self::has_specific_from(case, &self.target_tuis, FilterType::TypeId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(d: &CategoryDescription) -> u64 {
        let mut hasher = DefaultHasher::new();
        d.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_regardless_of_construction_order() {
        let a = CategoryDescription::new(["C1", "C2", "C3"], ["x", "y"], ["T1"]);
        let b = CategoryDescription::new(["C3", "C1", "C2"], ["y", "x"], ["T1"]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_differs_when_any_set_differs() {
        let a = CategoryDescription::new(["C1"], ["x"], ["T1"]);
        assert_ne!(a, CategoryDescription::new(["C1"], ["x"], ["T2"]));
        assert_ne!(a, CategoryDescription::new(["C1"], ["z"], ["T1"]));
        assert_ne!(a, CategoryDescription::new(["C9"], ["x"], ["T1"]));
    }

    #[test]
    fn test_cui_matches_either_cui_filter_kind() {
        let descr = CategoryDescription::new(["C1"], Vec::<String>::new(), Vec::<String>::new());
        let plain = RegressionCase::new("plain").with_filter(FilterType::Cui, ["C1"]);
        let children =
            RegressionCase::new("children").with_filter(FilterType::CuiAndChildren, ["C1", "C5"]);
        let other = RegressionCase::new("other").with_filter(FilterType::Cui, ["C2"]);
        assert!(descr.has_cui_from(&plain));
        assert!(descr.has_cui_from(&children));
        assert!(!descr.has_cui_from(&other));
    }

    #[test]
    fn test_missing_filter_never_matches() {
        let descr = CategoryDescription::new(["C1"], ["heart"], ["T1"]);
        let case = RegressionCase::new("only-name").with_filter(FilterType::Name, ["heart"]);
        assert!(descr.has_name_from(&case));
        assert!(!descr.has_cui_from(&case));
        assert!(!descr.has_tui_from(&case));
    }

    #[test]
    fn test_name_filter_does_not_satisfy_tui() {
        let descr = CategoryDescription::new(Vec::<String>::new(), Vec::<String>::new(), ["T1"]);
        let case = RegressionCase::new("mixed").with_filter(FilterType::Name, ["T1"]);
        assert!(!descr.has_tui_from(&case));
    }

    #[test]
    fn test_empty_description_matches_nothing() {
        let descr = CategoryDescription::default();
        assert!(descr.is_empty());
        let case = RegressionCase::new("full")
            .with_filter(FilterType::Cui, ["C1"])
            .with_filter(FilterType::Name, ["heart"])
            .with_filter(FilterType::TypeId, ["T1"]);
        assert!(!descr.has_cui_from(&case));
        assert!(!descr.has_name_from(&case));
        assert!(!descr.has_tui_from(&case));
    }
}
