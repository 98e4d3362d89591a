//! Category Definition
//!
//! A named category: a description plus the policy used to decide whether
//! a regression case fits it.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{RegsepError, Result};
use crate::regression::RegressionCase;

use super::description::CategoryDescription;

/// Match policy over the CUI, name and TUI membership tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// CUI match, name match and TUI match are all required
    AllParts,
    /// Any one of the three matches is enough
    AnyPartOf,
}

impl CategoryKind {
    /// Resolve a category `type` value, case-insensitively
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias.trim().to_lowercase().as_str() {
            "any" | "anyparts" | "anypartsof" => Some(Self::AnyPartOf),
            "all" | "allparts" => Some(Self::AllParts),
            _ => None,
        }
    }

    /// Short name used in category files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllParts => "all",
            Self::AnyPartOf => "any",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllParts => f.write_str("AllPartsCategory"),
            Self::AnyPartOf => f.write_str("AnyPartOfCategory"),
        }
    }
}

/// A named category
///
/// Two categories are equal when they have the same kind and description;
/// the name only determines the output file suffix.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    kind: CategoryKind,
    description: CategoryDescription,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        kind: CategoryKind,
        description: CategoryDescription,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegsepError::EmptyCategoryName);
        }
        Ok(Self {
            name,
            kind,
            description,
        })
    }

    pub fn all_parts(name: impl Into<String>, description: CategoryDescription) -> Result<Self> {
        Self::new(name, CategoryKind::AllParts, description)
    }

    pub fn any_part_of(name: impl Into<String>, description: CategoryDescription) -> Result<Self> {
        Self::new(name, CategoryKind::AnyPartOf, description)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    pub fn description(&self) -> &CategoryDescription {
        &self.description
    }

    /// Check whether a regression case fits this category
    pub fn fits(&self, case: &RegressionCase) -> bool {
        let d = &self.description;
        match self.kind {
            CategoryKind::AllParts => {
                d.has_cui_from(case) && d.has_name_from(case) && d.has_tui_from(case)
            }
            CategoryKind::AnyPartOf => {
                d.has_cui_from(case) || d.has_name_from(case) || d.has_tui_from(case)
            }
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.description == other.description
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.description.hash(state);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' with: cuis={:?} names={:?} tuis={:?}",
            self.kind,
            self.name,
            self.description.target_cuis,
            self.description.target_names,
            self.description.target_tuis
        )
    }
}
