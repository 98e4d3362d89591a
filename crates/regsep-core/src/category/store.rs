//! Category Store
//!
//! Loads category definitions from a TOML file of the form
//!
//! ```toml
//! [categories.cardio]
//! type = "all"          # any / anyparts / anypartsof / all / allparts
//! cuis = ["C1"]
//! names = ["heart"]
//! tuis = ["T1"]
//! ```
//!
//! Categories keep their declaration order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RegsepError, Result};

use super::definition::{Category, CategoryKind};
use super::description::CategoryDescription;

/// Top level of a category definition file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesConfig {
    pub categories: IndexMap<String, CategoryConfigEntry>,
}

/// A single category entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfigEntry {
    /// Match policy alias
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub cuis: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub tuis: Vec<String>,
}

impl CategoriesConfig {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Build the categories in declaration order
    ///
    /// Fails on the first entry with an unrecognised type.
    pub fn to_categories(&self) -> Result<Vec<Category>> {
        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(self.categories.len());
        for (name, entry) in &self.categories {
            let category = get_category(name, entry)?;
            if !seen.insert(category.clone()) {
                tracing::warn!(
                    category = %name,
                    "category has the same type and targets as an earlier one; their cases will be merged"
                );
            }
            categories.push(category);
        }
        Ok(categories)
    }
}

/// Build a description from an entry's target lists
pub fn get_description(entry: &CategoryConfigEntry) -> CategoryDescription {
    CategoryDescription::new(
        entry.cuis.iter().cloned(),
        entry.names.iter().cloned(),
        entry.tuis.iter().cloned(),
    )
}

/// Build a named category from its entry
pub fn get_category(name: &str, entry: &CategoryConfigEntry) -> Result<Category> {
    let kind =
        CategoryKind::from_alias(&entry.kind).ok_or_else(|| RegsepError::UnknownCategoryType {
            name: name.to_string(),
            kind: entry.kind.clone(),
        })?;
    Category::new(name, kind, get_description(entry))
}

/// Parse categories from TOML text
pub fn parse_categories(content: &str) -> Result<Vec<Category>> {
    CategoriesConfig::parse(content)?.to_categories()
}

/// Read categories from a TOML file
pub fn read_categories(path: &Path) -> Result<Vec<Category>> {
    let categories = CategoriesConfig::load(path)?.to_categories()?;
    tracing::debug!(
        path = %path.display(),
        count = categories.len(),
        "loaded categories"
    );
    Ok(categories)
}
