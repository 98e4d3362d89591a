//! Regression Checker Separator
//!
//! Runs every case of a suite past the categories in order, lets the
//! strategy decide where it is recorded, and writes one suite file per
//! non-empty category.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use sha2::{Digest, Sha256};

use crate::category::{read_categories, Category};
use crate::error::{RegsepError, Result};
use crate::regression::{MetaData, RegressionCase, RegressionSuite, SuiteFormat};

use super::partition::{Partition, SaveReport, SavedPartition};
use super::strategy::{get_strategy, SeparatorStrategy, StrategyType};

/// Separates the cases of a regression suite into categories
#[derive(Debug, Clone)]
pub struct RegressionCheckerSeparator {
    categories: Vec<Category>,
    strategy: SeparatorStrategy,
}

impl RegressionCheckerSeparator {
    pub fn new(categories: Vec<Category>, strategy: SeparatorStrategy) -> Self {
        Self {
            categories,
            strategy,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn strategy(&self) -> &SeparatorStrategy {
        &self.strategy
    }

    fn attempt_category_for(
        strategy: &mut SeparatorStrategy,
        category: &Category,
        case: &RegressionCase,
    ) -> Result<()> {
        if category.fits(case) && strategy.can_separate(case) {
            strategy.separate(case, category)?;
        }
        Ok(())
    }

    /// Record `case` under the categories it fits, as far as the strategy allows
    pub fn find_categories_for(&mut self, case: &RegressionCase) -> Result<()> {
        for category in &self.categories {
            Self::attempt_category_for(&mut self.strategy, category, case)?;
        }
        Ok(())
    }

    /// Separate every case of `suite` and return the resulting partition
    ///
    /// Meant to be called once per separator; call [`Self::reset`] before
    /// separating another suite.
    pub fn separate(&mut self, suite: &RegressionSuite) -> Result<Partition> {
        for case in &suite.cases {
            self.find_categories_for(case)?;
        }
        let partition = self.partition(&suite.cases);
        tracing::info!(
            strategy = %self.strategy.kind(),
            cases = suite.len(),
            categories = partition.len(),
            unmatched = partition.unmatched().len(),
            "separation finished"
        );
        Ok(partition)
    }

    /// Current partition, with `cases` used to determine the unmatched ones
    pub fn partition(&self, cases: &[RegressionCase]) -> Partition {
        let observer = self.strategy.observer();
        let mut buckets: IndexMap<Category, Vec<RegressionCase>> = IndexMap::new();
        for category in &self.categories {
            if let Some((key, observed)) = observer.separated().get_key_value(category) {
                if !buckets.contains_key(key) {
                    buckets.insert(key.clone(), observed.iter().cloned().collect());
                }
            }
        }
        let unmatched = cases
            .iter()
            .filter(|case| !observer.has_observed(case))
            .cloned()
            .collect();
        Partition::new(buckets, unmatched)
    }

    /// Save each non-empty category as a TOML suite named `{prefix}_{category}.toml`
    pub fn save(&self, prefix: &str, metadata: &MetaData, overwrite: bool) -> Result<SaveReport> {
        self.save_as(prefix, metadata, overwrite, SuiteFormat::Toml)
    }

    /// Save each non-empty category in the given format
    ///
    /// Files are written one by one; if a later file fails, the earlier ones
    /// stay on disk.
    pub fn save_as(
        &self,
        prefix: &str,
        metadata: &MetaData,
        overwrite: bool,
        format: SuiteFormat,
    ) -> Result<SaveReport> {
        let observer = self.strategy.observer();
        if observer.is_empty() {
            return Err(RegsepError::NothingSeparated);
        }

        let mut report = SaveReport::default();
        for (category, cases) in observer.separated() {
            let path = partition_path(prefix, category.name(), format);
            if !overwrite && path.exists() {
                return Err(RegsepError::FileExists { path });
            }
            let suite = RegressionSuite::new(cases.iter().cloned().collect(), metadata.clone());
            tracing::info!("Writing {} cases to {}", cases.len(), path.display());
            let content = suite.write_to(&path, format)?;
            report.files.push(SavedPartition {
                category: category.name().to_string(),
                path,
                cases: cases.len(),
                digest: compute_hash(content.as_bytes()),
            });
        }
        Ok(report)
    }

    /// Forget all separations so the separator can be reused
    pub fn reset(&mut self) {
        self.strategy.reset();
    }
}

/// Output path of a category's partition file
pub fn partition_path(prefix: &str, category: &str, format: SuiteFormat) -> PathBuf {
    PathBuf::from(format!("{}_{}.{}", prefix, category, format.extension()))
}

pub fn compute_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    format!("sha256:{}", hex::encode(result))
}

/// Separator over `categories` using a fresh strategy of the given type
pub fn get_separator(categories: Vec<Category>, kind: StrategyType) -> RegressionCheckerSeparator {
    RegressionCheckerSeparator::new(categories, get_strategy(kind))
}

/// Read categories and a suite, separate, and save next to `prefix`
///
/// The partitions keep the suite's metadata and file format.
pub fn separate_categories(
    category_file: &Path,
    kind: StrategyType,
    suite_file: &Path,
    prefix: &str,
    overwrite: bool,
) -> Result<SaveReport> {
    let mut separator = get_separator(read_categories(category_file)?, kind);
    let suite = RegressionSuite::from_file(suite_file)?;
    separator.separate(&suite)?;
    separator.save_as(
        prefix,
        &suite.metadata,
        overwrite,
        SuiteFormat::from_path(suite_file),
    )
}
