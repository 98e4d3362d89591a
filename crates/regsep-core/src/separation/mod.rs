//! Separation of regression suites into categories.
//!
//! - `observer`: which case went where
//! - `strategy`: whether a case may go to more than one category
//! - `separator`: the pass over cases and categories, and saving
//! - `partition`: results handed back to the caller

mod observer;
mod partition;
mod separator;
mod strategy;

pub use observer::SeparationObserver;
pub use partition::{Partition, SaveReport, SavedPartition};
pub use separator::{
    compute_hash, get_separator, partition_path, separate_categories,
    RegressionCheckerSeparator,
};
pub use strategy::{get_strategy, SeparatorStrategy, StrategyType};
