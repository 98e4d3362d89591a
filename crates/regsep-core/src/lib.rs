pub mod category;
pub mod config;
pub mod error;
pub mod regression;
pub mod separation;

pub use category::{
    get_category, get_description, parse_categories, read_categories, CategoriesConfig, Category,
    CategoryConfigEntry, CategoryDescription, CategoryKind,
};
pub use config::Config;
pub use error::{RegsepError, Result};
pub use regression::{FilterType, MetaData, RegressionCase, RegressionSuite, SuiteFormat, TypedFilter};
pub use separation::{
    compute_hash, get_separator, get_strategy, partition_path, separate_categories, Partition,
    RegressionCheckerSeparator, SaveReport, SavedPartition, SeparationObserver, SeparatorStrategy,
    StrategyType,
};
