//! # Category Module
//!
//! Categories that regression cases are separated into.
//!
//! A category is a [`CategoryDescription`] (target CUIs, names and type IDs)
//! combined with a [`CategoryKind`] deciding how the three membership tests
//! are combined:
//!
//! - **all**: the case must match a CUI, a name and a type ID
//! - **any**: one match of any kind is enough
//!
//! ## Module layout
//!
//! - `description`: target sets and membership tests
//! - `definition`: named categories and the `fits` predicate
//! - `store`: loading categories from TOML
//!
//! ## Example
//!
//! ```rust
//! use regsep_core::category::{Category, CategoryDescription};
//! use regsep_core::regression::{FilterType, RegressionCase};
//!
//! let cardio = Category::all_parts(
//!     "cardio",
//!     CategoryDescription::new(["C1"], ["heart"], ["T1"]),
//! )
//! .unwrap();
//!
//! let case = RegressionCase::new("heart-case")
//!     .with_filter(FilterType::Cui, ["C1"])
//!     .with_filter(FilterType::Name, ["heart"])
//!     .with_filter(FilterType::TypeId, ["T1"]);
//! assert!(cardio.fits(&case));
//! ```

mod definition;
mod description;
mod store;

pub use definition::{Category, CategoryKind};
pub use description::CategoryDescription;
pub use store::{
    get_category, get_description, parse_categories, read_categories, CategoriesConfig,
    CategoryConfigEntry,
};
