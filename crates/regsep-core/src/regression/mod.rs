//! Regression suite model
//!
//! The cases a concept-annotation regression suite is made of, the suite
//! metadata, and the text formats a suite is stored in.

mod case;
mod suite;

pub use case::{FilterType, RegressionCase, TypedFilter};
pub use suite::{MetaData, RegressionSuite, SuiteFormat};
