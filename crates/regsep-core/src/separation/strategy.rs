//! Separator Strategy
//!
//! Decides whether a case that has already been separated may be separated
//! again.

use std::fmt;
use std::str::FromStr;

use crate::category::Category;
use crate::error::{RegsepError, Result};
use crate::regression::RegressionCase;

use super::observer::SeparationObserver;

/// Available separation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Each case goes to the first category it fits; no duplication
    #[default]
    First,
    /// Each case goes to every category it fits
    All,
}

impl StrategyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::All => "all",
        }
    }
}

impl FromStr for StrategyType {
    type Err = RegsepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "all" => Ok(Self::All),
            _ => Err(RegsepError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A strategy together with the observer it records into
#[derive(Debug, Clone)]
pub struct SeparatorStrategy {
    kind: StrategyType,
    observer: SeparationObserver,
}

impl SeparatorStrategy {
    pub fn new(kind: StrategyType, observer: SeparationObserver) -> Self {
        Self { kind, observer }
    }

    pub fn kind(&self) -> StrategyType {
        self.kind
    }

    pub fn observer(&self) -> &SeparationObserver {
        &self.observer
    }

    /// Hand the observer back to the caller
    pub fn into_observer(self) -> SeparationObserver {
        self.observer
    }

    /// Check whether the strategy allows separating `case`
    pub fn can_separate(&self, case: &RegressionCase) -> bool {
        match self.kind {
            StrategyType::First => !self.observer.has_observed(case),
            StrategyType::All => true,
        }
    }

    /// Separate `case` into `category`
    ///
    /// With [`StrategyType::First`] this fails if the case was already
    /// separated; callers gate on [`Self::can_separate`] first.
    pub fn separate(&mut self, case: &RegressionCase, category: &Category) -> Result<()> {
        if self.kind == StrategyType::First && self.observer.has_observed(case) {
            return Err(RegsepError::InvalidState {
                case: case.name.clone(),
            });
        }
        self.observer.observe(case, category);
        Ok(())
    }

    /// Forget every recorded separation
    pub fn reset(&mut self) {
        self.observer.reset();
    }
}

/// Strategy of the given type with a fresh observer
pub fn get_strategy(kind: StrategyType) -> SeparatorStrategy {
    SeparatorStrategy::new(kind, SeparationObserver::new())
}
