//! Plain data records consumed by the prediction core

use crate::error::PredictionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One observed (house number, title number) pair
///
/// House and title numbers are positive. The ingestion layer enforces this
/// before a `Sample` is ever built from external text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample {
    pub house_number: u32,
    pub title_number: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<String>,
}

impl Sample {
    pub fn new(house_number: u32, title_number: u64) -> Self {
        Self {
            house_number,
            title_number,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn parity(&self) -> Parity {
        Parity::of(self.house_number)
    }

    /// Short description used in reports, e.g. `house 6 (title 200, Flat)`
    pub fn describe(&self) -> String {
        match &self.category {
            Some(label) => format!(
                "house {} (title {}, {})",
                self.house_number, self.title_number, label
            ),
            None => format!("house {} (title {})", self.house_number, self.title_number),
        }
    }
}

/// Parity of a house number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(house_number: u32) -> Self {
        if house_number % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// House number whose title number should be predicted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetQuery {
    house_number: u32,
}

impl TargetQuery {
    pub fn new(house_number: u32) -> Result<Self, PredictionError> {
        if house_number == 0 {
            return Err(PredictionError::InvalidTarget(house_number.to_string()));
        }
        Ok(Self { house_number })
    }

    pub fn house_number(&self) -> u32 {
        self.house_number
    }

    pub fn parity(&self) -> Parity {
        Parity::of(self.house_number)
    }
}

impl FromStr for TargetQuery {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let house_number = trimmed
            .parse::<u32>()
            .map_err(|_| PredictionError::InvalidTarget(trimmed.to_string()))?;
        Self::new(house_number)
    }
}
