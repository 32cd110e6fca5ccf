//! Coordinate transform from house number to sequence index
//!
//! Odd and even sides of a street are usually numbered as two independent
//! sequences (1, 3, 5, ... and 2, 4, 6, ...). Mapping both onto a unit index
//! makes the slope comparable regardless of side:
//!
//! - even: `x = house / 2`       (2 → 1, 4 → 2, 6 → 3)
//! - odd:  `x = (house + 1) / 2` (1 → 1, 3 → 2, 5 → 3)
//!
//! The same transform must be applied to every sample and to the target.

use crate::sample::Parity;
use serde::{Deserialize, Serialize};

/// Transform selected by the target's parity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    Even,
    Odd,
}

impl Transform {
    pub fn for_parity(parity: Parity) -> Self {
        match parity {
            Parity::Even => Transform::Even,
            Parity::Odd => Transform::Odd,
        }
    }

    pub fn apply(&self, house_number: u32) -> f64 {
        let house = f64::from(house_number);
        match self {
            Transform::Even => house / 2.0,
            Transform::Odd => (house + 1.0) / 2.0,
        }
    }

    /// Human-readable formula for reports
    pub fn describe(&self) -> &'static str {
        match self {
            Transform::Even => "x = house / 2",
            Transform::Odd => "x = (house + 1) / 2",
        }
    }
}

/// Apply the transform selected by `parity` to one house number
pub fn transform(house_number: u32, parity: Parity) -> f64 {
    Transform::for_parity(parity).apply(house_number)
}
