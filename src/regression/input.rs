// Index-paired regression arrays
//
// xs, ys and house_numbers always have the same length and are paired by
// index. Removal rebuilds all three together.

use crate::sample::Sample;
use crate::transform::Transform;

/// Transformed (x, y) pairs plus the house number each pair came from
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionInput {
    xs: Vec<f64>,
    ys: Vec<f64>,
    house_numbers: Vec<u32>,
}

impl RegressionInput {
    /// Transform every sample with the same `transform`
    pub fn from_samples(samples: &[Sample], transform: Transform) -> Self {
        let mut xs = Vec::with_capacity(samples.len());
        let mut ys = Vec::with_capacity(samples.len());
        let mut house_numbers = Vec::with_capacity(samples.len());

        for sample in samples {
            xs.push(transform.apply(sample.house_number));
            ys.push(sample.title_number as f64);
            house_numbers.push(sample.house_number);
        }

        Self {
            xs,
            ys,
            house_numbers,
        }
    }

    /// Copy of this input with the point at `index` removed
    pub fn without(&self, index: usize) -> Self {
        let keep = |i: &usize| *i != index;
        let indices: Vec<usize> = (0..self.len()).filter(keep).collect();

        Self {
            xs: indices.iter().map(|&i| self.xs[i]).collect(),
            ys: indices.iter().map(|&i| self.ys[i]).collect(),
            house_numbers: indices.iter().map(|&i| self.house_numbers[i]).collect(),
        }
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn house_numbers(&self) -> &[u32] {
        &self.house_numbers
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}
