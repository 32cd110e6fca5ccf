//! Category filtering for -C / category= expressions
//!
//! Supports:
//! - All categories: `all`
//! - Explicit labels: `category=Flat,House`
//! - Unlabeled samples: the reserved label `(none)`
//!
//! Filtering is applied by the caller before prediction; the regression core
//! never sees labels.

use crate::sample::Sample;
use anyhow::{bail, Result};
use std::collections::BTreeSet;

/// Reserved label matching samples without a category
pub const UNLABELED: &str = "(none)";

/// Category filter that determines which samples feed a prediction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    /// Normalized labels to include (None = all categories)
    include: Option<BTreeSet<String>>,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl CategoryFilter {
    /// Create a filter that includes every sample
    pub fn all() -> Self {
        Self { include: None }
    }

    /// Create a filter for the given labels
    ///
    /// An empty label list means "all", matching an unticked filter panel.
    pub fn only<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let include: BTreeSet<String> = labels
            .into_iter()
            .map(|l| normalize(l.as_ref()))
            .filter(|l| !l.is_empty())
            .collect();

        if include.is_empty() {
            Self::all()
        } else {
            Self {
                include: Some(include),
            }
        }
    }

    /// Parse a filter expression like "category=Flat,House" or "all"
    pub fn from_expr(expr: &str) -> Result<Self> {
        let expr = expr.trim();
        if expr.eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }

        if let Some(spec) = expr.strip_prefix("category=") {
            Ok(Self::only(spec.split(',')))
        } else {
            bail!(
                "Invalid filter expression: {}. Expected format: category=LABEL[,LABEL...] or all",
                expr
            );
        }
    }

    /// Check if a sample passes the filter
    pub fn includes(&self, sample: &Sample) -> bool {
        match &self.include {
            None => true,
            Some(set) => match &sample.category {
                Some(label) => set.contains(&normalize(label)),
                None => set.contains(UNLABELED),
            },
        }
    }

    pub fn is_all(&self) -> bool {
        self.include.is_none()
    }

    /// Description for reports, e.g. `categories: flat, house`
    pub fn describe(&self) -> String {
        match &self.include {
            None => "all categories".to_string(),
            Some(set) => format!(
                "categories: {}",
                set.iter().cloned().collect::<Vec<_>>().join(", ")
            ),
        }
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> Sample {
        Sample::new(2, 100).with_category("Flat")
    }

    fn house() -> Sample {
        Sample::new(4, 102).with_category("House")
    }

    fn bare() -> Sample {
        Sample::new(6, 104)
    }

    #[test]
    fn test_filter_all_includes_everything() {
        let filter = CategoryFilter::all();
        assert!(filter.includes(&flat()));
        assert!(filter.includes(&house()));
        assert!(filter.includes(&bare()));
        assert!(filter.is_all());
    }

    #[test]
    fn test_filter_individual_labels() {
        let filter = CategoryFilter::from_expr("category=Flat").unwrap();
        assert!(filter.includes(&flat()));
        assert!(!filter.includes(&house()));
        assert!(!filter.includes(&bare()));
    }

    #[test]
    fn test_filter_case_and_whitespace_insensitive() {
        let filter = CategoryFilter::from_expr("category= flat , HOUSE ").unwrap();
        assert!(filter.includes(&flat()));
        assert!(filter.includes(&house()));
        assert!(filter.includes(&Sample::new(8, 1).with_category("  house")));
    }

    #[test]
    fn test_filter_unlabeled() {
        let filter = CategoryFilter::only(["(none)"]);
        assert!(filter.includes(&bare()));
        assert!(!filter.includes(&flat()));
    }

    #[test]
    fn test_filter_empty_means_all() {
        assert!(CategoryFilter::from_expr("category=").unwrap().is_all());
        assert!(CategoryFilter::only(Vec::<String>::new()).is_all());
    }

    #[test]
    fn test_filter_all_keyword() {
        assert!(CategoryFilter::from_expr("ALL").unwrap().is_all());
    }

    #[test]
    fn test_invalid_expression() {
        assert!(CategoryFilter::from_expr("flat").is_err());
        assert!(CategoryFilter::from_expr("trace=flat").is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(CategoryFilter::all().describe(), "all categories");
        assert_eq!(
            CategoryFilter::only(["House", "Flat"]).describe(),
            "categories: flat, house"
        );
    }
}
