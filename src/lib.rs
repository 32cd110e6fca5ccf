//! Titlecast - title number prediction from house numbers
//!
//! Fits a least-squares line of title number against a parity-aware sequence
//! index of the house number, uses R² as a confidence proxy, and excludes a
//! single worst-fitting sample when that lifts confidence above threshold.
//!
//! The regression core works on plain [`Sample`] slices. Ingestion of
//! spreadsheet exports, category filtering and output formatting live in
//! their own modules around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod json_output;
pub mod partition;
pub mod regression;
pub mod sample;
pub mod session;
pub mod transform;

pub use error::PredictionError;
pub use sample::{Parity, Sample, TargetQuery};
pub use session::Session;
