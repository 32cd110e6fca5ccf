//! Record parser for spreadsheet exports
//!
//! Turns delimited text rows into [`Sample`]s:
//! - cell 0: house number, first integer in the cell (`12`, `No. 12`, `12A`)
//! - cell 1: title cell; the last run of at least `min_title_digits` digits
//!   is the title number and the text before it is the category label
//!   (`Flat - 123456` → title 123456, label `Flat`)
//! - cell 2 (optional): explicit category, overrides the derived label
//!
//! Rows that do not parse are reported, not fatal.

use crate::config::ParserConfig;
use crate::sample::Sample;
use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;

/// Characters trimmed from the end of a derived category label
const LABEL_SEPARATORS: &[char] = &['-', ':', ',', '#', '/'];

/// Parsed house number cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseCell {
    pub number: u32,
    pub suffix: Option<char>,
}

/// Why a row was not turned into a sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewCells(usize),
    UnparseableHouse(String),
    UnparseableTitle(String),
    SuffixedHouse(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewCells(n) => write!(f, "expected at least 2 cells, found {}", n),
            SkipReason::UnparseableHouse(cell) => write!(f, "no house number in {:?}", cell),
            SkipReason::UnparseableTitle(cell) => write!(f, "no title number in {:?}", cell),
            SkipReason::SuffixedHouse(cell) => write!(f, "lettered house {:?} skipped", cell),
        }
    }
}

/// A row that produced no sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number
    pub line: usize,
    pub reason: SkipReason,
}

/// Result of parsing a whole export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    pub samples: Vec<Sample>,
    pub skipped: Vec<SkippedRow>,
}

/// Regex-based parser for house and title cells
#[derive(Debug, Clone)]
pub struct RecordParser {
    config: ParserConfig,
    house_pattern: Regex,
    title_pattern: Regex,
}

impl RecordParser {
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate().map_err(|e| anyhow::anyhow!(e))?;

        let house_pattern = Regex::new(r"^\D*?(\d+)(?:\s?([A-Za-z])\b)?")
            .context("Failed to compile house number pattern")?;
        let title_pattern = Regex::new(&format!(r"\d{{{},}}", config.min_title_digits))
            .context("Failed to compile title number pattern")?;

        tracing::debug!(
            "record parser: title numbers need {} or more digits, lettered houses {}",
            config.min_title_digits,
            if config.skip_suffixed { "skipped" } else { "kept" }
        );

        Ok(Self {
            config,
            house_pattern,
            title_pattern,
        })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Extract the house number and optional letter suffix from a cell
    pub fn parse_house_cell(&self, text: &str) -> Option<HouseCell> {
        let caps = self.house_pattern.captures(text.trim())?;
        let number: u32 = caps.get(1)?.as_str().parse().ok()?;
        if number == 0 {
            return None;
        }

        let suffix = caps
            .get(2)
            .and_then(|m| m.as_str().chars().next())
            .map(|c| c.to_ascii_uppercase());

        Some(HouseCell { number, suffix })
    }

    /// Extract the title number and the category label before it
    pub fn parse_title_cell(&self, text: &str) -> Option<(u64, Option<String>)> {
        let text = text.trim();
        let m = self.title_pattern.find_iter(text).last()?;
        let title: u64 = m.as_str().parse().ok()?;
        if title == 0 {
            return None;
        }

        let label = text[..m.start()]
            .trim_end_matches(|c: char| c.is_whitespace() || LABEL_SEPARATORS.contains(&c))
            .trim();
        let label = (!label.is_empty()).then(|| label.to_string());

        Some((title, label))
    }

    /// Parse one row of cells into a sample
    pub fn parse_row<S: AsRef<str>>(&self, cells: &[S]) -> Result<Sample, SkipReason> {
        if cells.len() < 2 {
            return Err(SkipReason::TooFewCells(cells.len()));
        }

        let house_text = cells[0].as_ref().trim();
        let title_text = cells[1].as_ref().trim();

        let house = self
            .parse_house_cell(house_text)
            .ok_or_else(|| SkipReason::UnparseableHouse(house_text.to_string()))?;

        if house.suffix.is_some() && self.config.skip_suffixed {
            return Err(SkipReason::SuffixedHouse(house_text.to_string()));
        }

        let (title, derived_label) = self
            .parse_title_cell(title_text)
            .ok_or_else(|| SkipReason::UnparseableTitle(title_text.to_string()))?;

        let explicit_label = cells
            .get(2)
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(Sample {
            house_number: house.number,
            title_number: title,
            category: explicit_label.or(derived_label),
        })
    }

    /// Parse a whole delimited export
    pub fn parse_text(&self, contents: &str) -> IngestReport {
        let mut report = IngestReport::default();

        let delimiter = self.config.delimiter.unwrap_or_else(|| {
            contents
                .lines()
                .find(|l| !l.trim().is_empty())
                .map(detect_delimiter)
                .unwrap_or(',')
        });

        for (index, line) in contents.lines().enumerate() {
            let line_number = index + 1;
            if line_number == 1 && self.config.has_header {
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }

            let cells = split_cells(line, delimiter);
            match self.parse_row(cells.as_slice()) {
                Ok(sample) => report.samples.push(sample),
                Err(reason) => {
                    tracing::debug!("line {}: {}", line_number, reason);
                    report.skipped.push(SkippedRow {
                        line: line_number,
                        reason,
                    });
                }
            }
        }

        tracing::debug!(
            "ingest: {} samples, {} rows skipped",
            report.samples.len(),
            report.skipped.len()
        );

        report
    }

    /// Read and parse a delimited export from disk
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<IngestReport> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(self.parse_text(&contents))
    }
}

/// Pick the delimiter of a line: tab, then semicolon, then comma
pub fn detect_delimiter(line: &str) -> char {
    if line.contains('\t') {
        '\t'
    } else if line.contains(';') {
        ';'
    } else {
        ','
    }
}

/// Split a delimited line, honoring double-quoted cells (`""` is a quote)
pub fn split_cells(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            c if c == delimiter && !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }
    cells.push(current);

    cells
}
