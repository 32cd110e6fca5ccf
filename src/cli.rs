//! CLI argument parsing for titlecast

use crate::config::{Config, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "titlecast")]
#[command(version)]
#[command(
    about = "Predict title numbers from house numbers by linear regression",
    long_about = None
)]
pub struct Cli {
    /// Delimited export with house number and title cells (CSV, TSV or ;-separated)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// House number to predict the title number for
    #[arg(
        short = 't',
        long = "target",
        value_name = "HOUSE",
        required_unless_present = "list_categories"
    )]
    pub target: Option<String>,

    /// Only use samples with this category label (repeatable; default: all)
    #[arg(short = 'C', long = "category", value_name = "LABEL")]
    pub categories: Vec<String>,

    /// List the category labels found in the input and exit
    #[arg(long = "list-categories")]
    pub list_categories: bool,

    /// Output format (overrides config)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (titlecast.toml)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Shortest digit run accepted as a title number (overrides config)
    #[arg(long = "min-title-digits", value_name = "N")]
    pub min_title_digits: Option<usize>,

    /// Keep rows whose house number has a letter suffix (12A)
    #[arg(long = "keep-suffixed")]
    pub keep_suffixed: bool,

    /// Cell delimiter (default: detected)
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Skip the first line of the input
    #[arg(long = "header")]
    pub header: bool,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(digits) = self.min_title_digits {
            config.parser.min_title_digits = digits;
        }
        if self.keep_suffixed {
            config.parser.skip_suffixed = false;
        }
        if let Some(delimiter) = self.delimiter {
            config.parser.delimiter = Some(delimiter);
        }
        if self.header {
            config.parser.has_header = true;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        config
    }
}
