pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_PATH: &str = ".";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "buy-black")]
#[command(version)]
#[command(about = "Compute the symbolic reparations debt for an age")]
pub struct CliConfig {
    /// Age in years
    #[arg(allow_negative_numbers = true)]
    pub age: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// CSV with year,total_population,subgroup_population rows
    #[arg(long)]
    pub demographics: Option<String>,

    /// CSV with a percent column
    #[arg(long)]
    pub leadership: Option<String>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Base directory for dataset and report paths
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Include the per-year population percentages
    #[arg(long)]
    pub show_yearly: bool,

    /// Read one age per line from stdin
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn base_path(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_BASE_PATH)
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn demographics_file(&self) -> Option<&str> {
        self.demographics.as_deref()
    }

    fn leadership_file(&self) -> Option<&str> {
        self.leadership.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn show_yearly(&self) -> bool {
        self.show_yearly
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_optional_path("config", self.config.as_deref())?;
        validation::validate_optional_path("data_dir", self.data_dir.as_deref())?;
        validate_provider(self)
    }
}

/// Checks shared by every [`ConfigProvider`].
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    let dataset_files: Vec<&str> = [config.demographics_file(), config.leadership_file()]
        .into_iter()
        .flatten()
        .collect();
    for file in &dataset_files {
        validation::validate_path("datasets", file)?;
    }
    validation::validate_file_extensions("datasets", &dataset_files, &["csv"])?;

    if let Some(output) = config.output_path() {
        validation::validate_path("output", output)?;
        validation::validate_output_extension("output", output, config.output_format())?;
    }
    Ok(())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_arguments() {
        let config = CliConfig::parse_from([
            "buy-black",
            "30",
            "--format",
            "json",
            "--output",
            "report.json",
            "--show-yearly",
        ]);
        assert_eq!(config.age.as_deref(), Some("30"));
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output_path(), Some("report.json"));
        assert!(config.show_yearly());
        assert_eq!(config.base_path(), ".");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_age_reaches_the_calculator() {
        let config = CliConfig::parse_from(["buy-black", "-4"]);
        assert_eq!(config.age.as_deref(), Some("-4"));
    }

    #[test]
    fn test_defaults_to_text_on_stdout() {
        let config = CliConfig::parse_from(["buy-black"]);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.output_path(), None);
        assert_eq!(config.demographics_file(), None);
    }

    #[test]
    fn test_validation_rejects_non_csv_dataset() {
        let config = CliConfig::parse_from(["buy-black", "30", "--demographics", "census.xlsx"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_mismatched_output_extension() {
        let config = CliConfig::parse_from(["buy-black", "30", "--output", "report.csv"]);
        assert!(config.validate().is_err());
    }
}
