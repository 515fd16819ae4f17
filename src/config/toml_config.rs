use crate::config::{validate_provider, DEFAULT_BASE_PATH};
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{DebtError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub report: ReportConfig,
    pub datasets: DatasetsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: OutputFormat,
    pub output_path: Option<String>,
    pub show_yearly: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetsConfig {
    pub base_path: String,
    pub demographics: Option<String>,
    pub leadership: Option<String>,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            demographics: None,
            leadership: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DebtError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DebtError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DebtError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Explicit command-line flags win over file values.
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(format) = cli.format {
            self.report.format = format;
        }
        if let Some(output) = &cli.output {
            self.report.output_path = Some(output.clone());
        }
        if cli.show_yearly {
            self.report.show_yearly = true;
        }
        if let Some(data_dir) = &cli.data_dir {
            self.datasets.base_path = data_dir.clone();
        }
        if let Some(demographics) = &cli.demographics {
            self.datasets.demographics = Some(demographics.clone());
        }
        if let Some(leadership) = &cli.leadership {
            self.datasets.leadership = Some(leadership.clone());
        }
        if cli.verbose {
            self.logging.verbose = true;
        }
        if cli.log_json {
            self.logging.json = true;
        }
    }

    pub fn base_path(&self) -> &str {
        &self.datasets.base_path
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("datasets.base_path", &self.datasets.base_path)?;
        validation::validate_path("datasets.base_path", &self.datasets.base_path)?;
        validate_provider(self)
    }
}

impl ConfigProvider for TomlConfig {
    fn demographics_file(&self) -> Option<&str> {
        self.datasets.demographics.as_deref()
    }

    fn leadership_file(&self) -> Option<&str> {
        self.datasets.leadership.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.report.format
    }

    fn output_path(&self) -> Option<&str> {
        self.report.output_path.as_deref()
    }

    fn show_yearly(&self) -> bool {
        self.report.show_yearly
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[report]
format = "json"
output_path = "./out/report.json"
show_yearly = true

[datasets]
base_path = "./data"
demographics = "census.csv"
leadership = "ceos.csv"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output_path(), Some("./out/report.json"));
        assert!(config.show_yearly());
        assert_eq!(config.base_path(), "./data");
        assert_eq!(config.demographics_file(), Some("census.csv"));
        assert!(config.logging.verbose);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.base_path(), ".");
        assert_eq!(config.leadership_file(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BUY_BLACK_TEST_DATA_DIR", "/srv/census");

        let toml_content = r#"
[datasets]
base_path = "${BUY_BLACK_TEST_DATA_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_path(), "/srv/census");

        std::env::remove_var("BUY_BLACK_TEST_DATA_DIR");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml_content = r#"
[report]
format = "xml"
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(DebtError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[report]
format = "csv"
output_path = "report.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file_values() {
        use clap::Parser;

        let mut config = TomlConfig::from_toml_str(
            r#"
[report]
format = "json"
output_path = "report.json"
"#,
        )
        .unwrap();
        let cli = crate::config::CliConfig::parse_from([
            "buy-black",
            "30",
            "--format",
            "csv",
            "--output",
            "report.csv",
        ]);

        config.apply_cli_overrides(&cli);
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert_eq!(config.output_path(), Some("report.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[report]
show_yearly = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.show_yearly());
    }
}
