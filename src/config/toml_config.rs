use crate::core::report::OutputFormat;
use crate::utils::error::{BrixError, Result};
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const MAX_DECIMALS: usize = 6;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub process: ProcessConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessConfig {
    pub initial_mass_kg: Option<f64>,
    pub initial_brix: Option<f64>,
    pub target_brix: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub decimals: Option<usize>,
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BrixError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BrixError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BrixError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output.format.as_deref().map(str::parse::<OutputFormat>).transpose()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        if let Some(decimals) = self.output.decimals {
            validate_range("output.decimals", decimals, 0, MAX_DECIMALS)?;
        }

        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
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
[process]
initial_mass_kg = 100.0
initial_brix = 5.0
target_brix = 8.0

[output]
format = "json"
decimals = 3
pretty = false

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.process.initial_mass_kg, Some(100.0));
        assert_eq!(config.process.target_brix, Some(8.0));
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Json));
        assert_eq!(config.output.decimals, Some(3));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_are_left_unset() {
        let config = TomlConfig::from_toml_str("[process]\ntarget_brix = 12.5\n").unwrap();

        assert_eq!(config.process.initial_mass_kg, None);
        assert_eq!(config.process.initial_brix, None);
        assert_eq!(config.process.target_brix, Some(12.5));
        assert!(config.validate().is_ok());
        assert_eq!(config.output_format().unwrap(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BRIX_CALC_TEST_PULP_MASS", "75.5");

        let toml_content = r#"
[process]
initial_mass_kg = ${BRIX_CALC_TEST_PULP_MASS}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.process.initial_mass_kg, Some(75.5));

        std::env::remove_var("BRIX_CALC_TEST_PULP_MASS");
    }

    #[test]
    fn test_unset_env_var_is_parse_error() {
        let err = TomlConfig::from_toml_str("[process]\ninitial_brix = ${BRIX_CALC_TEST_UNSET}\n")
            .unwrap_err();
        assert!(matches!(err, BrixError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = TomlConfig::from_toml_str("[process]\ninitial_mass = 10.0\n").unwrap_err();
        assert!(err.to_string().contains("toml_parsing"));
    }

    #[test]
    fn test_config_validation() {
        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"csv\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_decimals = TomlConfig::from_toml_str("[output]\ndecimals = 9\n").unwrap();
        assert!(bad_decimals.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[process]\ninitial_mass_kg = 10.0\ninitial_brix = 7.0\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.process.initial_mass_kg, Some(10.0));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/brix-calc.toml").unwrap_err();
        assert!(matches!(err, BrixError::IoError(_)));
    }
}
