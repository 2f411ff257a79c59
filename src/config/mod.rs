#[cfg(feature = "cli")]
pub mod cli;
pub mod interactive;
pub mod toml_config;

use crate::core::report::{OutputFormat, DEFAULT_DECIMALS};
use crate::core::{ParameterProvider, ProcessInput, Reporter};
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use toml_config::{TomlConfig, LOG_LEVELS, MAX_DECIMALS};

/// Fully resolved run settings. Layers are applied on top of `Settings::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: ProcessInput,
    pub format: OutputFormat,
    pub decimals: usize,
    pub pretty: bool,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: ProcessInput::default(),
            format: OutputFormat::Text,
            decimals: DEFAULT_DECIMALS,
            pretty: true,
            log_level: None,
        }
    }
}

impl Settings {
    pub fn apply_toml(&mut self, config: &TomlConfig) -> Result<()> {
        config.validate()?;

        let process = &config.process;
        if let Some(mass) = process.initial_mass_kg {
            self.input.initial_mass = mass;
        }
        if let Some(brix) = process.initial_brix {
            self.input.initial_brix = brix;
        }
        if let Some(brix) = process.target_brix {
            self.input.target_brix = brix;
        }

        if let Some(format) = config.output_format()? {
            self.format = format;
        }
        if let Some(decimals) = config.output.decimals {
            self.decimals = decimals;
        }
        if let Some(pretty) = config.output.pretty {
            self.pretty = pretty;
        }
        if let Some(level) = config.log_level() {
            self.log_level = Some(level.to_string());
        }

        Ok(())
    }

    pub fn reporter(&self) -> Box<dyn Reporter> {
        self.format.reporter(self.decimals, self.pretty)
    }
}

impl ParameterProvider for Settings {
    fn initial_mass(&self) -> f64 {
        self.input.initial_mass
    }

    fn initial_brix(&self) -> f64 {
        self.input.initial_brix
    }

    fn target_brix(&self) -> f64 {
        self.input.target_brix
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("output.decimals", self.decimals, 0, MAX_DECIMALS)?;
        if let Some(level) = &self.log_level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
