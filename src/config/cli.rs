use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "brix-calc")]
#[command(about = "Sugar needed to raise the °Brix of a fruit pulp, by solids mass balance")]
pub struct CliConfig {
    /// Initial pulp mass in kg [default: 50.0]
    #[arg(long, value_name = "KG", allow_negative_numbers = true)]
    pub initial_mass: Option<f64>,

    /// Initial soluble solids of the pulp, % [default: 7.0]
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub initial_brix: Option<f64>,

    /// Desired soluble solids after adding sugar, % [default: 10.0]
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub target_brix: Option<f64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ask for the three process values on the terminal
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places in text output [default: 2]
    #[arg(long)]
    pub decimals: Option<usize>,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file if given, then flags.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path.display());
            let config = TomlConfig::from_file(path)?;
            settings.apply_toml(&config)?;
        }

        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(mass) = self.initial_mass {
            settings.input.initial_mass = mass;
        }
        if let Some(brix) = self.initial_brix {
            settings.input.initial_brix = brix;
        }
        if let Some(brix) = self.target_brix {
            settings.input.target_brix = brix;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(decimals) = self.decimals {
            settings.decimals = decimals;
        }
        if self.compact {
            settings.pretty = false;
        }
    }
}
