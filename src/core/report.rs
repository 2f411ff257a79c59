use crate::core::{BalanceReport, Reporter};
use crate::utils::error::{BrixError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_DECIMALS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn reporter(self, decimals: usize, pretty: bool) -> Box<dyn Reporter> {
        match self {
            OutputFormat::Text => Box::new(TextReporter { decimals }),
            OutputFormat::Json => Box::new(JsonReporter { pretty }),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = BrixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(BrixError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Allowed values: {}", OutputFormat::NAMES.join(", ")),
            }),
        }
    }
}

/// Labelled lines for a terminal. Values are rounded only here.
#[derive(Debug, Clone, Copy)]
pub struct TextReporter {
    pub decimals: usize,
}

impl Default for TextReporter {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Reporter for TextReporter {
    fn render(&self, report: &BalanceReport) -> Result<String> {
        let d = self.decimals;
        let input = &report.input;
        let mut out = format!(
            "Pulp: {:.d$} kg at {:.1} °Brix -> target {:.1} °Brix\n",
            input.initial_mass, input.initial_brix, input.target_brix
        );
        out.push_str(&format!("Sugar to add: {:.d$} kg\n", report.result.sugar_to_add));
        out.push_str(&format!("Final pulp mass: {:.d$} kg\n", report.result.final_mass));
        out.push_str(&format!(
            "Solids: {:.d$} kg -> {:.d$} kg\n",
            report.initial_solids, report.final_solids
        ));

        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter {
    pub pretty: bool,
}

impl Reporter for JsonReporter {
    fn render(&self, report: &BalanceReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}
