use crate::domain::model::{BalanceReport, ProcessInput, ProcessResult};
use crate::utils::error::Result;

/// Source of the three process values (CLI flags, TOML file, prompt answers).
pub trait ParameterProvider {
    fn initial_mass(&self) -> f64;
    fn initial_brix(&self) -> f64;
    fn target_brix(&self) -> f64;

    fn process_input(&self) -> ProcessInput {
        ProcessInput::new(self.initial_mass(), self.initial_brix(), self.target_brix())
    }
}

impl ParameterProvider for ProcessInput {
    fn initial_mass(&self) -> f64 {
        self.initial_mass
    }

    fn initial_brix(&self) -> f64 {
        self.initial_brix
    }

    fn target_brix(&self) -> f64 {
        self.target_brix
    }
}

pub trait Solver {
    fn solve(&self, input: &ProcessInput) -> Result<ProcessResult>;
}

pub trait Reporter {
    fn render(&self, report: &BalanceReport) -> Result<String>;
}
