use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_MASS_KG: f64 = 50.0;
pub const DEFAULT_INITIAL_BRIX: f64 = 7.0;
pub const DEFAULT_TARGET_BRIX: f64 = 10.0;

/// Pulp state before standardisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// Pulp mass in kilograms.
    pub initial_mass: f64,
    /// Soluble solids of the pulp, percent by mass.
    pub initial_brix: f64,
    /// Desired soluble solids after adding sugar, percent by mass.
    pub target_brix: f64,
}

impl ProcessInput {
    pub fn new(initial_mass: f64, initial_brix: f64, target_brix: f64) -> Self {
        Self {
            initial_mass,
            initial_brix,
            target_brix,
        }
    }

    /// Mass of soluble solids already in the pulp, kg.
    pub fn initial_solids(&self) -> f64 {
        self.initial_mass * (self.initial_brix / 100.0)
    }

    pub fn solve(&self) -> crate::utils::error::Result<ProcessResult> {
        crate::core::solver::solve(self.initial_mass, self.initial_brix, self.target_brix)
    }
}

impl Default for ProcessInput {
    fn default() -> Self {
        Self::new(
            DEFAULT_INITIAL_MASS_KG,
            DEFAULT_INITIAL_BRIX,
            DEFAULT_TARGET_BRIX,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Sugar (100% solids) to add, kg.
    pub sugar_to_add: f64,
    /// Pulp mass after the addition, kg.
    pub final_mass: f64,
}

/// Everything the presentation layer shows for one computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceReport {
    pub input: ProcessInput,
    pub result: ProcessResult,
    pub initial_solids: f64,
    pub final_solids: f64,
    pub computed_at: DateTime<Utc>,
}

impl BalanceReport {
    pub fn new(input: ProcessInput, result: ProcessResult) -> Self {
        Self {
            initial_solids: input.initial_solids(),
            final_solids: result.final_mass * (input.target_brix / 100.0),
            input,
            result,
            computed_at: Utc::now(),
        }
    }
}
