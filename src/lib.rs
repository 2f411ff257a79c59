pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::Settings;
pub use crate::core::{
    engine::BalanceEngine,
    solver::{solve, MassBalanceSolver},
};
pub use crate::domain::model::{BalanceReport, ProcessInput, ProcessResult};
pub use crate::utils::error::{BrixError, Result};
