pub mod engine;
pub mod report;
pub mod solver;

pub use crate::domain::model::{BalanceReport, ProcessInput, ProcessResult};
pub use crate::domain::ports::{ParameterProvider, Reporter, Solver};
pub use crate::utils::error::Result;
