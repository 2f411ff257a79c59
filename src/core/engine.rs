use crate::core::solver::MassBalanceSolver;
use crate::core::{BalanceReport, ParameterProvider, Solver};
use crate::utils::error::Result;

pub struct BalanceEngine<S: Solver> {
    solver: S,
}

impl<S: Solver> BalanceEngine<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    pub fn run<P: ParameterProvider + ?Sized>(&self, provider: &P) -> Result<BalanceReport> {
        let input = provider.process_input();
        tracing::debug!(
            initial_mass = input.initial_mass,
            initial_brix = input.initial_brix,
            target_brix = input.target_brix,
            "Computing sugar addition"
        );

        let result = match self.solver.solve(&input) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Mass balance rejected: {}", e);
                return Err(e);
            }
        };

        tracing::info!(
            sugar_to_add = result.sugar_to_add,
            final_mass = result.final_mass,
            "Mass balance solved"
        );

        Ok(BalanceReport::new(input, result))
    }
}

impl Default for BalanceEngine<MassBalanceSolver> {
    fn default() -> Self {
        Self::new(MassBalanceSolver)
    }
}
