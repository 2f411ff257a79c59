//! Solids mass balance for sugar addition.
//!
//! Added sugar is taken as 100% soluble solids and density effects are
//! ignored, so with `x` kg of sugar:
//!
//! ```text
//! (initial_solids + x) / (initial_mass + x) = target_brix / 100
//! ```

use crate::domain::model::{ProcessInput, ProcessResult};
use crate::domain::ports::Solver;
use crate::utils::error::{BrixError, Result};
use crate::utils::validation::{validate_finite, validate_range, validate_strictly_positive};

pub const MAX_BRIX: f64 = 100.0;

/// Sugar to add and resulting mass for raising `initial_brix` to `target_brix`.
///
/// # Errors
///
/// `InvalidConfigValueError` for a non-positive mass or a °Brix outside
/// `[0, 100]`, or when the result overflows f64 for a huge mass;
/// `InvalidTargetConcentration` when the target does not exceed the initial
/// value, equals 100, or is too close to the initial value to resolve.
pub fn solve(initial_mass: f64, initial_brix: f64, target_brix: f64) -> Result<ProcessResult> {
    validate_strictly_positive("initial_mass", initial_mass)?;
    validate_finite("initial_brix", initial_brix)?;
    validate_finite("target_brix", target_brix)?;
    validate_range("initial_brix", initial_brix, 0.0, MAX_BRIX)?;
    validate_range("target_brix", target_brix, 0.0, MAX_BRIX)?;

    if target_brix <= initial_brix {
        return Err(BrixError::InvalidTargetConcentration {
            initial_brix,
            target_brix,
            reason: "adding sugar cannot lower or hold the concentration; the target must be greater than the initial °Brix".to_string(),
        });
    }
    if target_brix >= MAX_BRIX {
        return Err(BrixError::InvalidTargetConcentration {
            initial_brix,
            target_brix,
            reason: "100 °Brix cannot be reached by a finite sugar addition".to_string(),
        });
    }

    let initial_solids = initial_mass * (initial_brix / 100.0);
    let target_fraction = target_brix / 100.0;

    // Denominator is negative for target < 100.
    let sugar_to_add =
        (initial_solids - initial_mass * target_fraction) / (target_fraction - 1.0);

    // Catches -0.0 from a target one ULP above the initial value.
    if !(sugar_to_add > 0.0) {
        return Err(BrixError::InvalidTargetConcentration {
            initial_brix,
            target_brix,
            reason: "target too close to initial to resolve".to_string(),
        });
    }

    let final_mass = initial_mass + sugar_to_add;
    if !sugar_to_add.is_finite() || !final_mass.is_finite() {
        return Err(BrixError::InvalidConfigValueError {
            field: "initial_mass".to_string(),
            value: initial_mass.to_string(),
            reason: "result exceeds f64 range".to_string(),
        });
    }

    Ok(ProcessResult {
        sugar_to_add,
        final_mass,
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MassBalanceSolver;

impl Solver for MassBalanceSolver {
    fn solve(&self, input: &ProcessInput) -> Result<ProcessResult> {
        solve(input.initial_mass, input.initial_brix, input.target_brix)
    }
}
