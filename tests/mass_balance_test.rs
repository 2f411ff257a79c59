use brix_calc::{solve, BrixError, ProcessInput};

const TOLERANCE: f64 = 1e-9;

fn grid() -> Vec<(f64, f64, f64)> {
    let masses = [0.1, 1.0, 10.0, 50.0, 250.0, 1000.0];
    let brix = [0.0, 1.0, 7.0, 12.5, 30.0, 65.0, 99.0];
    let mut cases = Vec::new();

    for &mass in &masses {
        for &initial in &brix {
            for &target in &brix {
                if target > initial {
                    cases.push((mass, initial, target));
                }
            }
            cases.push((mass, initial, 99.9));
        }
    }
    cases
}

#[test]
fn test_sugar_and_final_mass_increase() {
    for (mass, initial, target) in grid() {
        let result = solve(mass, initial, target).unwrap();
        assert!(result.sugar_to_add > 0.0, "{} {} {}", mass, initial, target);
        assert!(result.final_mass > mass, "{} {} {}", mass, initial, target);
        assert_eq!(result.final_mass, mass + result.sugar_to_add);
    }
}

#[test]
fn test_solids_are_conserved() {
    for (mass, initial, target) in grid() {
        let result = solve(mass, initial, target).unwrap();
        let before = mass * initial / 100.0 + result.sugar_to_add;
        let after = result.final_mass * target / 100.0;
        // Relative to the magnitude so large pulp batches use the same bound.
        let scale = before.abs().max(1.0);
        assert!(
            (before - after).abs() / scale < TOLERANCE,
            "{} {} {}: {} vs {}",
            mass,
            initial,
            target,
            before,
            after
        );
    }
}

#[test]
fn test_solve_is_deterministic() {
    for (mass, initial, target) in grid() {
        assert_eq!(solve(mass, initial, target).unwrap(), solve(mass, initial, target).unwrap());
    }
}

#[test]
fn test_equal_target_fails() {
    for brix in [0.0, 7.0, 50.0, 100.0] {
        let err = solve(10.0, brix, brix).unwrap_err();
        assert!(matches!(err, BrixError::InvalidTargetConcentration { .. }));
    }
}

#[test]
fn test_target_of_one_hundred_fails() {
    let err = solve(50.0, 7.0, 100.0).unwrap_err();
    assert!(matches!(err, BrixError::InvalidTargetConcentration { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_reference_scenarios() {
    let first = solve(50.0, 7.0, 10.0).unwrap();
    assert_eq!(format!("{:.2}", first.sugar_to_add), "1.67");
    assert_eq!(format!("{:.2}", first.final_mass), "51.67");

    let second = ProcessInput::new(100.0, 5.0, 8.0).solve().unwrap();
    assert_eq!(format!("{:.2}", second.sugar_to_add), "3.26");
    assert_eq!(format!("{:.2}", second.final_mass), "103.26");

    assert!(matches!(
        solve(10.0, 7.0, 7.0),
        Err(BrixError::InvalidTargetConcentration { .. })
    ));
}

#[test]
fn test_overflowing_mass_is_rejected() {
    match solve(1e308, 7.0, 99.9) {
        Err(BrixError::InvalidConfigValueError { field, reason, .. }) => {
            assert_eq!(field, "initial_mass");
            assert!(reason.contains("f64 range"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_target_indistinguishable_from_initial_is_rejected() {
    let target = f64::from_bits(7.0f64.to_bits() + 1);
    assert!(target > 7.0);
    let err = solve(0.1, 7.0, target).unwrap_err();
    assert!(matches!(err, BrixError::InvalidTargetConcentration { .. }));
}
