use crate::solver::tests::fixtures::corridor;
use crate::{SolveError, SolverConfig, SolverConfigError, solve};

#[test]
fn default_yaml_parses_and_validates() {
    let config = SolverConfig::from_default_yaml().expect("bundled config is valid");

    assert_eq!(config.gamma, 0.9);
    assert_eq!(config.epsilon, 1e-6);
    assert_eq!(config.max_sweeps, 10_000);
}

#[test]
fn partial_yaml_falls_back_to_defaults() {
    let config = SolverConfig::from_yaml_str("gamma: 0.5").expect("valid yaml");

    assert_eq!(config.gamma, 0.5);
    assert_eq!(config.epsilon, SolverConfig::default().epsilon);
    assert_eq!(config.max_sweeps, SolverConfig::default().max_sweeps);
}

#[test]
fn gamma_outside_unit_interval_is_rejected() {
    for gamma in [0.0, -0.5, 1.5, f64::NAN] {
        let err = SolverConfig {
            gamma,
            ..SolverConfig::default()
        }
        .validate()
        .expect_err("gamma out of range");

        assert!(matches!(err, SolverConfigError::Invalid(_)));
    }
}

#[test]
fn non_positive_epsilon_is_rejected() {
    let err = SolverConfig {
        epsilon: 0.0,
        ..SolverConfig::default()
    }
    .validate()
    .expect_err("epsilon must be positive");

    assert!(matches!(err, SolverConfigError::Invalid(_)));
}

#[test]
fn solve_revalidates_a_hand_built_config() {
    let cfg = SolverConfig {
        gamma: 2.0,
        ..SolverConfig::default()
    };
    let err = solve(&corridor(), &cfg).expect_err("invalid config");

    assert!(matches!(err, SolveError::InvalidConfig { .. }));
}
