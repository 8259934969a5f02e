use proptest::prelude::*;

use gridplan_env::{Environment, GridBuilder, GridWorld};

use crate::{SolverConfig, UtilityMap, extract_policy, solve, solve_with_metrics};

fn world_with(slip: f64, step_reward: f64) -> GridWorld {
    let mut builder = GridBuilder::new(4, 3);
    builder.step_reward(step_reward).slip(slip);
    builder.block(1, 1).expect("in bounds");
    builder.positive_terminal(3, 0, 1.0).expect("in bounds");
    builder.negative_terminal(3, 1, -1.0).expect("in bounds");
    builder.compile().expect("world compiles")
}

proptest! {
    #[test]
    fn sweep_deltas_contract_and_utilities_stay_bounded(
        slip in 0.0_f64..=1.0,
        gamma in 0.5_f64..0.99,
        step_reward in -0.2_f64..0.2,
    ) {
        let world = world_with(slip, step_reward);
        let config = SolverConfig { gamma, epsilon: 1e-6, max_sweeps: 10_000 };

        let zeros = UtilityMap::new(world.states().into_iter().map(|s| (s, 0.0)).collect());
        let (utilities, metrics) =
            solve_with_metrics(&world, &config, &zeros).expect("contracting model converges");

        // The Bellman operator is a gamma-contraction in the max norm, so
        // each sweep shrinks the delta by at least that factor.
        for pair in metrics.deltas.windows(2) {
            prop_assert!(pair[1] >= 0.0);
            prop_assert!(pair[1] <= pair[0] * gamma + 1e-12);
        }

        // Discounted utilities are geometrically bounded by the max reward.
        let reward_cap = step_reward.abs().max(1.0);
        let bound = reward_cap / (1.0 - gamma) + 1e-9;
        for (_, utility) in utilities.iter() {
            prop_assert!(utility.is_finite());
            prop_assert!(utility.abs() <= bound);
        }
    }

    #[test]
    fn policy_is_a_pure_function_of_utilities(
        slip in 0.0_f64..=1.0,
        gamma in 0.5_f64..0.99,
    ) {
        let world = world_with(slip, -0.04);
        let config = SolverConfig { gamma, epsilon: 1e-6, max_sweeps: 10_000 };
        let utilities = solve(&world, &config).expect("contracting model converges");

        let first = extract_policy(&utilities, &world).expect("extraction succeeds");
        let second = extract_policy(&utilities, &world).expect("extraction succeeds");
        prop_assert_eq!(first, second);
    }
}
