//! Property-based tests for the validator.
//!
//! Each property starts from a solution built by replaying the route walk,
//! which the validator must accept, and then breaks exactly one thing.
#![expect(
    clippy::indexing_slicing,
    clippy::float_arithmetic,
    reason = "generated fixtures have known dimensions and whole-number times"
)]


use proptest::prelude::*;
use routecheck_core::Validator;

use proptest_support::{
    chain_instance_strategy, checked_demand, checked_positions, consistent_solution,
    pairing_strategy,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A consistent solution produces an empty report under either pairing.
    #[test]
    fn consistent_solutions_pass(
        instance in chain_instance_strategy(),
        mode in pairing_strategy(),
    ) {
        let solution = consistent_solution(&instance, mode);
        let report = Validator::new(mode)
            .validate(&instance, &solution)
            .expect("generated instances are sound");
        prop_assert!(report.is_empty(), "unexpected report:\n{}", report);
    }

    /// Shifting one checked arrival yields exactly one timing message.
    #[test]
    fn one_altered_arrival_yields_one_message(
        instance in chain_instance_strategy(),
        mode in pairing_strategy(),
        pick in any::<prop::sample::Index>(),
        shift in 1_u8..50,
    ) {
        let mut solution = consistent_solution(&instance, mode);
        let positions = checked_positions(mode, instance.clients.len());
        let position = positions.start + pick.index(positions.len());
        let stop = &mut solution.routes[0].stops[position];
        stop.arrive_time += f64::from(shift);
        let client_id = stop.client_id;

        let report = Validator::new(mode)
            .validate(&instance, &solution)
            .expect("generated instances are sound");

        prop_assert_eq!(report.len(), 1);
        let routes: Vec<_> = report.subreports().collect();
        prop_assert_eq!(routes.len(), 1);
        let messages: Vec<_> = routes[0].messages().collect();
        prop_assert_eq!(messages.len(), 1);
        let prefix = format!("Client {client_id} arrival time is ");
        prop_assert!(messages[0].starts_with(&prefix), "{}", messages[0]);
        prop_assert!(messages[0].contains("but solution records"), "{}", messages[0]);
    }

    /// A misquoted value is the only finding and sits at the root.
    #[test]
    fn misquoted_value_is_reported_at_root(
        instance in chain_instance_strategy(),
        mode in pairing_strategy(),
        delta in 1_u8..100,
    ) {
        let mut solution = consistent_solution(&instance, mode);
        let expected = solution.value;
        solution.value += f64::from(delta);

        let report = Validator::new(mode)
            .validate(&instance, &solution)
            .expect("generated instances are sound");

        let messages: Vec<_> = report.messages().collect();
        prop_assert_eq!(report.len(), 1);
        prop_assert_eq!(
            messages,
            vec![format!("Expected solution value of {expected}, found {}", solution.value)]
        );
    }

    /// Overloading the vehicle reports the excess once per route.
    #[test]
    fn overload_reports_the_excess(
        mut instance in chain_instance_strategy(),
        mode in pairing_strategy(),
    ) {
        let demand = checked_demand(&instance, mode);
        prop_assume!(demand > 0);
        instance.vehicles[0].capacity = 0;
        let solution = consistent_solution(&instance, mode);

        let report = Validator::new(mode)
            .validate(&instance, &solution)
            .expect("generated instances are sound");

        let routes: Vec<_> = report.subreports().collect();
        prop_assert_eq!(routes.len(), 1);
        prop_assert_eq!(
            routes[0].messages().collect::<Vec<_>>(),
            vec![format!("Vehicle 7 exceeds its capacity by {demand}")]
        );
    }

    /// Validation has no hidden state.
    #[test]
    fn validation_is_deterministic(
        instance in chain_instance_strategy(),
        mode in pairing_strategy(),
        delta in 0_u8..3,
    ) {
        let mut solution = consistent_solution(&instance, mode);
        solution.value += f64::from(delta);
        let validator = Validator::new(mode);
        let first = validator.validate(&instance, &solution).expect("sound");
        let second = validator.validate(&instance, &solution).expect("sound");
        prop_assert_eq!(first, second);
    }
}
