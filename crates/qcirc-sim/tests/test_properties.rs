//! Property-based tests for operator construction and sampling.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use qcirc_ir::{GateParams, QubitId};
use qcirc_sim::{
    Calculator, ClassicalState, DenseCalculator, Measurement, OperatorBuilder, QuantumState,
    SimulatedMeasurement,
};

fn arb_params() -> impl Strategy<Value = GateParams> {
    (-6.3_f64..6.3, -6.3_f64..6.3, -6.3_f64..6.3)
        .prop_map(|(theta, phi, lambda)| GateParams::new(theta, phi, lambda))
}

/// A width and a qubit inside it.
fn arb_width_and_qubit() -> impl Strategy<Value = (usize, u32)> {
    (1_usize..=5).prop_flat_map(|n| (Just(n), 0..n as u32))
}

/// A width and two distinct qubits inside it.
fn arb_width_and_pair() -> impl Strategy<Value = (usize, u32, u32)> {
    (2_usize..=5).prop_flat_map(|n| {
        (Just(n), 0..n as u32, 0..n as u32).prop_filter("distinct", |(_, c, t)| c != t)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn single_gate_dimension_is_full_system((n, q) in arb_width_and_qubit(), params in arb_params()) {
        let m = OperatorBuilder::new(n).u3(&params, QubitId(q)).unwrap();
        prop_assert_eq!(m.dim(), (1 << n, 1 << n));
    }

    #[test]
    fn controlled_gate_dimension_is_full_system((n, c, t) in arb_width_and_pair(), params in arb_params()) {
        let m = OperatorBuilder::new(n).cu(&params, QubitId(c), QubitId(t)).unwrap();
        prop_assert_eq!(m.dim(), (1 << n, 1 << n));
    }

    #[test]
    fn inverse_angles_undo_the_gate((n, q) in arb_width_and_qubit(), params in arb_params()) {
        let builder = OperatorBuilder::new(n);
        let mut state = ClassicalState::ground(n);
        // Spread the state so every amplitude takes part.
        for k in 0..n as u32 {
            let h = builder.u3(&GateParams::h(), QubitId(k)).unwrap();
            DenseCalculator.calculate_state(&h, &mut state).unwrap();
        }
        let before = state.vector().clone();

        let forward = builder.u3(&params, QubitId(q)).unwrap();
        let backward = builder.u3(&params.inverse(), QubitId(q)).unwrap();
        DenseCalculator.calculate_state(&forward, &mut state).unwrap();
        DenseCalculator.calculate_state(&backward, &mut state).unwrap();

        for (a, b) in before.iter().zip(state.vector().iter()) {
            prop_assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn tally_always_sums_to_shots(shots in 1_u32..2000, seed in any::<u64>(), (n, q) in arb_width_and_qubit(), params in arb_params()) {
        let mut state = ClassicalState::ground(n);
        let m = OperatorBuilder::new(n).u3(&params, QubitId(q)).unwrap();
        DenseCalculator.calculate_state(&m, &mut state).unwrap();

        let mut rng = StdRng::seed_from_u64(seed);
        let counts = SimulatedMeasurement.sample(&state, n, shots, &mut rng).unwrap();
        prop_assert_eq!(counts.total_shots(), u64::from(shots));
        prop_assert!(counts.iter().all(|(label, _)| label.len() == n));
    }

    #[test]
    fn basis_state_always_measures_itself(n in 1_usize..=6, index_seed in any::<usize>(), shots in 1_u32..500) {
        let index = index_seed % (1 << n);
        let mut state = ClassicalState::ground(n);
        let mut v = state.vector().mapv(|_| num_complex::Complex64::new(0.0, 0.0));
        v[index] = num_complex::Complex64::new(1.0, 0.0);
        state.replace_vector(v);

        let mut rng = StdRng::seed_from_u64(index as u64);
        let counts = SimulatedMeasurement.sample(&state, n, shots, &mut rng).unwrap();
        prop_assert_eq!(counts.len(), 1);
        prop_assert_eq!(counts.get(&qcirc_sim::basis_label(index, n)), u64::from(shots));
    }
}
