//! Property Tests.
//!
//! Random stimulus against the behavioral PE: reset, flush, latency and
//! determinism hold for any operand values and flag combinations.

use crate::common::harness::TestContext;
use pesim_core::core::pipeline::signals::PeInputs;
use proptest::prelude::*;

fn arb_inputs() -> impl Strategy<Value = PeInputs> {
    (
        any::<i32>(),
        any::<i32>(),
        any::<i64>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(data_in, weight_in, partial_sum_in, valid_in, accumulate_en, clear_acc, use_ps)| {
                PeInputs {
                    data_in,
                    weight_in,
                    partial_sum_in,
                    valid_in,
                    accumulate_en,
                    clear_acc,
                    use_partial_sum: use_ps,
                }
            },
        )
}

fn arb_history() -> impl Strategy<Value = Vec<(PeInputs, u32)>> {
    prop::collection::vec((arb_inputs(), 1u32..4), 0..12)
}

proptest! {
    #[test]
    fn valid_low_keeps_accumulator_zero(history in prop::collection::vec(arb_inputs(), 1..16)) {
        let mut tc = TestContext::after_reset();
        for inputs in history {
            tc.drive(inputs.flush(), 1);
            prop_assert_eq!(tc.out(), 0);
        }
    }

    #[test]
    fn single_issue_lands_on_third_edge(data in any::<i32>(), weight in any::<i32>()) {
        let mut tc = TestContext::after_reset();
        let product = i64::from(data) * i64::from(weight);

        let mut outputs = tc.trace(PeInputs::mac(data, weight), 1);
        outputs.extend(tc.trace(PeInputs::idle(), 3));
        prop_assert_eq!(outputs, vec![0, 0, product, product]);
    }

    #[test]
    fn reset_from_any_history(history in arb_history()) {
        let mut tc = TestContext::new();
        for (inputs, cycles) in history {
            tc.drive(inputs, cycles);
        }

        tc.reset();
        prop_assert!(tc.state().is_reset());
        prop_assert_eq!(tc.out(), 0);

        let once = *tc.state();
        tc.reset();
        prop_assert_eq!(*tc.state(), once);
    }

    #[test]
    fn devices_are_deterministic(history in arb_history()) {
        let mut a = TestContext::after_reset();
        let mut b = TestContext::after_reset();
        for (inputs, cycles) in history {
            a.drive(inputs, cycles);
            b.drive(inputs, cycles);
            prop_assert_eq!(a.state(), b.state());
        }
    }

    #[test]
    fn accumulate_chain_sums_products(
        ops in prop::collection::vec((-1000i32..1000, -1000i32..1000), 1..10)
    ) {
        let mut tc = TestContext::after_reset();
        for &(d, w) in &ops {
            tc.drive(PeInputs::mac(d, w).accumulate(), 1);
        }
        tc.drive(PeInputs::idle(), 2);

        let expected: i64 = ops.iter().map(|&(d, w)| i64::from(d) * i64::from(w)).sum();
        prop_assert_eq!(tc.out(), expected);
    }
}
