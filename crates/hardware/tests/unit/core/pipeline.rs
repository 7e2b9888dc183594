//! MAC Pipeline Unit Tests.
//!
//! Verifies record capture at issue, the shift register ordering, and the
//! latch status helpers.

use pesim_core::common::constants::PIPELINE_DEPTH;
use pesim_core::core::pipeline::latches::{MacOp, MacPipeline};
use pesim_core::core::pipeline::signals::{ControlSignals, PeInputs};
use pesim_core::core::pipeline::traits::PipelineLatch;
use rstest::rstest;

#[rstest]
#[case(5, 3, 15)]
#[case(-7, 6, -42)]
#[case(0, 1234, 0)]
#[case(-20, -20, 400)]
#[case(i32::MAX, i32::MAX, 4_611_686_014_132_420_609)]
#[case(i32::MIN, i32::MIN, 4_611_686_018_427_387_904)]
fn issue_computes_full_width_product(#[case] data: i32, #[case] weight: i32, #[case] product: i64) {
    let op = MacOp::issue(&PeInputs::mac(data, weight));
    assert!(op.valid);
    assert_eq!(op.product, product);
    assert_eq!((op.data, op.weight), (data, weight));
}

#[test]
fn issue_captures_control_flags() {
    let op = MacOp::issue(&PeInputs::mac(1, 1).accumulate().clear());
    assert_eq!(
        op.ctrl,
        ControlSignals {
            accumulate_en: true,
            clear_acc: true,
        }
    );
}

#[test]
fn issue_without_valid_is_a_bubble() {
    let op = MacOp::issue(&PeInputs::mac(9, 9).accumulate().flush());
    assert!(!op.valid);
    assert_eq!(op.product, 0, "no product is computed for a flushed cycle");
    assert!(!op.ctrl.accumulate_en);
    assert!(op.is_inert());
}

#[test]
fn bubble_keeps_clear() {
    let op = MacOp::issue(&PeInputs::idle().clear());
    assert!(!op.valid);
    assert!(op.ctrl.clear_acc);
    assert!(!op.is_inert());
}

#[test]
fn partial_sum_is_not_captured() {
    let plain = MacOp::issue(&PeInputs::mac(2, 2));
    let injected = MacOp::issue(&PeInputs::mac(2, 2).with_partial_sum(50));
    assert_eq!(plain, injected);
}

#[test]
fn new_pipeline_is_empty() {
    let p = MacPipeline::new();
    assert!(p.is_empty());
    assert!(!p.has_valid());
    assert_eq!(p.in_flight(), 0);
}

#[test]
fn shift_in_reaches_final_stage_after_depth_shifts() {
    let mut p = MacPipeline::new();
    let op = MacOp::issue(&PeInputs::mac(5, 3));

    let mut completing = p.shift_in(op);
    for _ in 1..PIPELINE_DEPTH {
        assert!(!completing.valid);
        completing = p.shift_in(MacOp::default());
    }
    assert_eq!(completing, op);
    assert_eq!(p.stage(PIPELINE_DEPTH), Some(&op));
}

#[test]
fn stages_are_ordered_newest_first() {
    let mut p = MacPipeline::new();
    let a = MacOp::issue(&PeInputs::mac(1, 1));
    let b = MacOp::issue(&PeInputs::mac(2, 2));
    let c = MacOp::issue(&PeInputs::mac(3, 3));
    let _ = p.shift_in(a);
    let _ = p.shift_in(b);
    let _ = p.shift_in(c);

    assert_eq!(p.stages(), &[c, b, a]);
    assert_eq!(p.stage(1), Some(&c));
    assert_eq!(p.stage(3), Some(&a));
    assert_eq!(p.in_flight(), 3);
}

#[test]
fn stage_index_is_one_based() {
    let p = MacPipeline::new();
    assert!(p.stage(0).is_none());
    assert!(p.stage(1).is_some());
    assert!(p.stage(PIPELINE_DEPTH + 1).is_none());
}

#[test]
fn flush_empties_every_stage() {
    let mut p = MacPipeline::new();
    let _ = p.shift_in(MacOp::issue(&PeInputs::mac(4, 4)));
    let _ = p.shift_in(MacOp::bubble(true));
    assert!(p.has_valid());
    assert!(!p.is_empty());

    p.flush();
    assert!(p.is_empty());
    assert!(!p.has_valid());
}

#[test]
fn pending_clear_is_not_empty() {
    let mut p = MacPipeline::new();
    let _ = p.shift_in(MacOp::bubble(true));
    assert!(!p.has_valid());
    assert!(!p.is_empty());
}
