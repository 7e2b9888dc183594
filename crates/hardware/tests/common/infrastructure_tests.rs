use super::harness::TestContext;
use super::mocks::device::{PinEvent, RecordingDevice};
use pesim_core::PeDevice;
use pesim_core::core::pipeline::signals::PeInputs;

#[test]
fn context_starts_from_power_up_state() {
    let tc = TestContext::new();
    assert_eq!(tc.out(), 0);
    assert_eq!(tc.pe.edges(), 0);
}

#[test]
fn context_after_reset_consumed_two_edges() {
    let tc = TestContext::after_reset();
    assert_eq!(tc.pe.edges(), 2);
    assert!(tc.state().is_reset());
}

#[test]
fn trace_returns_one_sample_per_edge() {
    let mut tc = TestContext::after_reset();
    let samples = tc.trace(PeInputs::idle(), 4);
    assert_eq!(samples.len(), 4);
    assert_eq!(tc.pe.edges(), 6);
}

#[test]
fn recording_device_keeps_event_order() {
    let mut dev = RecordingDevice::default();
    dev.set_clk(true);
    dev.eval();
    assert_eq!(dev.events, vec![PinEvent::Clk(true), PinEvent::Eval]);
}
