use mockall::mock;
use pesim_core::PeDevice;
use pesim_core::core::pipeline::signals::PeInputs;

mock! {
    pub Device {}
    impl PeDevice for Device {
        fn set_clk(&mut self, level: bool);
        fn set_rst_n(&mut self, level: bool);
        fn set_valid_in(&mut self, valid: bool);
        fn apply(&mut self, inputs: &PeInputs);
        fn eval(&mut self);
        fn partial_sum_out(&self) -> i64;
    }
}

/// Pin activity recorded by [`RecordingDevice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinEvent {
    Clk(bool),
    RstN(bool),
    ValidIn(bool),
    Apply(PeInputs),
    Eval,
}

/// A device that only records the order in which its pins are driven.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    pub events: Vec<PinEvent>,
    pub out: i64,
}

impl PeDevice for RecordingDevice {
    fn set_clk(&mut self, level: bool) {
        self.events.push(PinEvent::Clk(level));
    }

    fn set_rst_n(&mut self, level: bool) {
        self.events.push(PinEvent::RstN(level));
    }

    fn set_valid_in(&mut self, valid: bool) {
        self.events.push(PinEvent::ValidIn(valid));
    }

    fn apply(&mut self, inputs: &PeInputs) {
        self.events.push(PinEvent::Apply(*inputs));
    }

    fn eval(&mut self) {
        self.events.push(PinEvent::Eval);
    }

    fn partial_sum_out(&self) -> i64 {
        self.out
    }
}
