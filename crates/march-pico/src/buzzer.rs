//! Piezo buzzer driven by one RP2040 PWM slice.

use embedded_hal::pwm::SetDutyCycle;
use rp2040_hal::pwm::{FreeRunning, Slice, SliceId};

use march_core::buzzer::Buzzer;
use march_core::pwm::{CLOCK_DIVIDER, ToneParams};

/// Which of the slice's two outputs the buzzer pin is routed to.
pub enum OutputChannel {
    A,
    B,
}

/// Owns a whole PWM slice; the buzzer GPIO must already be routed to the
/// given output channel via `output_to`.
pub struct PwmBuzzer<S: SliceId> {
    slice: Slice<S, FreeRunning>,
    channel: OutputChannel,
}

impl<S: SliceId> PwmBuzzer<S> {
    pub fn new(mut slice: Slice<S, FreeRunning>, channel: OutputChannel) -> Self {
        slice.set_div_int(CLOCK_DIVIDER);
        slice.set_div_frac(0);
        Self { slice, channel }
    }
}

impl<S: SliceId> Buzzer for PwmBuzzer<S> {
    fn start_tone(&mut self, freq_hz: f32) {
        let params = ToneParams::for_frequency(freq_hz);
        self.slice.set_top(params.top);
        let _ = match self.channel {
            OutputChannel::A => self.slice.channel_a.set_duty_cycle(params.level),
            OutputChannel::B => self.slice.channel_b.set_duty_cycle(params.level),
        };
        self.slice.enable();
    }

    fn stop(&mut self) {
        self.slice.disable();
    }
}
