// Platform-agnostic buzzer trait
pub trait Buzzer {
    /// Start a square wave at the given frequency.
    fn start_tone(&mut self, freq_hz: f32);

    /// Silence the output.
    fn stop(&mut self);
}
