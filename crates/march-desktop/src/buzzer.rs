use std::time::Duration;

use rodio::{OutputStreamHandle, Sink, Source};

use march_core::buzzer::Buzzer;

const SAMPLE_RATE: u32 = 48000;
const AMPLITUDE: f32 = 0.15;

// Square wave generator
struct SquareWave {
    frequency: f32,
    sample_rate: u32,
    phase: f32,
}

impl SquareWave {
    fn new(frequency: f32, sample_rate: u32) -> Self {
        Self { frequency, sample_rate, phase: 0.0 }
    }
}

impl Iterator for SquareWave {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        // Square wave: high for first half of cycle, low for second half
        let sample = if self.phase < 0.5 { AMPLITUDE } else { -AMPLITUDE };

        self.phase += self.frequency / self.sample_rate as f32;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        Some(sample)
    }
}

impl Source for SquareWave {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

/// Buzzer stand-in that plays the square wave through the host's audio
/// output. The tone runs until `stop`; the player owns all timing.
pub struct DesktopBuzzer {
    stream_handle: OutputStreamHandle,
    sink: Option<Sink>,
}

impl DesktopBuzzer {
    pub fn new(stream_handle: OutputStreamHandle) -> Self {
        Self { stream_handle, sink: None }
    }
}

impl Buzzer for DesktopBuzzer {
    fn start_tone(&mut self, freq_hz: f32) {
        self.stop();
        match Sink::try_new(&self.stream_handle) {
            Ok(sink) => {
                sink.append(SquareWave::new(freq_hz, SAMPLE_RATE));
                self.sink = Some(sink);
            }
            Err(e) => log::error!("failed to open audio sink: {e}"),
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}
