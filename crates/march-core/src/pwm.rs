//! PWM period arithmetic for square-wave tone output.
//!
//! The RP2040 PWM counter runs off the 125 MHz system clock through a fixed
//! divider of 8, which keeps the wrap value of every pitch in the tone
//! tables (roughly 260 Hz to 2100 Hz) inside the 16-bit period register.
//! Frequencies outside that range are not checked here; much below ~240 Hz
//! the wrap no longer fits 16 bits and the output pitch would be wrong.

/// System clock the wrap arithmetic assumes, in Hz.
pub const SYSTEM_CLOCK_HZ: u32 = 125_000_000;

/// Fixed divider between the system clock and the PWM counter.
pub const CLOCK_DIVIDER: u8 = 8;

/// Period and compare settings for one tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneParams {
    /// Counter wrap value (the slice's TOP register).
    pub top: u16,
    /// Compare level for a 50% duty cycle.
    pub level: u16,
}

impl ToneParams {
    /// Settings that make the PWM counter wrap at `freq_hz`.
    pub const fn for_frequency(freq_hz: f32) -> Self {
        let top = (SYSTEM_CLOCK_HZ as f32 / (CLOCK_DIVIDER as f32 * freq_hz)) as u32 - 1;
        let top = top as u16;
        Self { top, level: top / 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::CHROMATIC_SCALE;
    use crate::song::{CHORUS, SOLO};

    /// Truncating integer reference for the wrap computation.
    fn reference_top(freq_hz: f32) -> u32 {
        (f64::from(SYSTEM_CLOCK_HZ) / (f64::from(CLOCK_DIVIDER) * f64::from(freq_hz))).floor()
            as u32
            - 1
    }

    #[test]
    fn a4_matches_hand_computed_values() {
        // 125_000_000 / (8 * 440.0) = 35511.36..., truncated and less one.
        let params = ToneParams::for_frequency(440.0);
        assert_eq!(params.top, 35510);
        assert_eq!(params.level, 17755);
    }

    #[test]
    fn table_frequencies_fit_the_period_register() {
        for note in CHORUS.iter().chain(SOLO.iter()) {
            let expected = reference_top(note.freq_hz);
            assert!(expected >= 1, "{} Hz underflows the counter", note.freq_hz);
            assert!(
                expected <= u32::from(u16::MAX),
                "{} Hz overflows 16 bits",
                note.freq_hz
            );

            let params = ToneParams::for_frequency(note.freq_hz);
            assert_eq!(u32::from(params.top), expected);
        }
    }

    #[test]
    fn whole_chromatic_scale_is_in_range() {
        for &freq in CHROMATIC_SCALE.iter() {
            let expected = reference_top(freq);
            assert!((1..=u32::from(u16::MAX)).contains(&expected));
            assert_eq!(u32::from(ToneParams::for_frequency(freq).top), expected);
        }
    }

    #[test]
    fn duty_level_is_half_the_period() {
        for &freq in CHROMATIC_SCALE.iter() {
            let params = ToneParams::for_frequency(freq);
            assert_eq!(params.level, params.top / 2);
            assert!(params.level <= params.top);
        }
    }
}
