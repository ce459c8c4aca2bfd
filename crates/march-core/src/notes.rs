//! Pitch constants and the note record.
//!
//! Chromatic scale from C4 to C7, rounded to two decimals. G#5 keeps the
//! slightly-off 830.60 the tables were tuned against.

/// One playable note: a pitch and how long to hold it.
///
/// Pairing the frequency with its duration in a single record keeps the
/// two in sync by construction; there is no separate duration table that
/// could drift out of step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub freq_hz: f32,
    pub duration_ms: u32,
}

impl Note {
    pub const fn new(freq_hz: f32, duration_ms: u32) -> Self {
        Self { freq_hz, duration_ms }
    }
}

pub const C4: f32 = 261.63;
pub const CS4: f32 = 277.18;
pub const D4: f32 = 293.66;
pub const DS4: f32 = 311.13;
pub const E4: f32 = 329.63;
pub const F4: f32 = 349.23;
pub const FS4: f32 = 369.99;
pub const G4: f32 = 392.00;
pub const GS4: f32 = 415.30;
pub const A4: f32 = 440.00;
pub const AS4: f32 = 466.16;
pub const B4: f32 = 493.88;
pub const C5: f32 = 523.25;
pub const CS5: f32 = 554.37;
pub const D5: f32 = 587.33;
pub const DS5: f32 = 622.25;
pub const E5: f32 = 659.26;
pub const F5: f32 = 698.46;
pub const FS5: f32 = 739.99;
pub const G5: f32 = 784.00;
pub const GS5: f32 = 830.60;
pub const A5: f32 = 880.00;
pub const AS5: f32 = 932.32;
pub const B5: f32 = 987.76;
pub const C6: f32 = 1046.50;
pub const CS6: f32 = 1108.73;
pub const D6: f32 = 1174.66;
pub const DS6: f32 = 1244.50;
pub const E6: f32 = 1318.52;
pub const F6: f32 = 1396.92;
pub const FS6: f32 = 1479.98;
pub const G6: f32 = 1567.98;
pub const GS6: f32 = 1661.22;
pub const A6: f32 = 1760.00;
pub const AS6: f32 = 1864.66;
pub const B6: f32 = 1975.54;
pub const C7: f32 = 2093.00;

/// Every pitch above, low to high.
pub static CHROMATIC_SCALE: [f32; 37] = [
    C4, CS4, D4, DS4, E4, F4, FS4, G4, GS4, A4, AS4, B4, C5, CS5, D5, DS5,
    E5, F5, FS5, G5, GS5, A5, AS5, B5, C6, CS6, D6, DS6, E6, F6, FS6, G6,
    GS6, A6, AS6, B6, C7,
];
