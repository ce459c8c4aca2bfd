//! The two melody lines of the Imperial March arrangement.
//!
//! `CHORUS` is played once by the primary core, `SOLO` loops forever on the
//! secondary core.

use crate::notes::{AS5, C4, CS4, D6, DS4, DS5, DS6, FS4, G4, G5, Note};

const fn n(freq_hz: f32, duration_ms: u32) -> Note {
    Note::new(freq_hz, duration_ms)
}

pub static CHORUS: [Note; 29] = [
    n(G4, 500), n(G4, 500), n(G4, 500), n(FS4, 500), n(G4, 500),
    n(FS4, 500), n(G4, 1000),
    n(G4, 500), n(G4, 500), n(G4, 500), n(FS4, 500), n(DS4, 500),
    n(G4, 500), n(G4, 1000),
    n(G4, 500), n(G4, 500), n(G4, 500), n(G4, 500), n(CS4, 500),
    n(CS4, 500), n(CS4, 500),
    n(CS4, 500), n(DS4, 500), n(DS4, 500), n(C4, 500), n(DS4, 500),
    n(G4, 500), n(DS4, 500), n(G4, 1000),
];

pub static SOLO: [Note; 20] = [
    n(G5, 500), n(G5, 500), n(G5, 300), n(G5, 550), n(DS5, 500),
    n(AS5, 300), n(G5, 550), n(DS5, 500), n(AS5, 400), n(G5, 1300),
    n(D6, 500), n(D6, 500), n(D6, 300), n(D6, 550), n(DS6, 500),
    n(AS5, 300), n(G5, 550), n(DS5, 500), n(AS5, 400), n(G5, 1300),
];
