//! Note playback: one blocking note at a time, driven by a small
//! per-sequence state machine so loop behavior is testable in bounded steps.

use embedded_hal::delay::DelayNs;

use crate::buzzer::Buzzer;
use crate::notes::Note;

/// Silence between consecutive notes, in milliseconds.
pub const NOTE_GAP_MS: u32 = 50;

/// Play a single note: tone on, hold, tone off, inter-note gap.
pub fn play_note<B, D>(buzzer: &mut B, delay: &mut D, note: Note)
where
    B: Buzzer,
    D: DelayNs,
{
    buzzer.start_tone(note.freq_hz);
    delay.delay_ms(note.duration_ms);
    buzzer.stop();
    delay.delay_ms(NOTE_GAP_MS);
}

/// What happens when a sequence reaches its last note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Play through once, then go idle.
    Once,
    /// Restart from the first note, forever.
    Forever,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Not started yet.
    Ready,
    /// Next note to play is at this index.
    Playing(usize),
    /// Sequence finished; nothing left to play.
    Idle,
}

/// Sequential playback over a fixed sequence of notes.
pub struct Playback<'a> {
    sequence: &'a [Note],
    mode: LoopMode,
    state: State,
}

impl<'a> Playback<'a> {
    /// Playback that runs through the sequence exactly once.
    pub fn once(sequence: &'a [Note]) -> Self {
        Self { sequence, mode: LoopMode::Once, state: State::Ready }
    }

    /// Playback that restarts from the top after the last note.
    pub fn looped(sequence: &'a [Note]) -> Self {
        Self { sequence, mode: LoopMode::Forever, state: State::Ready }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Advance the state machine and hand out the next note to play.
    ///
    /// Returns `None` once a `Once` playback has gone idle; a `Forever`
    /// playback never returns `None` for a non-empty sequence.
    pub fn next_note(&mut self) -> Option<Note> {
        let index = match self.state {
            State::Ready => 0,
            State::Playing(index) => index,
            State::Idle => return None,
        };

        let Some(&note) = self.sequence.get(index) else {
            self.state = State::Idle;
            return None;
        };

        let next = index + 1;
        self.state = if next < self.sequence.len() {
            State::Playing(next)
        } else {
            match self.mode {
                LoopMode::Forever => {
                    log::trace!("sequence restarting from the top");
                    State::Playing(0)
                }
                LoopMode::Once => {
                    log::debug!("sequence complete after {} notes", self.sequence.len());
                    State::Idle
                }
            }
        };

        Some(note)
    }

    /// Drive the whole playback, blocking on the given delay source.
    ///
    /// Returns when a `Once` playback finishes; never returns for a
    /// non-empty `Forever` playback.
    pub fn run<B, D>(&mut self, buzzer: &mut B, delay: &mut D)
    where
        B: Buzzer,
        D: DelayNs,
    {
        while let Some(note) = self.next_note() {
            play_note(buzzer, delay, note);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::song::{CHORUS, SOLO};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Tone(f32),
        Silence,
        Wait(u32),
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl Recorder {
        fn push(&self, event: Event) {
            self.0.borrow_mut().push(event);
        }

        fn events(&self) -> Vec<Event> {
            self.0.borrow().clone()
        }
    }

    struct RecordingBuzzer(Recorder);

    impl Buzzer for RecordingBuzzer {
        fn start_tone(&mut self, freq_hz: f32) {
            self.0.push(Event::Tone(freq_hz));
        }

        fn stop(&mut self) {
            self.0.push(Event::Silence);
        }
    }

    struct RecordingDelay(Recorder);

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.0.push(Event::Wait(ns / 1_000_000));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.0.push(Event::Wait(ms));
        }
    }

    #[test]
    fn play_note_orders_tone_hold_silence_gap() {
        let recorder = Recorder::default();
        let mut buzzer = RecordingBuzzer(recorder.clone());
        let mut delay = RecordingDelay(recorder.clone());

        play_note(&mut buzzer, &mut delay, Note::new(440.0, 120));

        assert_eq!(
            recorder.events(),
            vec![
                Event::Tone(440.0),
                Event::Wait(120),
                Event::Silence,
                Event::Wait(NOTE_GAP_MS),
            ]
        );
    }

    #[test]
    fn once_playback_yields_the_table_in_order_then_idles() {
        let mut playback = Playback::once(&CHORUS);
        let mut played = Vec::new();
        while let Some(note) = playback.next_note() {
            played.push(note);
        }

        assert_eq!(played.len(), 29);
        assert_eq!(played, CHORUS.to_vec());
        assert_eq!(playback.state(), State::Idle);
        assert_eq!(playback.next_note(), None);
        assert_eq!(playback.next_note(), None);
    }

    #[test]
    fn running_the_chorus_once_plays_exactly_29_notes() {
        let recorder = Recorder::default();
        let mut buzzer = RecordingBuzzer(recorder.clone());
        let mut delay = RecordingDelay(recorder.clone());

        Playback::once(&CHORUS).run(&mut buzzer, &mut delay);

        let tones: Vec<f32> = recorder
            .events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Tone(freq) => Some(freq),
                _ => None,
            })
            .collect();
        assert_eq!(tones.len(), 29);
        assert_eq!(tones[0], 392.00);
        assert_eq!(tones[28], 392.00);
    }

    #[test]
    fn looped_playback_restarts_at_the_first_note() {
        let mut playback = Playback::looped(&SOLO);
        for _ in 0..20 {
            playback.next_note().unwrap();
        }

        let wrapped = playback.next_note().unwrap();
        assert_eq!(wrapped, SOLO[0]);
        assert_eq!(wrapped.freq_hz, 784.00);
        assert_eq!(wrapped.duration_ms, 500);
        assert_eq!(playback.state(), State::Playing(1));
    }

    #[test]
    fn empty_sequence_goes_straight_to_idle() {
        let mut playback = Playback::looped(&[]);
        assert_eq!(playback.next_note(), None);
        assert_eq!(playback.state(), State::Idle);
    }
}
