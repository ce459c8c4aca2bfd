//! Desktop twin of the Pico firmware: one OS thread per "core", square
//! waves through the default audio output instead of PWM slices.

use std::thread;

use rodio::OutputStream;

use march_core::player::Playback;
use march_core::song;

mod buzzer;
mod delay;

use buzzer::DesktopBuzzer;
use delay::StdDelay;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (_stream, stream_handle) = OutputStream::try_default()?;

    // Solo line loops forever on its own thread, like core 1 on hardware.
    let solo_handle = stream_handle.clone();
    thread::Builder::new()
        .name("solo".to_string())
        .spawn(move || {
            log::info!("playing solo on the solo thread");
            let mut buzzer = DesktopBuzzer::new(solo_handle);
            Playback::looped(&song::SOLO).run(&mut buzzer, &mut StdDelay);
        })?;

    log::info!("playing chorus on the main thread");
    let mut buzzer = DesktopBuzzer::new(stream_handle);
    Playback::once(&song::CHORUS).run(&mut buzzer, &mut StdDelay);
    log::info!("chorus done; solo keeps looping until interrupted");

    // Mirror the firmware: the process has no terminal state of its own.
    loop {
        thread::park();
    }
}
