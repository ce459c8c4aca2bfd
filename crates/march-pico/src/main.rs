//! Dual-buzzer Imperial March for the Raspberry Pi Pico.
//!
//! Core 0 plays the chorus line once on GPIO8 and then parks; core 1 loops
//! the solo line on GPIO21 forever. The two buzzers sit on different PWM
//! slices, so the cores never touch the same peripheral state.

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use embedded_hal::delay::DelayNs;
use rp2040_hal as hal;

use hal::clocks::init_clocks_and_plls;
use hal::multicore::{Multicore, Stack};
use hal::pac;
use hal::pwm::{Pwm2, Slices};
use hal::{Sio, Timer, Watchdog};

use march_core::player::Playback;
use march_core::song;

mod buzzer;

use buzzer::{OutputChannel, PwmBuzzer};

#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

/// External crystal on the Pico board is 12 MHz.
const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Settling time before either core starts driving a pin, so the board
/// (USB enumeration in particular) is stable first.
const STARTUP_DELAY_MS: u32 = 5_000;

/// Silence held after the chorus finishes.
const TAIL_SILENCE_MS: u32 = 2_000;

static mut CORE1_STACK: Stack<4096> = Stack::new();

fn core1_task(mut buzzer: PwmBuzzer<Pwm2>, mut timer: Timer) {
    defmt::info!("playing solo on core 1");
    Playback::looped(&song::SOLO).run(&mut buzzer, &mut timer);
}

#[hal::entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // 125 MHz system clock, the rate the wrap arithmetic assumes.
    let clocks = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let mut sio = Sio::new(pac.SIO);
    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let pwm_slices = Slices::new(pac.PWM, &mut pac.RESETS);

    // Solo buzzer: GPIO21 = PWM slice 2, channel B.
    let mut solo_slice = pwm_slices.pwm2;
    solo_slice.channel_b.output_to(pins.gpio21);
    let solo_buzzer = PwmBuzzer::new(solo_slice, OutputChannel::B);

    // Chorus buzzer: GPIO8 = PWM slice 4, channel A.
    let mut chorus_slice = pwm_slices.pwm4;
    chorus_slice.channel_a.output_to(pins.gpio8);
    let mut chorus_buzzer = PwmBuzzer::new(chorus_slice, OutputChannel::A);

    timer.delay_ms(STARTUP_DELAY_MS);

    let mut mc = Multicore::new(&mut pac.PSM, &mut pac.PPB, &mut sio.fifo);
    let cores = mc.cores();
    let core1 = &mut cores[1];
    #[allow(static_mut_refs)]
    let core1_stack = unsafe { &mut CORE1_STACK.mem };
    core1
        .spawn(core1_stack, move || core1_task(solo_buzzer, timer))
        .unwrap();

    defmt::info!("playing chorus on core 0");
    Playback::once(&song::CHORUS).run(&mut chorus_buzzer, &mut timer);

    timer.delay_ms(TAIL_SILENCE_MS);
    defmt::info!("chorus done, core 0 idling");
    loop {
        cortex_m::asm::wfe();
    }
}
