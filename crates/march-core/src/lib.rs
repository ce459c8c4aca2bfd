#![cfg_attr(not(test), no_std)]

pub mod buzzer;
pub mod notes;
pub mod player;
pub mod pwm;
pub mod song;
