#![cfg_attr(not(test), no_std)]

pub mod alarm;
pub mod bell;
pub mod button;
pub mod clock;
mod error;
pub mod leds;
pub mod panel;
#[cfg(feature = "rp2040")]
pub mod tasks;

pub use error::Error;
