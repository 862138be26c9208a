use embedded_hal::digital::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("Time {hour}:{minute} is not a valid time of day.")]
    InvalidTime { hour: u8, minute: u8 },
    #[error("Bell output failed: {0:?}")]
    Bell(ErrorKind),
    #[error("Status LED output failed: {0:?}")]
    Led(ErrorKind),
    #[error("Button input failed: {0:?}")]
    Button(ErrorKind),
}
