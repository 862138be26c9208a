use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, OutputPin, PinState};

use crate::Error;

/// Configuration for the bell output
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// How long the output will be set to active when triggered
    pub duration_ms: u32,
    /// Logic level to set to output to when triggered
    pub active: PinState,
}

pub struct Bell<P: OutputPin, D: DelayNs> {
    output: P,
    delay: D,
    config: Config,
}

impl<P: OutputPin, D: DelayNs> Bell<P, D> {
    pub fn new(mut output: P, delay: D, config: Config) -> Result<Self, Error> {
        output
            .set_state(!config.active)
            .map_err(|e| Error::Bell(e.kind()))?;

        Ok(Self {
            output,
            delay,
            config,
        })
    }

    /// Pulses the bell once. Blocks for the whole pulse.
    pub fn ring(&mut self) -> Result<(), Error> {
        self.output
            .set_state(self.config.active)
            .map_err(|e| Error::Bell(e.kind()))?;

        self.delay.delay_ms(self.config.duration_ms);

        self.output
            .set_state(!self.config.active)
            .map_err(|e| Error::Bell(e.kind()))
    }
}
