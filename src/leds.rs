use embedded_hal::digital::{Error as _, OutputPin};

use crate::Error;

/// Colors of the status LED, one output line each
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Green,
    Blue,
}

pub struct StatusLeds<P: OutputPin> {
    red: P,
    green: P,
    blue: P,
}

impl<P: OutputPin> StatusLeds<P> {
    /// Takes the three lines of an RGB status LED, all starting dark.
    pub fn new(red: P, green: P, blue: P) -> Result<Self, Error> {
        let mut leds = Self { red, green, blue };
        leds.show(None)?;

        Ok(leds)
    }

    /// Lights exactly the line of `color`, or none of them.
    pub fn show(&mut self, color: Option<Color>) -> Result<(), Error> {
        let lines = [
            (&mut self.red, Color::Red),
            (&mut self.green, Color::Green),
            (&mut self.blue, Color::Blue),
        ];

        for (line, line_color) in lines {
            line.set_state((color == Some(line_color)).into())
                .map_err(|e| Error::Led(e.kind()))?;
        }

        Ok(())
    }
}
