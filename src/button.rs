//! Tick-driven push button classification.
//!
//! A [`ButtonTracker`] is fed one sampled pin level per tick and turns the
//! level changes into one-shot events:
//!
//! - *pressed* on every edge into the active level,
//! - *long-pressed* once per press, after the button was held for more than
//!   `long_press_ticks`,
//! - *re-pressed* every `retrigger_ticks` while a long press is held, giving a
//!   typematic auto-repeat.
//!
//! Each event is a latch of depth one. It survives until its `take_*`
//! accessor reads it. Chords ([`both_pressed`], [`all_three_pressed`]) share
//! the *pressed* latch with [`ButtonTracker::take_pressed`], so callers must
//! check chords before single presses within a tick.

use embedded_hal::digital::{Error as _, InputPin, PinState};

use crate::Error;

/// Configuration for the button
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Logic level for which the button is considered pressed
    pub active: PinState,
    /// Held ticks after which a press counts as long
    pub long_press_ticks: u16,
    /// Ticks between synthetic presses while long-pressed
    pub retrigger_ticks: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active: PinState::Low,
            long_press_ticks: 12,
            retrigger_ticks: 2,
        }
    }
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonTracker {
    config: Config,
    // Last sampled level, only used to find edges
    level: PinState,
    hold_ticks: u16,
    long: bool,
    pressed: bool,
    longpressed: bool,
    repressed: bool,
}

impl ButtonTracker {
    pub fn new(mut config: Config) -> Self {
        config.retrigger_ticks = config.retrigger_ticks.max(1);

        Self {
            config,
            level: !config.active,
            hold_ticks: 0,
            long: false,
            pressed: false,
            longpressed: false,
            repressed: false,
        }
    }

    /// Advances the tracker by one tick with the currently sampled level.
    pub fn update(&mut self, level: PinState) {
        if level != self.level {
            self.level = level;
            if self.is_held() {
                self.pressed = true;
                self.hold_ticks = 0;
            }
        }

        if !self.is_held() {
            self.hold_ticks = 0;
            self.long = false;
            return;
        }

        let period = self.config.retrigger_ticks;
        if self.long && self.hold_ticks % period == period - 1 {
            self.repressed = true;
            self.hold_ticks = 0;
        } else {
            self.hold_ticks = self.hold_ticks.saturating_add(1);
        }

        if !self.long && self.hold_ticks > self.config.long_press_ticks {
            self.long = true;
            self.longpressed = true;
        }
    }

    /// Whether the button is down as of the last update.
    pub fn is_held(&self) -> bool {
        self.level == self.config.active
    }

    /// Whether the current press has passed the long press threshold.
    pub fn is_long(&self) -> bool {
        self.long
    }

    pub fn take_pressed(&mut self) -> bool {
        core::mem::take(&mut self.pressed)
    }

    /// Reading a long press also restarts the hold count.
    pub fn take_longpressed(&mut self) -> bool {
        let longpressed = core::mem::take(&mut self.longpressed);
        if longpressed {
            self.hold_ticks = 0;
        }

        longpressed
    }

    pub fn take_repressed(&mut self) -> bool {
        core::mem::take(&mut self.repressed)
    }
}

/// Consumes both press latches if, and only if, both are pending.
pub fn both_pressed(a: &mut ButtonTracker, b: &mut ButtonTracker) -> bool {
    if a.pressed && b.pressed {
        a.pressed = false;
        b.pressed = false;
        true
    } else {
        false
    }
}

/// Consumes all three press latches if, and only if, all are pending.
pub fn all_three_pressed(
    a: &mut ButtonTracker,
    b: &mut ButtonTracker,
    c: &mut ButtonTracker,
) -> bool {
    if a.pressed && b.pressed && c.pressed {
        a.pressed = false;
        b.pressed = false;
        c.pressed = false;
        true
    } else {
        false
    }
}

/// A button pin together with its tracker
pub struct Button<P: InputPin> {
    input: P,
    tracker: ButtonTracker,
}

impl<P: InputPin> Button<P> {
    pub fn new(input: P, config: Config) -> Self {
        Self {
            input,
            tracker: ButtonTracker::new(config),
        }
    }

    /// Reads the pin and advances the tracker by one tick.
    pub fn sample(&mut self) -> Result<(), Error> {
        let high = self.input.is_high().map_err(|e| Error::Button(e.kind()))?;
        self.tracker.update(high.into());

        Ok(())
    }

    pub fn tracker(&mut self) -> &mut ButtonTracker {
        &mut self.tracker
    }
}
