//! Alarm lifecycle: arming, ringing and re-arming one bell.
//!
//! ```text
//!   Off ──cycle──► Armed ──time matches──► Active ──pulse, single──► Done
//!                    ▲                                                │
//!                    └──────────────── time moves on ─────────────────┘
//! ```
//!
//! [`Alarm`] holds the pure state machine and never touches hardware.
//! [`AlarmController`] couples it to a [`Bell`] and [`StatusLeds`].

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::bell::Bell;
use crate::clock::TimeOfDay;
use crate::leds::{Color, StatusLeds};
use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Disabled, ignores the time
    Off,
    /// Waiting for the alarm time
    Armed,
    /// Ringing the bell
    Active,
    /// Rang during the current alarm minute, re-arms once it passes
    Done,
}

/// Direction to move through the Off → Single → Repeating ring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
}

/// Outcome of a [`Alarm::check`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    Idle,
    /// A bell pulse is due
    Ring,
}

/// Configuration for alarm behaviour
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Ticks between bell pulses while active, 1 rings every tick
    pub rate: u16,
}

/// Persisted part of an alarm
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub time: TimeOfDay,
    pub mode: Mode,
    /// Ring once and disarm, instead of re-arming for the next day
    pub single: bool,
}

/// Next `(mode, single)` pair after cycling in `direction`.
///
/// `at_target` tells whether the current time equals the alarm time. Arming
/// during the alarm minute yields `Done` so the alarm does not fire right
/// away.
pub fn transition(
    mode: Mode,
    single: bool,
    direction: Direction,
    at_target: bool,
) -> (Mode, bool) {
    match (mode, direction) {
        (Mode::Armed | Mode::Done, Direction::Up) if single => (mode, false),
        (Mode::Armed | Mode::Done, Direction::Up) => (Mode::Off, single),
        (Mode::Off | Mode::Active, Direction::Up) if at_target => (Mode::Done, true),
        (Mode::Off | Mode::Active, Direction::Up) => (Mode::Armed, true),
        (Mode::Armed | Mode::Done, Direction::Down) if single => (Mode::Off, single),
        (Mode::Armed | Mode::Done, Direction::Down) => (mode, true),
        (Mode::Off | Mode::Active, Direction::Down) => (Mode::Armed, false),
    }
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
    settings: Settings,
    rate: u16,
    // Ticks since entering Active or since the last pulse
    fire_counter: u16,
    dirty: bool,
}

impl Alarm {
    pub fn new(settings: Settings, config: Config) -> Self {
        Self {
            settings,
            rate: config.rate.max(1),
            fire_counter: 0,
            dirty: false,
        }
    }

    /// Advances the alarm by one tick at wall-clock time `now`.
    pub fn check(&mut self, now: TimeOfDay) -> Tick {
        let at_target = now == self.settings.time;

        match self.settings.mode {
            Mode::Off => Tick::Idle,
            Mode::Armed => {
                if at_target {
                    self.set_mode(Mode::Active);
                }
                Tick::Idle
            }
            Mode::Active => {
                if self.fire_counter % self.rate != self.rate - 1 {
                    self.fire_counter += 1;
                    return Tick::Idle;
                }

                self.fire_counter = 0;
                if self.settings.single {
                    self.set_mode(Mode::Done);
                }
                Tick::Ring
            }
            Mode::Done => {
                if !at_target {
                    self.set_mode(Mode::Armed);
                }
                Tick::Idle
            }
        }
    }

    /// Moves the alarm one step through the Off → Single → Repeating ring.
    pub fn cycle(&mut self, direction: Direction, now: TimeOfDay) {
        let (mode, single) = transition(
            self.settings.mode,
            self.settings.single,
            direction,
            now == self.settings.time,
        );

        self.set_mode(mode);
        self.settings.single = single;
        self.dirty = true;
    }

    /// Status LED color for the current settings, `None` when off.
    pub fn color(&self) -> Option<Color> {
        match (self.settings.mode, self.settings.single) {
            (Mode::Off, _) => None,
            (_, true) => Some(Color::Red),
            (_, false) => Some(Color::Green),
        }
    }

    pub fn mode(&self) -> Mode {
        self.settings.mode
    }

    pub fn is_single(&self) -> bool {
        self.settings.single
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn fire_counter(&self) -> u16 {
        self.fire_counter
    }

    /// Whether the state changed since the persistence layer last synced it.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called by the persistence layer once the settings are stored.
    pub fn mark_synced(&mut self) {
        self.dirty = false;
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode == self.settings.mode {
            return;
        }

        self.settings.mode = mode;
        self.fire_counter = 0;
        self.dirty = true;
    }
}

pub struct AlarmController<B: OutputPin, L: OutputPin, D: DelayNs> {
    alarm: Alarm,
    bell: Bell<B, D>,
    leds: StatusLeds<L>,
}

impl<B: OutputPin, L: OutputPin, D: DelayNs> AlarmController<B, L, D> {
    pub fn new(alarm: Alarm, bell: Bell<B, D>, leds: StatusLeds<L>) -> Self {
        Self { alarm, bell, leds }
    }

    /// Advances the alarm by one tick, ringing the bell when a pulse is due.
    pub fn check(&mut self, now: TimeOfDay) -> Result<Tick, Error> {
        let tick = self.alarm.check(now);
        if tick == Tick::Ring {
            self.bell.ring()?;
        }

        Ok(tick)
    }

    pub fn cycle(&mut self, direction: Direction, now: TimeOfDay) -> Result<(), Error> {
        self.alarm.cycle(direction, now);
        self.refresh_led(true)
    }

    /// Shows the alarm's color, or turns the LED dark when `active` is false.
    pub fn refresh_led(&mut self, active: bool) -> Result<(), Error> {
        let color = if active { self.alarm.color() } else { None };
        self.leds.show(color)
    }

    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    pub fn alarm_mut(&mut self) -> &mut Alarm {
        &mut self.alarm
    }
}
