//! Wall-clock time of day, bounded so that out-of-range values cannot exist.

use arbitrary_int::{u5, u6};

use crate::Error;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Hour of the day, 0 to 23
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hour(u5);

impl Hour {
    pub const fn new(value: u8) -> Option<Self> {
        if value < 24 {
            Some(Self(u5::new(value)))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0.value()
    }
}

/// Minute of the hour, 0 to 59
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Minute(u6);

impl Minute {
    pub const fn new(value: u8) -> Option<Self> {
        if value < 60 {
            Some(Self(u6::new(value)))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0.value()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    pub hour: Hour,
    pub minute: Minute,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hour: Hour(u5::new(0)),
        minute: Minute(u6::new(0)),
    };

    pub const fn new(hour: u8, minute: u8) -> Result<Self, Error> {
        match (Hour::new(hour), Minute::new(minute)) {
            (Some(hour), Some(minute)) => Ok(Self { hour, minute }),
            _ => Err(Error::InvalidTime { hour, minute }),
        }
    }

    /// Time of day reached `secs` seconds after midnight, wrapping at 24h.
    pub fn from_seconds(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY;
        let hour = (secs / 3600) as u8;
        let minute = ((secs / 60) % 60) as u8;

        Self {
            hour: Hour(u5::new(hour)),
            minute: Minute(u6::new(minute)),
        }
    }

    /// Seconds from midnight to the start of this minute.
    pub fn seconds(self) -> u32 {
        u32::from(self.hour.value()) * 3600 + u32::from(self.minute.value()) * 60
    }
}

/// Time of day derived from uptime and a known time at boot.
///
/// The board has no synchronised time source, so the clock simply counts
/// forward from `start` and wraps at midnight.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    start: TimeOfDay,
}

impl WallClock {
    pub const fn new(start: TimeOfDay) -> Self {
        Self { start }
    }

    pub fn now(&self, uptime_secs: u64) -> TimeOfDay {
        let offset = (uptime_secs % u64::from(SECONDS_PER_DAY)) as u32;
        TimeOfDay::from_seconds(self.start.seconds() + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            TimeOfDay::new(24, 0),
            Err(Error::InvalidTime {
                hour: 24,
                minute: 0
            })
        );
        assert!(TimeOfDay::new(23, 60).is_err());
        assert!(TimeOfDay::new(23, 59).is_ok());
    }

    #[test]
    fn seconds_are_taken_modulo_one_day() {
        let t = TimeOfDay::from_seconds(SECONDS_PER_DAY + 7 * 3600 + 30 * 60 + 59);
        assert_eq!(t, TimeOfDay::new(7, 30).unwrap());
        assert_eq!(t.seconds(), 7 * 3600 + 30 * 60);
    }

    #[test]
    fn wall_clock_wraps_past_midnight() {
        let clock = WallClock::new(TimeOfDay::new(23, 59).unwrap());

        assert_eq!(clock.now(0), TimeOfDay::new(23, 59).unwrap());
        assert_eq!(clock.now(59), TimeOfDay::new(23, 59).unwrap());
        assert_eq!(clock.now(60), TimeOfDay::MIDNIGHT);
        assert_eq!(clock.now(61 + 3600), TimeOfDay::new(1, 0).unwrap());
    }
}
