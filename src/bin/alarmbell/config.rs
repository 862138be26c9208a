use alarmbell::alarm::{self, Mode, Settings};
use alarmbell::clock::TimeOfDay;
use alarmbell::{bell, button};
use assign_resources::assign_resources;
use embassy_rp::peripherals;
use embassy_time::Duration;
use embedded_hal::digital::PinState;

const fn time(hour: u8, minute: u8) -> TimeOfDay {
    match TimeOfDay::new(hour, minute) {
        Ok(time) => time,
        Err(_) => panic!("invalid time of day"),
    }
}

/// Period of the polling loop, the only unit of time for buttons and alarms
pub const TICK: Duration = Duration::from_millis(50);

/// Time of day at power-up
pub const START_TIME: TimeOfDay = time(6, 0);

/// Configuration for bell behaviour
pub const BELL_CONFIG: bell::Config = bell::Config {
    duration_ms: 10,
    active: PinState::Low,
};

/// Configuration for button behaviour
pub const BUTTON_CONFIG: button::Config = button::Config {
    active: PinState::Low,
    long_press_ticks: 12,
    retrigger_ticks: 2,
};

/// Configuration for alarm behaviour
pub const ALARM_CONFIG: alarm::Config = alarm::Config { rate: 1 };

/// Alarm settings at power-up
pub const ALARMS: [Settings; 2] = [
    Settings {
        time: time(7, 0),
        mode: Mode::Off,
        single: true,
    },
    Settings {
        time: time(7, 30),
        mode: Mode::Off,
        single: true,
    },
];

// Pins to be used by the external devices
assign_resources! {
    alarm0: AlarmOneResources {
        bell: PIN_0,
        red: PIN_1,
        green: PIN_2,
        blue: PIN_3,
    },
    alarm1: AlarmTwoResources {
        bell: PIN_4,
        red: PIN_5,
        green: PIN_6,
        blue: PIN_7,
    },
    buttons: ButtonResources {
        a: PIN_10,
        b: PIN_11,
        c: PIN_12,
    }
}
