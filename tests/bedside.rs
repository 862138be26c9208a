//! Buttons, panel and alarms composed the way the polling loop runs them.

mod common;

use alarmbell::alarm::{Alarm, AlarmController, Config, Mode, Settings, Tick};
use alarmbell::bell::{self, Bell};
use alarmbell::button::{self, Button};
use alarmbell::clock::{TimeOfDay, WallClock};
use alarmbell::leds::StatusLeds;
use alarmbell::panel::{self, Command};
use common::{Line, Stopwatch, Switch};
use embedded_hal::digital::PinState;

struct Bedside {
    switches: [Switch; 3],
    buttons: [Button<Switch>; 3],
    alarm: AlarmController<Line, Line, Stopwatch>,
    red: Line,
}

impl Bedside {
    fn new() -> Self {
        let switches = [Switch::released(), Switch::released(), Switch::released()];
        let buttons = switches
            .clone()
            .map(|switch| Button::new(switch, button::Config::default()));
        let red = Line::default();

        let alarm = AlarmController::new(
            Alarm::new(
                Settings {
                    time: TimeOfDay::new(7, 0).unwrap(),
                    mode: Mode::Off,
                    single: false,
                },
                Config { rate: 1 },
            ),
            Bell::new(
                Line::default(),
                Stopwatch::default(),
                bell::Config {
                    duration_ms: 10,
                    active: PinState::Low,
                },
            )
            .unwrap(),
            StatusLeds::new(red.clone(), Line::default(), Line::default()).unwrap(),
        );

        Self {
            switches,
            buttons,
            alarm,
            red,
        }
    }

    /// One pass of the polling loop, returning whether the bell rang.
    fn tick(&mut self, held: [bool; 3], now: TimeOfDay) -> bool {
        for (switch, held) in self.switches.iter().zip(held) {
            switch.set_high(!held);
        }
        for button in self.buttons.iter_mut() {
            button.sample().unwrap();
        }

        let mut commands = Vec::new();
        let [a, b, c] = &mut self.buttons;
        panel::poll(a.tracker(), b.tracker(), c.tracker(), |command| {
            commands.push(command)
        });

        for command in commands {
            if let Command::Cycle {
                alarm: 0,
                direction,
            } = command
            {
                self.alarm.cycle(direction, now).unwrap();
            }
        }

        self.alarm.check(now).unwrap() == Tick::Ring
    }
}

#[test]
fn armed_by_button_rings_once_in_the_morning() {
    let mut bedside = Bedside::new();
    let clock = WallClock::new(TimeOfDay::new(6, 58).unwrap());

    assert!(!bedside.tick([true, false, false], clock.now(0)));
    assert_eq!(bedside.alarm.alarm().mode(), Mode::Armed);
    assert!(bedside.alarm.alarm().is_single());
    assert!(bedside.red.is_high());

    let mut rings = 0;
    for secs in 1..=240 {
        if bedside.tick([false, false, false], clock.now(secs)) {
            rings += 1;
        }
    }

    assert_eq!(rings, 1);
    assert_eq!(bedside.alarm.alarm().mode(), Mode::Armed);
}

#[test]
fn modifier_chord_steps_backwards() {
    let mut bedside = Bedside::new();
    let now = TimeOfDay::new(22, 15).unwrap();

    bedside.tick([true, false, true], now);
    assert_eq!(bedside.alarm.alarm().mode(), Mode::Armed);
    assert!(!bedside.alarm.alarm().is_single());

    bedside.tick([false, false, false], now);
    bedside.tick([true, false, true], now);
    assert!(bedside.alarm.alarm().is_single());

    bedside.tick([false, false, false], now);
    bedside.tick([true, false, true], now);
    assert_eq!(bedside.alarm.alarm().mode(), Mode::Off);
    assert!(!bedside.red.is_high());
}
