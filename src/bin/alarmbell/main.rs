#![no_std]
#![no_main]

use config::{AlarmOneResources, AlarmTwoResources, AssignedResources, ButtonResources};
use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peripheral;
use embassy_time::Delay;
use embedded_hal::digital::PinState;
use {defmt_rtt as _, panic_probe as _};

use alarmbell::alarm::{Alarm, AlarmController, Settings};
use alarmbell::bell::Bell;
use alarmbell::button::Button;
use alarmbell::clock::WallClock;
use alarmbell::leds::StatusLeds;
use alarmbell::tasks::{self, run_clock_task};
use alarmbell::Error;

mod config;

const fn level(state: PinState) -> Level {
    match state {
        PinState::Low => Level::Low,
        PinState::High => Level::High,
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Alarmbell starting ...");

    let p = embassy_rp::init(Default::default());
    let r = split_resources!(p);

    unwrap!(spawner.spawn(clock_task(r.alarm0, r.alarm1, r.buttons)));

    info!("Alarmbell ready");
}

fn setup_alarm<'d>(
    bell: impl Peripheral<P = impl Pin> + 'd,
    red: impl Peripheral<P = impl Pin> + 'd,
    green: impl Peripheral<P = impl Pin> + 'd,
    blue: impl Peripheral<P = impl Pin> + 'd,
    settings: Settings,
) -> Result<tasks::Alarm<'d>, Error> {
    let bell = Output::new(bell, level(!config::BELL_CONFIG.active));
    let bell = Bell::new(bell, Delay, config::BELL_CONFIG)?;

    let leds = StatusLeds::new(
        Output::new(red, Level::Low),
        Output::new(green, Level::Low),
        Output::new(blue, Level::Low),
    )?;

    Ok(AlarmController::new(
        Alarm::new(settings, config::ALARM_CONFIG),
        bell,
        leds,
    ))
}

fn setup_button<'d>(pin: impl Peripheral<P = impl Pin> + 'd) -> Button<Input<'d>> {
    let pull = match config::BUTTON_CONFIG.active {
        PinState::High => Pull::Down,
        PinState::Low => Pull::Up,
    };

    Button::new(Input::new(pin, pull), config::BUTTON_CONFIG)
}

#[embassy_executor::task]
async fn clock_task(a0: AlarmOneResources, a1: AlarmTwoResources, b: ButtonResources) {
    let alarms = [
        unwrap!(setup_alarm(a0.bell, a0.red, a0.green, a0.blue, config::ALARMS[0])),
        unwrap!(setup_alarm(a1.bell, a1.red, a1.green, a1.blue, config::ALARMS[1])),
    ];
    let buttons = [setup_button(b.a), setup_button(b.b), setup_button(b.c)];

    run_clock_task(
        alarms,
        buttons,
        WallClock::new(config::START_TIME),
        config::TICK,
    )
    .await;
}
