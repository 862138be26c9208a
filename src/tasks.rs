use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Delay, Duration, Instant, Ticker};

use crate::alarm::{AlarmController, Tick};
use crate::button::Button;
use crate::clock::WallClock;
use crate::panel::{self, Command, ALARM_COUNT};

pub type Alarm<'d> = AlarmController<Output<'d>, Output<'d>, Delay>;

fn refresh_all(alarms: &mut [Alarm<'_>], leds_on: bool) {
    for (i, alarm) in alarms.iter_mut().enumerate() {
        if let Err(e) = alarm.refresh_led(leds_on) {
            error!("Alarm {}: {}", i, e);
        }
    }
}

/// Fixed-period polling loop driving the panel and all alarms.
pub async fn run_clock_task(
    mut alarms: [Alarm<'_>; ALARM_COUNT],
    mut buttons: [Button<Input<'_>>; 3],
    clock: WallClock,
    tick: Duration,
) {
    let mut ticker = Ticker::every(tick);
    let mut leds_on = true;

    refresh_all(&mut alarms, leds_on);

    info!("Clock task started at {}", clock.now(Instant::now().as_secs()));

    loop {
        ticker.next().await;

        let now = clock.now(Instant::now().as_secs());

        for (i, button) in buttons.iter_mut().enumerate() {
            if let Err(e) = button.sample() {
                warn!("Button {}: {}", i, e);
            }
        }

        let [a, b, c] = &mut buttons;
        panel::poll(a.tracker(), b.tracker(), c.tracker(), |command| {
            debug!("Panel command {}", command);

            match command {
                Command::ToggleLeds => {
                    leds_on = !leds_on;
                    refresh_all(&mut alarms, leds_on);
                }
                Command::Cycle { alarm, direction } => {
                    let Some(controller) = alarms.get_mut(alarm) else {
                        return;
                    };

                    if let Err(e) = controller.cycle(direction, now) {
                        error!("Alarm {}: {}", alarm, e);
                    }

                    // Touching an alarm wakes the dark panel
                    if !leds_on {
                        leds_on = true;
                        refresh_all(&mut alarms, leds_on);
                    }
                }
            }
        });

        for (i, alarm) in alarms.iter_mut().enumerate() {
            let before = alarm.alarm().mode();

            match alarm.check(now) {
                Ok(Tick::Ring) => debug!("Alarm {} rang", i),
                Ok(Tick::Idle) => (),
                Err(e) => error!("Alarm {}: {}", i, e),
            }

            let after = alarm.alarm().mode();
            if before != after {
                info!("Alarm {}: {} -> {} at {}", i, before, after, now);
            }

            // No flash store on this board, the log is the only mirror
            if alarm.alarm().is_dirty() {
                info!("Alarm {} settings: {}", i, alarm.alarm().settings());
                alarm.alarm_mut().mark_synced();
            }
        }
    }
}
