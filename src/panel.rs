//! Front panel: turns button events into alarm commands.
//!
//! Buttons `A` and `B` each belong to one alarm, `C` is a modifier:
//!
//! | input                      | command                       |
//! |----------------------------|-------------------------------|
//! | A + B + C                  | toggle the status LEDs        |
//! | A + C / B + C              | cycle alarm 0 / 1 down        |
//! | A / B                      | cycle alarm 0 / 1 up          |
//! | A / B held (repeat)        | cycle alarm 0 / 1 up again    |
//! | A / B held with C (repeat) | cycle alarm 0 / 1 down again  |

use crate::alarm::Direction;
use crate::button::{all_three_pressed, both_pressed, ButtonTracker};

pub const ALARM_COUNT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Cycle { alarm: usize, direction: Direction },
    ToggleLeds,
}

/// Polls the three panel buttons once per tick, after they were updated.
///
/// Every event latch is consumed before returning, so presses that formed no
/// command cannot pair up with a press in a later tick.
pub fn poll(
    a: &mut ButtonTracker,
    b: &mut ButtonTracker,
    c: &mut ButtonTracker,
    mut emit: impl FnMut(Command),
) {
    if all_three_pressed(a, b, c) {
        emit(Command::ToggleLeds);
    }

    for (alarm, button) in [&mut *a, &mut *b].into_iter().enumerate() {
        if both_pressed(button, c) {
            emit(Command::Cycle {
                alarm,
                direction: Direction::Down,
            });
        }
    }

    // A repeat keeps the direction of the hold it came from
    let repeat = if c.is_held() {
        Direction::Down
    } else {
        Direction::Up
    };

    for (alarm, button) in [a, b].into_iter().enumerate() {
        let pressed = button.take_pressed();
        let repressed = button.take_repressed();
        button.take_longpressed();

        if pressed {
            emit(Command::Cycle {
                alarm,
                direction: Direction::Up,
            });
        }
        if repressed {
            emit(Command::Cycle {
                alarm,
                direction: repeat,
            });
        }
    }

    c.take_pressed();
    c.take_repressed();
    c.take_longpressed();
}
