//! Recording doubles for the `embedded-hal` traits the library drives.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

/// Output line remembering every level written to it
#[derive(Clone, Default)]
pub struct Line(Rc<RefCell<Vec<bool>>>);

impl Line {
    pub fn writes(&self) -> Vec<bool> {
        self.0.borrow().clone()
    }

    pub fn is_high(&self) -> bool {
        self.0.borrow().last().copied().unwrap_or(false)
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(true);
        Ok(())
    }
}

/// Output line that refuses every write
pub struct BrokenLine;

impl ErrorType for BrokenLine {
    type Error = ErrorKind;
}

impl OutputPin for BrokenLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}

/// Input line whose level the test sets
#[derive(Clone)]
pub struct Switch(Rc<Cell<bool>>);

impl Switch {
    /// A released active-low button, pulled high
    pub fn released() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn set_high(&self, high: bool) {
        self.0.set(high);
    }
}

impl ErrorType for Switch {
    type Error = Infallible;
}

impl InputPin for Switch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

/// Delay that only adds up the requested time
#[derive(Clone, Default)]
pub struct Stopwatch(Rc<Cell<u64>>);

impl Stopwatch {
    pub fn elapsed_ns(&self) -> u64 {
        self.0.get()
    }
}

impl DelayNs for Stopwatch {
    fn delay_ns(&mut self, ns: u32) {
        self.0.set(self.0.get() + u64::from(ns));
    }
}
