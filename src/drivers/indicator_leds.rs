//! Indicator LED bank driver.
//!
//! Three discrete LEDs switched together as one bank. The last commanded
//! level is tracked in memory, since the fusion loop leaves the bank
//! untouched on cycles where the IR detector reports nothing.

use embedded_hal::digital::OutputPin;

use crate::error::ActuatorError;

pub struct IndicatorLeds<L1, L2, L3> {
    led1: L1,
    led2: L2,
    led3: L3,
    on: bool,
}

impl<L1, L2, L3> IndicatorLeds<L1, L2, L3>
where
    L1: OutputPin,
    L2: OutputPin,
    L3: OutputPin,
{
    pub fn new(led1: L1, led2: L2, led3: L3) -> Self {
        Self {
            led1,
            led2,
            led3,
            on: false,
        }
    }

    /// Switch the whole bank. State updates only after every pin took the
    /// write, so a wiring fault does not desync the tracked level.
    pub fn set_all(&mut self, on: bool) -> Result<(), ActuatorError> {
        if on {
            self.led1.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?;
            self.led2.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?;
            self.led3.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?;
        } else {
            self.led1.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
            self.led2.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
            self.led3.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
        }
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
