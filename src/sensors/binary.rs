//! Active-low digital input wrapper.
//!
//! Every binary sensor on the board (flame, brightness, tilt, IR) follows
//! the same convention: logic 0 on the line means the detected/true
//! condition. This wrapper keeps that inversion in exactly one place.

use embedded_hal::digital::InputPin;

use crate::error::SensorError;

pub struct ActiveLowInput<P> {
    pin: P,
}

impl<P: InputPin> ActiveLowInput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// `true` when the line reads logic 0.
    pub fn is_active(&mut self) -> Result<bool, SensorError> {
        self.pin.is_low().map_err(|_| SensorError::GpioReadFailed)
    }
}
