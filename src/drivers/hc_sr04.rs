//! HC-SR04 ultrasonic time-of-flight ranger.
//!
//! One shot is a 10 µs trigger pulse followed by timing how long the echo
//! line stays high; the width divided by 58 gives centimetres. Two
//! independent 25 ms timeout phases keep the busy-waits bounded:
//!
//! 1. waiting for the echo to go active — a disconnected or saturated line
//!    yields [`DistanceSample::NoEcho`] instead of hanging,
//! 2. waiting for it to drop — an over-range pulse is cut off and whatever
//!    duration accumulated is kept (caps readings near 430 cm).
//!
//! Generic over `embedded-hal` pins and delay plus a [`MonotonicClock`], so
//! the full timing behaviour is exercised on the host with simulated pins.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::drivers::clock::{ElapsedTimer, MonotonicClock};
use crate::error::SensorError;
use crate::level::{self, DistanceSample, US_PER_CM};

/// Settle time with the trigger held low before the pulse.
const TRIGGER_SETTLE_US: u32 = 2;
/// Trigger pulse width required by the sensor.
const TRIGGER_PULSE_US: u32 = 10;
/// Upper bound on shots per filtered measurement.
pub const MAX_SAMPLES: usize = 16;

pub struct HcSr04<Trig, Echo, D, C> {
    trig: Trig,
    echo: Echo,
    delay: D,
    clock: C,
    /// Bound for both echo-wait phases, in microseconds.
    timeout_us: u64,
}

impl<Trig, Echo, D, C> HcSr04<Trig, Echo, D, C>
where
    Trig: OutputPin,
    Echo: InputPin,
    D: DelayNs,
    C: MonotonicClock,
{
    pub fn new(trig: Trig, echo: Echo, delay: D, clock: C, timeout_us: u64) -> Self {
        Self {
            trig,
            echo,
            delay,
            clock,
            timeout_us,
        }
    }

    /// Run one trigger/echo cycle.
    ///
    /// `Ok(NoEcho)` means the echo line never went active within the
    /// timeout; `Err` is reserved for pin faults.
    pub fn measure_distance(&mut self) -> Result<DistanceSample, SensorError> {
        // Trigger pulse
        self.trig
            .set_low()
            .map_err(|_| SensorError::TriggerWriteFailed)?;
        self.delay.delay_us(TRIGGER_SETTLE_US);
        self.trig
            .set_high()
            .map_err(|_| SensorError::TriggerWriteFailed)?;
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trig
            .set_low()
            .map_err(|_| SensorError::TriggerWriteFailed)?;

        // Phase 1: wait for the echo line to go active.
        let deadline = ElapsedTimer::start(&self.clock);
        loop {
            if self.echo.is_high().map_err(|_| SensorError::EchoReadFailed)? {
                break;
            }
            if deadline.elapsed_us(&self.clock) > self.timeout_us {
                return Ok(DistanceSample::NoEcho);
            }
        }

        // Phase 2: measure how long the echo stays active. The bound here
        // caps measurable range rather than failing the shot, so whatever
        // duration accumulated when it fires is kept.
        let pulse = ElapsedTimer::start(&self.clock);
        let bound = ElapsedTimer::start(&self.clock);
        while self.echo.is_high().map_err(|_| SensorError::EchoReadFailed)? {
            if bound.elapsed_us(&self.clock) > self.timeout_us {
                break;
            }
        }
        let width_us = pulse.elapsed_us(&self.clock);

        Ok(DistanceSample::Centimeters(width_us as f32 / US_PER_CM))
    }

    /// Multi-sample filtered measurement: `samples` shots with a
    /// `settle_ms` pause after each, averaged over the valid readings.
    ///
    /// Returns `NoEcho` when every shot was invalid. The multi-shot design
    /// is the retry mechanism — individual timeouts are not retried.
    pub fn filtered_distance(
        &mut self,
        samples: u8,
        settle_ms: u32,
    ) -> Result<DistanceSample, SensorError> {
        let shots = (samples as usize).min(MAX_SAMPLES);
        let mut readings: heapless::Vec<DistanceSample, MAX_SAMPLES> = heapless::Vec::new();
        for _ in 0..shots {
            let sample = self.measure_distance()?;
            // Capacity matches the shot bound, so this cannot fail.
            let _ = readings.push(sample);
            self.delay.delay_ms(settle_ms);
        }
        Ok(level::mean_of_valid(&readings))
    }
}
