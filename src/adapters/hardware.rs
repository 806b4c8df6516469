//! Hardware adapter — bridges the drivers to the domain port traits.
//!
//! Owns the [`SensorHub`], the ranger and the LED bank, exposing them
//! through [`SensorPort`], [`RangerPort`] and [`ActuatorPort`]. This is the
//! only module that maps driver errors onto the degraded-but-running
//! behaviour the fusion loop expects: a ranging fault becomes `NoEcho`, an
//! LED fault is logged and the cycle continues.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::events::SensorSnapshot;
use crate::app::ports::{ActuatorPort, RangerPort, SensorPort};
use crate::drivers::clock::MonotonicClock;
use crate::drivers::hc_sr04::HcSr04;
use crate::drivers::indicator_leds::IndicatorLeds;
use crate::level::DistanceSample;
use crate::sensors::SensorHub;

/// Concrete adapter that combines all hardware behind the port traits.
pub struct HardwareAdapter<Trig, Echo, D, C, F, B, T, I, L1, L2, L3> {
    ranger: HcSr04<Trig, Echo, D, C>,
    sensors: SensorHub<F, B, T, I>,
    leds: IndicatorLeds<L1, L2, L3>,
    ranging_samples: u8,
    sample_interval_ms: u32,
}

impl<Trig, Echo, D, C, F, B, T, I, L1, L2, L3>
    HardwareAdapter<Trig, Echo, D, C, F, B, T, I, L1, L2, L3>
where
    Trig: OutputPin,
    Echo: InputPin,
    D: DelayNs,
    C: MonotonicClock,
    F: InputPin,
    B: InputPin,
    T: InputPin,
    I: InputPin,
    L1: OutputPin,
    L2: OutputPin,
    L3: OutputPin,
{
    pub fn new(
        ranger: HcSr04<Trig, Echo, D, C>,
        sensors: SensorHub<F, B, T, I>,
        leds: IndicatorLeds<L1, L2, L3>,
        ranging_samples: u8,
        sample_interval_ms: u32,
    ) -> Self {
        Self {
            ranger,
            sensors,
            leds,
            ranging_samples,
            sample_interval_ms,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<Trig, Echo, D, C, F, B, T, I, L1, L2, L3> SensorPort
    for HardwareAdapter<Trig, Echo, D, C, F, B, T, I, L1, L2, L3>
where
    Trig: OutputPin,
    Echo: InputPin,
    D: DelayNs,
    C: MonotonicClock,
    F: InputPin,
    B: InputPin,
    T: InputPin,
    I: InputPin,
    L1: OutputPin,
    L2: OutputPin,
    L3: OutputPin,
{
    fn read_all(&mut self) -> SensorSnapshot {
        self.sensors.read_all()
    }
}

// ── RangerPort implementation ─────────────────────────────────

impl<Trig, Echo, D, C, F, B, T, I, L1, L2, L3> RangerPort
    for HardwareAdapter<Trig, Echo, D, C, F, B, T, I, L1, L2, L3>
where
    Trig: OutputPin,
    Echo: InputPin,
    D: DelayNs,
    C: MonotonicClock,
    F: InputPin,
    B: InputPin,
    T: InputPin,
    I: InputPin,
    L1: OutputPin,
    L2: OutputPin,
    L3: OutputPin,
{
    fn filtered_distance(&mut self) -> DistanceSample {
        match self
            .ranger
            .filtered_distance(self.ranging_samples, self.sample_interval_ms)
        {
            Ok(sample) => sample,
            Err(e) => {
                // Pin faults degrade to "no reading this cycle" — the
                // fusion loop carries on with the other sensors.
                warn!("ranging failed ({e}), treating as no echo");
                DistanceSample::NoEcho
            }
        }
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<Trig, Echo, D, C, F, B, T, I, L1, L2, L3> ActuatorPort
    for HardwareAdapter<Trig, Echo, D, C, F, B, T, I, L1, L2, L3>
where
    Trig: OutputPin,
    Echo: InputPin,
    D: DelayNs,
    C: MonotonicClock,
    F: InputPin,
    B: InputPin,
    T: InputPin,
    I: InputPin,
    L1: OutputPin,
    L2: OutputPin,
    L3: OutputPin,
{
    fn set_leds(&mut self, on: bool) {
        if let Err(e) = self.leds.set_all(on) {
            warn!("LED bank write failed ({e})");
        }
    }
}
