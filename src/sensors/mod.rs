//! Sensor subsystem — the aggregating [`SensorHub`].
//!
//! The hub owns the four binary environmental inputs and produces a
//! [`SensorSnapshot`] each cycle that the fusion loop consumes.

pub mod binary;

use log::warn;

use crate::app::events::SensorSnapshot;
use binary::ActiveLowInput;

/// Aggregates the binary sensors and produces a unified snapshot.
///
/// Individual read failures are logged and the previous good value is
/// retained — a single flaky line must not crash the control loop.
pub struct SensorHub<F, B, T, I> {
    flame: ActiveLowInput<F>,
    brightness: ActiveLowInput<B>,
    tilt: ActiveLowInput<T>,
    ir: ActiveLowInput<I>,
    last: SensorSnapshot,
}

impl<F, B, T, I> SensorHub<F, B, T, I>
where
    F: embedded_hal::digital::InputPin,
    B: embedded_hal::digital::InputPin,
    T: embedded_hal::digital::InputPin,
    I: embedded_hal::digital::InputPin,
{
    /// Construct a new hub. Pass in pre-built inputs (built in main where
    /// peripheral ownership is established).
    pub fn new(
        flame: ActiveLowInput<F>,
        brightness: ActiveLowInput<B>,
        tilt: ActiveLowInput<T>,
        ir: ActiveLowInput<I>,
    ) -> Self {
        Self {
            flame,
            brightness,
            tilt,
            ir,
            last: SensorSnapshot::default(),
        }
    }

    /// Read every line once and return the cycle's snapshot.
    pub fn read_all(&mut self) -> SensorSnapshot {
        let snapshot = SensorSnapshot {
            // Tilted lid reads logic 0.
            container_open: match self.tilt.is_active() {
                Ok(v) => v,
                Err(e) => {
                    warn!("tilt read failed ({e}), keeping last value");
                    self.last.container_open
                }
            },
            flame_detected: match self.flame.is_active() {
                Ok(v) => v,
                Err(e) => {
                    warn!("flame read failed ({e}), keeping last value");
                    self.last.flame_detected
                }
            },
            // The brightness line is low in daylight.
            bright: match self.brightness.is_active() {
                Ok(v) => v,
                Err(e) => {
                    warn!("brightness read failed ({e}), keeping last value");
                    self.last.bright
                }
            },
            object_detected: match self.ir.is_active() {
                Ok(v) => v,
                Err(e) => {
                    warn!("IR read failed ({e}), keeping last value");
                    self.last.object_detected
                }
            },
        };
        self.last = snapshot;
        snapshot
    }
}
