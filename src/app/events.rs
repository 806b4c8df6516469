//! Domain data bundles and outbound application events.
//!
//! The [`BinMonitor`](super::service::BinMonitor) emits [`AppEvent`]s
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on the
//! other side decide what to do with them — today that is the serial log.

use crate::level::{FillReading, DistanceSample};

/// A point-in-time capture of the four binary sensor lines, taken once per
/// cycle and discarded after the cycle's report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorSnapshot {
    /// Tilt sensor: the container lid is open; ranging is paused.
    pub container_open: bool,
    /// Flame sensor alert.
    pub flame_detected: bool,
    /// Ambient brightness: `true` = bright, `false` = dark.
    pub bright: bool,
    /// IR detector reports an object in range.
    pub object_detected: bool,
}

/// Outcome of the cycle's fill measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillStatus {
    /// Container open — measurement deliberately skipped.
    Paused,
    /// No valid echo across the whole filtered measurement.
    NoEcho,
    /// A fill level was computed.
    Level(FillReading),
}

impl FillStatus {
    pub fn from_sample(sample: DistanceSample, bin_height_cm: f32) -> Self {
        match sample {
            DistanceSample::NoEcho => Self::NoEcho,
            DistanceSample::Centimeters(cm) => {
                Self::Level(FillReading::from_distance(cm, bin_height_cm))
            }
        }
    }
}

/// Per-cycle LED actuation decision.
///
/// `Unchanged` is load-bearing: on cycles where the IR detector reports no
/// object, the bank is left at whatever level a previous cycle set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    On,
    Off,
    Unchanged,
}

/// The structured report emitted once per fusion-loop cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    pub container_open: bool,
    pub fill: FillStatus,
    pub flame_alert: bool,
    pub bright: bool,
    pub object_detected: bool,
    pub leds: LedState,
}

/// Startup sensor check, reported once before the loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfTestReport {
    pub bright: bool,
    pub container_open: bool,
    pub object_detected: bool,
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The monitor has started (carries the configured bin height).
    Started { bin_height_cm: f32 },
    /// Startup sensor self-test result.
    SelfTest(SelfTestReport),
    /// One fusion-loop cycle completed.
    Cycle(CycleReport),
}
