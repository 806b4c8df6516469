//! Mock hardware adapter for integration tests.
//!
//! Records every ranging and LED call so tests can assert on call counts
//! and command history without touching real GPIO.

use binwatch::app::events::{AppEvent, CycleReport, SensorSnapshot};
use binwatch::app::ports::{ActuatorPort, EventSink, RangerPort, SensorPort};
use binwatch::level::DistanceSample;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Snapshot returned by the next `read_all`.
    pub snapshot: SensorSnapshot,
    /// Sample returned by the next `filtered_distance`.
    pub distance: DistanceSample,
    /// Number of filtered measurements requested so far.
    pub ranging_calls: usize,
    /// Every LED bank command, in order.
    pub led_calls: Vec<bool>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            snapshot: SensorSnapshot {
                container_open: false,
                flame_detected: false,
                bright: true,
                object_detected: false,
            },
            distance: DistanceSample::Centimeters(75.0),
            ranging_calls: 0,
            led_calls: Vec::new(),
        }
    }

    pub fn last_led(&self) -> Option<bool> {
        self.led_calls.last().copied()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_all(&mut self) -> SensorSnapshot {
        self.snapshot
    }
}

impl RangerPort for MockHardware {
    fn filtered_distance(&mut self) -> DistanceSample {
        self.ranging_calls += 1;
        self.distance
    }
}

impl ActuatorPort for MockHardware {
    fn set_leds(&mut self, on: bool) {
        self.led_calls.push(on);
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn cycle_reports(&self) -> Vec<CycleReport> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Cycle(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
