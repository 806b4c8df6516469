//! Application service — the sensor fusion loop core.
//!
//! [`BinMonitor`] owns the configuration and the persisted LED level. It is
//! hardware-agnostic: all I/O flows through port traits injected at call
//! sites, making every branch testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!  RangerPort ──▶ │       BinMonitor        │
//! ActuatorPort ◀──│  ranging gate · LED gate│
//!                 └────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::BinConfig;

use super::events::{AppEvent, CycleReport, FillStatus, LedState, SelfTestReport};
use super::ports::{ActuatorPort, EventSink, RangerPort, SensorPort};

/// Decide the cycle's LED actuation.
///
/// The bank is only ever touched when the IR detector reports an object:
/// lights come on to view a detected object in the dark and go off in
/// daylight. With no object the bank keeps its previous level. Confirmed
/// with stakeholders as intended behaviour, not an asymmetry to fix.
pub fn led_decision(object_detected: bool, bright: bool) -> LedState {
    if !object_detected {
        LedState::Unchanged
    } else if bright {
        LedState::Off
    } else {
        LedState::On
    }
}

/// The top-level per-cycle orchestrator.
pub struct BinMonitor {
    config: BinConfig,
    /// Last commanded LED level. The hardware latch would remember this for
    /// free; modelling it explicitly keeps the gating rule observable.
    leds_on: bool,
    cycle_count: u64,
}

impl BinMonitor {
    pub fn new(config: BinConfig) -> Self {
        Self {
            config,
            leds_on: false,
            cycle_count: 0,
        }
    }

    /// Announce startup and run the one-off sensor self-test.
    ///
    /// Reads brightness, tilt and IR once and reports them. Not part of the
    /// ongoing cycle contract.
    pub fn start(&mut self, hw: &mut impl SensorPort, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            bin_height_cm: self.config.bin_height_cm,
        });

        let snap = hw.read_all();
        sink.emit(&AppEvent::SelfTest(SelfTestReport {
            bright: snap.bright,
            container_open: snap.container_open,
            object_detected: snap.object_detected,
        }));
        info!("BinMonitor started, bin height {:.1} cm", self.config.bin_height_cm);
    }

    /// Run one full fusion cycle: snapshot → conditional ranging → LED
    /// gating → report. Returns the emitted report.
    ///
    /// The `hw` parameter satisfies all three hardware ports — this avoids
    /// a double mutable borrow while keeping the port boundary explicit.
    pub fn run_cycle(
        &mut self,
        hw: &mut (impl SensorPort + RangerPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) -> CycleReport {
        self.cycle_count += 1;

        // 1. Capture the cycle's snapshot once.
        let snap = hw.read_all();

        // 2. Fill measurement, gated on the container state. A ranging
        //    failure never blocks the rest of the cycle.
        let fill = if snap.container_open {
            FillStatus::Paused
        } else {
            FillStatus::from_sample(hw.filtered_distance(), self.config.bin_height_cm)
        };

        // 3. Flame alert is report-only, but worth a log line of its own.
        if snap.flame_detected {
            warn!("flame detected near the bin");
        }

        // 4. LED actuation, gated on IR detection.
        let leds = led_decision(snap.object_detected, snap.bright);
        match leds {
            LedState::On => {
                hw.set_leds(true);
                self.leds_on = true;
            }
            LedState::Off => {
                hw.set_leds(false);
                self.leds_on = false;
            }
            LedState::Unchanged => {}
        }

        // 5. Emit the cycle report.
        let report = CycleReport {
            container_open: snap.container_open,
            fill,
            flame_alert: snap.flame_detected,
            bright: snap.bright,
            object_detected: snap.object_detected,
            leds,
        };
        sink.emit(&AppEvent::Cycle(report));
        report
    }

    // ── Queries ───────────────────────────────────────────────

    /// Last commanded LED level (persists across cycles).
    pub fn leds_on(&self) -> bool {
        self.leds_on
    }

    /// Total cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn config(&self) -> &BinConfig {
        &self.config
    }
}
