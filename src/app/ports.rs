//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ BinMonitor (domain)
//! ```
//!
//! Driven adapters (sensors, the ranger, LEDs, event sinks) implement these
//! traits. The [`BinMonitor`](super::service::BinMonitor) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::level::DistanceSample;

use super::events::{AppEvent, SensorSnapshot};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain the cycle's sensor data.
pub trait SensorPort {
    /// Read every binary sensor line once and return a unified snapshot.
    fn read_all(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Ranger port (driven adapter: ultrasonic hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Filtered ultrasonic distance measurement.
///
/// Separate from [`SensorPort`] because the fusion loop must be able to
/// skip it entirely on container-open cycles — tests assert the call
/// count directly.
pub trait RangerPort {
    /// Run one multi-sample filtered measurement. Blocks for the shot
    /// delays; `NoEcho` covers both timeouts and degraded hardware.
    fn filtered_distance(&mut self) -> DistanceSample;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the LED bank.
pub trait ActuatorPort {
    /// Switch the whole indicator bank on or off.
    fn set_leds(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port. Adapters
/// decide where they go (serial log today; anything else later).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
