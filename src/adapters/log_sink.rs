//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! logger (UART / USB-CDC in production). The exact wording here is
//! presentation only — nothing downstream parses it.

use log::{info, warn};

use crate::app::events::{AppEvent, FillStatus, LedState};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { bin_height_cm } => {
                info!("START | bin height {:.1} cm", bin_height_cm);
            }
            AppEvent::SelfTest(t) => {
                info!(
                    "TEST  | light={} | container={} | ir={}",
                    if t.bright { "BRIGHT" } else { "DARK" },
                    if t.container_open { "OPEN" } else { "CLOSED" },
                    if t.object_detected { "OBJECT" } else { "NO OBJECT" },
                );
            }
            AppEvent::Cycle(r) => {
                match r.fill {
                    FillStatus::Paused => {
                        info!("FILL  | container open, measurements paused");
                    }
                    FillStatus::NoEcho => info!("FILL  | no echo detected"),
                    FillStatus::Level(reading) => {
                        info!(
                            "FILL  | {:5.1}% {}",
                            reading.percent(),
                            reading.render_bar()
                        );
                    }
                }
                if r.flame_alert {
                    warn!("FLAME | ALERT");
                } else {
                    info!("FLAME | none");
                }
                info!(
                    "ENV   | light={} | ir={} | container={} | leds={}",
                    if r.bright { "BRIGHT" } else { "DARK" },
                    if r.object_detected { "OBJECT" } else { "NO OBJECT" },
                    if r.container_open { "OPEN" } else { "CLOSED" },
                    match r.leds {
                        LedState::On => "ON",
                        LedState::Off => "OFF",
                        LedState::Unchanged => "UNCHANGED",
                    },
                );
            }
        }
    }
}
