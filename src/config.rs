//! System configuration parameters
//!
//! All tunable parameters for the BinWatch monitor. The defaults match the
//! deployed bin geometry and the HC-SR04 timing budget.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinConfig {
    // --- Bin geometry ---
    /// Height of the bin interior, sensor face to bottom (cm).
    pub bin_height_cm: f32,

    // --- Ranging ---
    /// Ultrasonic shots averaged into one filtered measurement.
    pub ranging_samples: u8,
    /// Settle delay between consecutive shots (milliseconds). Lets the
    /// transducer ring down and avoids cross-talk between pulses.
    pub sample_interval_ms: u32,
    /// Timeout bound for both echo-wait phases (milliseconds). Also caps
    /// the measurable range at roughly 400 cm.
    pub echo_timeout_ms: u32,

    // --- Timing ---
    /// Delay between fusion-loop cycles (milliseconds).
    pub cycle_interval_ms: u32,
}

impl Default for BinConfig {
    fn default() -> Self {
        Self {
            bin_height_cm: 150.0,
            ranging_samples: 5,
            sample_interval_ms: 60,
            echo_timeout_ms: 25,
            cycle_interval_ms: 10_000,
        }
    }
}

impl BinConfig {
    /// Echo timeout in microseconds, as consumed by the ranger driver.
    pub fn echo_timeout_us(&self) -> u64 {
        u64::from(self.echo_timeout_ms) * 1_000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = BinConfig::default();
        assert!(c.bin_height_cm > 0.0);
        assert!(c.ranging_samples > 0);
        assert!(c.echo_timeout_ms > 0);
        assert!(c.sample_interval_ms > 0);
        assert!(c.cycle_interval_ms > 0);
    }

    #[test]
    fn serde_roundtrip() {
        let c = BinConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: BinConfig = serde_json::from_str(&json).unwrap();
        assert!((c.bin_height_cm - c2.bin_height_cm).abs() < 0.001);
        assert_eq!(c.ranging_samples, c2.ranging_samples);
        assert_eq!(c.cycle_interval_ms, c2.cycle_interval_ms);
    }

    #[test]
    fn timing_ratios_make_sense() {
        let c = BinConfig::default();
        // The whole filtered measurement (shots + settle delays) must fit
        // comfortably inside one cycle interval.
        let worst_case_ms = u32::from(c.ranging_samples)
            * (2 * c.echo_timeout_ms + c.sample_interval_ms);
        assert!(
            worst_case_ms < c.cycle_interval_ms,
            "ranging must not overrun the cycle cadence"
        );
    }

    #[test]
    fn echo_timeout_us_conversion() {
        let c = BinConfig::default();
        assert_eq!(c.echo_timeout_us(), 25_000);
    }
}
