//! Fill-level domain types and calculations.
//!
//! Pure functions only — everything here is host-testable. The ranger driver
//! produces [`DistanceSample`]s; the fusion loop turns them into
//! [`FillReading`]s relative to the configured bin height.

/// Round-trip speed-of-sound constant: echo-high microseconds per centimetre.
pub const US_PER_CM: f32 = 58.0;

/// Segments in the rendered fill bar graph.
pub const BAR_SEGMENTS: usize = 20;

/// One ultrasonic distance measurement.
///
/// `Centimeters` may be zero or even negative in pathological cases; only
/// strictly positive readings count as valid. `NoEcho` is the out-of-band
/// sentinel for an echo that never arrived within the timeout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceSample {
    Centimeters(f32),
    NoEcho,
}

impl DistanceSample {
    /// The measured distance, if it is a usable (strictly positive) reading.
    pub fn valid_cm(self) -> Option<f32> {
        match self {
            Self::Centimeters(cm) if cm > 0.0 => Some(cm),
            _ => None,
        }
    }

    pub fn is_no_echo(self) -> bool {
        matches!(self, Self::NoEcho)
    }
}

/// Arithmetic mean of the valid samples, or `NoEcho` when none are valid.
///
/// The sentinel and non-positive readings are excluded, so the result (when
/// not `NoEcho`) always lies within the hull of the valid samples.
pub fn mean_of_valid(samples: &[DistanceSample]) -> DistanceSample {
    let mut sum = 0.0f32;
    let mut valid = 0u32;
    for s in samples {
        if let Some(cm) = s.valid_cm() {
            sum += cm;
            valid += 1;
        }
    }
    if valid == 0 {
        DistanceSample::NoEcho
    } else {
        DistanceSample::Centimeters(sum / valid as f32)
    }
}

/// Bin fill level as a percentage, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillReading(f32);

impl FillReading {
    /// Derive the fill level from a measured clearance distance.
    ///
    /// The content height is clamped into `[0, bin_height]` *before* scaling:
    /// a glitched distance past the bin bottom clamps to empty, a negative
    /// distance clamps to full, and the output never leaves `[0, 100]`.
    pub fn from_distance(distance_cm: f32, bin_height_cm: f32) -> Self {
        let height = (bin_height_cm - distance_cm).clamp(0.0, bin_height_cm);
        Self((height / bin_height_cm) * 100.0)
    }

    pub fn percent(self) -> f32 {
        self.0
    }

    /// Filled segments of the [`BAR_SEGMENTS`]-wide bar graph.
    pub fn bar_count(self) -> usize {
        ((self.0 / 100.0) * BAR_SEGMENTS as f32) as usize
    }

    /// Render the visual fill indicator, e.g. `[#########           ]`.
    /// Report-only — nothing branches on this.
    pub fn render_bar(self) -> heapless::String<{ BAR_SEGMENTS + 2 }> {
        let bars = self.bar_count();
        let mut out = heapless::String::new();
        let _ = out.push('[');
        for i in 0..BAR_SEGMENTS {
            let _ = out.push(if i < bars { '#' } else { ' ' });
        }
        let _ = out.push(']');
        out
    }
}
