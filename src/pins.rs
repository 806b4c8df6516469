//! GPIO pin assignments for the BinWatch main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Ultrasonic ranger (HC-SR04)
// ---------------------------------------------------------------------------

/// Digital output: 10 µs trigger pulse starts one ranging cycle.
pub const ULTRASONIC_TRIG_GPIO: i32 = 1;
/// Digital input: echo line goes HIGH for a duration proportional to the
/// round-trip pulse travel time.
pub const ULTRASONIC_ECHO_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Binary environmental sensors (all active-low: logic 0 = detected)
// ---------------------------------------------------------------------------

/// Flame sensor digital output. LOW = flame present.
pub const FLAME_GPIO: i32 = 4;
/// Digital brightness sensor. LOW = bright, HIGH = dark.
pub const BRIGHTNESS_GPIO: i32 = 5;
/// Tilt sensor on the container lid. LOW = container open/tilted.
pub const TILT_GPIO: i32 = 6;
/// Infrared object detector. LOW = object in range.
pub const IR_DETECT_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Indicator LEDs (switched together as one bank)
// ---------------------------------------------------------------------------

pub const LED1_GPIO: i32 = 11;
pub const LED2_GPIO: i32 = 12;
pub const LED3_GPIO: i32 = 13;
