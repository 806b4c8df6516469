//! Hardware-facing drivers, generic over `embedded-hal` pin traits so the
//! whole subsystem runs on the host under test with simulated pins.

pub mod clock;
pub mod hc_sr04;
pub mod indicator_leds;
