//! BinWatch firmware — ESP-IDF entry point.
//!
//! Builds the concrete pin drivers, wires them into the
//! [`HardwareAdapter`], runs the startup self-test, then loops the sensor
//! fusion cycle forever at the configured cadence. There is no exit path
//! other than power loss.

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use esp_idf_hal::delay::{Delay, FreeRtos};
use esp_idf_hal::gpio::{AnyIOPin, PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;

use binwatch::adapters::hardware::HardwareAdapter;
use binwatch::adapters::log_sink::LogEventSink;
use binwatch::adapters::time::SystemClock;
use binwatch::app::service::BinMonitor;
use binwatch::config::BinConfig;
use binwatch::drivers::hc_sr04::HcSr04;
use binwatch::drivers::indicator_leds::IndicatorLeds;
use binwatch::pins;
use binwatch::sensors::binary::ActiveLowInput;
use binwatch::sensors::SensorHub;

/// Pause between the startup self-test and the first cycle.
const STARTUP_SETTLE_MS: u32 = 2_000;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("BinWatch v{}", env!("CARGO_PKG_VERSION"));

    let config = BinConfig::default();

    // ── 2. Peripheral construction (pin map in `pins.rs`) ─────
    //
    // Claim exclusive ownership of the chip peripherals up front; the
    // AnyIOPin constructions below are sound because nothing else can
    // alias the pins afterwards, and `pins.rs` assigns each number once.
    let _peripherals = Peripherals::take()?;

    let trig = PinDriver::output(unsafe { AnyIOPin::new(pins::ULTRASONIC_TRIG_GPIO) })?;
    let mut echo = PinDriver::input(unsafe { AnyIOPin::new(pins::ULTRASONIC_ECHO_GPIO) })?;
    echo.set_pull(Pull::Down)?;

    let mut flame = PinDriver::input(unsafe { AnyIOPin::new(pins::FLAME_GPIO) })?;
    flame.set_pull(Pull::Up)?;
    let mut brightness = PinDriver::input(unsafe { AnyIOPin::new(pins::BRIGHTNESS_GPIO) })?;
    brightness.set_pull(Pull::Up)?;
    let mut tilt = PinDriver::input(unsafe { AnyIOPin::new(pins::TILT_GPIO) })?;
    tilt.set_pull(Pull::Up)?;
    let mut ir = PinDriver::input(unsafe { AnyIOPin::new(pins::IR_DETECT_GPIO) })?;
    ir.set_pull(Pull::Up)?;

    let led1 = PinDriver::output(unsafe { AnyIOPin::new(pins::LED1_GPIO) })?;
    let led2 = PinDriver::output(unsafe { AnyIOPin::new(pins::LED2_GPIO) })?;
    let led3 = PinDriver::output(unsafe { AnyIOPin::new(pins::LED3_GPIO) })?;

    info!(
        "pins | trig=GPIO{} echo=GPIO{} flame=GPIO{} light=GPIO{} tilt=GPIO{} ir=GPIO{} leds=GPIO{}/{}/{}",
        pins::ULTRASONIC_TRIG_GPIO,
        pins::ULTRASONIC_ECHO_GPIO,
        pins::FLAME_GPIO,
        pins::BRIGHTNESS_GPIO,
        pins::TILT_GPIO,
        pins::IR_DETECT_GPIO,
        pins::LED1_GPIO,
        pins::LED2_GPIO,
        pins::LED3_GPIO,
    );

    // ── 3. Drivers behind the port boundary ───────────────────
    let ranger = HcSr04::new(
        trig,
        echo,
        Delay::new_default(),
        SystemClock::new(),
        config.echo_timeout_us(),
    );
    let hub = SensorHub::new(
        ActiveLowInput::new(flame),
        ActiveLowInput::new(brightness),
        ActiveLowInput::new(tilt),
        ActiveLowInput::new(ir),
    );
    let leds = IndicatorLeds::new(led1, led2, led3);

    let mut hw = HardwareAdapter::new(
        ranger,
        hub,
        leds,
        config.ranging_samples,
        config.sample_interval_ms,
    );
    let mut sink = LogEventSink::new();
    let mut monitor = BinMonitor::new(config.clone());

    // ── 4. Self-test, then the fusion loop ────────────────────
    monitor.start(&mut hw, &mut sink);
    FreeRtos::delay_ms(STARTUP_SETTLE_MS);

    loop {
        monitor.run_cycle(&mut hw, &mut sink);
        FreeRtos::delay_ms(config.cycle_interval_ms);
    }
}
