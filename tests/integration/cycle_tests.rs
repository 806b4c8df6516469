//! Integration tests for the BinMonitor fusion cycle.
//!
//! These run on the host and drive the full snapshot → ranging → LED
//! pipeline through the port traits with recording mocks.

use crate::mock_hw::{LogSink, MockHardware};

use binwatch::app::events::{AppEvent, FillStatus, LedState};
use binwatch::app::service::BinMonitor;
use binwatch::config::BinConfig;
use binwatch::level::DistanceSample;

fn make_monitor() -> (BinMonitor, MockHardware, LogSink) {
    (
        BinMonitor::new(BinConfig::default()),
        MockHardware::new(),
        LogSink::new(),
    )
}

// ── Ranging gate ──────────────────────────────────────────────

#[test]
fn open_container_skips_ranging_entirely() {
    let (mut monitor, mut hw, mut sink) = make_monitor();
    hw.snapshot.container_open = true;

    let report = monitor.run_cycle(&mut hw, &mut sink);

    assert_eq!(hw.ranging_calls, 0, "open container must not trigger the ranger");
    assert_eq!(report.fill, FillStatus::Paused);
    assert!(report.container_open);
}

#[test]
fn closed_container_measures_and_reports_fill() {
    let (mut monitor, mut hw, mut sink) = make_monitor();
    hw.distance = DistanceSample::Centimeters(75.0);

    let report = monitor.run_cycle(&mut hw, &mut sink);

    assert_eq!(hw.ranging_calls, 1);
    match report.fill {
        FillStatus::Level(reading) => assert!((reading.percent() - 50.0).abs() < 1e-4),
        other => panic!("expected a fill level, got {other:?}"),
    }
}

#[test]
fn no_echo_reports_no_reading() {
    let (mut monitor, mut hw, mut sink) = make_monitor();
    hw.distance = DistanceSample::NoEcho;

    let report = monitor.run_cycle(&mut hw, &mut sink);

    assert_eq!(report.fill, FillStatus::NoEcho);
}

#[test]
fn ranging_failure_never_blocks_other_sensors() {
    let (mut monitor, mut hw, mut sink) = make_monitor();
    hw.distance = DistanceSample::NoEcho;
    hw.snapshot.flame_detected = true;
    hw.snapshot.bright = false;
    hw.snapshot.object_detected = true;

    let report = monitor.run_cycle(&mut hw, &mut sink);

    assert_eq!(report.fill, FillStatus::NoEcho);
    assert!(report.flame_alert, "flame must be reported despite ranging failure");
    assert!(!report.bright);
    assert!(report.object_detected);
    assert_eq!(hw.last_led(), Some(true), "LED logic must run despite ranging failure");
}

// ── LED gating ────────────────────────────────────────────────

#[test]
fn no_object_leaves_leds_untouched_when_dark() {
    let (mut monitor, mut hw, mut sink) = make_monitor();
    hw.snapshot.object_detected = false;
    hw.snapshot.bright = false;

    let report = monitor.run_cycle(&mut hw, &mut sink);

    assert!(hw.led_calls.is_empty(), "no-object cycles must not touch the LEDs");
    assert_eq!(report.leds, LedState::Unchanged);
}

#[test]
fn no_object_leaves_leds_untouched_when_bright() {
    let (mut monitor, mut hw, mut sink) = make_monitor();
    hw.snapshot.object_detected = false;
    hw.snapshot.bright = true;

    let report = monitor.run_cycle(&mut hw, &mut sink);

    assert!(hw.led_calls.is_empty());
    assert_eq!(report.leds, LedState::Unchanged);
}

#[test]
fn object_in_the_dark_turns_leds_on() {
    let (mut monitor, mut hw, mut sink) = make_monitor();
    hw.snapshot.object_detected = true;
    hw.snapshot.bright = false;

    let report = monitor.run_cycle(&mut hw, &mut sink);

    assert_eq!(hw.last_led(), Some(true));
    assert_eq!(report.leds, LedState::On);
    assert!(monitor.leds_on());
}

#[test]
fn object_in_daylight_turns_leds_off() {
    let (mut monitor, mut hw, mut sink) = make_monitor();
    hw.snapshot.object_detected = true;
    hw.snapshot.bright = true;

    let report = monitor.run_cycle(&mut hw, &mut sink);

    assert_eq!(hw.last_led(), Some(false));
    assert_eq!(report.leds, LedState::Off);
    assert!(!monitor.leds_on());
}

#[test]
fn led_level_persists_across_no_object_cycles() {
    let (mut monitor, mut hw, mut sink) = make_monitor();

    // Cycle 1: object in the dark → lights on.
    hw.snapshot.object_detected = true;
    hw.snapshot.bright = false;
    monitor.run_cycle(&mut hw, &mut sink);
    assert!(monitor.leds_on());

    // Cycle 2: object gone, now bright — the bank stays on regardless.
    hw.snapshot.object_detected = false;
    hw.snapshot.bright = true;
    monitor.run_cycle(&mut hw, &mut sink);

    assert!(monitor.leds_on(), "LED level must persist through no-object cycles");
    assert_eq!(hw.led_calls, vec![true], "only the first cycle may command the bank");
}

// ── Reporting ─────────────────────────────────────────────────

#[test]
fn every_cycle_emits_exactly_one_report() {
    let (mut monitor, mut hw, mut sink) = make_monitor();

    monitor.run_cycle(&mut hw, &mut sink);
    hw.snapshot.container_open = true;
    monitor.run_cycle(&mut hw, &mut sink);

    assert_eq!(sink.cycle_reports().len(), 2);
    assert_eq!(monitor.cycle_count(), 2);
}

#[test]
fn startup_self_test_reports_three_lines() {
    let (mut monitor, mut hw, mut sink) = make_monitor();
    hw.snapshot.bright = false;
    hw.snapshot.container_open = true;
    hw.snapshot.object_detected = true;

    monitor.start(&mut hw, &mut sink);

    assert!(matches!(sink.events[0], AppEvent::Started { .. }));
    match &sink.events[1] {
        AppEvent::SelfTest(t) => {
            assert!(!t.bright);
            assert!(t.container_open);
            assert!(t.object_detected);
        }
        other => panic!("expected a self-test event, got {other:?}"),
    }
    // Self-test must not start the cycle machinery.
    assert_eq!(monitor.cycle_count(), 0);
    assert_eq!(hw.ranging_calls, 0);
}
