//! Boot sequence through `runtime::spawn_workers`.

use crate::mock_hw::{Call, SharedRecorder};
use actuator_effects::config::SystemConfig;
use actuator_effects::effect::params::{COLOUR_BLUE, RgbColor, Tone};
use actuator_effects::runtime::spawn_workers;
use actuator_effects::{ActuatorScheduler, EffectRequest};
use std::thread;
use std::time::Duration;

#[test]
fn boot_shows_colour_and_primes_silent_buzzer() {
    static RGB: ActuatorScheduler<RgbColor> = ActuatorScheduler::new("boot-rgb");
    static BUZZER: ActuatorScheduler<Tone> = ActuatorScheduler::new("boot-buzzer");

    let led = SharedRecorder::new();
    let buzzer = SharedRecorder::new();
    let config = SystemConfig {
        worker_stack_kb: 256,
        ..SystemConfig::default()
    };

    spawn_workers(&RGB, led.clone(), &BUZZER, buzzer.clone(), &config).unwrap();
    thread::sleep(Duration::from_millis(300));

    let led_calls: Vec<_> = led.snapshot().into_iter().map(|(_, c)| c).collect();
    assert_eq!(led_calls, vec![Call::Set(COLOUR_BLUE), Call::On]);

    let buzzer_calls: Vec<_> = buzzer.snapshot().into_iter().map(|(_, c)| c).collect();
    assert_eq!(buzzer_calls, vec![Call::Set(Tone::new(440, 100))]);
    assert!(!buzzer.is_on());

    // Both workers share the thread; the buzzer still responds.
    BUZZER
        .submit_effect(Tone::new(1_000, 40), EffectRequest::continuous(1))
        .unwrap();
    thread::sleep(Duration::from_millis(1_500));

    assert_eq!(buzzer.count(&Call::On), 1);
    assert_eq!(buzzer.count(&Call::Off), 1);
    assert!(led.is_on(), "boot colour must hold while the buzzer runs");
}

#[test]
fn invalid_config_spawns_nothing() {
    static RGB: ActuatorScheduler<RgbColor> = ActuatorScheduler::new("bad-rgb");
    static BUZZER: ActuatorScheduler<Tone> = ActuatorScheduler::new("bad-buzzer");

    let config = SystemConfig {
        boot_tone: Tone::new(20_000, 50),
        ..SystemConfig::default()
    };
    let buzzer = SharedRecorder::new();

    let result = spawn_workers(&RGB, SharedRecorder::new(), &BUZZER, buzzer.clone(), &config);

    assert!(result.is_err());
    assert_eq!(RGB.pending(), 0);
    assert!(buzzer.snapshot().is_empty());
}

#[test]
fn boot_without_colour_leaves_led_dark() {
    static RGB: ActuatorScheduler<RgbColor> = ActuatorScheduler::new("dark-rgb");
    static BUZZER: ActuatorScheduler<Tone> = ActuatorScheduler::new("dark-buzzer");

    let led = SharedRecorder::new();
    let config = SystemConfig {
        boot_colour: None,
        worker_stack_kb: 256,
        ..SystemConfig::default()
    };

    spawn_workers(&RGB, led.clone(), &BUZZER, SharedRecorder::new(), &config).unwrap();
    thread::sleep(Duration::from_millis(200));

    assert!(led.snapshot().is_empty());
}

#[test]
fn oversized_stack_is_rejected_before_anything_is_queued() {
    static RGB: ActuatorScheduler<RgbColor> = ActuatorScheduler::new("huge-rgb");
    static BUZZER: ActuatorScheduler<Tone> = ActuatorScheduler::new("huge-buzzer");

    let config = SystemConfig {
        worker_stack_kb: usize::MAX / 2,
        ..SystemConfig::default()
    };
    let buzzer = SharedRecorder::new();

    let result = spawn_workers(&RGB, SharedRecorder::new(), &BUZZER, buzzer.clone(), &config);

    assert!(result.is_err());
    assert_eq!(RGB.pending(), 0);
    assert!(buzzer.snapshot().is_empty());
}

#[test]
fn full_boot_queue_still_starts_workers() {
    static RGB: ActuatorScheduler<RgbColor> = ActuatorScheduler::new("busy-rgb");
    static BUZZER: ActuatorScheduler<Tone> = ActuatorScheduler::new("busy-buzzer");

    let queued = RgbColor::new(7, 7, 7);
    for _ in 0..5 {
        RGB.submit_effect(queued, EffectRequest::continuous(0)).unwrap();
    }

    let led = SharedRecorder::new();
    let config = SystemConfig {
        worker_stack_kb: 256,
        ..SystemConfig::default()
    };

    assert!(spawn_workers(&RGB, led.clone(), &BUZZER, SharedRecorder::new(), &config).is_ok());
    thread::sleep(Duration::from_millis(300));

    assert_eq!(RGB.pending(), 0);
    assert!(led.count(&Call::Set(queued)) >= 1);
    assert!(led.is_on());
}
