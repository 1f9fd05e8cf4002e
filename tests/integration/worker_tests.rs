//! Worker loop tests on the host clock.
//!
//! Each test owns a `static` scheduler and runs its worker on a detached
//! thread; assertions use generous windows around the expected timestamps.

use crate::mock_hw::{Call, SharedRecorder};
use actuator_effects::effect::params::{COLOUR_GREEN, COLOUR_RED, RgbColor};
use actuator_effects::{ActuatorScheduler, EffectRequest};
use std::thread;
use std::time::Duration;

/// Slack allowed on either side of an expected timestamp (ms).
const SLACK_MS: u64 = 150;

fn spawn_worker(sched: &'static ActuatorScheduler<RgbColor>, driver: SharedRecorder<RgbColor>) {
    thread::spawn(move || futures_lite::future::block_on(sched.run(driver)));
}

fn near(actual: u64, expected: u64) -> bool {
    actual + SLACK_MS >= expected && actual <= expected + SLACK_MS
}

#[test]
fn continuous_turns_off_after_duration() {
    static RGB: ActuatorScheduler<RgbColor> = ActuatorScheduler::new("rgb-continuous");
    let rec = SharedRecorder::new();
    spawn_worker(&RGB, rec.clone());

    RGB.submit_effect(COLOUR_RED, EffectRequest::continuous(1)).unwrap();
    thread::sleep(Duration::from_millis(1_600));

    let calls = rec.snapshot();
    let kinds: Vec<_> = calls.iter().map(|(_, c)| c.clone()).collect();
    assert_eq!(kinds, vec![Call::Set(COLOUR_RED), Call::On, Call::Off]);
    assert!(near(calls[2].0 - calls[1].0, 1_000), "off at {:?}", calls);
    assert!(!rec.is_on());
}

#[test]
fn blinking_with_duration_ends_off() {
    static RGB: ActuatorScheduler<RgbColor> = ActuatorScheduler::new("rgb-blink");
    let rec = SharedRecorder::new();
    spawn_worker(&RGB, rec.clone());

    RGB.submit_effect(COLOUR_RED, EffectRequest::blinking(1, 50, 2)).unwrap();
    thread::sleep(Duration::from_millis(2_800));

    assert_eq!(rec.count(&Call::On), 2);
    assert_eq!(rec.count(&Call::Off), 2);
    assert!(!rec.is_on());

    let ons: Vec<u64> = rec
        .snapshot()
        .into_iter()
        .filter(|(_, c)| *c == Call::On)
        .map(|(t, _)| t)
        .collect();
    assert!(near(ons[1] - ons[0], 1_000), "ticks at {:?}", ons);
}

#[test]
fn new_command_preempts_running_blink() {
    static RGB: ActuatorScheduler<RgbColor> = ActuatorScheduler::new("rgb-preempt");
    let rec = SharedRecorder::new();
    spawn_worker(&RGB, rec.clone());

    RGB.submit_effect(COLOUR_RED, EffectRequest::blinking(1, 50, 0)).unwrap();
    thread::sleep(Duration::from_millis(200));
    RGB.submit_effect(COLOUR_GREEN, EffectRequest::continuous(0)).unwrap();
    thread::sleep(Duration::from_millis(1_800));

    let calls = rec.snapshot();
    let switch = calls
        .iter()
        .position(|(_, c)| *c == Call::Set(COLOUR_GREEN))
        .expect("green never applied");
    let after: Vec<_> = calls[switch..].iter().map(|(_, c)| c.clone()).collect();

    assert_eq!(after, vec![Call::Set(COLOUR_GREEN), Call::On]);
    assert!(rec.is_on());
}

#[test]
fn queued_commands_are_taken_in_order() {
    static RGB: ActuatorScheduler<RgbColor> = ActuatorScheduler::new("rgb-fifo");
    let rec = SharedRecorder::new();

    let first = RgbColor::new(1, 0, 0);
    let last = RgbColor::new(0, 0, 9);
    RGB.submit_effect(first, EffectRequest::continuous(0)).unwrap();
    RGB.submit_effect(last, EffectRequest::continuous(0)).unwrap();
    assert_eq!(RGB.pending(), 2);

    spawn_worker(&RGB, rec.clone());
    thread::sleep(Duration::from_millis(300));

    assert_eq!(RGB.pending(), 0);
    let sets: Vec<_> = rec
        .snapshot()
        .into_iter()
        .filter_map(|(_, c)| match c {
            Call::Set(colour) => Some(colour),
            _ => None,
        })
        .collect();
    assert_eq!(sets.last(), Some(&last));
    assert!(sets.contains(&first));
}
