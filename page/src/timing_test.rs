#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn debounce_fires_once_after_last_call() {
    let mut gate = Debounce::new(250);
    let mut fired = 0;

    for t in [0.0, 100.0, 200.0, 300.0, 400.0] {
        gate.call(t);
        if gate.due(t) {
            fired += 1;
        }
    }
    for t in [500.0, 600.0, 649.0] {
        assert!(!gate.due(t), "fired early at {t}");
    }
    assert!(gate.due(650.0));
    fired += 1;
    assert!(!gate.due(700.0));
    assert!(!gate.due(10_000.0));
    assert_eq!(fired, 1);
}

#[test]
fn debounce_call_returns_deadline() {
    let mut gate = Debounce::new(250);
    assert_eq!(gate.call(1000.0), 1250.0);
    assert_eq!(gate.call(1100.0), 1350.0);
    assert!(!gate.due(1250.0));
}

#[test]
fn cancelled_debounce_never_fires() {
    let mut gate = Debounce::new(100);
    gate.call(0.0);
    assert!(gate.is_pending());
    gate.cancel();
    assert!(!gate.is_pending());
    assert!(!gate.due(500.0));
}

#[test]
fn throttle_fires_on_leading_edge_then_at_intervals() {
    let mut gate = Throttle::new(200);
    let fired_at = (0..100)
        .map(|i| f64::from(i) * 10.0)
        .filter(|t| gate.try_fire(*t))
        .collect::<Vec<_>>();
    assert_eq!(fired_at, vec![0.0, 200.0, 400.0, 600.0, 800.0]);
}

#[test]
fn throttle_reopens_after_quiet_period() {
    let mut gate = Throttle::new(200);
    assert!(gate.try_fire(0.0));
    assert!(!gate.try_fire(199.0));
    assert!(gate.try_fire(5000.0));
    assert!(!gate.try_fire(5001.0));
}

#[test]
fn stale_debounce_deadline_is_not_due() {
    let mut gate = Debounce::new(250);
    let first = gate.call(0.0);
    let second = gate.call(100.0);

    // A timer armed for the first call wakes at its own deadline.
    assert!(!gate.due(first));
    assert!(gate.is_pending());
    assert!(gate.due(second));
}

#[test]
fn throttle_reports_time_left_in_window() {
    let mut gate = Throttle::new(16);
    assert_eq!(gate.remaining_ms(0.0), 0);
    assert!(gate.try_fire(0.0));
    assert_eq!(gate.remaining_ms(4.0), 12);
    assert_eq!(gate.remaining_ms(15.5), 1);
    assert_eq!(gate.remaining_ms(40.0), 0);
}

#[test]
fn trailing_throttle_delivers_last_call_of_burst() {
    let moves = [(0.0, 0.0), (4.0, 20.0), (8.0, 40.0), (12.0, 60.0)];
    let mut gate = TrailingThrottle::new(16);
    let mut placed = None;
    let mut flush_at = None;

    for (t, x) in moves {
        match gate.call(t) {
            ThrottleStep::Run => placed = Some(x),
            ThrottleStep::Schedule { after_ms } => flush_at = Some(t + f64::from(after_ms)),
            ThrottleStep::Wait => {}
        }
    }
    assert_eq!(placed, Some(0.0));
    assert_eq!(flush_at, Some(16.0));

    // The flush reads whatever position arrived last.
    assert!(gate.flush(16.0));
    placed = moves.last().map(|(_, x)| *x);
    assert_eq!(placed, Some(60.0));
    assert!(!gate.is_owed());
}

#[test]
fn trailing_throttle_schedules_one_flush_per_window() {
    let mut gate = TrailingThrottle::new(16);
    assert_eq!(gate.call(0.0), ThrottleStep::Run);
    assert_eq!(gate.call(4.0), ThrottleStep::Schedule { after_ms: 12 });
    assert_eq!(gate.call(8.0), ThrottleStep::Wait);
    assert!(gate.flush(16.0));
    assert_eq!(gate.call(17.0), ThrottleStep::Schedule { after_ms: 15 });
}

#[test]
fn leading_run_settles_an_owed_flush() {
    let mut gate = TrailingThrottle::new(16);
    assert_eq!(gate.call(0.0), ThrottleStep::Run);
    assert_eq!(gate.call(4.0), ThrottleStep::Schedule { after_ms: 12 });
    // The timer is late and a fresh call gets through first.
    assert_eq!(gate.call(20.0), ThrottleStep::Run);
    assert!(!gate.flush(21.0));
}
