// Host-side tests for the entrance animation and hover tweens.

use venue_cube::core::animation::*;

#[test]
fn ease_out_cubic_endpoints_and_clamp() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    // ease-out runs ahead of linear
    assert!(ease_out_cubic(0.5) > 0.5);
}

#[test]
fn entrance_starts_on_first_tick() {
    let mut a = EntranceAnimation::new(1.5);
    assert_eq!(a.tick(10.0), 0.0);
    assert!(!a.is_complete());
    let mid = a.tick(10.75);
    assert!((a.progress() - 0.5).abs() < 1e-6);
    assert!((mid - ease_out_cubic(0.5)).abs() < 1e-6);
}

#[test]
fn entrance_is_monotonic_and_ends_exactly_at_one() {
    let mut a = EntranceAnimation::new(1.0);
    let mut last = a.tick(0.0);
    for i in 1..=20 {
        let p = a.tick(i as f64 * 0.05);
        assert!(p >= last);
        last = p;
    }
    assert!(a.is_complete());
    assert_eq!(a.eased(), 1.0);
    assert_eq!(a.tick(5.0), 1.0);
}

#[test]
fn entrance_ignores_a_clock_stepping_back() {
    let mut a = EntranceAnimation::new(2.0);
    a.tick(0.0);
    let ahead = a.tick(1.0);
    assert_eq!(a.tick(0.5), ahead);
}

#[test]
fn zero_duration_completes_immediately() {
    let mut a = EntranceAnimation::new(0.0);
    assert_eq!(a.tick(3.0), 1.0);
    assert!(a.is_complete());
}

#[test]
fn tween_approaches_then_snaps() {
    let mut t = Tween::new(1.0);
    t.set_target(1.05);
    assert!(!t.is_settled());
    t.step(0.016, 0.08);
    assert!(t.value > 1.0 && t.value < 1.05);
    for _ in 0..200 {
        t.step(0.016, 0.08);
    }
    assert!(t.is_settled());
    assert_eq!(t.value, 1.05);
}

#[test]
fn tween_with_zero_tau_jumps() {
    let mut t = Tween::new(0.0);
    t.set_target(1.0);
    t.step(0.0, 0.0);
    assert_eq!(t.value, 1.0);
}
