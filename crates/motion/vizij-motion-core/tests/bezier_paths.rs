use vizij_motion_core::bezier::{self, synthesize_control_points, OVERSHOOT_FRACTION};
use vizij_motion_core::{BezierConfig, MotionError, Point, SeededRandom};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn evaluate_cubic_pins_endpoints() {
    let (p0, p1, p2, p3) = (pt(-3.5, 12.0), pt(40.0, -80.0), pt(220.0, 310.0), pt(512.25, 99.5));
    for n in [2, 3, 17, 250] {
        let path = bezier::evaluate_cubic(p0, p1, p2, p3, n).expect("valid curve");
        assert_eq!(path.len(), n);
        assert_eq!(path[0], p0);
        assert_eq!(path[n - 1], p3);
    }
}

#[test]
fn evaluate_cubic_three_samples_on_a_line() {
    // B(0.5) = 0.375 * 100 + 0.125 * 100 = 50
    let path = bezier::evaluate_cubic(pt(0.0, 0.0), pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 0.0), 3)
        .expect("valid curve");
    assert_eq!(path, vec![pt(0.0, 0.0), pt(50.0, 0.0), pt(100.0, 0.0)]);
}

#[test]
fn evaluate_cubic_rejects_fewer_than_two_points() {
    for n in [0, 1] {
        let err = bezier::evaluate_cubic(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0), pt(3.0, 3.0), n)
            .unwrap_err();
        assert!(matches!(err, MotionError::InvalidParameter { field: "numPoints", .. }));
    }
}

#[test]
fn synthesized_path_is_reproducible_for_a_seed() {
    let cfg = BezierConfig {
        complexity: 0.8,
        overshoot_factor: 0.3,
        jitter_amount: 2.0,
    };
    let a = bezier::synthesize_path(pt(10.0, 20.0), pt(640.0, 410.0), &cfg, 120, Some(1234)).unwrap();
    let b = bezier::synthesize_path(pt(10.0, 20.0), pt(640.0, 410.0), &cfg, 120, Some(1234)).unwrap();
    assert_eq!(a.len(), 120);
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
    }

    let c = bezier::synthesize_path(pt(10.0, 20.0), pt(640.0, 410.0), &cfg, 120, Some(4321)).unwrap();
    assert_ne!(a, c, "different seeds should give different control points");
}

#[test]
fn synthesized_path_pins_endpoints() {
    let start = pt(100.0, 700.0);
    let end = pt(900.0, 150.0);
    let path = bezier::synthesize_path(start, end, &BezierConfig::default(), 64, Some(7)).unwrap();
    assert_eq!(path[0], start);
    assert_eq!(path[63], end);
}

#[test]
fn overshoot_moves_second_control_point_past_target() {
    let cfg = BezierConfig {
        complexity: 0.5,
        overshoot_factor: 1.0,
        jitter_amount: 1.0,
    };
    let start = pt(0.0, 0.0);
    let end = pt(400.0, 0.0);
    for seed in 0..20 {
        let mut rng = SeededRandom::seeded(seed);
        let cps = synthesize_control_points(start, end, &cfg, &mut rng);
        let lo = 400.0 + 400.0 * OVERSHOOT_FRACTION.0;
        let hi = 400.0 + 400.0 * OVERSHOOT_FRACTION.1;
        assert!(cps.p2.x >= lo - 1e-9 && cps.p2.x <= hi + 1e-9, "p2.x = {}", cps.p2.x);
        assert_eq!(cps.p2.y, 0.0);
    }
}

#[test]
fn short_moves_never_overshoot() {
    let cfg = BezierConfig {
        complexity: 0.0,
        overshoot_factor: 5.0,
        jitter_amount: 0.0,
    };
    // 80 px is below the overshoot threshold; with no complexity or jitter
    // p2 sits between start and end.
    let mut rng = SeededRandom::seeded(11);
    let cps = synthesize_control_points(pt(0.0, 0.0), pt(80.0, 0.0), &cfg, &mut rng);
    assert!(cps.p2.x < 80.0);
    assert!(cps.p2.x > 0.0);
}

#[test]
fn identical_endpoints_collapse_to_repeated_points() {
    let p = pt(321.0, 123.0);
    let path = bezier::synthesize_path(p, p, &BezierConfig::default(), 10, Some(5)).unwrap();
    assert_eq!(path, vec![p; 10]);
}

#[test]
fn invalid_config_fails_before_generation() {
    let cfg = BezierConfig {
        jitter_amount: -1.0,
        ..Default::default()
    };
    let err = bezier::synthesize_path(pt(0.0, 0.0), pt(10.0, 10.0), &cfg, 10, Some(1)).unwrap_err();
    assert_eq!(err.field(), "jitterAmount");

    let err = bezier::synthesize_path(pt(0.0, 0.0), pt(10.0, 10.0), &BezierConfig::default(), 1, None)
        .unwrap_err();
    assert_eq!(err.field(), "numPoints");
}

#[test]
fn caller_provided_rng_matches_seeded_entry_point() {
    let cfg = BezierConfig::default();
    let seeded = bezier::synthesize_path(pt(5.0, 5.0), pt(300.0, 90.0), &cfg, 40, Some(99)).unwrap();
    let mut rng = SeededRandom::seeded(99);
    let handed = bezier::synthesize_path_with(pt(5.0, 5.0), pt(300.0, 90.0), &cfg, 40, &mut rng).unwrap();
    assert_eq!(seeded, handed);
}

/// Rebuild the control points by drawing from `rng` in the documented order.
fn replay_control_points(
    start: Point,
    end: Point,
    cfg: &BezierConfig,
    influence: f64,
    jitter_base: f64,
    rng: &mut SeededRandom,
) -> (Point, Point) {
    let delta = end - start;
    let base = influence * (0.5 + 0.5 * cfg.complexity);
    let influence1 = base * rng.uniform_range(0.8, 1.2);
    let influence2 = base * rng.uniform_range(0.8, 1.2);

    let sd = jitter_base * cfg.jitter_amount * 0.1;
    let jitter1 = Point::new(rng.normal(0.0, sd), rng.normal(0.0, sd));
    let jitter2 = Point::new(rng.normal(0.0, sd), rng.normal(0.0, sd));

    // Counter-clockwise normal of the move.
    let perp = Point::new(-delta.y, delta.x) * (cfg.complexity * 0.5 * (rng.uniform() - 0.5));

    let p1 = start + delta * influence1 + perp + jitter1;
    let mut p2 = end - delta * influence2 - perp + jitter2;
    if cfg.overshoot_factor > 0.0 && delta.length() > 100.0 {
        p2 = end + delta * (cfg.overshoot_factor * rng.uniform_range(0.1, 0.2));
    }
    (p1, p2)
}

#[test]
fn short_move_uses_influence_floor() {
    // 100 px: influence 0.1 clamps up to 0.2, jitter base is 0.2 * 100 = 20.
    let cfg = BezierConfig {
        complexity: 0.8,
        overshoot_factor: 0.0,
        jitter_amount: 1.5,
    };
    let (start, end) = (pt(10.0, 20.0), pt(110.0, 20.0));
    for seed in [1, 17, 404] {
        let cps = synthesize_control_points(start, end, &cfg, &mut SeededRandom::seeded(seed));
        let (p1, p2) = replay_control_points(start, end, &cfg, 0.2, 20.0, &mut SeededRandom::seeded(seed));
        assert_eq!(cps.p1, p1, "seed {seed}");
        assert_eq!(cps.p2, p2, "seed {seed}");
    }
}

#[test]
fn long_move_uses_influence_ceiling_and_jitter_cap() {
    // 1000 px: influence 1.0 clamps down to 0.5, jitter base caps at 50.
    let cfg = BezierConfig {
        complexity: 0.6,
        overshoot_factor: 0.0,
        jitter_amount: 2.0,
    };
    let (start, end) = (pt(0.0, 0.0), pt(600.0, 800.0));
    for seed in [2, 23, 999] {
        let cps = synthesize_control_points(start, end, &cfg, &mut SeededRandom::seeded(seed));
        let (p1, p2) = replay_control_points(start, end, &cfg, 0.5, 50.0, &mut SeededRandom::seeded(seed));
        assert_eq!(cps.p1, p1, "seed {seed}");
        assert_eq!(cps.p2, p2, "seed {seed}");
    }
}

#[test]
fn long_move_overshoot_draws_last() {
    let cfg = BezierConfig {
        complexity: 0.3,
        overshoot_factor: 0.5,
        jitter_amount: 1.0,
    };
    let (start, end) = (pt(0.0, 0.0), pt(600.0, 800.0));
    let cps = synthesize_control_points(start, end, &cfg, &mut SeededRandom::seeded(8));
    let (p1, p2) = replay_control_points(start, end, &cfg, 0.5, 50.0, &mut SeededRandom::seeded(8));
    assert_eq!(cps.p1, p1);
    assert_eq!(cps.p2, p2);
}
