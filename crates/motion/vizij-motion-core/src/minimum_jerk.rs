//! Minimum-jerk trajectories.
//!
//! Position follows the quintic `s(t) = 10t^3 - 15t^4 + 6t^5`, which has zero
//! velocity and acceleration at both ends. The two-phase variant aims at a
//! randomly displaced intermediate target first and then corrects to `end`.

use crate::config::TwoPhaseConfig;
use crate::error::{require_num_points, Result};
use crate::point::{Path, Point};
use crate::rng::SeededRandom;

/// Share of samples given to the primary movement in the two-phase model.
pub const PHASE1_FRACTION: f64 = 0.7;
/// Upper bound on the distance-driven miss scale.
pub const MAX_MISS_SCALE: f64 = 0.3;
/// Miss scale per pixel of travel, before the cap.
pub const MISS_SCALE_PER_PX: f64 = 0.001;

/// Quintic minimum-jerk profile. `s(0) = 0`, `s(1) = 1`, non-decreasing on [0,1].
#[inline]
pub fn profile(t: f64) -> f64 {
    t * t * t * (10.0 - 15.0 * t + 6.0 * t * t)
}

fn sample(start: Point, end: Point, num_points: usize) -> Path {
    let last = num_points - 1;
    (0..num_points)
        .map(|i| {
            // Pin the endpoints exactly instead of trusting s(1) to round to 1.
            if i == 0 {
                start
            } else if i == last {
                end
            } else {
                start.lerp(&end, profile(i as f64 / last as f64))
            }
        })
        .collect()
}

/// Sample the single-phase minimum-jerk trajectory from `start` to `end`.
pub fn evaluate(start: Point, end: Point, num_points: usize) -> Result<Path> {
    require_num_points("numPoints", num_points)?;
    Ok(sample(start, end, num_points))
}

/// Split `num_points` into phase lengths. Each phase keeps at least two
/// samples; the output length is `phase1 + phase2 - 1`.
pub fn phase_split(num_points: usize) -> (usize, usize) {
    let phase1 = ((num_points as f64 * PHASE1_FRACTION).round() as usize).max(2);
    let phase2 = num_points.saturating_sub(phase1).max(2);
    (phase1, phase2)
}

/// Phase-one target: `end` displaced by independent normal misses per axis.
pub fn intermediate_target(start: Point, end: Point, overshoot_factor: f64, rng: &mut SeededRandom) -> Point {
    let delta = end - start;
    let distance = delta.length();
    let scale = MAX_MISS_SCALE.min(MISS_SCALE_PER_PX * distance) * overshoot_factor;
    Point::new(
        end.x + rng.normal(0.0, scale * delta.x.abs()),
        end.y + rng.normal(0.0, scale * delta.y.abs()),
    )
}

/// Two-phase trajectory with a fresh random source built from `seed`.
pub fn evaluate_two_phase(
    start: Point,
    end: Point,
    cfg: &TwoPhaseConfig,
    num_points: usize,
    seed: Option<u64>,
) -> Result<Path> {
    cfg.validate()?;
    require_num_points("numPoints", num_points)?;
    let mut rng = SeededRandom::new(seed);
    evaluate_two_phase_with(start, end, cfg, num_points, &mut rng)
}

/// Two-phase trajectory drawing from a caller-provided random source.
///
/// The junction sample is emitted once. For small `num_points` (below ~4) the
/// output length differs from `num_points`; callers must not rely on it.
pub fn evaluate_two_phase_with(
    start: Point,
    end: Point,
    cfg: &TwoPhaseConfig,
    num_points: usize,
    rng: &mut SeededRandom,
) -> Result<Path> {
    cfg.validate()?;
    require_num_points("numPoints", num_points)?;

    let intermediate = intermediate_target(start, end, cfg.overshoot_factor, rng);
    let (phase1, phase2) = phase_split(num_points);

    let mut path = sample(start, intermediate, phase1);
    path.extend(sample(intermediate, end, phase2).into_iter().skip(1));
    log::debug!(
        "two-phase minimum jerk: {phase1}+{phase2} samples, intermediate=({:.2}, {:.2})",
        intermediate.x,
        intermediate.y
    );
    Ok(path)
}
