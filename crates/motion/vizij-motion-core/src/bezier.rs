//! Cubic Bezier paths.
//!
//! - `evaluate_cubic`: sample B(t) at `num_points` evenly spaced t in [0,1]
//! - `synthesize_path`: derive the two inner control points heuristically from
//!   the endpoints (influence, perpendicular arc, jitter, optional overshoot),
//!   then sample the curve.

use crate::config::BezierConfig;
use crate::error::{require_num_points, Result};
use crate::point::{Path, Point};
use crate::rng::SeededRandom;

/// Floor and ceiling of the distance-driven influence term.
pub const INFLUENCE_FLOOR: f64 = 0.2;
pub const INFLUENCE_CEIL: f64 = 0.5;
/// Distance (px) that maps to an influence of 1.0 before clamping.
pub const INFLUENCE_DISTANCE_SCALE: f64 = 1000.0;
/// Per-control-point influence multipliers are drawn from this range.
pub const INFLUENCE_SPREAD: (f64, f64) = (0.8, 1.2);
/// Overshoot only applies to moves longer than this.
pub const OVERSHOOT_MIN_DISTANCE: f64 = 100.0;
/// Overshoot fraction range, multiplied by `overshoot_factor`.
pub const OVERSHOOT_FRACTION: (f64, f64) = (0.1, 0.2);
/// Upper bound on the jitter base scale (px).
pub const JITTER_CAP: f64 = 50.0;

/// Cubic Bezier basis, written as offsets from `p0` so a curve whose control
/// points coincide evaluates to that point exactly.
#[inline]
fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let tt = t * t;
    p0 + (p1 - p0) * (3.0 * u * u * t) + (p2 - p0) * (3.0 * u * tt) + (p3 - p0) * (tt * t)
}

/// Sample the cubic Bezier curve defined by `p0..p3` at `t_i = i / (num_points - 1)`.
///
/// The first sample is `p0` and the last is `p3`.
pub fn evaluate_cubic(p0: Point, p1: Point, p2: Point, p3: Point, num_points: usize) -> Result<Path> {
    require_num_points("numPoints", num_points)?;
    let last = num_points - 1;
    let path = (0..num_points)
        .map(|i| match i {
            0 => p0,
            i if i == last => p3,
            i => cubic_bezier(p0, p1, p2, p3, i as f64 / last as f64),
        })
        .collect();
    Ok(path)
}

/// Control points chosen by [`synthesize_control_points`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoints {
    pub p1: Point,
    pub p2: Point,
}

/// Derive the inner control points for a human-looking arc from `start` to `end`.
///
/// Draw order on `rng` is fixed: two influence multipliers, four jitter
/// normals (p1.x, p1.y, p2.x, p2.y), the perpendicular sign, then the
/// overshoot fraction when overshoot applies.
pub fn synthesize_control_points(
    start: Point,
    end: Point,
    cfg: &BezierConfig,
    rng: &mut SeededRandom,
) -> ControlPoints {
    let delta = end - start;
    let distance = delta.length();

    let base_influence = (distance / INFLUENCE_DISTANCE_SCALE).clamp(INFLUENCE_FLOOR, INFLUENCE_CEIL)
        * (0.5 + 0.5 * cfg.complexity);
    let influence1 = base_influence * rng.uniform_range(INFLUENCE_SPREAD.0, INFLUENCE_SPREAD.1);
    let influence2 = base_influence * rng.uniform_range(INFLUENCE_SPREAD.0, INFLUENCE_SPREAD.1);

    let jitter_scale = JITTER_CAP.min(0.2 * distance) * cfg.jitter_amount * 0.1;
    let jitter1 = Point::new(rng.normal(0.0, jitter_scale), rng.normal(0.0, jitter_scale));
    let jitter2 = Point::new(rng.normal(0.0, jitter_scale), rng.normal(0.0, jitter_scale));

    // Signed offset in [-0.25, 0.25) * complexity, perpendicular to the move.
    let perp_magnitude = cfg.complexity * 0.5 * (rng.uniform() - 0.5);
    let perp = delta.perpendicular() * perp_magnitude;

    let p1 = start + delta * influence1 + perp + jitter1;
    let mut p2 = end - delta * influence2 - perp + jitter2;

    if cfg.overshoot_factor > 0.0 && distance > OVERSHOOT_MIN_DISTANCE {
        let amount =
            cfg.overshoot_factor * rng.uniform_range(OVERSHOOT_FRACTION.0, OVERSHOOT_FRACTION.1);
        p2 = end + delta * amount;
    }

    ControlPoints { p1, p2 }
}

/// Synthesize a Bezier path with a fresh random source built from `seed`.
pub fn synthesize_path(
    start: Point,
    end: Point,
    cfg: &BezierConfig,
    num_points: usize,
    seed: Option<u64>,
) -> Result<Path> {
    // Validate before the rng exists so a rejected call consumes nothing.
    cfg.validate()?;
    require_num_points("numPoints", num_points)?;
    let mut rng = SeededRandom::new(seed);
    synthesize_path_with(start, end, cfg, num_points, &mut rng)
}

/// Synthesize a Bezier path drawing from a caller-provided random source.
pub fn synthesize_path_with(
    start: Point,
    end: Point,
    cfg: &BezierConfig,
    num_points: usize,
    rng: &mut SeededRandom,
) -> Result<Path> {
    cfg.validate()?;
    require_num_points("numPoints", num_points)?;
    let ControlPoints { p1, p2 } = synthesize_control_points(start, end, cfg, rng);
    log::debug!(
        "bezier path: {} points, p1=({:.2}, {:.2}) p2=({:.2}, {:.2})",
        num_points,
        p1.x,
        p1.y,
        p2.x,
        p2.y
    );
    evaluate_cubic(start, p1, p2, end, num_points)
}
