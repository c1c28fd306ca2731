//! Path re-timing.
//!
//! Model:
//! - `resample` redistributes points at equal arc-length spacing along the
//!   input polyline (endpoints copied exactly).
//! - `time_warp` produces monotone samples in [0,1] for a [`VelocityProfile`].
//! - `apply` resamples uniformly in space, then reads the resampled path at the
//!   warped times so point density follows the profile. Geometry is unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::minimum_jerk;
use crate::point::{arc_lengths, Path, Point};

/// Shape exponents of the asymmetric profile (fast start, long tail).
pub const ASYMMETRIC_RISE: f64 = 1.8;
pub const ASYMMETRIC_FALL: f64 = 2.2;
/// Logistic steepness of the sigmoid profile.
pub const SIGMOID_STEEPNESS: f64 = 12.0;

/// Closed set of velocity profiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityProfile {
    /// Constant speed (identity time map).
    #[default]
    Uniform,
    /// Quintic `10t^3 - 15t^4 + 6t^5`.
    MinimumJerk,
    /// `t^1.8 / (t^1.8 + (1-t)^2.2)`.
    Asymmetric,
    /// `1 / (1 + e^(-12 (t - 0.5)))`.
    Sigmoid,
}

impl VelocityProfile {
    pub const ALL: [VelocityProfile; 4] = [
        VelocityProfile::Uniform,
        VelocityProfile::MinimumJerk,
        VelocityProfile::Asymmetric,
        VelocityProfile::Sigmoid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VelocityProfile::Uniform => "uniform",
            VelocityProfile::MinimumJerk => "minimum_jerk",
            VelocityProfile::Asymmetric => "asymmetric",
            VelocityProfile::Sigmoid => "sigmoid",
        }
    }

    /// Lenient lookup: unknown names fall back to [`VelocityProfile::Uniform`].
    pub fn from_name(name: &str) -> Self {
        Self::parse_strict(name).unwrap_or_else(|_| {
            log::debug!("unknown velocity profile '{name}', using uniform");
            VelocityProfile::Uniform
        })
    }

    /// Strict lookup for callers that want unknown names rejected.
    pub fn parse_strict(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| {
                MotionError::invalid(
                    "velocityProfile",
                    format!("unknown profile '{name}' (expected uniform, minimum_jerk, asymmetric or sigmoid)"),
                )
            })
    }

    /// Map normalized time `t` in [0,1] to warped time.
    pub fn warp(&self, t: f64) -> f64 {
        match self {
            VelocityProfile::Uniform => t,
            VelocityProfile::MinimumJerk => minimum_jerk::profile(t),
            VelocityProfile::Asymmetric => {
                let rise = t.powf(ASYMMETRIC_RISE);
                rise / (rise + (1.0 - t).powf(ASYMMETRIC_FALL))
            }
            VelocityProfile::Sigmoid => 1.0 / (1.0 + (-SIGMOID_STEEPNESS * (t - 0.5)).exp()),
        }
    }
}

impl fmt::Display for VelocityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resample `path` to `num_points` points evenly spaced by arc length.
///
/// Inputs with at most one point, or `num_points <= 1`, come back unchanged.
/// First and last output points are the input's first and last points.
/// `num_points` is not bounded here; request handlers cap it at
/// [`MAX_POINTS`](crate::error::MAX_POINTS).
pub fn resample(path: &[Point], num_points: usize) -> Path {
    if path.len() <= 1 || num_points <= 1 {
        return path.to_vec();
    }

    let lengths = arc_lengths(path);
    let total = lengths[lengths.len() - 1];
    let last_segment = path.len() - 2;

    let mut out = Vec::with_capacity(num_points);
    out.push(path[0]);

    // Targets increase monotonically, so the bracketing segment only moves forward.
    let mut segment = 0;
    for i in 1..num_points - 1 {
        let target = (i as f64 / (num_points - 1) as f64) * total;
        while segment < last_segment && lengths[segment + 1] < target {
            segment += 1;
        }
        let seg_start = lengths[segment];
        let seg_end = lengths[segment + 1];
        let fraction = if seg_end > seg_start {
            (target - seg_start) / (seg_end - seg_start)
        } else {
            0.0
        };
        out.push(path[segment].lerp(&path[segment + 1], fraction));
    }

    out.push(path[path.len() - 1]);
    out
}

/// `num_points` warped time samples; the first is 0 and the last is 1.
pub fn time_warp(num_points: usize, profile: VelocityProfile) -> Vec<f64> {
    match num_points {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let last = n - 1;
            (0..n)
                .map(|i| match i {
                    0 => 0.0,
                    i if i == last => 1.0,
                    i => profile.warp(i as f64 / last as f64),
                })
                .collect()
        }
    }
}

/// Re-time `path` to `num_points` samples following `profile`.
///
/// Uniform profiles (and trivial inputs) reduce to [`resample`], passing the
/// path through untouched when it already has `num_points` points.
pub fn apply(path: &[Point], profile: VelocityProfile, num_points: usize) -> Path {
    if profile == VelocityProfile::Uniform || path.len() <= 1 || num_points <= 1 {
        if path.len() == num_points {
            return path.to_vec();
        }
        return resample(path, num_points);
    }

    let uniform = resample(path, num_points);
    let last = uniform.len() - 1;

    time_warp(num_points, profile)
        .into_iter()
        .map(|t| {
            let index = t * last as f64;
            let i = index.floor() as usize;
            if i >= last {
                uniform[last]
            } else {
                uniform[i].lerp(&uniform[i + 1], index - i as f64)
            }
        })
        .collect()
}

/// [`apply`] with a profile looked up by name. Unknown names fall back to
/// uniform unless `strict` is set, in which case they are rejected.
pub fn apply_named(path: &[Point], profile: &str, num_points: usize, strict: bool) -> Result<Path> {
    let profile = if strict {
        VelocityProfile::parse_strict(profile)?
    } else {
        VelocityProfile::from_name(profile)
    };
    Ok(apply(path, profile, num_points))
}
