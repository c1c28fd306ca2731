//! Ornstein-Uhlenbeck jitter.
//!
//! Euler-Maruyama discretization of `dX = theta * (0 - X) dt + sigma dW`, run
//! independently on each axis:
//!
//! `x[i] = x[i-1] * (1 - theta*dt) + sigma * sqrt(dt) * N(0,1)`, `x[0] = 0`.
//!
//! The recurrence is unstable once `theta * dt > 2`. That is a caller
//! precondition; it is logged but not corrected.

use serde::{Deserialize, Serialize};

use crate::config::{OuConfig, PositionDependentOuConfig};
use crate::error::{require_num_points, Result};
use crate::rng::SeededRandom;

/// Offset keeping the endpoint reversion term finite at `pos = 0` and `pos = 1`.
pub const ENDPOINT_SOFTENING: f64 = 0.1;
/// `theta * dt` beyond which the discrete recurrence diverges.
pub const STABILITY_LIMIT: f64 = 2.0;

/// Per-axis jitter sequences, both of the requested length.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jitter {
    pub jitter_x: Vec<f64>,
    pub jitter_y: Vec<f64>,
}

impl Jitter {
    pub fn len(&self) -> usize {
        self.jitter_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jitter_x.is_empty()
    }
}

/// Instantaneous `(theta, sigma)` at normalized position `pos` in [0,1].
pub fn position_dependent_params(cfg: &PositionDependentOuConfig, pos: f64) -> (f64, f64) {
    let endpoint_proximity = pos.min(1.0 - pos);
    let theta = cfg.theta_base + cfg.theta_scale / (endpoint_proximity + ENDPOINT_SOFTENING);
    let bump = (std::f64::consts::PI * pos).sin();
    let sigma = cfg.sigma_base * (1.0 + cfg.sigma_scale * bump * bump);
    (theta, sigma)
}

fn run<F>(points: usize, dt: f64, rng: &mut SeededRandom, mut params: F) -> Jitter
where
    F: FnMut(usize) -> (f64, f64),
{
    let sqrt_dt = dt.sqrt();
    let mut jitter_x = vec![0.0; points];
    let mut jitter_y = vec![0.0; points];
    let mut warned = false;
    for i in 1..points {
        let (theta, sigma) = params(i);
        if !warned && theta * dt > STABILITY_LIMIT {
            log::warn!("ou jitter: theta*dt = {:.3} exceeds {STABILITY_LIMIT}; sequence will diverge", theta * dt);
            warned = true;
        }
        let decay = 1.0 - theta * dt;
        jitter_x[i] = jitter_x[i - 1] * decay + sigma * sqrt_dt * rng.standard_normal();
        jitter_y[i] = jitter_y[i - 1] * decay + sigma * sqrt_dt * rng.standard_normal();
    }
    Jitter { jitter_x, jitter_y }
}

/// Constant-parameter process with a fresh random source built from `seed`.
pub fn generate(points: usize, cfg: &OuConfig, seed: Option<u64>) -> Result<Jitter> {
    cfg.validate()?;
    require_num_points("points", points)?;
    let mut rng = SeededRandom::new(seed);
    generate_with(points, cfg, &mut rng)
}

/// Constant-parameter process drawing from a caller-provided random source.
pub fn generate_with(points: usize, cfg: &OuConfig, rng: &mut SeededRandom) -> Result<Jitter> {
    cfg.validate()?;
    require_num_points("points", points)?;
    Ok(run(points, cfg.dt, rng, |_| (cfg.theta, cfg.sigma)))
}

/// Position-dependent process with a fresh random source built from `seed`.
pub fn generate_position_dependent(
    points: usize,
    cfg: &PositionDependentOuConfig,
    seed: Option<u64>,
) -> Result<Jitter> {
    cfg.validate()?;
    require_num_points("points", points)?;
    let mut rng = SeededRandom::new(seed);
    generate_position_dependent_with(points, cfg, &mut rng)
}

/// Position-dependent process drawing from a caller-provided random source.
pub fn generate_position_dependent_with(
    points: usize,
    cfg: &PositionDependentOuConfig,
    rng: &mut SeededRandom,
) -> Result<Jitter> {
    cfg.validate()?;
    require_num_points("points", points)?;
    let last = (points - 1) as f64;
    Ok(run(points, cfg.dt, rng, |i| {
        position_dependent_params(cfg, i as f64 / last)
    }))
}
