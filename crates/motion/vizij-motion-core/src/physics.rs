//! Damped-spring pointer simulation.
//!
//! The pointer is a point mass pulled toward the target by a spring and slowed
//! by a damper, integrated with Euler steps (velocity first, then position):
//!
//! ```text
//! a  = (k * (target - x) - c * v + noise) / m
//! v += a * dt
//! x += v * dt
//! ```
//!
//! Each step injects independent Gaussian force noise per axis with standard
//! deviation `FORCE_NOISE_FRACTION * stopping_threshold`. The run ends when both
//! the distance to the target and the speed drop below `stopping_threshold`, or
//! after `max_steps` steps. Hitting `max_steps` is a normal outcome.

use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;
use crate::error::Result;
use crate::point::{Path, Point};
use crate::rng::SeededRandom;

/// Force noise standard deviation as a fraction of the stopping threshold.
pub const FORCE_NOISE_FRACTION: f64 = 0.01;
/// Nonlinear spring: `k * (SPRING_BASE_GAIN + SPRING_PROXIMITY_GAIN / (distance + 1))`.
pub const SPRING_BASE_GAIN: f64 = 1.0;
pub const SPRING_PROXIMITY_GAIN: f64 = 5.0;
/// Nonlinear damping: `c * (1 + SPEED_DAMPING_GAIN * speed)`.
pub const SPEED_DAMPING_GAIN: f64 = 0.5;

/// Force law used by the simulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringModel {
    /// Constant spring and damping (classic damped oscillator).
    #[default]
    Linear,
    /// Spring stiffens near the target, damping grows with speed.
    Nonlinear,
}

impl SpringModel {
    /// Effective `(spring, damping)` coefficients for the current state.
    #[inline]
    pub fn coefficients(&self, cfg: &PhysicsConfig, distance: f64, speed: f64) -> (f64, f64) {
        match self {
            SpringModel::Linear => (cfg.spring_constant, cfg.damping_factor),
            SpringModel::Nonlinear => (
                cfg.spring_constant * (SPRING_BASE_GAIN + SPRING_PROXIMITY_GAIN / (distance + 1.0)),
                cfg.damping_factor * (1.0 + SPEED_DAMPING_GAIN * speed),
            ),
        }
    }
}

/// Why a simulation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Distance and speed both fell below the stopping threshold.
    Settled,
    /// `max_steps` integration steps ran without settling.
    StepLimit,
}

/// Result of a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Initial state followed by one sample per executed step.
    pub path: Path,
    pub steps: usize,
    pub termination: Termination,
}

/// Run the simulation with a fresh random source built from `seed`.
pub fn simulate(
    start: Point,
    end: Point,
    cfg: &PhysicsConfig,
    model: SpringModel,
    seed: Option<u64>,
) -> Result<Simulation> {
    cfg.validate()?;
    let mut rng = SeededRandom::new(seed);
    simulate_with(start, end, cfg, model, &mut rng)
}

/// Run the simulation drawing force noise from a caller-provided random source.
pub fn simulate_with(
    start: Point,
    end: Point,
    cfg: &PhysicsConfig,
    model: SpringModel,
    rng: &mut SeededRandom,
) -> Result<Simulation> {
    cfg.validate()?;

    let noise_sd = FORCE_NOISE_FRACTION * cfg.stopping_threshold;
    let dt = cfg.time_step;

    let mut path = Vec::with_capacity(cfg.max_steps.min(4096) + 1);
    path.push(start);

    let mut position = start;
    let mut velocity = Point::zero();
    let mut termination = Termination::StepLimit;
    let mut steps = 0;

    while steps < cfg.max_steps {
        let to_target = end - position;
        let distance = to_target.length();
        let speed_before = velocity.length();

        let (spring, damping) = model.coefficients(cfg, distance, speed_before);
        let noise = Point::new(rng.normal(0.0, noise_sd), rng.normal(0.0, noise_sd));

        let acceleration = (to_target * spring - velocity * damping + noise) / cfg.mass;
        velocity = velocity + acceleration * dt;
        position = position + velocity * dt;
        path.push(position);
        steps += 1;

        // The linear model checks the post-update speed; the nonlinear model
        // reuses the speed that shaped this step's damping.
        let speed = match model {
            SpringModel::Linear => velocity.length(),
            SpringModel::Nonlinear => speed_before,
        };
        if distance < cfg.stopping_threshold && speed < cfg.stopping_threshold {
            termination = Termination::Settled;
            break;
        }
    }

    log::debug!(
        "{model:?} spring simulation: {steps} steps, {termination:?}, final=({:.3}, {:.3})",
        position.x,
        position.y
    );
    Ok(Simulation {
        path,
        steps,
        termination,
    })
}

/// Linear damped-spring path.
pub fn simulate_linear(start: Point, end: Point, cfg: &PhysicsConfig, seed: Option<u64>) -> Result<Path> {
    simulate(start, end, cfg, SpringModel::Linear, seed).map(|sim| sim.path)
}

/// Nonlinear damped-spring path.
pub fn simulate_nonlinear(start: Point, end: Point, cfg: &PhysicsConfig, seed: Option<u64>) -> Result<Path> {
    simulate(start, end, cfg, SpringModel::Nonlinear, seed).map(|sim| sim.path)
}
