//! Per-model configuration records.
//!
//! Each optional tunable is an explicit field with a documented default,
//! resolved once when the record is built (or deserialized). Generators only
//! read these records; they never substitute defaults on their own.
//! `validate` runs at every generator entry before the first random draw.

use serde::{Deserialize, Serialize};

use crate::error::{
    require_finite, require_non_negative, require_positive, MotionError, Result, MAX_POINTS,
};

/// Heuristic control-point synthesis for cubic Bezier paths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BezierConfig {
    /// Arc strength; scales both influence and perpendicular offset. Default 0.5.
    pub complexity: f64,
    /// Fraction of the displacement to overshoot past `end`. `<= 0` disables. Default 0.0.
    pub overshoot_factor: f64,
    /// Control-point jitter scale (>= 0). Default 1.0.
    pub jitter_amount: f64,
}

impl Default for BezierConfig {
    fn default() -> Self {
        Self {
            complexity: 0.5,
            overshoot_factor: 0.0,
            jitter_amount: 1.0,
        }
    }
}

impl BezierConfig {
    pub fn validate(&self) -> Result<()> {
        require_finite("complexity", self.complexity)?;
        require_finite("overshootFactor", self.overshoot_factor)?;
        require_non_negative("jitterAmount", self.jitter_amount)
    }
}

/// Two-phase minimum-jerk movement (primary move, then correction).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwoPhaseConfig {
    /// Scale of the random miss at the end of phase one (>= 0). Default 0.0.
    pub overshoot_factor: f64,
}

impl Default for TwoPhaseConfig {
    fn default() -> Self {
        Self {
            overshoot_factor: 0.0,
        }
    }
}

impl TwoPhaseConfig {
    pub fn validate(&self) -> Result<()> {
        require_non_negative("overshootFactor", self.overshoot_factor)
    }
}

/// Constant-parameter Ornstein-Uhlenbeck jitter.
///
/// Precondition (not enforced): `theta * dt` should stay small, conventionally
/// below 1. The recurrence diverges once `theta * dt > 2`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OuConfig {
    /// Mean-reversion rate. Default 0.7.
    pub theta: f64,
    /// Noise magnitude (>= 0). Default 0.5.
    pub sigma: f64,
    /// Time step (> 0). Default 0.1.
    pub dt: f64,
}

impl Default for OuConfig {
    fn default() -> Self {
        Self {
            theta: 0.7,
            sigma: 0.5,
            dt: 0.1,
        }
    }
}

impl OuConfig {
    pub fn validate(&self) -> Result<()> {
        require_finite("theta", self.theta)?;
        require_non_negative("sigma", self.sigma)?;
        require_positive("dt", self.dt)
    }
}

/// Ornstein-Uhlenbeck jitter whose parameters vary along the path: reversion
/// stiffens near both ends and noise peaks mid-path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PositionDependentOuConfig {
    /// Default 0.7.
    pub theta_base: f64,
    /// Extra reversion near endpoints. Default 0.5.
    pub theta_scale: f64,
    /// Default 0.5.
    pub sigma_base: f64,
    /// Mid-path noise boost. Default 0.3.
    pub sigma_scale: f64,
    /// Default 0.1.
    pub dt: f64,
}

impl Default for PositionDependentOuConfig {
    fn default() -> Self {
        Self {
            theta_base: 0.7,
            theta_scale: 0.5,
            sigma_base: 0.5,
            sigma_scale: 0.3,
            dt: 0.1,
        }
    }
}

impl PositionDependentOuConfig {
    pub fn validate(&self) -> Result<()> {
        require_finite("thetaBase", self.theta_base)?;
        require_finite("thetaScale", self.theta_scale)?;
        require_non_negative("sigmaBase", self.sigma_base)?;
        require_finite("sigmaScale", self.sigma_scale)?;
        require_positive("dt", self.dt)
    }
}

/// Damped-spring simulation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    /// Default 1.0. Must be > 0.
    pub mass: f64,
    /// Default 8.0.
    pub spring_constant: f64,
    /// Default 0.7.
    pub damping_factor: f64,
    /// Integration step in seconds. Default 0.016.
    pub time_step: f64,
    /// Upper bound on integration steps. Default 1000.
    pub max_steps: usize,
    /// Distance and speed below which the run settles. Default 0.1.
    pub stopping_threshold: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            spring_constant: 8.0,
            damping_factor: 0.7,
            time_step: 0.016,
            max_steps: 1000,
            stopping_threshold: 0.1,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<()> {
        require_positive("mass", self.mass)?;
        require_finite("springConstant", self.spring_constant)?;
        require_finite("dampingFactor", self.damping_factor)?;
        require_positive("timeStep", self.time_step)?;
        if self.max_steps == 0 {
            return Err(MotionError::invalid("maxSteps", "must be > 0 (got 0)"));
        }
        // The path holds the start state plus one sample per step.
        if self.max_steps >= MAX_POINTS {
            return Err(MotionError::invalid(
                "maxSteps",
                format!("must be < {MAX_POINTS} (got {})", self.max_steps),
            ));
        }
        require_non_negative("stoppingThreshold", self.stopping_threshold)
    }
}
