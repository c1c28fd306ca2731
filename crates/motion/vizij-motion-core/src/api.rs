//! Request/response records for hosts that drive the generators over a
//! message boundary (HTTP, wasm, IPC).
//!
//! Field names are camelCase on the wire. Optional fields resolve to the
//! documented defaults in [`crate::config`] during deserialization; the
//! typed `run` methods never invent values of their own.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::config::{BezierConfig, OuConfig, PhysicsConfig, PositionDependentOuConfig, TwoPhaseConfig};
use crate::error::{require_num_points, MotionError};
use crate::jitter::{self, Jitter};
use crate::physics::{self, SpringModel};
use crate::point::{Path, Point};
use crate::velocity::{self, VelocityProfile};
use crate::{bezier, minimum_jerk};

/// Errors produced while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request parse error: {0}")]
    Parse(#[source] serde_json::Error),
    #[error(transparent)]
    Motion(#[from] MotionError),
    #[error("unknown route '{0}'")]
    UnknownRoute(String),
    #[error("serialize response: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// One route per operation, plus a health probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Health,
    Bezier,
    BezierPath,
    MinimumJerk,
    OuProcess,
    Physics,
    VelocityProfile,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Health,
        Route::Bezier,
        Route::BezierPath,
        Route::MinimumJerk,
        Route::OuProcess,
        Route::Physics,
        Route::VelocityProfile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Health => "/api/health",
            Route::Bezier => "/api/bezier",
            Route::BezierPath => "/api/bezier-path",
            Route::MinimumJerk => "/api/minimum-jerk",
            Route::OuProcess => "/api/ou-process",
            Route::Physics => "/api/physics",
            Route::VelocityProfile => "/api/velocity-profile",
        }
    }

    /// Accepts either the full path (`/api/physics`) or the bare name (`physics`).
    pub fn from_path(path: &str) -> Result<Self, ApiError> {
        let name = path.trim_end_matches('/');
        let name = name.strip_prefix("/api/").unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|r| r.path().strip_prefix("/api/") == Some(name))
            .ok_or_else(|| ApiError::UnknownRoute(path.to_string()))
    }
}

/// `{ "path": [{x, y}, ...] }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResponse {
    pub path: Path,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok".into() }
    }
}

/// Sample a Bezier curve from explicit control points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BezierRequest {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    pub num_points: usize,
}

impl BezierRequest {
    pub fn run(&self) -> Result<PathResponse, MotionError> {
        let path = bezier::evaluate_cubic(self.p0, self.p1, self.p2, self.p3, self.num_points)?;
        Ok(PathResponse { path })
    }
}

/// Synthesize a Bezier path between two endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BezierPathRequest {
    pub start: Point,
    pub end: Point,
    pub num_points: usize,
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(flatten)]
    pub config: BezierConfig,
}

impl BezierPathRequest {
    pub fn run(&self) -> Result<PathResponse, MotionError> {
        let path = bezier::synthesize_path(
            self.start,
            self.end,
            &self.config,
            self.num_points,
            self.random_seed,
        )?;
        Ok(PathResponse { path })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimumJerkRequest {
    pub start: Point,
    pub end: Point,
    pub num_points: usize,
    #[serde(default)]
    pub two_phase: bool,
    #[serde(default)]
    pub overshoot_factor: f64,
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl MinimumJerkRequest {
    /// Two-phase only when requested and `overshootFactor > 0`; otherwise the
    /// plain quintic profile.
    pub fn run(&self) -> Result<PathResponse, MotionError> {
        let path = if self.two_phase && self.overshoot_factor > 0.0 {
            let cfg = TwoPhaseConfig {
                overshoot_factor: self.overshoot_factor,
            };
            minimum_jerk::evaluate_two_phase(self.start, self.end, &cfg, self.num_points, self.random_seed)?
        } else {
            minimum_jerk::evaluate(self.start, self.end, self.num_points)?
        };
        Ok(PathResponse { path })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OuProcessRequest {
    pub points: usize,
    pub theta: f64,
    pub sigma: f64,
    pub dt: f64,
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default)]
    pub position_dependent: bool,
    /// Falls back to `theta`.
    #[serde(default)]
    pub theta_base: Option<f64>,
    /// Falls back to the [`PositionDependentOuConfig`] default.
    #[serde(default)]
    pub theta_scale: Option<f64>,
    /// Falls back to `sigma`.
    #[serde(default)]
    pub sigma_base: Option<f64>,
    #[serde(default)]
    pub sigma_scale: Option<f64>,
}

impl OuProcessRequest {
    pub fn constant_config(&self) -> OuConfig {
        OuConfig {
            theta: self.theta,
            sigma: self.sigma,
            dt: self.dt,
        }
    }

    pub fn position_dependent_config(&self) -> PositionDependentOuConfig {
        let defaults = PositionDependentOuConfig::default();
        PositionDependentOuConfig {
            theta_base: self.theta_base.unwrap_or(self.theta),
            theta_scale: self.theta_scale.unwrap_or(defaults.theta_scale),
            sigma_base: self.sigma_base.unwrap_or(self.sigma),
            sigma_scale: self.sigma_scale.unwrap_or(defaults.sigma_scale),
            dt: self.dt,
        }
    }

    pub fn run(&self) -> Result<Jitter, MotionError> {
        if self.position_dependent {
            jitter::generate_position_dependent(self.points, &self.position_dependent_config(), self.random_seed)
        } else {
            jitter::generate(self.points, &self.constant_config(), self.random_seed)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsOptions {
    #[serde(flatten)]
    pub config: PhysicsConfig,
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default)]
    pub nonlinear: bool,
}

impl PhysicsOptions {
    pub fn model(&self) -> SpringModel {
        if self.nonlinear {
            SpringModel::Nonlinear
        } else {
            SpringModel::Linear
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsRequest {
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub options: PhysicsOptions,
}

impl PhysicsRequest {
    pub fn run(&self) -> Result<PathResponse, MotionError> {
        let opts = &self.options;
        let sim = physics::simulate(self.start, self.end, &opts.config, opts.model(), opts.random_seed)?;
        Ok(PathResponse { path: sim.path })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityProfileRequest {
    pub path: Path,
    /// Profile name; unknown names fall back to uniform unless `strict`.
    pub velocity_profile: String,
    pub num_points: usize,
    #[serde(default)]
    pub strict: bool,
}

impl VelocityProfileRequest {
    pub fn run(&self) -> Result<PathResponse, MotionError> {
        if self.path.is_empty() {
            return Err(MotionError::invalid("path", "must contain at least one point"));
        }
        require_num_points("numPoints", self.num_points)?;
        let profile = if self.strict {
            VelocityProfile::parse_strict(&self.velocity_profile)?
        } else {
            VelocityProfile::from_name(&self.velocity_profile)
        };
        let path = velocity::apply(&self.path, profile, self.num_points);
        Ok(PathResponse { path })
    }
}

fn parse<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(ApiError::Parse)
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, ApiError> {
    serde_json::to_value(value).map_err(ApiError::Serialize)
}

fn handle_inner(route: Route, body: &str) -> Result<(JsonValue, usize), ApiError> {
    let (json, produced) = match route {
        Route::Health => (to_json(&HealthResponse::default())?, 0),
        Route::Bezier => {
            let res = parse::<BezierRequest>(body)?.run()?;
            (to_json(&res)?, res.path.len())
        }
        Route::BezierPath => {
            let res = parse::<BezierPathRequest>(body)?.run()?;
            (to_json(&res)?, res.path.len())
        }
        Route::MinimumJerk => {
            let res = parse::<MinimumJerkRequest>(body)?.run()?;
            (to_json(&res)?, res.path.len())
        }
        Route::OuProcess => {
            let res = parse::<OuProcessRequest>(body)?.run()?;
            (to_json(&res)?, res.len())
        }
        Route::Physics => {
            let res = parse::<PhysicsRequest>(body)?.run()?;
            (to_json(&res)?, res.path.len())
        }
        Route::VelocityProfile => {
            let res = parse::<VelocityProfileRequest>(body)?.run()?;
            (to_json(&res)?, res.path.len())
        }
    };
    Ok((json, produced))
}

/// Dispatch a raw JSON request body to `route` and return the JSON response.
///
/// Failures are returned whole; no partial output is produced.
pub fn handle_json(route: Route, body: &str) -> Result<JsonValue, ApiError> {
    match handle_inner(route, body) {
        Ok((json, produced)) => {
            log::info!("{}: produced {produced} points", route.path());
            Ok(json)
        }
        Err(err) => {
            log::warn!("{}: {err}", route.path());
            Err(err)
        }
    }
}

/// [`handle_json`] keyed by route path (`/api/...`).
pub fn handle_path(path: &str, body: &str) -> Result<JsonValue, ApiError> {
    handle_json(Route::from_path(path)?, body)
}
