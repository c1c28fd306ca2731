//! Vizij Motion Core (engine-agnostic)
//!
//! Synthetic 2D pointer trajectories that approximate human motion. Five
//! independent generators share the [`Point`] primitive and a per-call
//! [`SeededRandom`]:
//!
//! - [`bezier`]: cubic Bezier sampling and heuristic control-point synthesis
//! - [`minimum_jerk`]: quintic single- and two-phase profiles
//! - [`jitter`]: Ornstein-Uhlenbeck jitter, constant and position-dependent
//! - [`physics`]: damped-spring simulation, linear and nonlinear force laws
//! - [`velocity`]: arc-length resampling and velocity-profile re-timing
//!
//! Every operation is synchronous and pure with respect to its inputs once a
//! seed is fixed. [`api`] wraps them in JSON request/response records.

pub mod api;
pub mod bezier;
pub mod config;
pub mod error;
pub mod jitter;
pub mod minimum_jerk;
pub mod physics;
pub mod point;
pub mod rng;
pub mod velocity;

// Re-exports for consumers (hosts and adapters)
pub use api::{handle_json, handle_path, ApiError, PathResponse, Route};
pub use config::{BezierConfig, OuConfig, PhysicsConfig, PositionDependentOuConfig, TwoPhaseConfig};
pub use error::{MotionError, Result, MAX_POINTS};
pub use jitter::Jitter;
pub use physics::{Simulation, SpringModel, Termination};
pub use point::{Path, Point};
pub use rng::SeededRandom;
pub use velocity::VelocityProfile;
