//! Error taxonomy for generator entry points.
//!
//! Degenerate geometry (`start == end`) and physics runs that hit `max_steps`
//! are normal output, not errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("invalid parameter `{field}`: {constraint}")]
    InvalidParameter {
        field: &'static str,
        constraint: String,
    },
}

pub type Result<T> = std::result::Result<T, MotionError>;

impl MotionError {
    pub fn invalid(field: &'static str, constraint: impl Into<String>) -> Self {
        MotionError::InvalidParameter {
            field,
            constraint: constraint.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            MotionError::InvalidParameter { field, .. } => field,
        }
    }
}

/// Largest point count any generator will allocate for.
pub const MAX_POINTS: usize = 1_000_000;

pub(crate) fn require_num_points(field: &'static str, n: usize) -> Result<()> {
    if n < 2 {
        return Err(MotionError::invalid(field, format!("must be >= 2 (got {n})")));
    }
    if n > MAX_POINTS {
        return Err(MotionError::invalid(
            field,
            format!("must be <= {MAX_POINTS} (got {n})"),
        ));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, v: f64) -> Result<()> {
    if !(v.is_finite() && v > 0.0) {
        return Err(MotionError::invalid(field, format!("must be > 0 (got {v})")));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, v: f64) -> Result<()> {
    if !(v.is_finite() && v >= 0.0) {
        return Err(MotionError::invalid(field, format!("must be >= 0 (got {v})")));
    }
    Ok(())
}

pub(crate) fn require_finite(field: &'static str, v: f64) -> Result<()> {
    if !v.is_finite() {
        return Err(MotionError::invalid(field, format!("must be finite (got {v})")));
    }
    Ok(())
}
