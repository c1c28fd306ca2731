//! 2D point value and path helpers shared by every generator.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Immutable 2D coordinate. Serialized as `{ "x": .., "y": .. }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Ordered sequence of points; index 0 is the start state.
pub type Path = Vec<Point>;

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (*other - *self).length()
    }

    /// Rotate by +90 degrees: `(x, y) -> (-y, x)`.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Linear interpolation; `t = 0` returns `self`, `t = 1` returns `other`.
    #[inline]
    pub fn lerp(&self, other: &Point, t: f64) -> Self {
        Self::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Cumulative arc-length table: entry `i` is the distance travelled from
/// `points[0]` to `points[i]` along the polyline. Empty input gives an empty table.
pub fn arc_lengths(points: &[Point]) -> Vec<f64> {
    let mut table = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += points[i - 1].distance(p);
        }
        table.push(total);
    }
    table
}

/// Total polyline length.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
