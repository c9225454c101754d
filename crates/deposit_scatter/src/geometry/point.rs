//! Immutable 2D point in unwrapped surface coordinates.
use std::ops::{Add, Div, Mul, Sub};

use glam::{DVec2, DVec3};
use mint::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A point on the unwrapped surface.
///
/// `x` runs along the longitude-like axis and `y` along the latitude-like
/// axis. In the host's 3D frame the latter is the `z` component; use
/// [`Point2::from_xz`] to project a 3D position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Project a 3D position onto its x/z plane, discarding the vertical axis.
    #[inline]
    pub fn from_xz(position: impl Into<Vector3<f64>>) -> Self {
        let v = position.into();
        Self { x: v.x, y: v.z }
    }

    /// Euclidean distance in the surface plane.
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        DVec2::from(self).distance(DVec2::from(other))
    }
}

impl Add for Point2 {
    type Output = Point2;

    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Div<f64> for Point2 {
    type Output = Point2;

    #[inline]
    fn div(self, rhs: f64) -> Point2 {
        Point2::new(self.x / rhs, self.y / rhs)
    }
}

impl Mul<i32> for Point2 {
    type Output = Point2;

    #[inline]
    fn mul(self, rhs: i32) -> Point2 {
        let k = f64::from(rhs);
        Point2::new(self.x * k, self.y * k)
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Point2 {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point2> for DVec2 {
    #[inline]
    fn from(p: Point2) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for Point2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point2> for Vector2<f64> {
    #[inline]
    fn from(p: Point2) -> Self {
        Vector2 { x: p.x, y: p.y }
    }
}

impl From<DVec3> for Point2 {
    /// Same projection as [`Point2::from_xz`].
    #[inline]
    fn from(v: DVec3) -> Self {
        Self { x: v.x, y: v.z }
    }
}
