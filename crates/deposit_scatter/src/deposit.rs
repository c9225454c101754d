//! A single resource deposit: placement circle, irregular outline and a depletable amount.
use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use rand::RngCore;

use crate::geometry::{Point2, Polygon};
use crate::sampling::{range_f64, range_usize};

/// Cosmetic depth range.
pub const DEPTH_RANGE: RangeInclusive<f64> = 1.0..=2.0;
/// Whole-unit initial amount, lower bound inclusive.
pub const MIN_INITIAL_AMOUNT: usize = 1_000;
/// Whole-unit initial amount, upper bound exclusive.
pub const MAX_INITIAL_AMOUNT: usize = 100_000;
/// Outline vertex count, lower bound inclusive.
pub const MIN_VERTEX_COUNT: usize = 20;
/// Outline vertex count, upper bound exclusive.
pub const MAX_VERTEX_COUNT: usize = 50;
/// Smallest per-vertex radius as a fraction of the deposit radius.
pub const INNER_RADIUS_FRACTION: f64 = 0.45;

/// One placed, polygon-shaped, resource-bearing region.
///
/// Only [`Deposit::extract`] changes a deposit after it was generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Deposit {
    center: Point2,
    radius: f64,
    depth: f64,
    initial_amount: f64,
    remaining_amount: f64,
    shape: Polygon,
}

impl Deposit {
    /// Generate a deposit around `center` with placement radius `radius`.
    ///
    /// Vertex `i` of `N` sits at angle `θ = 2π·i/N` and distance `r_i` drawn from
    /// `[0.45·radius, radius]`, at `center + r_i·(cos θ, −sin θ)`. The negated sine
    /// winds outlines clockwise in a y-up frame, which matches the host's x/z
    /// handedness; saved outlines depend on it.
    ///
    /// `radius` must be positive; the field generator guarantees this.
    pub fn generate(center: impl Into<Point2>, radius: f64, rng: &mut dyn RngCore) -> Self {
        debug_assert!(radius > 0.0, "deposit radius must be positive");
        let center = center.into();

        let depth = range_f64(rng, *DEPTH_RANGE.start(), *DEPTH_RANGE.end());
        let initial_amount = range_usize(rng, MIN_INITIAL_AMOUNT, MAX_INITIAL_AMOUNT) as f64;

        let vertex_count = range_usize(rng, MIN_VERTEX_COUNT, MAX_VERTEX_COUNT);
        let mut vertices = Vec::with_capacity(vertex_count);
        for i in 0..vertex_count {
            let r = range_f64(rng, INNER_RADIUS_FRACTION * radius, radius);
            let angle = TAU * (i as f64 / vertex_count as f64);
            vertices.push(Point2::new(
                center.x + r * angle.cos(),
                center.y - r * angle.sin(),
            ));
        }

        let shape = match Polygon::from_vec(vertices) {
            Ok(shape) => shape,
            Err(_) => unreachable!("vertex count is at least {MIN_VERTEX_COUNT}"),
        };

        Self {
            center,
            radius,
            depth,
            initial_amount,
            remaining_amount: initial_amount,
            shape,
        }
    }

    /// Reassemble a deposit from saved parts. Callers validate the amount invariant.
    pub(crate) fn from_parts(
        center: Point2,
        radius: f64,
        depth: f64,
        initial_amount: f64,
        remaining_amount: f64,
        shape: Polygon,
    ) -> Self {
        Self {
            center,
            radius,
            depth,
            initial_amount,
            remaining_amount,
            shape,
        }
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Placement radius; the outline lies within it.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    #[inline]
    pub fn initial_amount(&self) -> f64 {
        self.initial_amount
    }

    #[inline]
    pub fn remaining_amount(&self) -> f64 {
        self.remaining_amount
    }

    #[inline]
    pub fn extracted_amount(&self) -> f64 {
        self.initial_amount - self.remaining_amount
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.remaining_amount <= 0.0
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.shape
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        self.shape.vertices()
    }

    /// Whether `point` lies inside the outline.
    #[inline]
    pub fn contains(&self, point: impl Into<Point2>) -> bool {
        self.shape.contains(point.into())
    }

    /// Remove up to `amount` and return what was actually taken.
    ///
    /// Requests are clamped to `[0, remaining]`; negative and NaN requests take nothing.
    pub fn extract(&mut self, amount: f64) -> f64 {
        let taken = if amount > 0.0 {
            amount.min(self.remaining_amount)
        } else {
            0.0
        };
        self.remaining_amount = (self.remaining_amount - taken).max(0.0);
        taken
    }
}
