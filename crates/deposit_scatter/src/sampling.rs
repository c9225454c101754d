//! Random draws used by deposit and field generation.
//!
//! All helpers take an injected [`RngCore`] so that generation is reproducible from a
//! caller-chosen seed.
use rand::RngCore;

use crate::geometry::Point2;

/// Generate a random float in the range [0, 1).
///
/// Uses the top 53 bits of a `u64` so every representable step is equally likely.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Uniform float in `[lo, hi]`.
///
/// The result never leaves the interval, even when rounding of `lo + u * (hi - lo)`
/// would land one ulp past `hi`.
#[inline]
pub(crate) fn range_f64(rng: &mut dyn RngCore, lo: f64, hi: f64) -> f64 {
    debug_assert!(lo <= hi, "range_f64 called with lo > hi");
    let u = rand01(rng);
    (lo + u * (hi - lo)).clamp(lo, hi)
}

/// Uniform integer in the half-open range `[lo, hi)`.
///
/// Returns `lo` when the range is empty.
#[inline]
pub(crate) fn range_usize(rng: &mut dyn RngCore, lo: usize, hi: usize) -> usize {
    if hi <= lo {
        return lo;
    }
    let span = hi - lo;
    let offset = (rand01(rng) * span as f64) as usize;
    lo + offset.min(span - 1)
}

/// Uniform point inside the rectangle `[min.x, max.x] × [min.y, max.y]`.
#[inline]
pub(crate) fn point_in_rect(rng: &mut dyn RngCore, min: Point2, max: Point2) -> Point2 {
    let x = range_f64(rng, min.x, max.x);
    let y = range_f64(rng, min.y, max.y);
    Point2::new(x, y)
}
