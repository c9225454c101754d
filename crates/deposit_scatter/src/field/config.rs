//! Surface and per-body configuration for field generation.
use std::collections::HashMap;
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of placement attempts per deposit slot.
pub const DEFAULT_MAX_TRIES: usize = 25;
/// Default spacing factor applied to the sum of two placement radii.
pub const DEFAULT_OVERLAP_MARGIN: f64 = 1.1;
/// Default radius unit as a fraction of the surface width.
pub const DEFAULT_RADIUS_SCALE: f64 = 0.045;

/// Per-body generation tuning.
///
/// The requested deposit count is `deposit_count_base + deposit_count_delta`. Radius
/// fractions are relative to `width · radius_scale` (see [`FieldConfig`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyTuning {
    pub deposit_count_base: i32,
    pub deposit_count_delta: i32,
    pub min_radius_fraction: f64,
    pub max_radius_fraction: f64,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            deposit_count_base: 20,
            deposit_count_delta: -3,
            min_radius_fraction: 0.45,
            max_radius_fraction: 1.0,
        }
    }
}

impl BodyTuning {
    pub fn new(
        deposit_count_base: i32,
        deposit_count_delta: i32,
        min_radius_fraction: f64,
        max_radius_fraction: f64,
    ) -> Self {
        Self {
            deposit_count_base,
            deposit_count_delta,
            min_radius_fraction,
            max_radius_fraction,
        }
    }

    /// Tuning that requests exactly `count` deposits.
    pub fn with_count(count: i32, min_radius_fraction: f64, max_radius_fraction: f64) -> Self {
        Self::new(count, 0, min_radius_fraction, max_radius_fraction)
    }

    /// Signed requested count; validation rejects negative totals.
    #[inline]
    pub fn deposit_count(&self) -> i64 {
        i64::from(self.deposit_count_base) + i64::from(self.deposit_count_delta)
    }
}

/// Mapping from body identity to tuning, with a fallback for unlisted bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyTuningTable {
    pub default: BodyTuning,
    pub bodies: HashMap<String, BodyTuning>,
}

impl BodyTuningTable {
    /// Empty table; every body uses `default`.
    pub fn new(default: BodyTuning) -> Self {
        Self {
            default,
            bodies: HashMap::new(),
        }
    }

    /// Presets for the stock Kerbin/Mun/Minmus system.
    pub fn stock() -> Self {
        Self::new(BodyTuning::default())
            .with_body("Kerbin", BodyTuning::new(15, -3, 0.25, 1.0))
            .with_body("Mun", BodyTuning::new(20, 7, 0.45, 1.0))
            .with_body("Minmus", BodyTuning::new(20, -3, 0.45, 0.8))
    }

    /// Parse a table from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Add or replace the override for `body`.
    pub fn with_body(mut self, body: impl Into<String>, tuning: BodyTuning) -> Self {
        self.bodies.insert(body.into(), tuning);
        self
    }

    pub fn insert(&mut self, body: impl Into<String>, tuning: BodyTuning) -> Option<BodyTuning> {
        self.bodies.insert(body.into(), tuning)
    }

    /// Tuning for `body`, falling back to the default entry.
    pub fn tuning_for(&self, body: &str) -> &BodyTuning {
        self.bodies.get(body).unwrap_or(&self.default)
    }
}

/// Configuration for generating one deposit field.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Surface circumference; becomes the unwrapped width.
    pub circumference: f64,
    /// Count and radius tuning for the body.
    pub tuning: BodyTuning,
    /// Body identity stored on the generated field.
    pub body: Option<String>,
    /// Placement attempts per deposit slot.
    pub max_tries: usize,
    /// Minimum center distance as a multiple of the summed radii.
    pub overlap_margin: f64,
    /// Radius unit as a fraction of the width.
    pub radius_scale: f64,
}

impl FieldConfig {
    /// Creates a new [`FieldConfig`] for a surface of the given circumference.
    pub fn new(circumference: f64, tuning: BodyTuning) -> Self {
        Self {
            circumference,
            tuning,
            body: None,
            max_tries: DEFAULT_MAX_TRIES,
            overlap_margin: DEFAULT_OVERLAP_MARGIN,
            radius_scale: DEFAULT_RADIUS_SCALE,
        }
    }

    /// Creates a config for a sphere of `radius` (circumference `2πr`).
    pub fn from_body_radius(radius: f64, tuning: BodyTuning) -> Self {
        Self::new(TAU * radius, tuning)
    }

    /// Creates a config for `body`, looking up its tuning in `table`.
    pub fn for_body(body: &str, circumference: f64, table: &BodyTuningTable) -> Self {
        Self::new(circumference, *table.tuning_for(body)).with_body(body)
    }

    /// Sets the body identity.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the number of placement attempts per slot.
    pub fn with_max_tries(mut self, max_tries: usize) -> Self {
        self.max_tries = max_tries;
        self
    }

    /// Sets the overlap margin.
    pub fn with_overlap_margin(mut self, overlap_margin: f64) -> Self {
        self.overlap_margin = overlap_margin;
        self
    }

    /// Sets the radius scale.
    pub fn with_radius_scale(mut self, radius_scale: f64) -> Self {
        self.radius_scale = radius_scale;
        self
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.circumference
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.width() / 2.0
    }

    #[inline]
    pub fn min_radius(&self) -> f64 {
        self.tuning.min_radius_fraction * self.width() * self.radius_scale
    }

    #[inline]
    pub fn max_radius(&self) -> f64 {
        self.tuning.max_radius_fraction * self.width() * self.radius_scale
    }

    /// Requested slot count, zero for negative totals.
    #[inline]
    pub fn requested_count(&self) -> usize {
        usize::try_from(self.tuning.deposit_count()).unwrap_or(0)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.circumference.is_finite() || self.circumference <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "circumference must be finite and > 0, got {}",
                self.circumference
            )));
        }
        let t = &self.tuning;
        if !t.min_radius_fraction.is_finite() || t.min_radius_fraction <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_radius_fraction must be finite and > 0".into(),
            ));
        }
        if !t.max_radius_fraction.is_finite() || t.max_radius_fraction < t.min_radius_fraction {
            return Err(Error::InvalidConfig(format!(
                "max_radius_fraction ({}) must be >= min_radius_fraction ({})",
                t.max_radius_fraction, t.min_radius_fraction
            )));
        }
        if t.deposit_count() < 0 {
            return Err(Error::InvalidConfig(format!(
                "deposit count must be >= 0, got {} + {}",
                t.deposit_count_base, t.deposit_count_delta
            )));
        }
        if self.max_tries == 0 {
            return Err(Error::InvalidConfig("max_tries must be >= 1".into()));
        }
        if !self.overlap_margin.is_finite() || self.overlap_margin < 0.0 {
            return Err(Error::InvalidConfig(
                "overlap_margin must be finite and >= 0".into(),
            ));
        }
        if !self.radius_scale.is_finite() || self.radius_scale <= 0.0 {
            return Err(Error::InvalidConfig(
                "radius_scale must be finite and > 0".into(),
            ));
        }
        if self.min_radius() <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min radius {} must be > 0 on a surface {} wide",
                self.min_radius(),
                self.width()
            )));
        }
        if 2.0 * self.max_radius() >= self.height() {
            return Err(Error::InvalidConfig(format!(
                "max radius {} does not fit the surface height {}",
                self.max_radius(),
                self.height()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_unlisted_body_tuning() {
        let t = BodyTuning::default();
        assert_eq!(t.deposit_count(), 17);
        assert_eq!(t.min_radius_fraction, 0.45);
        assert_eq!(t.max_radius_fraction, 1.0);
    }

    #[test]
    fn stock_table_resolves_overrides_and_fallback() {
        let table = BodyTuningTable::stock();
        assert_eq!(table.tuning_for("Kerbin").deposit_count(), 12);
        assert_eq!(table.tuning_for("Mun").deposit_count(), 27);
        assert_eq!(table.tuning_for("Minmus").max_radius_fraction, 0.8);
        assert_eq!(table.tuning_for("Duna"), &BodyTuning::default());
    }

    #[test]
    fn table_parses_partial_json() {
        let table = BodyTuningTable::from_json_str(
            r#"{
                "default": { "deposit_count_base": 10 },
                "bodies": { "Eve": { "deposit_count_base": 5, "deposit_count_delta": 1 } }
            }"#,
        )
        .expect("valid json");
        assert_eq!(table.default.deposit_count(), 7);
        assert_eq!(table.tuning_for("Eve").deposit_count(), 6);
        assert_eq!(table.tuning_for("Eve").min_radius_fraction, 0.45);
    }

    #[test]
    fn table_rejects_malformed_json() {
        let err = BodyTuningTable::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn derived_extents_and_radii() {
        let cfg = FieldConfig::new(1_200_000.0, BodyTuning::with_count(15, 0.25, 1.0));
        assert_eq!(cfg.width(), 1_200_000.0);
        assert_eq!(cfg.height(), 600_000.0);
        assert!((cfg.min_radius() - 13_500.0).abs() < 1e-6);
        assert!((cfg.max_radius() - 54_000.0).abs() < 1e-6);
        assert_eq!(cfg.requested_count(), 15);
        cfg.validate().expect("scenario config is valid");
    }

    #[test]
    fn for_body_and_from_radius() {
        let table = BodyTuningTable::stock();
        let cfg = FieldConfig::for_body("Mun", 1000.0, &table);
        assert_eq!(cfg.body.as_deref(), Some("Mun"));
        assert_eq!(cfg.requested_count(), 27);

        let cfg = FieldConfig::from_body_radius(1.0, BodyTuning::default());
        assert!((cfg.width() - TAU).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_bad_surface_sizes() {
        for c in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = FieldConfig::new(c, BodyTuning::default())
                .validate()
                .unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)), "circumference {c}");
        }
    }

    #[test]
    fn validate_rejects_inverted_radius_range() {
        let cfg = FieldConfig::new(1000.0, BodyTuning::with_count(5, 0.8, 0.5));
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));

        let cfg = FieldConfig::new(1000.0, BodyTuning::with_count(5, 0.0, 0.5));
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_negative_count_and_zero_tries() {
        let cfg = FieldConfig::new(1000.0, BodyTuning::new(2, -3, 0.45, 1.0));
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
        assert_eq!(cfg.requested_count(), 0);

        let cfg = FieldConfig::new(1000.0, BodyTuning::default()).with_max_tries(0);
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_radius_that_cannot_fit() {
        let cfg = FieldConfig::new(1000.0, BodyTuning::default()).with_radius_scale(0.3);
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));

        let cfg = FieldConfig::new(1000.0, BodyTuning::default()).with_overlap_margin(-1.0);
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_radius_that_underflows_to_zero() {
        // Subnormal surface: every positive input, but the derived radii round to 0.
        let cfg = FieldConfig::new(1e-322, BodyTuning::with_count(3, 0.45, 0.45));
        assert_eq!(cfg.min_radius(), 0.0);
        assert!(2.0 * cfg.max_radius() < cfg.height());
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }
}
