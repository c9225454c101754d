//! Deposit fields: generation for one surface and point-location queries.
//!
//! A [`DepositField`] is only ever produced whole, by
//! [`generator::FieldGenerator`] or by loading a saved record, so its deposit list
//! never changes shape after construction. Queries scan deposits in generation order;
//! at a few dozen deposits per surface this needs no spatial index.
use rand::RngCore;

use crate::deposit::Deposit;
use crate::error::Result;
use crate::geometry::Point2;

pub mod config;
pub mod events;
pub mod generator;

use config::FieldConfig;
use generator::FieldGenerator;

/// The full set of deposits generated for one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositField {
    width: f64,
    height: f64,
    body: Option<String>,
    deposits: Vec<Deposit>,
}

impl DepositField {
    /// Generate a field for `config`, discarding run statistics.
    pub fn generate<R: RngCore>(config: &FieldConfig, rng: &mut R) -> Result<Self> {
        let generator = FieldGenerator::try_new(config.clone())?;
        Ok(generator.run(rng).field)
    }

    pub(crate) fn from_parts(
        width: f64,
        height: f64,
        body: Option<String>,
        deposits: Vec<Deposit>,
    ) -> Self {
        Self {
            width,
            height,
            body,
            deposits,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.deposits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty()
    }

    /// Deposits in generation order.
    #[inline]
    pub fn deposits(&self) -> &[Deposit] {
        &self.deposits
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Deposit> {
        self.deposits.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Deposit> {
        self.deposits.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Deposit> {
        self.deposits.get_mut(index)
    }

    /// Whether any deposit outline contains `point`.
    pub fn contains_point(&self, point: impl Into<Point2>) -> bool {
        let p = point.into();
        self.deposits.iter().any(|d| d.polygon().contains(p))
    }

    /// Index of the first deposit (in generation order) containing `point`.
    pub fn deposit_index_at(&self, point: impl Into<Point2>) -> Option<usize> {
        let p = point.into();
        self.deposits.iter().position(|d| d.polygon().contains(p))
    }

    /// First deposit (in generation order) containing `point`.
    pub fn deposit_at(&self, point: impl Into<Point2>) -> Option<&Deposit> {
        self.deposit_index_at(point).map(|i| &self.deposits[i])
    }

    /// Mutable handle to the first deposit containing `point`, for extraction.
    pub fn deposit_at_mut(&mut self, point: impl Into<Point2>) -> Option<&mut Deposit> {
        let i = self.deposit_index_at(point)?;
        self.deposits.get_mut(i)
    }

    pub fn total_initial(&self) -> f64 {
        self.deposits.iter().map(Deposit::initial_amount).sum()
    }

    pub fn total_remaining(&self) -> f64 {
        self.deposits.iter().map(Deposit::remaining_amount).sum()
    }
}

impl<'a> IntoIterator for &'a DepositField {
    type Item = &'a Deposit;
    type IntoIter = std::slice::Iter<'a, Deposit>;

    fn into_iter(self) -> Self::IntoIter {
        self.deposits.iter()
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::field::config::BodyTuning;

    fn field(seed: u64) -> DepositField {
        let cfg = FieldConfig::new(1_200_000.0, BodyTuning::with_count(15, 0.25, 1.0));
        DepositField::generate(&cfg, &mut StdRng::seed_from_u64(seed)).expect("valid config")
    }

    /// Grid of query points over the surface plus every deposit center.
    fn query_points(f: &DepositField) -> Vec<Point2> {
        let mut out: Vec<Point2> = f.iter().map(Deposit::center).collect();
        let steps = 120;
        for iy in 0..=steps / 2 {
            for ix in 0..=steps {
                out.push(Point2::new(
                    f.width() * ix as f64 / steps as f64,
                    f.height() * iy as f64 / (steps / 2) as f64,
                ));
            }
        }
        out
    }

    #[test]
    fn generate_propagates_config_errors() {
        let cfg = FieldConfig::new(0.0, BodyTuning::default());
        assert!(DepositField::generate(&cfg, &mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn deposit_at_agrees_with_contains_point() {
        let f = field(77);
        assert!(!f.is_empty());
        let mut hits = 0;
        for p in query_points(&f) {
            let found = f.deposit_at(p);
            assert_eq!(found.is_some(), f.contains_point(p), "at {p:?}");
            if let Some(d) = found {
                hits += 1;
                assert!(d.contains(p));
            }
        }
        assert!(hits >= f.len());
    }

    #[test]
    fn deposit_at_returns_first_match_in_generation_order() {
        let f = field(31);
        for p in query_points(&f) {
            if let Some(i) = f.deposit_index_at(p) {
                assert!(f.deposits()[..i].iter().all(|d| !d.contains(p)));
                assert!(std::ptr::eq(f.deposit_at(p).unwrap(), &f.deposits()[i]));
            }
        }
    }

    #[test]
    fn centers_resolve_to_their_own_deposit() {
        let f = field(8);
        for (i, d) in f.iter().enumerate() {
            assert_eq!(f.deposit_index_at(d.center()), Some(i));
        }
    }

    #[test]
    fn points_outside_the_surface_miss() {
        let f = field(8);
        assert!(!f.contains_point((-10.0, -10.0)));
        assert!(f.deposit_at((f.width() + 1.0, f.height() + 1.0)).is_none());
    }

    #[test]
    fn queries_accept_3d_positions() {
        let f = field(12);
        let c = f.deposits()[0].center();
        let pos = DVec3::new(c.x, 4_000.0, c.y);
        assert!(f.contains_point(pos));
        assert_eq!(f.deposit_index_at(pos), Some(0));
    }

    #[test]
    fn edge_queries_are_deterministic() {
        let a = field(99);
        let b = field(99);
        for d in a.iter() {
            let verts = d.vertices();
            for k in 0..verts.len() {
                let v0 = verts[k];
                let v1 = verts[(k + 1) % verts.len()];
                let mid = (v0 + v1) / 2.0;
                assert_eq!(a.contains_point(mid), b.contains_point(mid));
                assert_eq!(a.contains_point(v0), b.contains_point(v0));
                assert_eq!(a.contains_point(mid), a.contains_point(mid));
            }
        }
    }

    #[test]
    fn extraction_through_handle_updates_field() {
        let mut f = field(4);
        let c = f.deposits()[0].center();
        let before = f.total_remaining();
        let initial = f.deposits()[0].initial_amount();

        let d = f.deposit_at_mut(c).expect("center lies inside");
        let taken = d.extract(500.0);
        assert_eq!(taken, 500.0);
        let taken_all = d.extract(f64::MAX);
        assert_eq!(taken_all, initial - 500.0);
        assert_eq!(d.remaining_amount(), 0.0);

        assert!((f.total_remaining() - (before - initial)).abs() < 1e-6);
        assert!(f.deposit_at_mut((-1.0, -1.0)).is_none());
    }

    #[test]
    fn sealed_field_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DepositField>();

        let f = std::sync::Arc::new(field(6));
        let target = f.deposits()[0].center();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let f = std::sync::Arc::clone(&f);
                std::thread::spawn(move || f.deposit_index_at(target))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), Some(0));
        }
    }
}
