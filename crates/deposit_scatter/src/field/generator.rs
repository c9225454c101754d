//! Rejection-sampling placement of deposits on an unwrapped surface.
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::deposit::Deposit;
use crate::error::Result;
use crate::field::config::FieldConfig;
use crate::field::events::{EventSink, FieldEvent, FieldEventKind};
use crate::field::DepositField;
use crate::geometry::Point2;
use crate::sampling::{point_in_rect, range_f64};

/// Result of one generation run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// The sealed field.
    pub field: DepositField,
    /// Number of deposit slots requested by the tuning.
    pub requested: usize,
    /// Number of slots that produced a deposit.
    pub placed: usize,
    /// Number of slots whose attempts were all rejected.
    pub skipped: usize,
    /// Total candidate centers drawn.
    pub candidates_tried: usize,
    /// Candidate centers rejected for crowding an accepted deposit.
    pub candidates_rejected: usize,
}

/// Runs the placement algorithm for a validated [`FieldConfig`].
#[derive(Debug, Clone)]
pub struct FieldGenerator {
    config: FieldConfig,
}

impl FieldGenerator {
    /// Creates a generator, failing fast on an invalid configuration.
    pub fn try_new(config: FieldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Generates a field.
    pub fn run<R: RngCore>(&self, rng: &mut R) -> GenerationResult {
        self.run_with_events(rng, &mut ())
    }

    /// Generates a field, reporting each placement decision to `sink`.
    ///
    /// For every slot a radius is drawn from `[min_radius, max_radius]`, then up to
    /// `max_tries` centers from `[r, width − r] × [r, height − r]`. A center is accepted
    /// when it keeps `overlap_margin · (r + r_k)` distance to every accepted deposit `k`.
    /// Outlines lie inside their circles, so with a margin of at least 1 they never intersect.
    pub fn run_with_events<R: RngCore>(
        &self,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> GenerationResult {
        let cfg = &self.config;
        let width = cfg.width();
        let height = cfg.height();
        let requested = cfg.requested_count();
        let (min_radius, max_radius) = (cfg.min_radius(), cfg.max_radius());

        if sink.wants(FieldEventKind::GenerationStarted) {
            sink.send(FieldEvent::GenerationStarted {
                body: cfg.body.clone(),
                width,
                height,
                requested,
                min_radius,
                max_radius,
            });
        }
        if requested == 0 {
            warn!(
                "Tuning for '{}' requests no deposits.",
                cfg.body.as_deref().unwrap_or("<unnamed>")
            );
        }

        let mut deposits: Vec<Deposit> = Vec::with_capacity(requested);
        let mut tried = 0;
        let mut rejected = 0;
        let mut skipped = 0;

        for slot in 0..requested {
            let radius = range_f64(rng, min_radius, max_radius);
            let lo = Point2::new(radius, radius);
            let hi = Point2::new(width - radius, height - radius);

            let mut accepted = None;
            for attempt in 0..cfg.max_tries {
                let center = point_in_rect(rng, lo, hi);
                tried += 1;
                if is_clear(&deposits, center, radius, cfg.overlap_margin) {
                    accepted = Some(center);
                    break;
                }
                rejected += 1;
                if sink.wants(FieldEventKind::CandidateRejected) {
                    sink.send(FieldEvent::CandidateRejected {
                        slot,
                        attempt,
                        center,
                        radius,
                    });
                }
            }

            let Some(center) = accepted else {
                skipped += 1;
                debug!(
                    "Slot {} (radius {:.1}) skipped after {} attempts.",
                    slot, radius, cfg.max_tries
                );
                if sink.wants(FieldEventKind::SlotSkipped) {
                    sink.send(FieldEvent::SlotSkipped {
                        slot,
                        radius,
                        attempts: cfg.max_tries,
                    });
                }
                continue;
            };

            let deposit = Deposit::generate(center, radius, rng);
            debug!(
                "Slot {}: deposit at ({:.1}, {:.1}) radius {:.1}, {} vertices, amount {}.",
                slot,
                center.x,
                center.y,
                radius,
                deposit.vertices().len(),
                deposit.initial_amount()
            );
            if sink.wants(FieldEventKind::DepositPlaced) {
                sink.send(FieldEvent::DepositPlaced {
                    slot,
                    index: deposits.len(),
                    center,
                    radius,
                    vertex_count: deposit.vertices().len(),
                    initial_amount: deposit.initial_amount(),
                });
            }
            deposits.push(deposit);
        }

        let placed = deposits.len();
        info!(
            "Generated {}/{} deposits for '{}' ({} skipped, {} candidates tried).",
            placed,
            requested,
            cfg.body.as_deref().unwrap_or("<unnamed>"),
            skipped,
            tried
        );
        if sink.wants(FieldEventKind::GenerationFinished) {
            sink.send(FieldEvent::GenerationFinished {
                requested,
                placed,
                skipped,
            });
        }

        GenerationResult {
            field: DepositField::from_parts(width, height, cfg.body.clone(), deposits),
            requested,
            placed,
            skipped,
            candidates_tried: tried,
            candidates_rejected: rejected,
        }
    }
}

/// Whether a circle at `center` keeps the margin to every accepted deposit.
fn is_clear(deposits: &[Deposit], center: Point2, radius: f64, margin: f64) -> bool {
    deposits
        .iter()
        .all(|d| center.distance(d.center()) >= margin * (radius + d.radius()))
}
