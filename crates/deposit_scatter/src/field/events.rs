//! Event types and sinks for observing field generation.
//!
//! [`crate::field::generator::FieldGenerator::run_with_events`] reports each placement
//! decision through an [`EventSink`]. Sinks opt out of event kinds they do not need via
//! [`EventSink::wants`], which lets the generator skip building those events.
use crate::geometry::Point2;

/// Discriminant of [`FieldEvent`], used for sink filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEventKind {
    GenerationStarted,
    CandidateRejected,
    DepositPlaced,
    SlotSkipped,
    GenerationFinished,
}

/// Describes events emitted while generating a field.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Emitted once before the first slot.
    GenerationStarted {
        /// Body identity, if configured.
        body: Option<String>,
        /// Unwrapped surface width.
        width: f64,
        /// Unwrapped surface height.
        height: f64,
        /// Number of deposit slots.
        requested: usize,
        /// Smallest possible placement radius.
        min_radius: f64,
        /// Largest possible placement radius.
        max_radius: f64,
    },

    /// A candidate center came too close to an accepted deposit.
    CandidateRejected {
        slot: usize,
        attempt: usize,
        center: Point2,
        radius: f64,
    },

    /// A deposit was accepted and appended to the field.
    DepositPlaced {
        slot: usize,
        /// Position of the deposit in the finished field.
        index: usize,
        center: Point2,
        radius: f64,
        vertex_count: usize,
        initial_amount: f64,
    },

    /// All attempts for a slot were rejected; the slot stays empty.
    SlotSkipped {
        slot: usize,
        radius: f64,
        attempts: usize,
    },

    /// Emitted once after the last slot.
    GenerationFinished {
        requested: usize,
        placed: usize,
        skipped: usize,
    },
}

impl FieldEvent {
    pub fn kind(&self) -> FieldEventKind {
        match self {
            FieldEvent::GenerationStarted { .. } => FieldEventKind::GenerationStarted,
            FieldEvent::CandidateRejected { .. } => FieldEventKind::CandidateRejected,
            FieldEvent::DepositPlaced { .. } => FieldEventKind::DepositPlaced,
            FieldEvent::SlotSkipped { .. } => FieldEventKind::SlotSkipped,
            FieldEvent::GenerationFinished { .. } => FieldEventKind::GenerationFinished,
        }
    }
}

/// A generic event sink that accepts [`FieldEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: FieldEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: FieldEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: FieldEvent) {}

    #[inline]
    fn wants(&self, _kind: FieldEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(FieldEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(FieldEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(FieldEvent),
{
    #[inline]
    fn send(&mut self, event: FieldEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<FieldEvent>,
    only: Option<Vec<FieldEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect only the listed kinds.
    pub fn only(kinds: &[FieldEventKind]) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.to_vec()),
        }
    }

    pub fn into_inner(self) -> Vec<FieldEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[FieldEvent] {
        &self.events
    }

    pub fn count(&self, kind: FieldEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: FieldEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: FieldEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: FieldEvent) {
        let kind = event.kind();
        let Some(last_idx) = self.sinks.iter().rposition(|s| s.wants(kind)) else {
            return;
        };
        for i in 0..last_idx {
            if self.sinks[i].wants(kind) {
                self.sinks[i].send(event.clone());
            }
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: FieldEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
