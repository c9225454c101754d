#![forbid(unsafe_code)]
//! deposit_scatter: procedural placement of polygonal resource deposits on planetary surfaces.
//!
//! Modules:
//! - geometry: points and polygons with even-odd membership
//! - deposit: a single deposit with its irregular outline and depletable amount
//! - field: per-body configuration, rejection-sampling generation, events and queries
//! - persist: versioned save records and JSON helpers
//!
//! Generation takes an explicit [`rand::RngCore`], so a seed fully determines a field.
pub mod deposit;
pub mod error;
pub mod field;
pub mod geometry;
pub mod persist;
pub(crate) mod sampling;

/// Convenient re-exports for common types. Import with `use deposit_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::deposit::Deposit;
    pub use crate::error::{Error, Result};
    pub use crate::field::config::{BodyTuning, BodyTuningTable, FieldConfig};
    pub use crate::field::events::{
        EventSink, FieldEvent, FieldEventKind, FnSink, MultiSink, VecSink,
    };
    pub use crate::field::generator::{FieldGenerator, GenerationResult};
    pub use crate::field::DepositField;
    pub use crate::geometry::{Bounds, Point2, Polygon};
    pub use crate::persist::{DepositRecord, FieldRecord, FORMAT_VERSION};
}
