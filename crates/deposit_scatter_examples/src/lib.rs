#![forbid(unsafe_code)]
//! Shared helpers for the deposit_scatter example binaries.
use deposit_scatter::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a console subscriber; `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .try_init();
}

/// Fraction of an evenly spaced sample grid that lands inside a deposit.
pub fn coverage(field: &DepositField, columns: usize) -> f64 {
    let columns = columns.max(1);
    let rows = (columns / 2).max(1);
    let mut hits = 0usize;
    for iy in 0..rows {
        for ix in 0..columns {
            let p = Point2::new(
                field.width() * (ix as f64 + 0.5) / columns as f64,
                field.height() * (iy as f64 + 0.5) / rows as f64,
            );
            if field.contains_point(p) {
                hits += 1;
            }
        }
    }
    hits as f64 / (rows * columns) as f64
}
