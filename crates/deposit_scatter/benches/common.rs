#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use deposit_scatter::prelude::*;

/// Kerbin-sized surface shared by every bench.
pub const CIRCUMFERENCE: f64 = 1_200_000.0;

/// Whole generation runs per iteration.
pub const GENERATION_SAMPLE_SIZE: usize = 15;
pub const GENERATION_MEASUREMENT_TIME: Duration = Duration::from_secs(4);

/// One grid sweep of point queries per iteration.
pub const QUERY_SAMPLE_SIZE: usize = 60;
pub const QUERY_MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub const WARM_UP: Duration = Duration::from_millis(500);

pub fn generation_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(GENERATION_SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(GENERATION_MEASUREMENT_TIME)
}

pub fn query_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(QUERY_SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(QUERY_MEASUREMENT_TIME)
}

/// Field config with `count` slots and the scenario radius range.
pub fn counted_config(count: i32) -> FieldConfig {
    FieldConfig::new(CIRCUMFERENCE, BodyTuning::with_count(count, 0.25, 1.0))
}

/// Deposits per run; requested slots, not placed ones.
pub fn deposits_throughput(count: i32) -> Throughput {
    Throughput::Elements(count.max(1) as u64)
}

/// Cell centers of a `side` x `side` grid over the field surface.
pub fn query_grid(field: &DepositField, side: usize) -> Vec<Point2> {
    let mut out = Vec::with_capacity(side * side);
    for iy in 0..side {
        for ix in 0..side {
            out.push(Point2::new(
                field.width() * (ix as f64 + 0.5) / side as f64,
                field.height() * (iy as f64 + 0.5) / side as f64,
            ));
        }
    }
    out
}
