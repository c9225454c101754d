mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use deposit_scatter::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const COUNTS: [i32; 4] = [5, 15, 30, 60];

fn generation_by_count_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation/count");

    for &count in &COUNTS {
        let generator =
            FieldGenerator::try_new(common::counted_config(count)).expect("valid bench config");
        group.throughput(common::deposits_throughput(count));

        let mut rng = StdRng::seed_from_u64(0xD3_9051 ^ count as u64);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let result = generator.run(&mut rng);
                black_box(result.placed);
            });
        });
    }

    group.finish();
}

fn generation_stock_bodies_benches(c: &mut Criterion) {
    let table = BodyTuningTable::stock();
    let mut group = c.benchmark_group("generation/stock");

    for body in ["Kerbin", "Mun", "Minmus"] {
        let cfg = FieldConfig::for_body(body, common::CIRCUMFERENCE, &table);
        let generator = FieldGenerator::try_new(cfg).expect("stock tuning is valid");
        let mut rng = StdRng::seed_from_u64(0x5EED);
        group.bench_function(body, |b| {
            b.iter(|| black_box(generator.run(&mut rng).field.len()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::generation_criterion();
    targets = generation_by_count_benches, generation_stock_bodies_benches
}
criterion_main!(benches);
