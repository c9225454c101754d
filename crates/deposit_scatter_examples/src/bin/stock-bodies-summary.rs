use deposit_scatter::prelude::*;
use deposit_scatter_examples::{coverage, init_tracing};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Equatorial radii in meters.
    let bodies = [
        ("Kerbin", 600_000.0),
        ("Mun", 200_000.0),
        ("Minmus", 60_000.0),
        ("Duna", 320_000.0),
    ];
    let table = BodyTuningTable::stock();

    for (seed, (body, radius)) in bodies.iter().enumerate() {
        let tuning = *table.tuning_for(body);
        let config = FieldConfig::from_body_radius(*radius, tuning).with_body(*body);
        let generator = FieldGenerator::try_new(config)?;

        let mut sink = VecSink::only(&[FieldEventKind::SlotSkipped]);
        let mut rng = StdRng::seed_from_u64(2012 + seed as u64);
        let result = generator.run_with_events(&mut rng, &mut sink);
        let field = &result.field;

        info!(
            "{body}: {}/{} deposits, {} skipped slots, {:.2}% surface coverage, {:.0} units total.",
            result.placed,
            result.requested,
            sink.len(),
            coverage(field, 256) * 100.0,
            field.total_initial()
        );
        for (i, d) in field.iter().enumerate() {
            info!(
                "  #{i:02} center=({:.0}, {:.0}) r={:.0} vertices={} amount={:.0} depth={:.2}",
                d.center().x,
                d.center().y,
                d.radius(),
                d.vertices().len(),
                d.initial_amount(),
                d.depth()
            );
        }
    }

    Ok(())
}
