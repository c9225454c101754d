use std::fs::File;
use std::io::{BufReader, BufWriter};

use deposit_scatter::prelude::*;
use deposit_scatter_examples::init_tracing;
use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let table = BodyTuningTable::stock();
    let config = FieldConfig::for_body("Kerbin", std::f64::consts::TAU * 600_000.0, &table);
    let mut field = DepositField::generate(&config, &mut StdRng::seed_from_u64(7))?;

    // A drill hovering over the first deposit; the vertical axis is ignored.
    let target = field
        .deposits()
        .first()
        .map(Deposit::center)
        .ok_or_else(|| anyhow::anyhow!("field has no deposits"))?;
    let drill = DVec3::new(target.x, 1_250.0, target.y);

    let mut drilled = 0.0;
    while let Some(deposit) = field.deposit_at_mut(drill) {
        let taken = deposit.extract(12_500.0);
        if taken == 0.0 {
            break;
        }
        drilled += taken;
        info!(
            "Extracted {taken:.0}, {:.0} of {:.0} left.",
            deposit.remaining_amount(),
            deposit.initial_amount()
        );
    }
    if field.contains_point(drill) {
        warn!("Deposit under the drill is depleted ({drilled:.0} extracted).");
    }

    let path = std::env::temp_dir().join("deposit_scatter_kerbin.json");
    field.write_json(BufWriter::new(File::create(&path)?))?;
    info!("Saved {} deposits to {}.", field.len(), path.display());

    let restored = DepositField::read_json(BufReader::new(File::open(&path)?))?;
    let remaining = restored
        .deposit_at(drill)
        .map(Deposit::remaining_amount)
        .unwrap_or_default();
    info!(
        "Restored {} deposits; remaining under drill: {remaining:.0}.",
        restored.len()
    );
    anyhow::ensure!(restored == field, "restored field differs from the saved one");

    Ok(())
}
