//! Synthesizes extra participant data for the comparison views: copies the
//! P0 export tree to P1..P3 and perturbs every energy value so the copies
//! look like different households.

use anyhow::{bail, Context, Result};
use energy_dashboard_api::simulate::{RandomSource, ThreadRandom};
use std::fs;
use std::path::Path;

const DERIVED_PARTICIPANTS: [&str; 3] = ["P1", "P2", "P3"];

fn main() -> Result<()> {
    let base_folder = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => bail!("Usage: fake-data <base-folder containing P0>"),
    };

    let p0 = Path::new(&base_folder).join("P0");
    if !p0.is_dir() {
        bail!("{} does not contain a P0 directory", base_folder);
    }

    let mut rng = ThreadRandom;
    for participant in DERIVED_PARTICIPANTS {
        let target = Path::new(&base_folder).join(participant);
        copy_tree(&p0, &target)
            .with_context(|| format!("Failed to copy P0 to {}", participant))?;
        perturb_csvs(&target, &mut rng)
            .with_context(|| format!("Failed to perturb {}", participant))?;
        println!("Created {}", target.display());
    }

    Ok(())
}

fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.path().is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

fn perturb_csvs(dir: &Path, rng: &mut dyn RandomSource) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            perturb_csvs(&path, rng)?;
        } else if path.extension().is_some_and(|ext| ext == "csv") {
            perturb_file(&path, rng)
                .with_context(|| format!("Failed to rewrite {}", path.display()))?;
        }
    }
    Ok(())
}

/// Scale the energy column of every data row by an independent U(0.8, 1.2)
/// factor. Rows whose second column is not numeric (headers) pass through
/// unchanged.
fn perturb_file(path: &Path, rng: &mut dyn RandomSource) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for record in reader.records() {
        let mut record = record?;
        if let Some(raw) = record.get(1) {
            if let Ok(usage) = raw.trim().parse::<f64>() {
                let perturbed = usage * rng.uniform(0.8, 1.2);
                let mut fields: Vec<String> =
                    record.iter().map(|f| f.to_string()).collect();
                fields[1] = format!("{:.3}", perturbed);
                record = csv::StringRecord::from(fields);
            }
        }
        rows.push(record);
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}
