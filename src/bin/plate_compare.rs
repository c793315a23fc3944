//! Plate comparison runner
//!
//! Analyzes every composite in the catalogue, prints its effective moduli and
//! writes one plot document per compared field.
//!
//! Configuration:
//! - catalogue: first argument, else `PLATE_CATALOG`, else `data/catalog.json`
//! - `PLATE_OPTIONS`: optional JSON file with analysis options
//! - `PLATE_REFERENCE_DIR`: reference results (default `ANSYS/results`)
//! - `PLATE_OUTPUT_DIR`: plot documents (default `results`)
//! - `PLATE_LANGUAGE`: `rus` (default) or `eng`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asymptotic_plate::prelude::*;
use asymptotic_plate::report::{publish_batch, ModuliReport};
use log::{error, info, warn};

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalog_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env_or("PLATE_CATALOG", "data/catalog.json")));

    let options = match std::env::var("PLATE_OPTIONS") {
        Ok(path) => AnalysisOptions::from_file(Path::new(&path))
            .with_context(|| format!("reading analysis options from {path}"))?,
        Err(_) => AnalysisOptions::default(),
    };

    let reference_dir = PathBuf::from(env_or("PLATE_REFERENCE_DIR", "ANSYS/results"));
    if !reference_dir.is_dir() {
        warn!(
            "Reference directory {} not found; plots will have no FEM curve",
            reference_dir.display()
        );
    }

    let language: Language = env_or("PLATE_LANGUAGE", "rus")
        .parse()
        .context("PLATE_LANGUAGE")?;
    let config = RenderConfig::new(language, env_or("PLATE_OUTPUT_DIR", "results"));

    let entries = load_catalog(&catalog_path)
        .with_context(|| format!("loading catalogue {}", catalog_path.display()))?;
    info!("Loaded {} catalogue entries from {}", entries.len(), catalog_path.display());

    let batch = run_catalog(&entries, &options, Some(&reference_dir));

    for report in &batch.reports {
        println!(
            "{}\n",
            ModuliReport {
                topology: report.topology,
                name: &report.name,
                moduli: &report.moduli,
            }
        );
    }

    let published = publish_batch(&batch, &config);
    if published < batch.succeeded() {
        error!(
            "{} of {} analyzed plate(s) could not be written to {}",
            batch.succeeded() - published,
            batch.succeeded(),
            config.output_dir.display()
        );
    }

    for failure in &batch.failures {
        println!("Skipped {} ({}): {}", failure.name, failure.topology, failure.error);
    }

    println!("{}", batch.summary());
    Ok(())
}
