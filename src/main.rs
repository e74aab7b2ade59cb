//! `orient_refine <config.json>`
//!
//! Loads an image and its cluster labels, builds the initial orientation
//! field from image gradients, refines it and exports the field on the
//! configured cadence.

use log::{info, warn};
use orientation_refine::config::{load_config, OutputConfig, RunConfig};
use orientation_refine::image::io::{load_rgb_image, write_json_file};
use orientation_refine::matrix::{load_cluster_labels, write_matrix};
use orientation_refine::render::{save_gradient_image, save_orientation_image};
use orientation_refine::{OrientationField, Refiner};
use std::env;
use std::path::Path;
use std::time::Instant;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    if config.output.save_every == Some(0) {
        warn!("save_every = 0, only the final field will be exported");
    }
    let stem = file_stem(&config)?;

    let start = Instant::now();
    let color = load_rgb_image(&config.input)?;
    let labels = load_cluster_labels(&config.clusters)?;
    let grad = config.gradient.apply(&color.to_luma_f32());
    let mut field = OrientationField::from_grad(&grad, &labels)?;
    info!(
        "Loaded {} ({}x{}, {} clusters)",
        config.input.display(),
        field.width(),
        field.height(),
        field.cluster_count()
    );

    let out = &config.output;
    if out.write_matrices {
        let path = out.dir.join(format!("{stem}_original_mag.txt"));
        write_matrix(&field.initial_magnitudes(), &path)?;
    }

    let refiner = Refiner::new(config.refine.clone())?;
    let total = refiner.options().iterations;
    let report = refiner.run_with(&mut field, &color, |stats, field| -> CliResult<()> {
        let completed = stats.iteration + 1;
        info!(
            "iter {completed}/{total} ({:?}): mean change {:.5} rad",
            stats.policy, stats.mean_angle_change
        );
        if out.exports_after(completed, total) {
            export(field, out, &format!("{stem}_{completed}_iter"))?;
        }
        Ok(())
    })?;

    if let Some(last) = report.last() {
        info!(
            "final sweep: {} cells updated, max change {:.5} rad",
            last.updated_cells, last.max_angle_change
        );
    }
    if total == 0 {
        export(&field, out, &format!("{stem}_0_iter"))?;
    }
    if let Some(path) = &out.report_json {
        write_json_file(path, &report)?;
        info!("Report written to {}", path.display());
    }

    println!(
        "Refined {}x{} field in {} sweeps ({:.2} ms total)",
        field.width(),
        field.height(),
        report.sweeps.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

fn export(field: &OrientationField, out: &OutputConfig, name: &str) -> Result<(), String> {
    let image_path = out.dir.join(format!("{name}.png"));
    save_orientation_image(field, &image_path)?;
    save_gradient_image(field, &out.dir.join(format!("{name}_grad.png")))?;
    if out.write_matrices {
        write_matrix(field.angles(), &out.dir.join(format!("{name}_angle.txt")))?;
        write_matrix(field.magnitudes(), &out.dir.join(format!("{name}_mag.txt")))?;
    }
    info!("saved {}", image_path.display());
    Ok(())
}

fn file_stem(config: &RunConfig) -> Result<String, String> {
    config
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| format!("Input path {} has no file name", config.input.display()))
}

fn usage() -> String {
    "Usage: orient_refine <config.json>".to_string()
}
