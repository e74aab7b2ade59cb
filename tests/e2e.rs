mod common;

use common::synthetic_image::diagonal_stripes;
use orientation_refine::angle::angular_difference;
use orientation_refine::edges::scharr_gradients;
use orientation_refine::image::io::{load_rgb_image, save_rgb_image};
use orientation_refine::matrix::{format_matrix, load_cluster_labels, read_matrix};
use orientation_refine::prelude::*;
use std::f32::consts::FRAC_PI_4;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const SIZE: usize = 64;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("orient_refine_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Two clusters: left and right half of the image.
fn half_labels() -> ImageF32 {
    ImageF32::from_fn(SIZE, SIZE, |x, _| if x < SIZE / 2 { 3.0 } else { 9.0 })
}

fn assert_interior_diagonal(field: &OrientationField) {
    let margin = 20;
    for row in margin..SIZE - margin {
        for col in margin..SIZE - margin {
            let a = field.angle(row, col);
            assert!(
                angular_difference(a, -FRAC_PI_4) < 0.05,
                "cell ({row}, {col}) has orientation {a}"
            );
        }
    }
}

#[test]
fn striped_image_refines_to_stripe_orientation() {
    let _ = env_logger::builder().is_test(true).try_init();
    let color = diagonal_stripes(SIZE, SIZE, 8);
    let grad = scharr_gradients(&color.to_luma_f32());
    let labels = ClusterLabels::new(
        SIZE,
        SIZE,
        half_labels().data.iter().map(|&v| v as i64).collect(),
    )
    .unwrap();
    assert_eq!(labels.count(), 2);

    let mut field = OrientationField::from_grad(&grad, &labels).unwrap();
    let refiner = Refiner::new(RefineOptions {
        iterations: 6,
        phase_switch: 3,
        ..RefineOptions::default()
    })
    .unwrap();
    let report = refiner.run(&mut field, &color).unwrap();

    assert_eq!(report.sweeps.len(), 6);
    assert!(report.total_ms >= 0.0);
    assert_interior_diagonal(&field);
}

#[test]
fn cli_exports_on_schedule() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = scratch_dir("cli");
    let input = dir.join("stripes.png");
    save_rgb_image(&diagonal_stripes(SIZE, SIZE, 8), &input).unwrap();
    let clusters = dir.join("stripes_clusters.txt");
    fs::write(&clusters, format_matrix(&half_labels())).unwrap();
    assert_eq!(load_cluster_labels(&clusters).unwrap().count(), 2);

    let out = dir.join("out");
    let report = dir.join("report.json");
    let config = serde_json::json!({
        "input": input,
        "clusters": clusters,
        "refine": { "iterations": 6, "phase_switch": 3 },
        "output": {
            "dir": out,
            "save_every": 2,
            "write_matrices": true,
            "report_json": report,
        }
    });
    let config_path = dir.join("config.json");
    fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_orient_refine"))
        .arg(&config_path)
        .status()
        .unwrap();
    assert!(status.success());

    for i in [2, 4, 6] {
        for suffix in ["iter.png", "iter_grad.png", "iter_angle.txt", "iter_mag.txt"] {
            let path = out.join(format!("stripes_{i}_{suffix}"));
            assert!(path.exists(), "missing {}", path.display());
        }
    }
    for i in [1, 3, 5] {
        assert!(!out.join(format!("stripes_{i}_iter.png")).exists());
    }

    let original = read_matrix::<f32>(&out.join("stripes_original_mag.txt")).unwrap();
    assert_eq!((original.rows, original.cols), (SIZE, SIZE));
    assert!(original.data.iter().all(|&m| m >= 0.0));

    let angles = read_matrix::<f32>(&out.join("stripes_6_iter_angle.txt")).unwrap();
    assert_eq!(angles.data.len(), SIZE * SIZE);
    let center = angles.data[(SIZE / 2) * SIZE + SIZE / 2];
    assert!(angular_difference(center, -FRAC_PI_4) < 0.05, "center={center}");

    let hue = load_rgb_image(&out.join("stripes_6_iter.png")).unwrap();
    assert_eq!((hue.w, hue.h), (SIZE, SIZE));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    let sweeps = json["sweeps"].as_array().unwrap();
    assert_eq!(sweeps.len(), 6);
    assert_eq!(sweeps[2]["policy"], "strength_gated");
    assert_eq!(sweeps[3]["policy"], "unconstrained");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn cli_rejects_missing_config() {
    let output = Command::new(env!("CARGO_BIN_EXE_orient_refine"))
        .arg("/nonexistent/orient_refine_config.json")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "{stderr}");
}
