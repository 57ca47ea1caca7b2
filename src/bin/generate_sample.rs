use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Write demo two-column datasets for the scatter service.
#[derive(Parser, Debug)]
#[command(about = "Generate sample x,y CSV datasets")]
struct Args {
    /// Directory the CSV files are written into.
    #[arg(default_value = "data")]
    out_dir: PathBuf,

    /// Seed for reproducible output.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Normal sample via the Box-Muller transform.
fn gauss(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-15);
    let u2: f64 = rng.random();
    mean + std_dev * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Points scattered around `y = slope * x + intercept`.
fn linear_cloud(
    rng: &mut impl Rng,
    n: usize,
    slope: f64,
    intercept: f64,
    noise: f64,
) -> Vec<(f64, f64)> {
    (0..n)
        .map(|_| {
            let x = rng.random_range(0.0..100.0);
            (x, slope * x + intercept + gauss(rng, 0.0, noise))
        })
        .collect()
}

/// Gaussian blobs around each `(cx, cy)` centre.
fn clusters(
    rng: &mut impl Rng,
    per_cluster: usize,
    centres: &[(f64, f64)],
    spread: f64,
) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(per_cluster * centres.len());
    for &(cx, cy) in centres {
        for _ in 0..per_cluster {
            points.push((gauss(rng, cx, spread), gauss(rng, cy, spread)));
        }
    }
    points
}

fn write_csv(path: &Path, points: &[(f64, f64)]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["x", "y"])?;
    for (x, y) in points {
        writer.write_record([format!("{x:.4}"), format!("{y:.4}")])?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut rng = StdRng::seed_from_u64(args.seed);

    let samples = [
        ("linear.csv", linear_cloud(&mut rng, 200, 0.8, 5.0, 6.0)),
        (
            "clusters.csv",
            clusters(&mut rng, 80, &[(20.0, 20.0), (60.0, 70.0), (80.0, 25.0)], 5.0),
        ),
    ];

    for (name, points) in &samples {
        let path = args.out_dir.join(name);
        write_csv(&path, points)?;
        println!("Wrote {} points to {}", points.len(), path.display());
    }
    Ok(())
}
