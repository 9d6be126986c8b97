use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hull2::check::{closed, verify_hull};
use hull2::sample::{integer_grid, uniform_disk, uniform_square, ReplayToken};
use hull2::{convex_hull, graham_scan, jarvis_march, Algorithm, Coord, Point2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{read_points, write_points_csv, PointSet};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar convex hull runner")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point table (.csv or .parquet with columns x, y)
    Run {
        /// jarvis | graham
        #[arg(long, default_value = "graham")]
        algo: String,
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Turn a `run` output into scatter points plus a closed hull polyline
    Figure {
        #[arg(long)]
        from: String,
        #[arg(long)]
        out: String,
    },
    /// Hull the two built-in sample sets and print the closed hulls
    Demo,
    /// Write a seeded random point cloud as CSV
    Sample {
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// disk | square | grid
        #[arg(long, default_value = "disk")]
        shape: String,
        /// Radius, half-width, or grid half-extent depending on shape
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long)]
        out: String,
    },
}

/// Output of `run`: the input points and the open CCW hull.
#[derive(Serialize, Deserialize)]
struct HullDoc<C> {
    algo: String,
    exact: bool,
    points: Vec<[C; 2]>,
    hull: Vec<[C; 2]>,
}

/// Output of `figure`: what a plotting tool needs, nothing more.
#[derive(Serialize, Deserialize)]
struct FigureDoc {
    title: String,
    scatter: Vec<[f64; 2]>,
    polyline: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run { algo, input, out } => run(&algo, &input, &out),
        Action::Figure { from, out } => figure(&from, &out),
        Action::Demo => demo(),
        Action::Sample {
            n,
            seed,
            shape,
            scale,
            out,
        } => sample(n, seed, &shape, scale, &out),
    }
}

fn pairs<T: Coord>(points: &[Point2<T>]) -> Vec<[T; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn hull_doc<T: Coord>(points: &[Point2<T>], algo: Algorithm, exact: bool) -> Result<HullDoc<T>> {
    let hull = convex_hull(points, algo)?;
    verify_hull(points, &hull).context("computed hull failed verification")?;
    tracing::info!(n = points.len(), hull_len = hull.len(), %algo, exact, "hull");
    Ok(HullDoc {
        algo: algo.to_string(),
        exact,
        points: pairs(points),
        hull: pairs(&hull),
    })
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run(algo: &str, input: &str, out: &str) -> Result<()> {
    let algorithm: Algorithm = algo.parse()?;
    tracing::info!(algo, input, out, "run");
    let set = read_points(Path::new(input))?;
    tracing::debug!(rows = set.len(), exact = set.is_exact(), "input");
    let bytes = match &set {
        PointSet::Exact(pts) => serde_json::to_vec_pretty(&hull_doc(pts, algorithm, true)?)?,
        PointSet::Float(pts) => serde_json::to_vec_pretty(&hull_doc(pts, algorithm, false)?)?,
    };

    let out_path = Path::new(out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, bytes).with_context(|| format!("writing {out}"))?;

    let params = serde_json::json!({
        "algo": algorithm.name(),
        "input": input,
        "exact": set.is_exact(),
        "rows": set.len(),
    });
    provenance::write_sidecar(out_path, &params)?;
    Ok(())
}

fn figure(from: &str, out: &str) -> Result<()> {
    tracing::info!(from, out, "figure");
    let raw = std::fs::read(from).with_context(|| format!("reading {from}"))?;
    let doc: HullDoc<f64> =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {from}"))?;
    let hull: Vec<Point2<f64>> = doc.hull.iter().map(|[x, y]| Point2::new(*x, *y)).collect();
    let algorithm: Algorithm = doc.algo.parse()?;
    let title = match algorithm {
        Algorithm::JarvisMarch => "Jarvis march convex hull",
        Algorithm::GrahamScan => "Graham scan convex hull",
    };
    let fig = FigureDoc {
        title: title.to_string(),
        scatter: doc.points,
        polyline: pairs(&closed(&hull)),
    };

    let out_path = Path::new(out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, serde_json::to_vec_pretty(&fig)?)
        .with_context(|| format!("writing {out}"))?;
    provenance::write_sidecar(out_path, &serde_json::json!({ "from": from }))?;
    Ok(())
}

fn demo_sets() -> (Vec<Point2<i64>>, Vec<Point2<i64>>) {
    let jarvis: [(i64, i64); 9] = [(2, 2), (4, 3), (5, 4), (0, 3), (0, 2), (0, 0), (2, 1), (2, 0), (4, 0)];
    let graham: [(i64, i64); 8] = [(0, 3), (1, 1), (2, 2), (4, 4), (0, 0), (1, 2), (3, 1), (3, 3)];
    let to_points = |v: &[(i64, i64)]| -> Vec<Point2<i64>> {
        v.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    };
    (to_points(&jarvis), to_points(&graham))
}

fn demo_report() -> Result<serde_json::Value> {
    let (jarvis_points, graham_points) = demo_sets();
    let jarvis_hull = jarvis_march(&jarvis_points)?;
    let graham_hull = graham_scan(&graham_points)?;
    Ok(serde_json::json!({
        "jarvis": { "points": pairs(&jarvis_points), "hull": pairs(&closed(&jarvis_hull)) },
        "graham": { "points": pairs(&graham_points), "hull": pairs(&closed(&graham_hull)) },
    }))
}

fn demo() -> Result<()> {
    tracing::info!("demo");
    println!("{}", serde_json::to_string_pretty(&demo_report()?)?);
    Ok(())
}

fn sample(n: usize, seed: u64, shape: &str, scale: f64, out: &str) -> Result<()> {
    tracing::info!(n, seed, shape, scale, out, "sample");
    if !scale.is_finite() {
        bail!("--scale must be finite, got {scale}");
    }
    let tok = ReplayToken::new(seed, 0);
    let pts = match shape {
        "disk" => PointSet::Float(uniform_disk(n, scale, tok)),
        "square" => PointSet::Float(uniform_square(n, scale, tok)),
        "grid" => PointSet::Exact(integer_grid(n, scale.round() as i64, tok)),
        other => bail!("unknown shape {other:?} (expected disk, square or grid)"),
    };
    let out_path = Path::new(out);
    ensure_parent(out_path)?;
    write_points_csv(out_path, &pts)
}
