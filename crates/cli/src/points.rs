//! Point-set tables: read `x`,`y` columns from CSV or Parquet, write CSV.

use anyhow::{anyhow, bail, Context, Result};
use hull2::Point2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Points as loaded from a table. Integer columns stay exact.
#[derive(Clone, Debug, PartialEq)]
pub enum PointSet {
    Exact(Vec<Point2<i64>>),
    Float(Vec<Point2<f64>>),
}

impl PointSet {
    pub fn len(&self) -> usize {
        match self {
            PointSet::Exact(p) => p.len(),
            PointSet::Float(p) => p.len(),
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, PointSet::Exact(_))
    }
}

fn load_frame(path: &Path) -> Result<DataFrame> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(None)
            .finish()?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => bail!("{}: expected a .csv or .parquet file", path.display()),
    };
    Ok(lf.select([col("x"), col("y")]).collect()?)
}

/// Read columns `x` and `y`. Both integer ⇒ `Exact`, otherwise `Float`.
pub fn read_points(path: &Path) -> Result<PointSet> {
    let df = load_frame(path).with_context(|| format!("reading points from {}", path.display()))?;
    let x = df.column("x")?;
    let y = df.column("y")?;
    if x.dtype().is_integer() && y.dtype().is_integer() {
        let xs = x.cast(&DataType::Int64)?;
        let ys = y.cast(&DataType::Int64)?;
        let pts = collect_rows(xs.i64()?.into_iter().zip(ys.i64()?.into_iter()))?;
        if let Some(i) = pts.iter().position(|p| !within_exact_range(p)) {
            bail!("row {i}: coordinate exceeds exact range (|c| < 2^62)");
        }
        Ok(PointSet::Exact(pts))
    } else {
        let xs = x.cast(&DataType::Float64)?;
        let ys = y.cast(&DataType::Float64)?;
        let pts = collect_rows(xs.f64()?.into_iter().zip(ys.f64()?.into_iter()))?;
        Ok(PointSet::Float(pts))
    }
}

/// Orientation of `i64` points stays inside `i128` only below this bound.
const EXACT_LIMIT: u64 = 1 << 62;

fn within_exact_range(p: &Point2<i64>) -> bool {
    p.x.unsigned_abs() < EXACT_LIMIT && p.y.unsigned_abs() < EXACT_LIMIT
}

fn collect_rows<T, I>(rows: I) -> Result<Vec<Point2<T>>>
where
    T: hull2::Coord,
    I: Iterator<Item = (Option<T>, Option<T>)>,
{
    rows.enumerate()
        .map(|(i, row)| match row {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => Err(anyhow!("row {i}: missing coordinate")),
        })
        .collect()
}

/// Write `x`,`y` columns as CSV with a header; integer sets stay integer.
pub fn write_points_csv(path: &Path, points: &PointSet) -> Result<()> {
    let mut df = match points {
        PointSet::Exact(p) => df!(
            "x" => p.iter().map(|p| p.x).collect::<Vec<i64>>(),
            "y" => p.iter().map(|p| p.y).collect::<Vec<i64>>()
        )?,
        PointSet::Float(p) => df!(
            "x" => p.iter().map(|p| p.x).collect::<Vec<f64>>(),
            "y" => p.iter().map(|p| p.y).collect::<Vec<f64>>()
        )?,
    };
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}
