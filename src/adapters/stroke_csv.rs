use crate::domain::model::Point;
use crate::utils::error::Result;
use crate::utils::validation::validate_finite_point;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Sample {
    x: f64,
    y: f64,
}

/// 讀取 `x,y` 標頭的 CSV 筆畫，每列一個取樣點
pub fn read_stroke<R: Read>(reader: R) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut points = Vec::new();
    for row in rdr.deserialize() {
        let sample: Sample = row?;
        validate_finite_point(sample.x, sample.y)?;
        points.push(Point::new(sample.x, sample.y));
    }
    Ok(points)
}

pub fn read_stroke_file<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let file = std::fs::File::open(&path)?;
    let points = read_stroke(file)?;
    tracing::debug!(
        "Read {} samples from {}",
        points.len(),
        path.as_ref().display()
    );
    Ok(points)
}
