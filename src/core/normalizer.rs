//! Stroke normalization: trim repeated laps, resample, rotate, scale,
//! translate.
//!
//! Two strokes that went through the same [`Normalizer`] can be compared point
//! by point regardless of where they were drawn, how large they were, or how
//! densely they were sampled.

use crate::config::engine::{EngineConfig, Orientation};
use crate::domain::model::{NormalizedStroke, Point};
use std::f64::consts::{FRAC_PI_4, FRAC_PI_8, PI, TAU};

/// Path lengths and spans at or below this are treated as zero.
pub const EPSILON: f64 = 1e-9;

/// Samples closer to the bounding-box centre than this share of the span do
/// not count towards the turn.
const LAP_CORE_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    resample_count: usize,
    square_side: f64,
    orientation: Orientation,
    narrow_axis_ratio: f64,
    loop_phases: usize,
    closure_ratio: f64,
}

impl Normalizer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            resample_count: config.resample_count,
            square_side: config.reference_square_side,
            orientation: config.orientation,
            narrow_axis_ratio: config.narrow_axis_ratio,
            loop_phases: config.loop_phases,
            closure_ratio: config.closure_ratio,
        }
    }

    pub fn resample_count(&self) -> usize {
        self.resample_count
    }

    pub fn normalize(&self, raw: &[Point]) -> NormalizedStroke {
        let points = resample(&trim_to_first_turn(raw), self.resample_count);
        self.fit(&points)
    }

    /// Normalizes a live stroke. A closed stroke has no natural start, so it
    /// comes back once per start phase; any other stroke comes back once.
    pub fn normalize_phases(&self, raw: &[Point]) -> Vec<NormalizedStroke> {
        let points = resample(&trim_to_first_turn(raw), self.resample_count);
        if self.loop_phases < 2 || !is_closed(&points, self.closure_ratio) {
            return vec![self.fit(&points)];
        }

        // 最後一點與起點重合，先去掉再輪轉
        let ring = &points[..points.len() - 1];
        (0..self.loop_phases)
            .map(|k| {
                let start = k * ring.len() / self.loop_phases;
                let mut shifted = Vec::with_capacity(points.len());
                shifted.extend_from_slice(&ring[start..]);
                shifted.extend_from_slice(&ring[..start]);
                shifted.push(ring[start]);
                self.fit(&shifted)
            })
            .collect()
    }

    fn fit(&self, resampled: &[Point]) -> NormalizedStroke {
        let points = rotate_to_orientation(resampled, self.orientation);
        let points = scale_to_square(&points, self.square_side, self.narrow_axis_ratio);
        let points = translate_to_origin(&points);
        NormalizedStroke::from_normalized(points)
    }
}

pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ORIGIN;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Angle from the centroid to the first point, in radians.
pub fn indicative_angle(points: &[Point]) -> f64 {
    match points.first() {
        Some(first) => {
            let c = centroid(points);
            (first.y - c.y).atan2(first.x - c.x)
        }
        None => 0.0,
    }
}

fn wrap_angle(mut radians: f64) -> f64 {
    while radians > PI {
        radians -= TAU;
    }
    while radians <= -PI {
        radians += TAU;
    }
    radians
}

/// Cuts a stroke that winds around its bounding-box centre more than once
/// at the point where the first full turn completes. Later laps only retrace
/// the shape.
pub fn trim_to_first_turn(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let (min, max) = bounding_box(points);
    let span = (max.x - min.x).max(max.y - min.y);
    if span <= EPSILON {
        return points.to_vec();
    }
    let center = Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
    let core = LAP_CORE_RATIO * span;

    let mut turned = 0.0_f64;
    let mut last: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        if p.distance(&center) < core {
            continue;
        }
        let angle = (p.y - center.y).atan2(p.x - center.x);
        if let Some((j, last_angle)) = last {
            let step = wrap_angle(angle - last_angle);
            if (turned + step).abs() >= TAU {
                let t = (TAU - turned.abs()) / step.abs();
                let mut lap = points[..=j].to_vec();
                lap.push(points[j].lerp(p, t));
                return lap;
            }
            turned += step;
        }
        last = Some((i, angle));
    }
    points.to_vec()
}

/// True when the stroke ends within `ratio` of its bounding-box span from
/// where it started.
pub fn is_closed(points: &[Point], ratio: f64) -> bool {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };
    let (min, max) = bounding_box(points);
    let span = (max.x - min.x).max(max.y - min.y);
    span > EPSILON && first.distance(last) <= ratio * span
}

/// Emits `n` points at equal arc-length spacing along the path.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let first = match points.first() {
        Some(p) => *p,
        None => return vec![Point::ORIGIN; n],
    };
    let total = path_length(points);
    if points.len() < 2 || total <= EPSILON || n < 2 {
        return vec![first; n];
    }

    let interval = total / (n - 1) as f64;
    let mut resampled = Vec::with_capacity(n);
    resampled.push(first);

    // prev 可能是剛插入的內插點，不一定是原始取樣點
    let mut prev = first;
    let mut acc = 0.0;
    let mut i = 1;
    while i < points.len() && resampled.len() < n - 1 {
        let current = points[i];
        let d = prev.distance(&current);
        if d > 0.0 && acc + d >= interval {
            let q = prev.lerp(&current, ((interval - acc) / d).max(0.0));
            // 座標太大、間距小於浮點精度時內插不會前進，直接跳到下一個取樣點
            if q != prev {
                resampled.push(q);
                prev = q;
                acc = 0.0;
                continue;
            }
        }
        acc += d;
        prev = current;
        i += 1;
    }

    let last = points[points.len() - 1];
    while resampled.len() < n {
        resampled.push(last);
    }
    resampled
}

pub fn rotate_by(points: &[Point], radians: f64) -> Vec<Point> {
    let c = centroid(points);
    let (sin, cos) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - c.x;
            let dy = p.y - c.y;
            Point::new(dx * cos - dy * sin + c.x, dx * sin + dy * cos + c.y)
        })
        .collect()
}

fn rotate_to_orientation(points: &[Point], orientation: Orientation) -> Vec<Point> {
    let angle = indicative_angle(points);
    let delta = match orientation {
        Orientation::Invariant => -angle,
        Orientation::Sensitive => {
            let base = FRAC_PI_4 * ((angle + FRAC_PI_8) / FRAC_PI_4).floor();
            base - angle
        }
    };
    rotate_by(points, delta)
}

/// Axis-aligned bounding box as `(min, max)`.
pub fn bounding_box(points: &[Point]) -> (Point, Point) {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}

/// Non-uniform scale onto a `side × side` square. A zero-span axis keeps
/// factor 1.0; an axis narrower than `narrow_ratio` of the wider one follows
/// the wider axis's factor.
pub fn scale_to_square(points: &[Point], side: f64, narrow_ratio: f64) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let (min, max) = bounding_box(points);
    let width = max.x - min.x;
    let height = max.y - min.y;
    let widest = width.max(height);
    if widest <= EPSILON {
        return points.to_vec();
    }

    let uniform = side / widest;
    let axis_factor = |span: f64| {
        if span > EPSILON && span >= narrow_ratio * widest {
            side / span
        } else if narrow_ratio > 0.0 {
            uniform
        } else {
            1.0
        }
    };
    let sx = axis_factor(width);
    let sy = axis_factor(height);

    points.iter().map(|p| Point::new(p.x * sx, p.y * sy)).collect()
}

pub fn translate_to_origin(points: &[Point]) -> Vec<Point> {
    let c = centroid(points);
    points.iter().map(|p| Point::new(p.x - c.x, p.y - c.y)).collect()
}
