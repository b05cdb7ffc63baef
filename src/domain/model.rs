use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// 線性內插：t = 0 得到 self，t = 1 得到 other
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(f64::from(x), f64::from(y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(f64::from(x), f64::from(y))
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Point::new(f64::from(x), f64::from(y))
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

/// Opaque identity of a registered template. Allocated sequentially by the
/// template store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub u64);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A stroke after the normalization pipeline: fixed length, centred on the
/// origin, fit to the reference square. Only the normalizer builds these.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStroke {
    points: Vec<Point>,
}

impl NormalizedStroke {
    pub(crate) fn from_normalized(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: TemplateId,
    pub points: NormalizedStroke,
}

/// Why a recognition produced no template id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    EmptyStore,
    EmptyStroke,
    AboveThreshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recognition {
    pub id: Option<TemplateId>,
    pub distance: f64,
    pub rejection: Option<Rejection>,
}

impl Recognition {
    pub fn matched(id: TemplateId, distance: f64) -> Self {
        Self {
            id: Some(id),
            distance,
            rejection: None,
        }
    }

    pub fn rejected(rejection: Rejection, distance: f64) -> Self {
        Self {
            id: None,
            distance,
            rejection: Some(rejection),
        }
    }

    pub fn is_match(&self) -> bool {
        self.id.is_some()
    }
}
