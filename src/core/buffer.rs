use crate::domain::model::Point;
use crate::utils::error::{GestureError, Result};
use crate::utils::validation::validate_finite_point;

/// 初始容量，一般筆畫不需要再擴充
pub const INITIAL_CAPACITY: usize = 255;

/// Live stroke samples in arrival order.
#[derive(Debug, Clone)]
pub struct PointBuffer {
    points: Vec<Point>,
}

impl PointBuffer {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a sample. Non-finite coordinates are rejected and the buffer
    /// is left untouched.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<()> {
        validate_finite_point(x, y)?;
        self.points.push(Point::new(x, y));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point_at(&self, index: usize) -> Result<Point> {
        self.points
            .get(index)
            .copied()
            .ok_or(GestureError::OutOfRange {
                index,
                len: self.points.len(),
            })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Default for PointBuffer {
    fn default() -> Self {
        Self::new()
    }
}
