use crate::domain::model::Point;

/// Anything that can hand over a raw stroke for template registration:
/// literal point lists, arrays of numeric pairs, or an incremental builder.
pub trait StrokeSource {
    fn into_points(self) -> Vec<Point>;
}

impl<P: Into<Point>> StrokeSource for Vec<P> {
    fn into_points(self) -> Vec<Point> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<P: Into<Point> + Copy> StrokeSource for &[P] {
    fn into_points(self) -> Vec<Point> {
        self.iter().map(|p| (*p).into()).collect()
    }
}

impl<P: Into<Point>, const N: usize> StrokeSource for [P; N] {
    fn into_points(self) -> Vec<Point> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<P: Into<Point> + Copy, const N: usize> StrokeSource for &[P; N] {
    fn into_points(self) -> Vec<Point> {
        self.iter().map(|p| (*p).into()).collect()
    }
}

/// Distance between two normalized strokes. Lower is more similar.
pub trait StrokeMetric {
    fn distance(&self, live: &[Point], template: &[Point]) -> f64;
}
