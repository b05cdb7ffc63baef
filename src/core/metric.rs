use crate::config::engine::MetricKind;
use crate::domain::model::Point;
use crate::domain::ports::StrokeMetric;

/// Built-in stroke distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Aligned,
    Warped,
}

impl From<MetricKind> for Metric {
    fn from(kind: MetricKind) -> Self {
        match kind {
            MetricKind::Aligned => Metric::Aligned,
            MetricKind::Warped => Metric::Warped,
        }
    }
}

impl StrokeMetric for Metric {
    fn distance(&self, live: &[Point], template: &[Point]) -> f64 {
        match self {
            Metric::Aligned => aligned_distance(live, template),
            Metric::Warped => warped_distance(live, template),
        }
    }
}

/// `(1/N) Σ |a[i] - b[i]|`. Strokes of different length never match.
pub fn aligned_distance(a: &[Point], b: &[Point]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return f64::INFINITY;
    }
    let total: f64 = a.iter().zip(b).map(|(p, q)| p.distance(q)).sum();
    total / a.len() as f64
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: f64,
    steps: usize,
}

impl Cell {
    const START: Cell = Cell {
        cost: 0.0,
        steps: 0,
    };
    const UNREACHED: Cell = Cell {
        cost: f64::INFINITY,
        steps: 0,
    };

    // 成本相同時取較短的路徑
    fn cheaper(self, other: Cell) -> Cell {
        if other.cost < self.cost || (other.cost == self.cost && other.steps < self.steps) {
            other
        } else {
            self
        }
    }
}

/// Dynamic time warping with Euclidean step cost, averaged over the length
/// of the cheapest monotone alignment path.
pub fn warped_distance(a: &[Point], b: &[Point]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }

    let m = b.len();
    let mut prev = vec![Cell::UNREACHED; m];
    let mut curr = vec![Cell::UNREACHED; m];

    for (i, p) in a.iter().enumerate() {
        for (j, q) in b.iter().enumerate() {
            let best = if i == 0 && j == 0 {
                Cell::START
            } else {
                let mut best = Cell::UNREACHED;
                if i > 0 {
                    best = best.cheaper(prev[j]);
                }
                if j > 0 {
                    best = best.cheaper(curr[j - 1]);
                }
                if i > 0 && j > 0 {
                    best = best.cheaper(prev[j - 1]);
                }
                best
            };
            curr[j] = Cell {
                cost: best.cost + p.distance(q),
                steps: best.steps + 1,
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let end = prev[m - 1];
    end.cost / end.steps as f64
}
