use crate::core::metric::Metric;
use crate::domain::model::{NormalizedStroke, Recognition, Rejection, Template, TemplateId};
use crate::domain::ports::StrokeMetric;

/// Nearest-template search with an optional rejection threshold.
#[derive(Debug, Clone)]
pub struct Matcher<M: StrokeMetric = Metric> {
    metric: M,
    threshold: Option<f64>,
}

impl<M: StrokeMetric> Matcher<M> {
    pub fn new(metric: M, threshold: Option<f64>) -> Self {
        Self { metric, threshold }
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Scores every template and keeps the closest one. A template's score is
    /// its smallest distance over the stroke's phase variants. Equal distances
    /// go to the lower id.
    pub fn best_match<'a, I>(&self, phases: &[NormalizedStroke], templates: I) -> Recognition
    where
        I: IntoIterator<Item = &'a Template>,
    {
        if phases.is_empty() {
            return Recognition::rejected(Rejection::EmptyStroke, f64::INFINITY);
        }

        let mut best: Option<(TemplateId, f64)> = None;
        for template in templates {
            let d = phases
                .iter()
                .map(|live| self.metric.distance(live.points(), template.points.points()))
                .fold(f64::INFINITY, f64::min);
            let better = match best {
                None => true,
                Some((best_id, best_d)) => d < best_d || (d == best_d && template.id < best_id),
            };
            if better {
                best = Some((template.id, d));
            }
        }

        match best {
            None => Recognition::rejected(Rejection::EmptyStore, f64::INFINITY),
            Some((_, d)) if self.threshold.is_some_and(|t| d > t) => {
                Recognition::rejected(Rejection::AboveThreshold, d)
            }
            Some((id, d)) => Recognition::matched(id, d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Point;

    fn template(id: u64, points: &[(f64, f64)]) -> Template {
        Template {
            id: TemplateId(id),
            points: NormalizedStroke::from_normalized(points.iter().map(|&p| p.into()).collect()),
        }
    }

    fn stroke(points: &[(f64, f64)]) -> NormalizedStroke {
        NormalizedStroke::from_normalized(points.iter().map(|&p| Point::from(p)).collect())
    }

    #[test]
    fn test_picks_nearest_template() {
        let templates = vec![
            template(0, &[(0.0, 0.0), (1.0, 0.0)]),
            template(1, &[(0.0, 0.0), (0.0, 1.0)]),
        ];
        let matcher = Matcher::new(Metric::Aligned, None);
        let result = matcher.best_match(&[stroke(&[(0.0, 0.0), (0.1, 0.9)])], &templates);
        assert_eq!(result.id, Some(TemplateId(1)));
        assert!(result.distance < 0.2);
    }

    #[test]
    fn test_ties_go_to_lowest_id() {
        let templates = vec![
            template(3, &[(0.0, 0.0), (1.0, 0.0)]),
            template(1, &[(0.0, 0.0), (1.0, 0.0)]),
            template(2, &[(0.0, 0.0), (1.0, 0.0)]),
        ];
        let matcher = Matcher::new(Metric::Warped, None);
        let result = matcher.best_match(&[stroke(&[(0.0, 0.0), (1.0, 0.0)])], &templates);
        assert_eq!(result.id, Some(TemplateId(1)));
        assert_eq!(result.distance, 0.0);
    }

    #[test]
    fn test_empty_store() {
        let matcher = Matcher::new(Metric::Warped, Some(1.0));
        let none: Vec<Template> = Vec::new();
        let result = matcher.best_match(&[stroke(&[(0.0, 0.0)])], &none);
        assert_eq!(result, Recognition::rejected(Rejection::EmptyStore, f64::INFINITY));
    }

    #[test]
    fn test_threshold_rejects_distant_best_match() {
        let templates = vec![template(0, &[(0.0, 0.0), (1.0, 0.0)])];
        let live = stroke(&[(0.0, 0.5), (1.0, 0.5)]);

        let strict = Matcher::new(Metric::Aligned, Some(0.25));
        let result = strict.best_match(std::slice::from_ref(&live), &templates);
        assert_eq!(result.id, None);
        assert_eq!(result.rejection, Some(Rejection::AboveThreshold));
        assert_eq!(result.distance, 0.5);

        // 距離剛好等於門檻仍算命中
        let lenient = Matcher::new(Metric::Aligned, Some(0.5));
        let result = lenient.best_match(std::slice::from_ref(&live), &templates);
        assert_eq!(result.id, Some(TemplateId(0)));

        let unset = Matcher::new(Metric::Aligned, None);
        let result = unset.best_match(std::slice::from_ref(&live), &templates);
        assert_eq!(result.id, Some(TemplateId(0)));
    }

    #[test]
    fn test_custom_metric() {
        struct Constant(f64);
        impl StrokeMetric for Constant {
            fn distance(&self, _live: &[Point], _template: &[Point]) -> f64 {
                self.0
            }
        }

        let templates = vec![template(4, &[(0.0, 0.0)]), template(5, &[(9.0, 9.0)])];
        let matcher = Matcher::new(Constant(0.7), None);
        let result = matcher.best_match(&[stroke(&[(0.0, 0.0)])], &templates);
        assert_eq!(result, Recognition::matched(TemplateId(4), 0.7));
    }

    #[test]
    fn test_each_template_scores_its_closest_phase() {
        let templates = vec![
            template(0, &[(0.0, 0.0), (1.0, 0.0)]),
            template(1, &[(0.0, 1.0), (0.0, 0.0)]),
        ];
        let phases = [
            stroke(&[(0.0, 0.0), (0.0, 1.0)]),
            stroke(&[(0.0, 1.0), (0.0, 0.1)]),
        ];
        let matcher = Matcher::new(Metric::Aligned, None);
        let result = matcher.best_match(&phases, &templates);
        assert_eq!(result.id, Some(TemplateId(1)));
        assert!((result.distance - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_no_phases_is_an_empty_stroke() {
        let templates = vec![template(0, &[(0.0, 0.0), (1.0, 0.0)])];
        let matcher = Matcher::new(Metric::Warped, None);
        let result = matcher.best_match(&[], &templates);
        assert_eq!(result, Recognition::rejected(Rejection::EmptyStroke, f64::INFINITY));
    }
}
