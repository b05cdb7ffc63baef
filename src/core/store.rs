use crate::core::normalizer::Normalizer;
use crate::domain::model::{Point, Template, TemplateId};
use crate::domain::ports::StrokeSource;
use crate::utils::error::{GestureError, Result};
use crate::utils::validation::validate_finite_point;

/// Collects a template one point at a time.
///
/// ```
/// use stroke_gesture::TemplateBuilder;
///
/// let mut builder = TemplateBuilder::new();
/// builder.point(0.0, 0.0).point(1.0, 0.0);
/// assert_eq!(builder.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateBuilder {
    points: Vec<Point>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(&mut self, x: impl Into<f64>, y: impl Into<f64>) -> &mut Self {
        self.points.push(Point::new(x.into(), y.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn finish(self) -> Vec<Point> {
        self.points
    }
}

impl StrokeSource for TemplateBuilder {
    fn into_points(self) -> Vec<Point> {
        self.finish()
    }
}

/// Normalized templates in registration order.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    normalizer: Normalizer,
    templates: Vec<Template>,
    next_id: u64,
}

impl TemplateStore {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            templates: Vec::new(),
            next_id: 0,
        }
    }

    /// Validates and normalizes the raw stroke, then stores it under a fresh id.
    pub fn register<S: StrokeSource>(&mut self, source: S) -> Result<TemplateId> {
        let raw = source.into_points();
        if raw.is_empty() {
            return Err(GestureError::invalid_input("a template needs at least one point"));
        }
        for p in &raw {
            validate_finite_point(p.x, p.y)?;
        }

        let id = TemplateId(self.next_id);
        self.next_id += 1;
        let points = self.normalizer.normalize(&raw);
        self.templates.push(Template { id, points });

        tracing::debug!("Registered template {} from {} raw points", id, raw.len());
        Ok(id)
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    pub fn get(&self, id: TemplateId) -> Option<&Template> {
        // id 嚴格遞增，可以二分搜尋
        self.templates
            .binary_search_by_key(&id, |t| t.id)
            .ok()
            .map(|i| &self.templates[i])
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}
