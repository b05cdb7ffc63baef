use crate::config::engine::EngineConfig;
use crate::core::buffer::PointBuffer;
use crate::core::matcher::Matcher;
use crate::core::metric::Metric;
use crate::core::normalizer::Normalizer;
use crate::core::store::{TemplateBuilder, TemplateStore};
use crate::domain::model::{Point, Recognition, Rejection, Template, TemplateId};
use crate::domain::ports::{StrokeMetric, StrokeSource};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Live-stroke ingestion, template registration and recognition behind one
/// API. Not synchronized: share one engine per input stream, or wrap it in
/// a mutex.
pub struct GestureEngine<M: StrokeMetric = Metric> {
    config: EngineConfig,
    buffer: PointBuffer,
    store: TemplateStore,
    matcher: Matcher<M>,
}

impl GestureEngine<Metric> {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let metric = Metric::from(config.metric);
        Self::with_metric(config, metric)
    }
}

impl<M: StrokeMetric> GestureEngine<M> {
    /// Builds an engine that scores strokes with a caller-supplied metric.
    /// `config.metric` is ignored.
    pub fn with_metric(config: EngineConfig, metric: M) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            "Creating gesture engine: N={}, side={}, threshold={:?}, orientation={:?}",
            config.resample_count,
            config.reference_square_side,
            config.match_threshold,
            config.orientation
        );

        Ok(Self {
            config,
            buffer: PointBuffer::new(),
            store: TemplateStore::new(Normalizer::new(&config)),
            matcher: Matcher::new(metric, config.match_threshold),
        })
    }

    pub fn define<S: StrokeSource>(&mut self, source: S) -> Result<TemplateId> {
        self.store.register(source)
    }

    /// 以逐點呼叫的方式定義手勢
    pub fn define_with<F>(&mut self, build: F) -> Result<TemplateId>
    where
        F: FnOnce(&mut TemplateBuilder),
    {
        let mut builder = TemplateBuilder::new();
        build(&mut builder);
        self.store.register(builder)
    }

    pub fn ingest(&mut self, x: impl Into<f64>, y: impl Into<f64>) -> Result<()> {
        let (x, y) = (x.into(), y.into());
        tracing::trace!("Ingest ({}, {})", x, y);
        self.buffer.add_point(x, y)
    }

    pub fn reset(&mut self) {
        tracing::trace!("Reset live stroke ({} points dropped)", self.buffer.size());
        self.buffer.clear();
    }

    /// Matches the current live stroke against every template. The live
    /// stroke is left as it is.
    pub fn recognize(&self) -> Recognition {
        if self.buffer.is_empty() {
            tracing::debug!("Recognize called with an empty live stroke");
            return Recognition::rejected(Rejection::EmptyStroke, f64::INFINITY);
        }

        let phases = self.store.normalizer().normalize_phases(self.buffer.points());
        tracing::trace!("Scoring {} phase variant(s)", phases.len());
        let result = self.matcher.best_match(&phases, self.store.all());

        match result.id {
            Some(id) => tracing::debug!(
                "Recognized template {} at distance {:.4} ({} live points, {} templates)",
                id,
                result.distance,
                self.buffer.size(),
                self.store.len()
            ),
            None => tracing::debug!(
                "No match: {:?} (best distance {:.4})",
                result.rejection,
                result.distance
            ),
        }
        result
    }

    pub fn live_points(&self) -> &[Point] {
        self.buffer.points()
    }

    pub fn live_len(&self) -> usize {
        self.buffer.size()
    }

    pub fn point_at(&self, index: usize) -> Result<Point> {
        self.buffer.point_at(index)
    }

    pub fn templates(&self) -> &[Template] {
        self.store.all()
    }

    pub fn template(&self, id: TemplateId) -> Option<&Template> {
        self.store.get(id)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
