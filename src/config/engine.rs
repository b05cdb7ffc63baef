use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RESAMPLE_COUNT: usize = 64;
pub const DEFAULT_REFERENCE_SQUARE_SIDE: f64 = 1.0;
pub const DEFAULT_NARROW_AXIS_RATIO: f64 = 0.3;
pub const DEFAULT_LOOP_PHASES: usize = 8;
pub const DEFAULT_CLOSURE_RATIO: f64 = 0.2;

/// How the rotation step treats the stroke's starting direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Snap the indicative angle to the nearest multiple of 45°. Keeps
    /// left-to-right and right-to-left swipes apart.
    #[default]
    Sensitive,
    /// Rotate the indicative angle all the way to 0.
    Invariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Mean distance along the cheapest time-warped alignment.
    #[default]
    Warped,
    /// Mean distance between index-aligned points.
    Aligned,
}

/// Engine options. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub resample_count: usize,
    pub reference_square_side: f64,
    pub match_threshold: Option<f64>,
    pub orientation: Orientation,
    pub metric: MetricKind,
    pub narrow_axis_ratio: f64,
    /// Start points tried on a closed live stroke. 1 turns the search off.
    pub loop_phases: usize,
    /// A stroke whose ends are closer than this share of its bounding-box
    /// span counts as closed.
    pub closure_ratio: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resample_count: DEFAULT_RESAMPLE_COUNT,
            reference_square_side: DEFAULT_REFERENCE_SQUARE_SIDE,
            match_threshold: None,
            orientation: Orientation::default(),
            metric: MetricKind::default(),
            narrow_axis_ratio: DEFAULT_NARROW_AXIS_RATIO,
            loop_phases: DEFAULT_LOOP_PHASES,
            closure_ratio: DEFAULT_CLOSURE_RATIO,
        }
    }
}

impl EngineConfig {
    pub fn with_resample_count(mut self, resample_count: usize) -> Self {
        self.resample_count = resample_count;
        self
    }

    pub fn with_reference_square_side(mut self, side: f64) -> Self {
        self.reference_square_side = side;
        self
    }

    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = Some(threshold);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_metric(mut self, metric: MetricKind) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_narrow_axis_ratio(mut self, ratio: f64) -> Self {
        self.narrow_axis_ratio = ratio;
        self
    }

    pub fn with_loop_phases(mut self, phases: usize) -> Self {
        self.loop_phases = phases;
        self
    }

    pub fn with_closure_ratio(mut self, ratio: f64) -> Self {
        self.closure_ratio = ratio;
        self
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("resample_count", self.resample_count, 2)?;
        validation::validate_positive_float("reference_square_side", self.reference_square_side)?;
        if let Some(threshold) = self.match_threshold {
            validation::validate_non_negative_float("match_threshold", threshold)?;
        }
        validation::validate_range("narrow_axis_ratio", self.narrow_axis_ratio, 0.0, 1.0)?;
        validation::validate_positive_number("loop_phases", self.loop_phases, 1)?;
        validation::validate_range("closure_ratio", self.closure_ratio, 0.0, 1.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.resample_count, 64);
        assert_eq!(config.reference_square_side, 1.0);
        assert_eq!(config.match_threshold, None);
        assert_eq!(config.orientation, Orientation::Sensitive);
        assert_eq!(config.metric, MetricKind::Warped);
        assert_eq!(config.loop_phases, 8);
        assert_eq!(config.closure_ratio, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let base = EngineConfig::default();
        assert!(base.with_resample_count(1).validate().is_err());
        assert!(base.with_reference_square_side(0.0).validate().is_err());
        assert!(base.with_reference_square_side(f64::INFINITY).validate().is_err());
        assert!(base.with_match_threshold(-1.0).validate().is_err());
        assert!(base.with_match_threshold(f64::NAN).validate().is_err());
        assert!(base.with_narrow_axis_ratio(1.2).validate().is_err());
        assert!(base.with_loop_phases(0).validate().is_err());
        assert!(base.with_closure_ratio(-0.1).validate().is_err());
        assert!(base.with_match_threshold(0.0).validate().is_ok());
        assert!(base.with_loop_phases(1).validate().is_ok());
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let config: EngineConfig =
            toml::from_str("resample_count = 32\norientation = \"invariant\"").unwrap();
        assert_eq!(config.resample_count, 32);
        assert_eq!(config.orientation, Orientation::Invariant);
        assert_eq!(config.metric, MetricKind::Warped);
        assert_eq!(config.narrow_axis_ratio, DEFAULT_NARROW_AXIS_RATIO);
    }
}
