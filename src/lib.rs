pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{EngineConfig, MetricKind, Orientation, TomlConfig};
pub use crate::core::{engine::GestureEngine, metric::Metric, store::TemplateBuilder};
pub use crate::domain::model::{Point, Recognition, Rejection, TemplateId};
pub use crate::domain::ports::{StrokeMetric, StrokeSource};
pub use crate::utils::error::{GestureError, Result};
