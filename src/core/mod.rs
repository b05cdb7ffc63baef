pub mod buffer;
pub mod engine;
pub mod matcher;
pub mod metric;
pub mod normalizer;
pub mod store;

pub use crate::domain::model::{NormalizedStroke, Point, Recognition, Rejection, Template, TemplateId};
pub use crate::domain::ports::{StrokeMetric, StrokeSource};
pub use crate::utils::error::Result;
