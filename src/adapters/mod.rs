// Adapters layer: turning files into points for the engine.

pub mod stroke_csv;

pub use stroke_csv::{read_stroke, read_stroke_file};
