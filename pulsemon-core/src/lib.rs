pub mod measurement;
pub mod series;

pub use measurement::Measurement;
pub use series::{SeriesBuffer, MAX_POINTS};
