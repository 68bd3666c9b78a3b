pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod array;
pub mod float_eq;
pub mod geometry;
pub mod layout_metrics;
