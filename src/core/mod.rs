//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod item;
pub mod rng;
pub mod scale;

// re-export frequently-used items for convenience
pub use color::{ColorScheme, SchemeDescriptor, SchemeRef, SchemeRegistry};
pub use config::{BarOptions, ColumnOptions, ColumnOptionsBuilder, LabelMode, Overline, Underline};
pub use constants::{GlyphRamp, HORIZONTAL, VERTICAL};
pub use error::{ConfigError, SparkError};
pub use item::{ColorTag, Item};
pub use scale::{Scale, normalize};
