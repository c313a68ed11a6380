//! Public-facing crate root – re-exports + one-shot helpers.
//!
//! Two chart kinds render into a [`Spark`], an ordered run of
//! `(style, glyph)` segments for a host text surface to draw:
//!
//! * **column**: one vertical block per value, height by magnitude;
//! * **bar**: a fixed number of cells split among values by share of the
//!   total, with two-tone partial cells where series meet.
//!
//! ```
//! use spark_widgets::{ColumnOptions, items, render_bar, render_column};
//!
//! let spark = render_column(&items(0..8), "mono".into(), &ColumnOptions::default())?;
//! assert_eq!(spark.text(), "▁▂▃▄▅▆▇█");
//!
//! let bar = render_bar(&items([40, 30, 20, 10]), 20, "rotate_true".into())?;
//! assert_eq!(bar.len(), 20);
//! # Ok::<(), spark_widgets::SparkError>(())
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use core::{
    color::{ColorScheme, Palette, RuleSpec, SchemeDescriptor, SchemeRef, SchemeRegistry},
    config::{BarOptions, ColumnOptions, ColumnOptionsBuilder, LabelMode, Overline, Underline},
    constants::{GlyphRamp, HORIZONTAL, VERTICAL},
    error::{ConfigError, SparkError},
    item::{ColorTag, Item, items},
    scale::normalize,
};

pub use render::{RenderedSegment, Renderer, Spark, Style};

/// Column chart against the builtin scheme registry.
pub fn render_column(
    items: &[Item],
    scheme: SchemeRef<'_>,
    options: &ColumnOptions,
) -> Result<Spark, SparkError> {
    Renderer::default().column(items, scheme, options)
}

/// Bar chart of exactly `width` cells against the builtin scheme registry.
pub fn render_bar(items: &[Item], width: usize, scheme: SchemeRef<'_>) -> Result<Spark, SparkError> {
    Renderer::default().bar(items, width, scheme)
}
