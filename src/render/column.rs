//! Column sparkline: one vertical-block glyph per item.

use tracing::debug_span;

use crate::{
    core::{
        color::ColorScheme,
        config::{ColumnOptions, Overline, Underline},
        constants::{BELOW_BASELINE, MAX_MARK, MIN_MARK, VERTICAL},
        error::SparkError,
        item::Item,
        scale::{Scale, extrema},
    },
    render::segment::{RenderedSegment, Spark, Style},
};

/// Render `items` as a column chart.
///
/// Items without an explicit color take one from `scheme`, in input order;
/// a rotating scheme advances exactly once per such item.
#[allow(clippy::float_cmp)]
pub fn render_column(
    items: &[Item],
    scheme: &mut ColorScheme,
    options: &ColumnOptions,
) -> Result<Spark, SparkError> {
    if items.is_empty() {
        return Err(SparkError::EmptyInput);
    }
    let values = finite_values(items)?;
    let (v_min, v_max) = extrema(&values);

    let _span = debug_span!(
        "render_column",
        items = items.len(),
        min = v_min,
        max = v_max,
        range_min = options.range_min,
        range_max = options.range_max,
    )
    .entered();

    let scale = Scale::detect(&values, options.range_min, options.range_max)?;

    let segments = items
        .iter()
        .zip(values)
        .map(|(item, value)| {
            let color = item.color().cloned().or_else(|| scheme.color_for(value));

            let glyph = if options.underline == Underline::Negative && value < 0.0 {
                BELOW_BASELINE.to_owned()
            } else {
                let mut g = String::with_capacity(8);
                g.push(VERTICAL.glyph(scale.index(value, VERTICAL.len())));
                if options.underline == Underline::Min && value == v_min {
                    g.push(MIN_MARK);
                }
                if options.overline == Overline::Max && value == v_max {
                    g.push(MAX_MARK);
                }
                g
            };
            RenderedSegment::new(Style::from_color(color), glyph)
        })
        .collect();

    Ok(Spark::from_segments(segments))
}

/// Item values, rejecting NaN and infinities.
pub(crate) fn finite_values(items: &[Item]) -> Result<Vec<f64>, SparkError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let v = item.value();
            if v.is_finite() {
                Ok(v)
            } else {
                Err(SparkError::NonFiniteValue { index })
            }
        })
        .collect()
}
