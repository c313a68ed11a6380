//! Stacked horizontal bar: a fixed run of cells shared out among items.
//!
//! ### Workflow
//! 1. Items whose value is below one cell's worth (`total / width`) are
//!    dropped one at a time, recomputing the cell value after each removal.
//!    Each pass rescans the list, so the worst case is quadratic in the item
//!    count.
//! 2. Survivors take their colors in list order.
//! 3. The walk tracks the value position of the last emitted cell.  When an
//!    item ends mid-cell the remainder (`carry`) is drawn at the start of the
//!    next item as a two-tone partial block, `prev:current`.
//!
//! The result always holds exactly `width` cells.

use tracing::{debug_span, trace};
use unicode_width::UnicodeWidthChar;

use crate::{
    core::{
        color::{ColorScheme, contrasting_label},
        config::{BarOptions, LabelMode},
        constants::{CARRY_EPSILON, HORIZONTAL},
        error::SparkError,
        item::{ColorTag, Item},
    },
    render::{
        column::finite_values,
        segment::{RenderedSegment, Spark, Style},
    },
};

/// Render `items` into exactly `width` cells.
pub fn render_bar(
    items: &[Item],
    width: usize,
    scheme: &mut ColorScheme,
) -> Result<Spark, SparkError> {
    render_bar_with(items, width, scheme, &BarOptions::default())
}

/// [`render_bar`] with label drawing.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn render_bar_with(
    items: &[Item],
    width: usize,
    scheme: &mut ColorScheme,
    options: &BarOptions,
) -> Result<Spark, SparkError> {
    if width == 0 {
        return Err(SparkError::InvalidWidth);
    }
    let values = finite_values(items)?;
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Err(SparkError::InvalidTotal(total));
    }

    let _span = debug_span!("render_bar", items = items.len(), width, total).entered();

    let kept = drop_unrenderable(items, width);
    if kept.is_empty() {
        return Ok(Spark::default());
    }
    let total: f64 = kept.iter().map(|i| i.value()).sum();
    let cell = total / width as f64;
    let levels = HORIZONTAL.len() as f64;

    let colors: Vec<Option<ColorTag>> = kept
        .iter()
        .map(|i| i.color().cloned().or_else(|| scheme.color_for(i.value())))
        .collect();

    let mut out = Vec::with_capacity(width + 1);
    let mut runs = Vec::with_capacity(kept.len());
    let mut carry = 0.0;
    let mut prev: Option<&ColorTag> = None;

    for (item, color) in kept.iter().zip(&colors) {
        let color = color.as_ref();
        let end = out.len() as f64 * cell + item.value() + carry;

        if carry > cell * CARRY_EPSILON {
            let level = (carry / cell * levels).floor() as usize;
            out.push(RenderedSegment::new(
                Style::boundary(prev, color),
                HORIZONTAL.glyph(level),
            ));
        }

        let full = ((end - out.len() as f64 * cell) / cell).round().max(0.0) as usize;
        let start = out.len();
        let solid = RenderedSegment::new(Style::solid(color), HORIZONTAL.top());
        out.extend(std::iter::repeat_n(solid, full));
        runs.push(start..out.len());

        carry = end - out.len() as f64 * cell;
        prev = color;
    }

    if out.len() != width {
        trace!(emitted = out.len(), width, "adjusting bar to width");
        out.resize(
            width,
            RenderedSegment::new(Style::solid(prev), HORIZONTAL.top()),
        );
    }

    if options.labels != LabelMode::Hidden {
        for ((item, color), run) in kept.iter().zip(&colors).zip(runs) {
            if let Some(template) = item.label() {
                let text = format_label(template, item.value(), total);
                draw_label(&mut out, run, &text, color.as_ref(), &options.labels);
            }
        }
    }

    Ok(Spark::from_segments(out))
}

/// Repeatedly remove the first item worth less than one cell.
fn drop_unrenderable(items: &[Item], width: usize) -> Vec<&Item> {
    #[allow(clippy::cast_precision_loss)]
    let width = width as f64;
    let mut kept: Vec<&Item> = items.iter().collect();
    loop {
        let total: f64 = kept.iter().map(|i| i.value()).sum();
        let cell = total / width;
        let Some(pos) = kept.iter().position(|i| i.value() < cell) else {
            break;
        };
        let gone = kept.remove(pos);
        trace!(value = gone.value(), cell, "dropping item too small to draw");
    }
    kept
}

/// Expand `{value}` and `{pct}` in a label template.
fn format_label(template: &str, value: f64, total: f64) -> String {
    template
        .replace("{value}", &value.to_string())
        .replace("{pct}", &format!("{:.0}", value / total * 100.0))
}

/// Center `text` on the solid cells of `run`; skipped when it does not fit.
///
/// Fit is measured in terminal columns.  A wide character takes its cell
/// plus an empty continuation cell, and a zero-width one joins the glyph
/// before it.
fn draw_label(
    out: &mut [RenderedSegment],
    run: std::ops::Range<usize>,
    text: &str,
    color: Option<&ColorTag>,
    mode: &LabelMode,
) {
    let run = run.start..run.end.min(out.len());
    let cols: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if cols == 0 || cols > run.len() {
        return;
    }
    let bg = color.cloned().unwrap_or_else(ColorTag::default_tag);
    let fg = match mode {
        LabelMode::Hidden => return,
        LabelMode::Fixed(tag) => tag.clone(),
        LabelMode::Contrast => contrasting_label(bg.as_str()).into(),
    };
    let style = Style::Split { fg, bg };
    let start = run.start + (run.len() - cols) / 2;
    let mut at = start;
    for ch in text.chars() {
        match ch.width().unwrap_or(0) {
            0 if at > start => out[at - 1].glyph.push(ch),
            0 => {}
            w => {
                out[at] = RenderedSegment::new(style.clone(), ch.to_string());
                for cell in &mut out[at + 1..at + w] {
                    *cell = RenderedSegment::new(style.clone(), String::new());
                }
                at += w;
            }
        }
    }
}
