//! Styled glyph output handed to the host surface.

use std::ops::Deref;

use crate::core::item::ColorTag;

/// Attribute of one rendered cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Style {
    /// No coloring.
    Plain,
    Fg(ColorTag),
    /// Two-tone cell: glyph ink `fg`, remainder `bg`.
    Split { fg: ColorTag, bg: ColorTag },
}

impl Style {
    #[inline]
    #[must_use]
    pub fn from_color(color: Option<ColorTag>) -> Self {
        color.map_or(Self::Plain, Self::Fg)
    }

    /// A full bar cell of one series.
    #[must_use]
    pub fn solid(color: Option<&ColorTag>) -> Self {
        match color {
            Some(c) => Self::Split {
                fg: c.clone(),
                bg: c.clone(),
            },
            None => Self::Plain,
        }
    }

    /// A bar cell straddled by `prev` (left, ink) and `cur` (right, paper).
    ///
    /// A missing side falls back to the `default` tag.
    #[must_use]
    pub fn boundary(prev: Option<&ColorTag>, cur: Option<&ColorTag>) -> Self {
        match (prev, cur) {
            (None, None) => Self::Plain,
            (p, c) => Self::Split {
                fg: p.cloned().unwrap_or_else(ColorTag::default_tag),
                bg: c.cloned().unwrap_or_else(ColorTag::default_tag),
            },
        }
    }

    /// The attribute as the host sees it: none, `"tag"` or `"fg:bg"`.
    #[must_use]
    pub fn attr(&self) -> Option<ColorTag> {
        match self {
            Self::Plain => None,
            Self::Fg(c) => Some(c.clone()),
            Self::Split { fg, bg } => Some(ColorTag::composite(fg, bg)),
        }
    }
}

/// One output cell: a style plus its glyph (possibly with combining marks).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSegment {
    pub style: Style,
    pub glyph: String,
}

impl RenderedSegment {
    #[inline]
    pub fn new(style: Style, glyph: impl Into<String>) -> Self {
        Self {
            style,
            glyph: glyph.into(),
        }
    }
}

/// Finished chart: an ordered, immutable run of segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spark {
    segments: Vec<RenderedSegment>,
}

impl Spark {
    pub(crate) fn from_segments(segments: Vec<RenderedSegment>) -> Self {
        Self { segments }
    }

    /// Glyphs only, styles dropped.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.glyph.as_str()).collect()
    }

    /// `(attribute, glyph)` pairs in display order.
    pub fn pairs(&self) -> impl Iterator<Item = (Option<ColorTag>, &str)> {
        self.segments.iter().map(|s| (s.style.attr(), s.glyph.as_str()))
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<RenderedSegment> {
        self.segments
    }
}

impl Deref for Spark {
    type Target = [RenderedSegment];

    fn deref(&self) -> &Self::Target {
        &self.segments
    }
}

impl<'a> IntoIterator for &'a Spark {
    type Item = &'a RenderedSegment;
    type IntoIter = std::slice::Iter<'a, RenderedSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attrs() {
        let red = ColorTag::from("red");
        assert_eq!(Style::Plain.attr(), None);
        assert_eq!(Style::Fg(red.clone()).attr().unwrap().as_str(), "red");
        assert_eq!(Style::solid(Some(&red)).attr().unwrap().as_str(), "red:red");
        assert_eq!(Style::solid(None), Style::Plain);
    }

    #[test]
    fn boundary_fills_missing_side_with_default() {
        let red = ColorTag::from("red");
        let blue = ColorTag::from("blue");
        assert_eq!(
            Style::boundary(Some(&red), Some(&blue)).attr().unwrap().as_str(),
            "red:blue"
        );
        assert_eq!(
            Style::boundary(None, Some(&blue)).attr().unwrap().as_str(),
            "default:blue"
        );
        assert_eq!(Style::boundary(None, None), Style::Plain);
    }

    #[test]
    fn spark_text_and_pairs() {
        let s = Spark::from_segments(vec![
            RenderedSegment::new(Style::Plain, "▁"),
            RenderedSegment::new(Style::Fg("red".into()), "█"),
        ]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.text(), "▁█");
        let pairs: Vec<_> = s.pairs().collect();
        assert_eq!(pairs[0], (None, "▁"));
        assert_eq!(pairs[1].0.as_ref().map(ColorTag::as_str), Some("red"));
    }
}
