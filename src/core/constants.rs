//! Glyph ramps and combining decorations.

/// Ordered glyphs from emptiest (index 0) to fullest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: &'static [char],
}

impl GlyphRamp {
    /// Panics at compile time when used in a `const` with fewer than two glyphs.
    #[must_use]
    pub const fn new(glyphs: &'static [char]) -> Self {
        assert!(glyphs.len() >= 2, "glyph ramp needs at least two levels");
        Self { glyphs }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn top_index(&self) -> usize {
        self.glyphs.len() - 1
    }

    /// Glyph at `index`, saturating at the top level.
    #[inline]
    #[must_use]
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.top_index())]
    }

    #[inline]
    #[must_use]
    pub fn top(&self) -> char {
        self.glyph(self.top_index())
    }
}

/// Lower one-eighth block up to full block.
pub const VERTICAL: GlyphRamp = GlyphRamp::new(&['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█']);

/// Left one-eighth block up to full block.
pub const HORIZONTAL: GlyphRamp = GlyphRamp::new(&['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█']);

/// Stands in for a ramp glyph when a negative value sits below the baseline.
pub const BELOW_BASELINE: &str = " \u{0323}";

/// Appended to the glyph of the minimum value.
pub const MIN_MARK: char = '\u{20E8}';

/// Appended to the glyph of the maximum value.
pub const MAX_MARK: char = '\u{20DB}';

/// Tag the host surface maps to its default foreground/background.
pub const DEFAULT_TAG: &str = "default";

/// Carry-overs at or below `cell_value * CARRY_EPSILON` count as zero.
pub const CARRY_EPSILON: f64 = 1e-9;

/// Bar width used by the CLI when the terminal size is unknown.
pub const FALLBACK_WIDTH: usize = 80;
