//! Per-call render options + fluent builder.

use crate::core::{error::ConfigError, item::ColorTag};

/// Marks drawn below the baseline of a column chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Underline {
    #[default]
    None,
    /// Negative values become a dot below the baseline.
    Negative,
    /// The minimum value carries a triple underdot.
    Min,
}

/// Marks drawn above a column chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overline {
    #[default]
    None,
    /// The maximum value carries three dots above.
    Max,
}

/// Immutable column-chart parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnOptions {
    pub underline: Underline,
    pub overline: Overline,
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
}

impl ColumnOptions {
    #[inline]
    #[must_use]
    pub fn builder() -> ColumnOptionsBuilder {
        ColumnOptionsBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ColumnOptionsBuilder {
    underline: Underline,
    overline: Overline,
    range_min: Option<f64>,
    range_max: Option<f64>,
}

impl ColumnOptionsBuilder {
    #[inline]
    #[must_use]
    pub fn underline(mut self, u: Underline) -> Self {
        self.underline = u;
        self
    }
    #[inline]
    #[must_use]
    pub fn overline(mut self, o: Overline) -> Self {
        self.overline = o;
        self
    }
    #[inline]
    #[must_use]
    pub fn range_min(mut self, v: f64) -> Self {
        self.range_min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn range_max(mut self, v: f64) -> Self {
        self.range_max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.range_min = Some(*r.start());
        self.range_max = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn range_opt(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.range_min = min.or(self.range_min);
        self.range_max = max.or(self.range_max);
        self
    }

    /// Rejects an explicit `range_min` above `range_max` (equal is allowed)
    /// and any non-finite bound.
    pub fn build(self) -> Result<ColumnOptions, ConfigError> {
        let low = self.range_min.unwrap_or(f64::NEG_INFINITY);
        let high = self.range_max.unwrap_or(f64::INFINITY);
        let finite = |b: Option<f64>| b.is_none_or(f64::is_finite);
        if low > high || !finite(self.range_min) || !finite(self.range_max) {
            return Err(ConfigError::InvalidRange { low, high });
        }
        Ok(ColumnOptions {
            underline: self.underline,
            overline: self.overline,
            range_min: self.range_min,
            range_max: self.range_max,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ColumnOptionsBuilder> for Result<ColumnOptions, ConfigError> {
    fn from(b: ColumnOptionsBuilder) -> Self {
        b.build()
    }
}

/// How labels of `Item::Labeled` entries are drawn on a bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LabelMode {
    #[default]
    Hidden,
    /// Every label uses this foreground tag.
    Fixed(ColorTag),
    /// Black or white, whichever contrasts with the series color.
    Contrast,
}

/// Immutable bar-chart parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BarOptions {
    pub labels: LabelMode,
}

impl BarOptions {
    #[inline]
    #[must_use]
    pub fn labels(mut self, mode: LabelMode) -> Self {
        self.labels = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let o = ColumnOptions::builder().build().unwrap();
        assert_eq!(o, ColumnOptions::default());
    }

    #[test]
    fn builder_sets_fields() {
        let o = ColumnOptions::builder()
            .underline(Underline::Min)
            .overline(Overline::Max)
            .range(20.0..=90.0)
            .build()
            .unwrap();
        assert_eq!(o.underline, Underline::Min);
        assert_eq!(o.overline, Overline::Max);
        assert_eq!((o.range_min, o.range_max), (Some(20.0), Some(90.0)));
    }

    #[test]
    fn zero_is_a_real_override() {
        let o = ColumnOptions::builder()
            .range_opt(Some(0.0), None)
            .build()
            .unwrap();
        assert_eq!(o.range_min, Some(0.0));
    }

    #[test]
    fn inverted_range_rejected() {
        let r: Result<ColumnOptions, _> = ColumnOptions::builder().range(3.0..=1.0).into();
        assert!(matches!(r, Err(ConfigError::InvalidRange { .. })));
        // degenerate range is fine
        assert!(ColumnOptions::builder().range(2.0..=2.0).build().is_ok());
    }

    #[test]
    fn lone_non_finite_bound_rejected() {
        assert!(ColumnOptions::builder().range_min(f64::NAN).build().is_err());
        assert!(ColumnOptions::builder().range_max(f64::INFINITY).build().is_err());
        assert!(ColumnOptions::builder().range_max(-1e9).build().is_ok());
    }
}
