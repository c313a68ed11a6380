//! Value range detection and mapping onto a glyph ramp.

use crate::core::error::{ConfigError, SparkError};

/// Effective value range of one render call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    /// Data extrema, with either side replaced by an explicit override.
    ///
    /// Fails with `EmptyInput` when a side has no override and `values` is
    /// empty, and with `InvalidRange` when a single override lies past the
    /// opposite end of the data.
    pub fn detect(
        values: &[f64],
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self, SparkError> {
        if values.is_empty() && (min.is_none() || max.is_none()) {
            return Err(SparkError::EmptyInput);
        }
        let (low, high) = extrema(values);
        let scale = Self {
            min: min.unwrap_or(low),
            max: max.unwrap_or(high),
        };
        if scale.min > scale.max {
            return Err(ConfigError::InvalidRange {
                low: scale.min,
                high: scale.max,
            }
            .into());
        }
        Ok(scale)
    }

    /// Ramp index of `value` under this scale.
    #[inline]
    #[must_use]
    pub fn index(&self, value: f64, ramp_len: usize) -> usize {
        normalize(value, self.min, self.max, ramp_len)
    }
}

/// `(min, max)` of `values`; infinities when empty.
#[must_use]
pub fn extrema(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Map `value` linearly from `[range_min, range_max]` onto `0..ramp_len`.
///
/// The result is rounded to the nearest level and saturates at both ends for
/// out-of-range input.  A zero-width range maps everything to the top level.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
pub fn normalize(value: f64, range_min: f64, range_max: f64, ramp_len: usize) -> usize {
    let top = ramp_len.saturating_sub(1);
    if range_max == range_min {
        return top;
    }
    let span = range_max - range_min;
    let level = ((value - range_min) / span * top as f64).round();
    // NaN falls through `clamp` and casts to 0
    level.clamp(0.0, top as f64) as usize
}
