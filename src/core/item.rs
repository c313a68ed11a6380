//! Chart input items and opaque color tags.

use std::fmt;

use crate::core::constants::DEFAULT_TAG;

/// Style identifier understood only by the host rendering surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorTag(String);

impl ColorTag {
    #[inline]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn default_tag() -> Self {
        Self(DEFAULT_TAG.to_owned())
    }

    /// `"fg:bg"`, the form used for two-tone cells.
    #[must_use]
    pub fn composite(fg: &Self, bg: &Self) -> Self {
        Self(format!("{}:{}", fg.0, bg.0))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorTag {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ColorTag {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One data point, optionally pre-colored and labeled.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Plain(f64),
    Colored(ColorTag, f64),
    Labeled(ColorTag, f64, String),
}

impl Item {
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Plain(v) | Self::Colored(_, v) | Self::Labeled(_, v, _) => *v,
        }
    }

    /// The explicit color, if the item carries one.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Option<&ColorTag> {
        match self {
            Self::Plain(_) => None,
            Self::Colored(c, _) | Self::Labeled(c, _, _) => Some(c),
        }
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Labeled(_, _, l) => Some(l),
            _ => None,
        }
    }
}

impl From<f64> for Item {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Plain(v)
    }
}

impl From<i32> for Item {
    #[inline]
    fn from(v: i32) -> Self {
        Self::Plain(f64::from(v))
    }
}

impl From<(&str, f64)> for Item {
    #[inline]
    fn from((c, v): (&str, f64)) -> Self {
        Self::Colored(c.into(), v)
    }
}

impl From<(&str, f64, &str)> for Item {
    #[inline]
    fn from((c, v, l): (&str, f64, &str)) -> Self {
        Self::Labeled(c.into(), v, l.to_owned())
    }
}

/// Collect anything convertible into a `Vec<Item>`.
pub fn items<I, T>(src: I) -> Vec<Item>
where
    I: IntoIterator<Item = T>,
    T: Into<Item>,
{
    src.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_cover_every_shape() {
        let plain = Item::from(3.5);
        let colored = Item::from(("red", -1.0));
        let labeled = Item::from(("blue", 2.0, "foo"));

        assert_eq!(plain.value(), 3.5);
        assert_eq!(plain.color(), None);
        assert_eq!(colored.value(), -1.0);
        assert_eq!(colored.color().map(ColorTag::as_str), Some("red"));
        assert_eq!(colored.label(), None);
        assert_eq!(labeled.label(), Some("foo"));
    }

    #[test]
    fn composite_joins_with_colon() {
        let c = ColorTag::composite(&"#f00".into(), &"dark blue".into());
        assert_eq!(c.as_str(), "#f00:dark blue");
    }

    #[test]
    fn items_helper_converts_ints() {
        let v = items([1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v[2], Item::Plain(3.0));
    }
}
