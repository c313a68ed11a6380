//! Color schemes: descriptors, the named registry, and resolved schemes.
//!
//! A [`SchemeDescriptor`] is plain data (`mode` plus `colors` and/or `rules`)
//! that can come from the builtin table or a TOML file.  Resolving it yields a
//! [`ColorScheme`], the stateful color source a single render call owns.

use std::{collections::BTreeMap, fs, path::Path, sync::LazyLock};

use serde::Deserialize;
use tracing::debug;

use crate::core::{
    error::{ConfigError, SparkError},
    item::ColorTag,
};

/// The sixteen basic terminal colors, `black` first.
pub const BASIC_COLORS: [&str; 16] = [
    "black",
    "dark red",
    "dark green",
    "brown",
    "dark blue",
    "dark magenta",
    "dark cyan",
    "light gray",
    "dark gray",
    "light red",
    "light green",
    "yellow",
    "light blue",
    "light magenta",
    "light cyan",
    "white",
];

/// Visually distinct colors in 12-bit hex notation.
pub const DISTINCT_COLORS_256: [&str; 28] = [
    "#f00", "#080", "#00f", "#d6f", "#0ad", "#f80", "#8f0", "#666", "#f88", "#808", "#0fd", "#66f",
    "#aa8", "#060", "#faf", "#860", "#60a", "#600", "#ff8", "#086", "#8a6", "#adf", "#88a", "#f60",
    "#068", "#a66", "#f0a", "#fda",
];

/// Visually distinct colors in 24-bit hex notation.
pub const DISTINCT_COLORS_TRUE: [&str; 28] = [
    "#ff0000", "#008c00", "#0000ff", "#c34fff", "#01a5ca", "#ec9d00", "#76ff00", "#595354",
    "#ff7598", "#940073", "#00f3cc", "#4853ff", "#a6a19a", "#004301", "#edb7ff", "#8a6800",
    "#6100a3", "#5c0011", "#fff585", "#007b69", "#92b853", "#abd4ff", "#7e79a3", "#ff5401",
    "#0a577d", "#a8615c", "#e700b9", "#ffc3a6",
];

// --- Descriptors ---

/// Colors attached to a descriptor: a rotation list or a rule-name map.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Palette {
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

/// One `(op, threshold, color)` rule; `op = "else"` takes no threshold.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RuleSpec {
    pub op: String,
    #[serde(default)]
    pub value: Option<f64>,
    pub color: String,
}

impl RuleSpec {
    pub fn new(op: &str, value: f64, color: &str) -> Self {
        Self {
            op: op.to_owned(),
            value: Some(value),
            color: color.to_owned(),
        }
    }

    pub fn otherwise(color: &str) -> Self {
        Self {
            op: "else".to_owned(),
            value: None,
            color: color.to_owned(),
        }
    }
}

/// Unresolved scheme definition, same shape as a registry entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SchemeDescriptor {
    pub mode: String,
    #[serde(default)]
    pub colors: Option<Palette>,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl SchemeDescriptor {
    #[must_use]
    pub fn mono() -> Self {
        Self {
            mode: "mono".to_owned(),
            colors: None,
            rules: Vec::new(),
        }
    }

    pub fn rotate<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: "rotate".to_owned(),
            colors: Some(Palette::List(colors.into_iter().map(Into::into).collect())),
            rules: Vec::new(),
        }
    }

    /// Rule scheme; `colors` maps rule color names to tags.
    #[must_use]
    pub fn rules(rules: Vec<RuleSpec>, colors: BTreeMap<String, String>) -> Self {
        Self {
            mode: "rules".to_owned(),
            colors: (!colors.is_empty()).then_some(Palette::Map(colors)),
            rules,
        }
    }
}

/// What a caller hands to `resolve`: a registry name or an inline definition.
#[derive(Clone, Copy, Debug)]
pub enum SchemeRef<'a> {
    Named(&'a str),
    Inline(&'a SchemeDescriptor),
}

impl<'a> From<&'a str> for SchemeRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Named(name)
    }
}

impl<'a> From<&'a SchemeDescriptor> for SchemeRef<'a> {
    fn from(d: &'a SchemeDescriptor) -> Self {
        Self::Inline(d)
    }
}

// --- Registry ---

#[derive(Deserialize)]
struct SchemeFile {
    #[serde(default)]
    schemes: BTreeMap<String, SchemeDescriptor>,
}

/// Read-only mapping from scheme name to descriptor.
#[derive(Clone, Debug, Default)]
pub struct SchemeRegistry {
    schemes: BTreeMap<String, SchemeDescriptor>,
}

static BUILTIN: LazyLock<SchemeRegistry> = LazyLock::new(SchemeRegistry::builtin);

impl SchemeRegistry {
    /// The stock schemes: `mono`, `rotate_16`, `rotate_256`, `rotate_true`, `signed`.
    #[must_use]
    pub fn builtin() -> Self {
        let mut schemes = BTreeMap::new();
        schemes.insert("mono".to_owned(), SchemeDescriptor::mono());
        schemes.insert(
            "rotate_16".to_owned(),
            SchemeDescriptor::rotate(BASIC_COLORS[1..].iter().copied()),
        );
        schemes.insert(
            "rotate_256".to_owned(),
            SchemeDescriptor::rotate(DISTINCT_COLORS_256),
        );
        schemes.insert(
            "rotate_true".to_owned(),
            SchemeDescriptor::rotate(DISTINCT_COLORS_TRUE),
        );
        schemes.insert(
            "signed".to_owned(),
            SchemeDescriptor::rules(
                vec![
                    RuleSpec::new("<", 0.0, "negative"),
                    RuleSpec::otherwise("nonnegative"),
                ],
                BTreeMap::from([
                    ("nonnegative".to_owned(), "default".to_owned()),
                    ("negative".to_owned(), "dark red".to_owned()),
                ]),
            ),
        );
        Self { schemes }
    }

    /// Shared builtin registry, built on first use and never mutated.
    #[must_use]
    pub fn shared() -> &'static Self {
        &BUILTIN
    }

    /// Builtins overlaid with the `[schemes.<name>]` tables of a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let file: SchemeFile = toml::from_str(src)?;
        let mut reg = Self::builtin();
        reg.schemes.extend(file.schemes);
        Ok(reg)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemeDescriptor> {
        self.schemes.get(name)
    }

    /// Scheme names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(String::as_str)
    }

    /// Turn a name or inline descriptor into a fresh [`ColorScheme`].
    pub fn resolve(&self, scheme: SchemeRef<'_>) -> Result<ColorScheme, SparkError> {
        match scheme {
            SchemeRef::Named(name) => {
                let desc = self
                    .get(name)
                    .ok_or_else(|| SparkError::UnknownScheme(name.to_owned()))?;
                ColorScheme::from_descriptor(name, desc)
            }
            SchemeRef::Inline(desc) => ColorScheme::from_descriptor("<inline>", desc),
        }
    }
}

// --- Resolved schemes ---

/// Threshold comparison of a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl Comparison {
    #[must_use]
    pub fn parse(op: &str) -> Option<Self> {
        match op.trim() {
            "<" => Some(Self::Lt),
            "<=" | "≤" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" | "≥" => Some(Self::Ge),
            "=" | "==" => Some(Self::Eq),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Lt => value < threshold,
            Self::Le => value <= threshold,
            Self::Gt => value > threshold,
            Self::Ge => value >= threshold,
            Self::Eq => value == threshold,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub cmp: Comparison,
    pub threshold: f64,
    pub color: ColorTag,
}

/// Stateful color source owned by one render call.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorScheme {
    Mono,
    Rotating {
        colors: Vec<ColorTag>,
        cursor: usize,
    },
    /// Conditional rules, then the catch-all color.
    Rules {
        rules: Vec<Rule>,
        fallback: ColorTag,
    },
}

impl ColorScheme {
    pub fn from_descriptor(name: &str, desc: &SchemeDescriptor) -> Result<Self, SparkError> {
        let scheme = match desc.mode.as_str() {
            "mono" => Self::Mono,
            "rotate" => {
                let colors = match &desc.colors {
                    Some(Palette::List(c)) if !c.is_empty() => {
                        c.iter().map(|t| ColorTag::new(t.as_str())).collect()
                    }
                    Some(Palette::Map(_)) => {
                        return Err(SparkError::invalid_scheme(
                            name,
                            "rotate mode needs a color list, not a map",
                        ));
                    }
                    _ => {
                        return Err(SparkError::invalid_scheme(
                            name,
                            "rotate mode needs at least one color",
                        ));
                    }
                };
                Self::Rotating { colors, cursor: 0 }
            }
            "rules" => Self::compile_rules(name, desc)?,
            other => {
                return Err(SparkError::UnknownScheme(format!(
                    "{name} (mode `{other}`)"
                )));
            }
        };
        debug!(scheme = name, mode = %desc.mode, "resolved color scheme");
        Ok(scheme)
    }

    fn compile_rules(name: &str, desc: &SchemeDescriptor) -> Result<Self, SparkError> {
        let names = match &desc.colors {
            Some(Palette::Map(m)) => Some(m),
            None => None,
            Some(Palette::List(_)) => {
                return Err(SparkError::invalid_scheme(
                    name,
                    "rules mode maps color names; a list was given",
                ));
            }
        };
        // Rule colors are names into `colors`; unmapped names are tags already.
        let tag = |c: &str| ColorTag::new(names.and_then(|m| m.get(c)).map_or(c, String::as_str));

        let Some((last, conditional)) = desc.rules.split_last() else {
            return Err(SparkError::invalid_scheme(name, "rule list is empty"));
        };
        if last.op.trim() != "else" {
            return Err(SparkError::invalid_scheme(
                name,
                "missing final `else` rule",
            ));
        }

        let mut rules = Vec::with_capacity(conditional.len());
        for spec in conditional {
            if spec.op.trim() == "else" {
                return Err(SparkError::invalid_scheme(
                    name,
                    "`else` must be the last rule",
                ));
            }
            let cmp = Comparison::parse(&spec.op).ok_or_else(|| {
                SparkError::invalid_scheme(name, format!("unknown operator `{}`", spec.op))
            })?;
            let threshold = spec.value.filter(|v| v.is_finite()).ok_or_else(|| {
                SparkError::invalid_scheme(
                    name,
                    format!("rule `{}` needs a finite threshold", spec.op),
                )
            })?;
            rules.push(Rule {
                cmp,
                threshold,
                color: tag(&spec.color),
            });
        }

        Ok(Self::Rules {
            rules,
            fallback: tag(&last.color),
        })
    }

    /// Rotation step: current tag, then advance.  `None` for other modes and
    /// for an empty rotation; a cursor past the end wraps.
    pub fn next_color(&mut self) -> Option<ColorTag> {
        match self {
            Self::Rotating { colors, cursor } => {
                let i = cursor.checked_rem(colors.len())?;
                *cursor = (i + 1) % colors.len();
                colors.get(i).cloned()
            }
            _ => None,
        }
    }

    /// First matching rule's color.  `None` unless this is a rule scheme.
    #[must_use]
    pub fn evaluate(&self, value: f64) -> Option<&ColorTag> {
        let Self::Rules { rules, fallback } = self else {
            return None;
        };
        for rule in rules {
            if rule.cmp.holds(value, rule.threshold) {
                return Some(&rule.color);
            }
        }
        Some(fallback)
    }

    /// Color for an item lacking an explicit tag.  Rotation advances once.
    pub fn color_for(&mut self, value: f64) -> Option<ColorTag> {
        match self {
            Self::Mono => None,
            Self::Rotating { .. } => self.next_color(),
            Self::Rules { .. } => self.evaluate(value).cloned(),
        }
    }

    /// Rewind a rotation to its first color.
    pub fn reset(&mut self) {
        if let Self::Rotating { cursor, .. } = self {
            *cursor = 0;
        }
    }
}

// --- Label contrast ---

/// Parse `#rgb` or `#rrggbb`.
#[must_use]
pub fn parse_hex(tag: &str) -> Option<(u8, u8, u8)> {
    let h = tag.trim().strip_prefix('#')?;
    if !h.is_ascii() {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    match h.len() {
        3 => {
            let nib = |i: usize| byte(&h[i..=i]).map(|n| n * 0x11);
            Some((nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some((byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?)),
        _ => None,
    }
}

/// `"black"` or `"white"`, whichever reads better on a `background` tag.
#[must_use]
pub fn contrasting_label(background: &str) -> &'static str {
    if let Some((r, g, b)) = parse_hex(background) {
        let luma = 0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b);
        return if luma > 140.0 { "black" } else { "white" };
    }
    match background.trim() {
        "light gray" | "light red" | "light green" | "yellow" | "light blue"
        | "light magenta" | "light cyan" | "white" | "brown" | "dark cyan" => "black",
        _ => "white",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(specs: Vec<RuleSpec>) -> SchemeDescriptor {
        SchemeDescriptor::rules(specs, BTreeMap::new())
    }

    #[test]
    fn rotation_wraps() {
        let desc = SchemeDescriptor::rotate(["A", "B", "C"]);
        let mut s = SchemeRegistry::builtin()
            .resolve(SchemeRef::Inline(&desc))
            .unwrap();
        let got: Vec<_> = (0..4).map(|_| s.next_color().unwrap().to_string()).collect();
        assert_eq!(got, ["A", "B", "C", "A"]);
    }

    #[test]
    fn rotation_reset_rewinds() {
        let desc = SchemeDescriptor::rotate(["A", "B"]);
        let mut s = ColorScheme::from_descriptor("t", &desc).unwrap();
        s.next_color();
        s.reset();
        assert_eq!(s.next_color().unwrap().as_str(), "A");
    }

    #[test]
    fn hand_built_rotation_never_panics() {
        let mut empty = ColorScheme::Rotating {
            colors: vec![],
            cursor: 0,
        };
        assert_eq!(empty.next_color(), None);
        assert_eq!(empty.color_for(1.0), None);

        let mut stale = ColorScheme::Rotating {
            colors: vec!["A".into(), "B".into()],
            cursor: 3,
        };
        let got: Vec<_> = (0..3).map(|_| stale.next_color().unwrap().to_string()).collect();
        assert_eq!(got, ["B", "A", "B"]);
    }

    #[test]
    fn first_matching_rule_wins() {
        let desc = rules(vec![RuleSpec::new("<", 0.0, "neg"), RuleSpec::otherwise("pos")]);
        let s = ColorScheme::from_descriptor("t", &desc).unwrap();
        assert_eq!(s.evaluate(-5.0).unwrap().as_str(), "neg");
        assert_eq!(s.evaluate(0.0).unwrap().as_str(), "pos");
    }

    #[test]
    fn overlapping_rules_stop_at_first() {
        let desc = rules(vec![
            RuleSpec::new("<=", 10.0, "low"),
            RuleSpec::new("<=", 100.0, "mid"),
            RuleSpec::new("=", 5.0, "never"),
            RuleSpec::otherwise("high"),
        ]);
        let s = ColorScheme::from_descriptor("t", &desc).unwrap();
        assert_eq!(s.evaluate(5.0).unwrap().as_str(), "low");
        assert_eq!(s.evaluate(50.0).unwrap().as_str(), "mid");
        assert_eq!(s.evaluate(500.0).unwrap().as_str(), "high");
    }

    #[test]
    fn signed_maps_rule_names_to_tags() {
        let mut s = SchemeRegistry::shared().resolve("signed".into()).unwrap();
        assert_eq!(s.color_for(-1.0).unwrap().as_str(), "dark red");
        assert_eq!(s.color_for(1.0).unwrap().as_str(), "default");
    }

    #[test]
    fn mono_yields_nothing() {
        let mut s = SchemeRegistry::shared().resolve("mono".into()).unwrap();
        assert_eq!(s.color_for(42.0), None);
        assert_eq!(s.next_color(), None);
    }

    #[test]
    fn rotate_16_skips_black() {
        let mut s = SchemeRegistry::shared().resolve("rotate_16".into()).unwrap();
        assert_eq!(s.next_color().unwrap().as_str(), "dark red");
    }

    #[test]
    fn unknown_name_and_mode() {
        let reg = SchemeRegistry::builtin();
        assert!(matches!(
            reg.resolve("plaid".into()),
            Err(SparkError::UnknownScheme(_))
        ));
        let desc = SchemeDescriptor {
            mode: "stripes".into(),
            colors: None,
            rules: Vec::new(),
        };
        assert!(matches!(
            reg.resolve((&desc).into()),
            Err(SparkError::UnknownScheme(_))
        ));
    }

    #[test]
    fn missing_else_is_rejected() {
        let desc = rules(vec![RuleSpec::new("<", 0.0, "neg")]);
        let err = ColorScheme::from_descriptor("t", &desc).unwrap_err();
        assert!(matches!(err, SparkError::InvalidScheme { .. }));
    }

    #[test]
    fn malformed_rules_are_rejected() {
        for specs in [
            vec![],
            vec![RuleSpec::otherwise("a"), RuleSpec::otherwise("b")],
            vec![RuleSpec::new("~", 1.0, "a"), RuleSpec::otherwise("b")],
            vec![RuleSpec::new("<", f64::NAN, "a"), RuleSpec::otherwise("b")],
        ] {
            assert!(matches!(
                ColorScheme::from_descriptor("t", &rules(specs)),
                Err(SparkError::InvalidScheme { .. })
            ));
        }
    }

    #[test]
    fn empty_rotation_is_rejected() {
        let desc = SchemeDescriptor::rotate(Vec::<String>::new());
        assert!(matches!(
            ColorScheme::from_descriptor("t", &desc),
            Err(SparkError::InvalidScheme { .. })
        ));
    }

    #[test]
    fn toml_schemes_overlay_builtins() {
        let reg = SchemeRegistry::from_toml_str(
            r##"
            [schemes.traffic]
            mode = "rules"
            colors = { hot = "light red", ok = "light green" }
            rules = [
                { op = ">=", value = 90, color = "hot" },
                { op = "else", color = "ok" },
            ]

            [schemes.duo]
            mode = "rotate"
            colors = ["#123", "#456"]
            "##,
        )
        .unwrap();
        assert!(reg.get("mono").is_some());
        let names: Vec<_> = reg.names().collect();
        assert!(names.contains(&"traffic") && names.contains(&"duo"));

        let mut s = reg.resolve("traffic".into()).unwrap();
        assert_eq!(s.color_for(95.0).unwrap().as_str(), "light red");
        assert_eq!(s.color_for(10.0).unwrap().as_str(), "light green");
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        assert!(matches!(
            SchemeRegistry::from_toml_str("schemes = 3"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex("#f80"), Some((0xff, 0x88, 0x00)));
        assert_eq!(parse_hex("#01a5ca"), Some((0x01, 0xa5, 0xca)));
        assert_eq!(parse_hex("dark red"), None);
        assert_eq!(parse_hex("#12"), None);
    }

    #[test]
    fn label_contrast() {
        assert_eq!(contrasting_label("#fff585"), "black");
        assert_eq!(contrasting_label("#0000ff"), "white");
        assert_eq!(contrasting_label("yellow"), "black");
        assert_eq!(contrasting_label("dark blue"), "white");
    }
}
