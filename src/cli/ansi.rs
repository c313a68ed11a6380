//! Host-side interpretation of color tags as ANSI SGR escapes.
//!
//! Understands the sixteen basic color names, `default`, `#rgb` and
//! `#rrggbb`.  A composite `fg:bg` tag sets both layers.  Unknown tags draw
//! unstyled.

use crate::{
    core::{color::parse_hex, item::ColorTag},
    render::Spark,
};

pub const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Fg,
    Bg,
}

impl Layer {
    const fn offset(self) -> u8 {
        match self {
            Self::Fg => 0,
            Self::Bg => 10,
        }
    }

    const fn truecolor(self) -> u8 {
        match self {
            Self::Fg => 38,
            Self::Bg => 48,
        }
    }
}

/// SGR parameter for a basic color name (foreground form).
fn basic_code(name: &str) -> Option<u8> {
    Some(match name {
        "black" => 30,
        "dark red" => 31,
        "dark green" => 32,
        "brown" => 33,
        "dark blue" => 34,
        "dark magenta" => 35,
        "dark cyan" => 36,
        "light gray" => 37,
        "default" => 39,
        "dark gray" => 90,
        "light red" => 91,
        "light green" => 92,
        "yellow" => 93,
        "light blue" => 94,
        "light magenta" => 95,
        "light cyan" => 96,
        "white" => 97,
        _ => return None,
    })
}

/// SGR parameters (without `ESC[` / `m`) for one plain tag.
#[must_use]
pub fn sgr_params(tag: &str, layer: Layer) -> Option<String> {
    let tag = tag.trim();
    if let Some(code) = basic_code(&tag.to_ascii_lowercase()) {
        return Some((code + layer.offset()).to_string());
    }
    let (r, g, b) = parse_hex(tag)?;
    Some(format!("{};2;{r};{g};{b}", layer.truecolor()))
}

/// Full escape sequence for an attribute, `None` when nothing applies.
#[must_use]
pub fn escape(attr: &ColorTag) -> Option<String> {
    let mut params = Vec::with_capacity(2);
    match attr.as_str().split_once(':') {
        Some((fg, bg)) => {
            params.extend(sgr_params(fg, Layer::Fg));
            params.extend(sgr_params(bg, Layer::Bg));
        }
        None => params.extend(sgr_params(attr.as_str(), Layer::Fg)),
    }
    (!params.is_empty()).then(|| format!("\x1b[{}m", params.join(";")))
}

/// Wrap `text` in the attribute's escape + reset sequence.
#[must_use]
pub fn paint(attr: Option<&ColorTag>, text: &str) -> String {
    match attr.and_then(escape) {
        Some(esc) => format!("{esc}{text}{RESET}"),
        None => text.to_owned(),
    }
}

/// A whole chart as one printable line.
#[must_use]
pub fn paint_spark(spark: &Spark) -> String {
    let mut line = String::with_capacity(spark.len() * 16);
    for (attr, glyph) in spark.pairs() {
        line.push_str(&paint(attr.as_ref(), glyph));
    }
    line
}
