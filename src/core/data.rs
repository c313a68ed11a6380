//! Line-oriented item loader with zero-allocation float parsing.
//!
//! Each non-blank line is one item: `value`, `color,value` or
//! `color,value,label` (the label keeps any further commas).  A `#` followed
//! by whitespace starts a comment line; `#f80,3` is a hex-colored item.

use std::io::{BufRead, BufReader, Read};

use crate::core::item::Item;

// --- Error Handling ---
#[derive(Debug, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseItemError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("empty color field")]
    EmptyColor,
    #[error("invalid value '{0}'")]
    BadFloat(String),
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// Rewrite U+2212 MINUS SIGN to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseItemError> {
    let bad = || ParseItemError {
        line,
        kind: ParseErrorKind::BadFloat(String::from_utf8_lossy(bytes).into_owned()),
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

#[inline]
fn is_comment(record: &[u8]) -> bool {
    record[0] == b'#' && record.get(1).is_none_or(u8::is_ascii_whitespace)
}

/// Parse one already-trimmed record.
pub fn parse_item(record: &[u8], line: usize) -> Result<Item, ParseItemError> {
    let mut fields = record.splitn(3, |&b| b == b',').map(trim);
    let first = fields.next().unwrap_or_default();
    let Some(second) = fields.next() else {
        return parse_f64(first, line).map(Item::Plain);
    };
    if first.is_empty() {
        return Err(ParseItemError {
            line,
            kind: ParseErrorKind::EmptyColor,
        });
    }
    let color = String::from_utf8_lossy(first).into_owned();
    let value = parse_f64(second, line)?;
    Ok(match fields.next() {
        Some(label) => Item::Labeled(
            color.into(),
            value,
            String::from_utf8_lossy(label).into_owned(),
        ),
        None => Item::Colored(color.into(), value),
    })
}

/// Parse a command-line argument in the same syntax as an input line.
pub fn parse_arg(arg: &str, position: usize) -> Result<Item, ParseItemError> {
    let mut buf = arg.as_bytes().to_vec();
    normalize_unicode_minus(&mut buf);
    parse_item(trim(&buf), position)
}

// --- Streaming ingest ---
const BUF_CAP: usize = 1 << 16;

pub fn read_items<R: Read>(src: R) -> Result<Vec<Item>, ParseItemError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(128);
    let mut items = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr
            .read_until(b'\n', &mut buf)
            .map_err(|e| ParseItemError {
                line: line_no,
                kind: e.into(),
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        normalize_unicode_minus(&mut buf);
        let record = trim(&buf);
        if record.is_empty() || is_comment(record) {
            continue;
        }
        items.push(parse_item(record, line_no)?);
    }
    Ok(items)
}
