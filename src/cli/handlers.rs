use std::{
    io::{self, Write},
    time::Instant,
};

use terminal_size::{Width, terminal_size};
use tracing::debug;

use crate::{
    core::{
        color::{DISTINCT_COLORS_TRUE, SchemeDescriptor, SchemeRef},
        config::{BarOptions, ColumnOptions, LabelMode, Overline, Underline},
        constants::FALLBACK_WIDTH,
        data::{parse_arg, read_items},
        item::{Item, items},
        rng::Lcg,
    },
    render::{Renderer, Spark},
};

use super::{
    CliError, ansi,
    parse::{BarArgs, ColumnArgs, DemoArgs, label_mode},
};

/// Where charts go and whether they get colored.
pub struct Output<W: Write> {
    out: W,
    plain: bool,
}

impl<W: Write> Output<W> {
    pub fn new(out: W, plain: bool) -> Self {
        Self { out, plain }
    }

    fn line(&mut self, caption: &str, spark: &Spark) -> io::Result<()> {
        let body = if self.plain {
            spark.text()
        } else {
            ansi::paint_spark(spark)
        };
        if caption.is_empty() {
            writeln!(self.out, "{body}")
        } else {
            writeln!(self.out, "{caption:<14}{body}")
        }
    }
}

/// Current terminal width (fallback when not a tty).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(FALLBACK_WIDTH, |(Width(w), _)| usize::from(w))
}

/// Items from arguments, or from stdin when none (or just `-`) are given.
fn gather(args: &[String]) -> Result<Vec<Item>, CliError> {
    if args.is_empty() || args == ["-"] {
        return Ok(read_items(io::stdin().lock())?);
    }
    args.iter()
        .enumerate()
        .map(|(i, a)| parse_arg(a, i + 1).map_err(CliError::from))
        .collect()
}

pub fn column<W: Write>(
    r: Renderer<'_>,
    a: &ColumnArgs,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let t0 = Instant::now();
    let data = gather(&a.items)?;
    let opts = ColumnOptions::builder()
        .underline(a.underline.into())
        .overline(a.overline.into())
        .range_opt(a.min, a.max)
        .build()?;
    let spark = r.column(&data, SchemeRef::Named(&a.scheme), &opts)?;
    debug!(items = data.len(), elapsed_us = t0.elapsed().as_micros(), "column rendered");
    out.line("", &spark)?;
    Ok(())
}

pub fn bar<W: Write>(r: Renderer<'_>, a: &BarArgs, out: &mut Output<W>) -> Result<(), CliError> {
    let t0 = Instant::now();
    let data = gather(&a.items)?;
    let width = a.width.unwrap_or_else(terminal_width);
    let opts = BarOptions::default().labels(label_mode(a.labels.as_deref()));
    let spark = r.bar_with(&data, width, SchemeRef::Named(&a.scheme), &opts)?;
    debug!(items = data.len(), width, elapsed_us = t0.elapsed().as_micros(), "bar rendered");
    out.line("", &spark)?;
    Ok(())
}

/// Every registered scheme with a short preview.
pub fn schemes<W: Write>(r: Renderer<'_>, out: &mut Output<W>) -> Result<(), CliError> {
    let ramp = items(0..16);
    let signed = items(-8..8);
    for name in r.registry().names() {
        let desc = r.registry().get(name);
        let data = match desc {
            Some(d) if d.mode == "rules" => &signed,
            _ => &ramp,
        };
        match r.column(data, SchemeRef::Named(name), &ColumnOptions::default()) {
            Ok(spark) => out.line(name, &spark)?,
            Err(e) => writeln!(out.out, "{name:<14}({e})")?,
        }
    }
    Ok(())
}

/// Fixed sample charts followed by a random column and bar.
#[allow(clippy::cast_precision_loss)]
pub fn demo<W: Write>(r: Renderer<'_>, a: &DemoArgs, out: &mut Output<W>) -> Result<(), CliError> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let none = ColumnOptions::default();

    out.line("ramp", &r.column(&items(0..8), "mono".into(), &none)?)?;

    let scaled = ColumnOptions::builder().range(20.0..=90.0).build()?;
    let spark = r.column(&items(0..100), "rotate_16".into(), &scaled)?;
    out.line("scaled 20-90", &spark)?;

    let noise: Vec<Item> = (0..100).map(|_| Item::Plain(5.0 * rng.next_f64())).collect();
    out.line("noise", &r.column(&noise, "rotate_true".into(), &none)?)?;

    let negative = ColumnOptions::builder()
        .underline(Underline::Negative)
        .build()?;
    let spark = r.column(&items(-5..100), "signed".into(), &negative)?;
    out.line("signed", &spark)?;

    let custom = SchemeDescriptor::rotate(["dark cyan", "brown", "dark magenta"]);
    out.line("custom", &r.column(&items(1..20), (&custom).into(), &none)?)?;

    let marked = ColumnOptions::builder()
        .underline(Underline::Min)
        .overline(Overline::Max)
        .build()?;
    let random: Vec<Item> = (0..32)
        .map(|i| {
            let color = DISTINCT_COLORS_TRUE[i % DISTINCT_COLORS_TRUE.len()];
            Item::Colored(color.into(), f64::from(rng.range(1, 100)))
        })
        .collect();
    out.line("min/max", &r.column(&random, "mono".into(), &marked)?)?;

    for (values, width) in [
        (&[30, 30, 30][..], 41),
        (&[40, 30, 20, 10][..], 20),
        (&[3, 2, 1][..], 28),
        (&[19, 42, 17][..], 9),
    ] {
        let spark = r.bar(&items(values.iter().copied()), width, "rotate_true".into())?;
        out.line(&format!("bar {width}"), &spark)?;
    }

    let labels = BarOptions::default().labels(LabelMode::Contrast);
    let labeled = vec![
        Item::Labeled("light red".into(), 19.0, "foo".into()),
        Item::Labeled("light green".into(), 42.0, "bar".into()),
        Item::Labeled("light blue".into(), 17.0, "baz".into()),
    ];
    out.line("labeled", &r.bar_with(&labeled, 20, "mono".into(), &labels)?)?;

    let n = rng.range(4, 10) as usize;
    let series: Vec<Item> = (0..n)
        .map(|i| {
            let color = rng.choose(&DISTINCT_COLORS_TRUE).copied().unwrap_or("default");
            let name = char::from(b'A' + u8::try_from(i % 26).unwrap_or(0));
            Item::Labeled(
                color.into(),
                f64::from(rng.range(50, 150)),
                format!("{name} {{value}} ({{pct}}%)"),
            )
        })
        .collect();
    out.line("random", &r.bar_with(&series, 80, "mono".into(), &labels)?)?;
    Ok(())
}
