use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::config::{LabelMode, Overline, Underline};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "spark",
    about = "Sparkline columns and stacked bars for the terminal"
)]
pub struct Cli {
    /// TOML file with extra `[schemes.<name>]` color schemes
    #[arg(long, global = true, value_name = "FILE")]
    pub schemes: Option<PathBuf>,

    /// Print glyphs without ANSI colors
    #[arg(long, global = true)]
    pub plain: bool,

    /// Emit debug logs on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// One vertical block per value
    Column(ColumnArgs),
    /// Fixed-width stacked bar split by share of the total
    Bar(BarArgs),
    /// List color schemes with a preview
    Schemes,
    /// Showcase of sample charts
    Demo(DemoArgs),
}

/// `spark column …`
#[derive(Parser, Debug)]
pub struct ColumnArgs {
    /// Items: `value`, `color,value` or `color,value,label` (stdin if omitted or `-`)
    #[arg(value_name = "ITEM", allow_negative_numbers = true)]
    pub items: Vec<String>,

    /// Color scheme name
    #[arg(short, long, default_value = "mono")]
    pub scheme: String,

    #[arg(long, value_enum, default_value_t = UnderlineArg::None)]
    pub underline: UnderlineArg,

    #[arg(long, value_enum, default_value_t = OverlineArg::None)]
    pub overline: OverlineArg,

    /// Scale lower bound (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,
    /// Scale upper bound (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,
}

/// `spark bar …`
#[derive(Parser, Debug)]
pub struct BarArgs {
    /// Items: `value`, `color,value` or `color,value,label` (stdin if omitted or `-`)
    #[arg(value_name = "ITEM", allow_negative_numbers = true)]
    pub items: Vec<String>,

    /// Width in cells (terminal width if omitted)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Color scheme name
    #[arg(short, long, default_value = "mono")]
    pub scheme: String,

    /// Draw labels: `auto` for black/white by contrast, or a color tag
    #[arg(long, value_name = "COLOR")]
    pub labels: Option<String>,
}

/// `spark demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Seed for the random charts (clock if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnderlineArg {
    None,
    Negative,
    Min,
}

impl From<UnderlineArg> for Underline {
    fn from(u: UnderlineArg) -> Self {
        match u {
            UnderlineArg::None => Self::None,
            UnderlineArg::Negative => Self::Negative,
            UnderlineArg::Min => Self::Min,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OverlineArg {
    None,
    Max,
}

impl From<OverlineArg> for Overline {
    fn from(o: OverlineArg) -> Self {
        match o {
            OverlineArg::None => Self::None,
            OverlineArg::Max => Self::Max,
        }
    }
}

/// `--labels` value to a [`LabelMode`].
#[must_use]
pub fn label_mode(arg: Option<&str>) -> LabelMode {
    match arg {
        None => LabelMode::Hidden,
        Some("auto") => LabelMode::Contrast,
        Some(tag) => LabelMode::Fixed(tag.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_items() {
        let cli = Cli::try_parse_from(["spark", "column", "-5", "3", "--underline", "negative"])
            .unwrap();
        let Command::Column(a) = cli.cmd else {
            panic!("expected column");
        };
        assert_eq!(a.items, ["-5", "3"]);
        assert_eq!(Underline::from(a.underline), Underline::Negative);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["spark", "bar", "1", "2", "-w", "10", "--plain"]).unwrap();
        assert!(cli.plain);
        let Command::Bar(a) = cli.cmd else {
            panic!("expected bar");
        };
        assert_eq!(a.width, Some(10));
    }

    #[test]
    fn label_modes() {
        assert_eq!(label_mode(None), LabelMode::Hidden);
        assert_eq!(label_mode(Some("auto")), LabelMode::Contrast);
        assert_eq!(label_mode(Some("black")), LabelMode::Fixed("black".into()));
    }
}
