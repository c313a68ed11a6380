mod ansi;
mod handlers;
pub mod parse;

use std::io;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::{
    core::{
        color::SchemeRegistry,
        data::ParseItemError,
        error::{ConfigError, SparkError},
    },
    render::Renderer,
};

pub use ansi::{paint, paint_spark};
pub use handlers::{Output, terminal_width};

/// Everything the binary can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Spark(#[from] SparkError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("bad item on {0}")]
    Parse(#[from] ParseItemError),
    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

/// Logs to stderr: `--debug` forces `debug`, else `RUST_LOG`, else `warn`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run() -> Result<(), CliError> {
    let cli = parse::Cli::parse();
    init_tracing(cli.debug);

    let registry = match &cli.schemes {
        Some(path) => SchemeRegistry::load_file(path)?,
        None => SchemeRegistry::builtin(),
    };
    let r = Renderer::new(&registry);
    let mut out = Output::new(io::stdout().lock(), cli.plain);

    match cli.cmd {
        parse::Command::Column(a) => handlers::column(r, &a, &mut out),
        parse::Command::Bar(a) => handlers::bar(r, &a, &mut out),
        parse::Command::Schemes => handlers::schemes(r, &mut out),
        parse::Command::Demo(a) => handlers::demo(r, &a, &mut out),
    }
}
