//! Centralised error types used across the crate.

use std::io;

/// Configuration and scheme-file faults.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("range_min {low} must be <= range_max {high}")]
    InvalidRange { low: f64, high: f64 },
    #[error("cannot read scheme file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid scheme file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level error type bubbled up by the render APIs.
#[derive(Debug, thiserror::Error)]
pub enum SparkError {
    #[error("unknown color scheme: {0}")]
    UnknownScheme(String),
    #[error("invalid color scheme `{scheme}`: {reason}")]
    InvalidScheme { scheme: String, reason: String },
    #[error("nothing to chart: item list is empty")]
    EmptyInput,
    #[error("bar total must be positive, got {0}")]
    InvalidTotal(f64),
    #[error("bar width must be at least one cell")]
    InvalidWidth,
    #[error("item {index} is not a finite number")]
    NonFiniteValue { index: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SparkError {
    pub(crate) fn invalid_scheme(scheme: &str, reason: impl Into<String>) -> Self {
        Self::InvalidScheme {
            scheme: scheme.to_owned(),
            reason: reason.into(),
        }
    }
}
