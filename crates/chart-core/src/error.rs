// File: crates/chart-core/src/error.rs
// Summary: Error type for the fallible edges of the crate (JSON input, file output, color parsing).

use thiserror::Error;

/// Errors raised at the crate boundary. Adapting and laying out a chart never fail.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The chart description could not be decoded.
    #[error("invalid chart spec: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing an output file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A color literal is not one of `#rgb`, `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
