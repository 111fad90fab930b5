use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error: {0}")]
    #[diagnostic(code(swatch::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(swatch::json))]
    Json(#[from] serde_json::Error),

    /// Syntax errors surfaced by the stylesheet parser, passed through
    /// unreinterpreted.
    #[error("CSS parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A value that survived candidate filtering failed to re-parse during
    /// aggregation. Filtering guarantees validity, so this is a pipeline
    /// invariant violation and is raised rather than swallowed.
    #[error("invalid colour literal reached the formatter: {literal:?}")]
    #[diagnostic(code(swatch::invalid_colour))]
    InvalidColourLiteral { literal: String },
}

pub type Result<T> = std::result::Result<T, SwatchError>;
