use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("Invalid colour: {input:?}")]
    #[diagnostic(
        code(swatch::invalid_format),
        help("Use six hex digits, optionally prefixed with '#', e.g. #ff8800")
    )]
    InvalidFormat { input: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown colour: {name}")]
    #[diagnostic(code(swatch::unknown_colour))]
    UnknownColour {
        name: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SwatchError>;
