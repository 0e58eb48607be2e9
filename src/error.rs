use std::path::PathBuf;

use thiserror::Error;

/// Source location: line and column (both 1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub col: usize,
}

impl Span {
    #[must_use]
    pub fn new(line: usize, col: usize) -> Self {
        Span { line, col }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Lexical error with the location of the offending construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub span: Span,
    pub message: String,
}

impl LexError {
    #[must_use]
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        LexError { span, message: message.into() }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.span, self.message)
    }
}

impl std::error::Error for LexError {}

pub type Result<T> = std::result::Result<T, CartError>;

/// Everything that aborts a run. None of these are retried and none leave
/// partial output behind.
#[derive(Debug, Error)]
pub enum CartError {
    // ---- Input --------------------------------------------------------------
    /// A required path was not supplied.
    #[error("specify a path to the {what}")]
    MissingInput { what: &'static str },

    #[error("cell size must be at least 1x1, got {cols}x{rows}")]
    InvalidCellSize { rows: usize, cols: usize },

    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ---- Tokenization -------------------------------------------------------
    #[error("failed to tokenize '{}': {source}", .path.display())]
    Tokenize {
        path: PathBuf,
        #[source]
        source: LexError,
    },

    /// The lexer succeeded but the file holds no tokens at all.
    #[error("failed to tokenize '{}': no tokens", .path.display())]
    NoTokens { path: PathBuf },

    /// Tokens existed but normalization left nothing to place (e.g. only comments).
    #[error("nothing to render: '{}' contains only comments", .path.display())]
    EmptyTokenStream { path: PathBuf },

    // ---- Image --------------------------------------------------------------
    #[error("failed to load image '{}': {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {width}x{height} is smaller than one {cols}x{rows} cell")]
    ImageTooSmall {
        width: u32,
        height: u32,
        cols: u32,
        rows: u32,
    },

    #[error("failed to write mask to '{}': {source}", .path.display())]
    WriteMask {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl CartError {
    /// Short name of the failure class, used as the prefix of CLI diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CartError::MissingInput { .. } | CartError::InvalidCellSize { .. } | CartError::Read { .. } => {
                "input error"
            }
            CartError::Tokenize { .. } | CartError::NoTokens { .. } => "tokenization failure",
            CartError::EmptyTokenStream { .. } => "empty token stream",
            CartError::Image { .. } | CartError::ImageTooSmall { .. } | CartError::WriteMask { .. } => {
                "image processing failure"
            }
        }
    }
}
