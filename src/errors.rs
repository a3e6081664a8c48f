use thiserror::Error;

/// Errors produced while parsing a context-property expression.
///
/// These never escape the public resolver API: an expression that fails to
/// parse as a structured path is treated as a plain fallback key instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid expression syntax: {0}")]
    InvalidSyntax(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
