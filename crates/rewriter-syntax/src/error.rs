//! Error types for syntactic analysis operations.
//!
//! Only genuine failures surface here. A call that does not match one of the
//! resource shapes is not an error: the rewriter simply leaves it alone.

use thiserror::Error;

/// Errors from parsing or rewriting Swift source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser with the Swift grammar.
    #[error("failed to initialise Swift parser: {message}")]
    ParserInitError {
        /// Description of the failure.
        message: String,
    },

    /// The source text is not well-formed enough to be rewritten safely.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Line number (one-based) where the problem was detected.
        line: u32,
        /// Column number (one-based) where the problem was detected.
        column: u32,
        /// Description of the failure.
        message: String,
    },

    /// Internal error indicating a bug.
    #[error("internal error: {message}")]
    InternalError {
        /// Description of the internal error.
        message: String,
    },
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(message: impl Into<String>) -> Self {
        Self::ParserInitError {
            message: message.into(),
        }
    }

    /// Creates a parse error at the given one-based position.
    #[must_use]
    pub fn parse(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Returns the one-based `(line, column)` a parse error points at.
    #[must_use]
    pub const fn position(&self) -> Option<(u32, u32)> {
        match self {
            Self::ParseError { line, column, .. } => Some((*line, *column)),
            Self::ParserInitError { .. } | Self::InternalError { .. } => None,
        }
    }
}
