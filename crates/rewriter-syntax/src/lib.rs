//! Rewrites string-named asset lookups in Swift source into typed resource
//! accessors.
//!
//! Xcode generates typed accessors for every image and colour in an asset
//! catalogue. This crate migrates call sites that still name assets with
//! string literals:
//!
//! - `UIImage(named: "logo")` becomes `UIImage(resource: .logo)`
//! - `UIColor(named: "brand")!` becomes `UIColor(resource: .brand)`
//! - `Image("Icons/back-arrow")` becomes `Image(.Icons.backArrow)`
//! - `Color("primaryColor")` becomes `Color(.primary)`
//!
//! Source is parsed with the Tree-sitter Swift grammar. The [`Rewriter`]
//! finds matching calls in the tree, including calls nested inside string
//! interpolations, and splices replacements into the original text so every
//! other byte of the file is left untouched.
//!
//! # Example
//!
//! ```
//! use rewriter_syntax::transform;
//!
//! let result = transform("let logo = UIImage(named: \"app_logo\")?.cgImage\n")?;
//!
//! assert!(result.has_changes());
//! assert_eq!(result.output(), "let logo = UIImage(resource: .appLogo).cgImage\n");
//! # Ok::<(), rewriter_syntax::SyntaxError>(())
//! ```

mod error;
mod literal;
mod matcher;
mod normalise;
mod parser;
mod position;
mod rewriter;
mod rules;

pub use error::SyntaxError;
pub use matcher::{ResourceCall, match_resource_call};
pub use normalise::{ResourcePath, normalise_resource_name};
pub use parser::{ParseResult, Parser};
pub use rewriter::{RewriteResult, Rewriter};
pub use rules::{ApiGeneration, ResourceKind, RewriteRule};

/// Rewrites every resource lookup in `source`.
///
/// Text without a matching lookup is returned byte-for-byte.
///
/// # Errors
///
/// Returns [`SyntaxError::ParseError`] when the source is not valid Swift.
pub fn transform(source: &str) -> Result<RewriteResult, SyntaxError> {
    Rewriter::new().apply(source)
}

#[cfg(test)]
mod tests;
