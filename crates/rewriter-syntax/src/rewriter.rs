//! Rewrites string-named resource lookups into typed accessors.
//!
//! The rewriter walks the parsed tree once and records a byte-range edit for
//! every matching call: the argument list collapses to the typed accessor,
//! and a `?` or `!` applied to a failable UIKit lookup is removed. Edits are
//! spliced into the source from the end backwards, so every byte outside an
//! edit is copied through unchanged.

use std::ops::Range;

use tracing::debug;

use crate::error::SyntaxError;
use crate::matcher::{ResourceCall, match_resource_call};
use crate::parser::{ParseResult, Parser, visit_preorder};

const REWRITER_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::rewriter");

/// Characters that extend a `?` or `!` into a different operator, such as
/// `!=` or `??`.
const OPERATOR_CHARACTERS: &str = "/=-+!*%<>&|^~?";

/// Engine that rewrites resource lookups.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rewriter;

impl Rewriter {
    /// Creates a new rewriter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses, rewrites and renders source text.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed cleanly.
    pub fn apply(&self, source: &str) -> Result<RewriteResult, SyntaxError> {
        let parsed = Parser::new()?.parse(source)?;
        self.rewrite(&parsed)
    }

    /// Rewrites an already parsed source.
    ///
    /// # Errors
    ///
    /// Returns an error if the parse contains syntax errors.
    pub fn rewrite(&self, parsed: &ParseResult) -> Result<RewriteResult, SyntaxError> {
        parsed.ensure_valid()?;
        let source = parsed.source();
        let calls = find_resource_calls(parsed);
        if calls.is_empty() {
            return Ok(RewriteResult {
                output: source.to_owned(),
                num_replacements: 0,
            });
        }

        let mut edits = Vec::with_capacity(calls.len());
        for call in &calls {
            edits.push(Edit {
                range: call.arguments(),
                replacement: call.replacement_argument(),
            });
            if let Some(marker) = null_safety_marker(call, source) {
                edits.push(Edit {
                    range: marker,
                    replacement: String::new(),
                });
            }
            debug!(
                target: REWRITER_TARGET,
                callee = call.rule().callee(),
                accessor = %call.path(),
                dropped_arguments = call.extra_arguments(),
                "rewrote resource lookup"
            );
        }

        Ok(RewriteResult {
            output: apply_edits(source, edits)?,
            num_replacements: calls.len(),
        })
    }
}

/// Result of a rewrite operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    /// The transformed source code.
    output: String,
    /// Number of replacements made.
    num_replacements: usize,
}

impl RewriteResult {
    /// Returns the transformed source code.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the result, returning the transformed source code.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Returns the number of replacements made.
    #[must_use]
    pub const fn num_replacements(&self) -> usize {
        self.num_replacements
    }

    /// Returns true if any replacements were made.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.num_replacements > 0
    }
}

struct Edit {
    range: Range<usize>,
    replacement: String,
}

/// Collects matching calls in source order. A matched call's only argument
/// is a plain literal, so its subtree is not searched further.
fn find_resource_calls(parsed: &ParseResult) -> Vec<ResourceCall> {
    let source = parsed.source();
    let mut calls = Vec::new();
    visit_preorder(parsed.root_node(), |node| {
        let Some(call) = match_resource_call(node, source) else {
            return true;
        };
        calls.push(call);
        false
    });
    calls
}

/// The byte range of a `?` or `!` applied directly to a failable lookup.
fn null_safety_marker(call: &ResourceCall, source: &str) -> Option<Range<usize>> {
    if !call.rule().strips_null_safety_wrapper() {
        return None;
    }
    let rest = source.get(call.end()..)?;
    let mut chars = rest.chars();
    let marker = chars.next().filter(|c| matches!(c, '?' | '!'))?;
    if chars
        .next()
        .is_some_and(|next| OPERATOR_CHARACTERS.contains(next))
    {
        return None;
    }
    Some(call.end()..call.end().saturating_add(marker.len_utf8()))
}

fn apply_edits(source: &str, mut edits: Vec<Edit>) -> Result<String, SyntaxError> {
    // Replace from the end so earlier offsets stay valid.
    edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));

    let mut output = source.to_owned();
    for edit in edits {
        if edit.range.end > output.len()
            || !output.is_char_boundary(edit.range.start)
            || !output.is_char_boundary(edit.range.end)
        {
            return Err(SyntaxError::internal_error(
                "rewrite range is not on a UTF-8 boundary",
            ));
        }
        output.replace_range(edit.range, &edit.replacement);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn apply(source: &str) -> RewriteResult {
        Rewriter::new().apply(source).expect("apply")
    }

    #[test]
    fn apply_reports_replacements() {
        let result = apply("UIImage(named: \"a\")\nUIColor(named: \"b\")!\n");
        assert_eq!(result.num_replacements(), 2);
        assert!(result.has_changes());
        assert_eq!(
            result.output(),
            "UIImage(resource: .a)\nUIColor(resource: .b)\n"
        );
    }

    #[test]
    fn unchanged_source_is_copied_through() {
        let source = "print(\"hi\") // Image(\"logo\")\n";
        let result = apply(source);
        assert!(!result.has_changes());
        assert_eq!(result.output(), source);
    }

    #[test]
    fn rewrite_accepts_a_prior_parse() {
        let parsed = Parser::new()
            .expect("parser init")
            .parse("let c = Color(\"ink\")\n")
            .expect("parse");
        let result = Rewriter::new().rewrite(&parsed).expect("rewrite");
        assert_eq!(result.output(), "let c = Color(.ink)\n");
    }

    #[rstest]
    #[case("UIImage(named: \"a\")!", Some(19..20))]
    #[case("UIImage(named: \"a\")?.size", Some(19..20))]
    #[case("UIImage(named: \"a\") ?? fallback", None)]
    #[case("UIImage(named: \"a\") == nil", None)]
    #[case("Image(\"a\")!", None)]
    fn finds_null_safety_markers(#[case] source: &str, #[case] expected: Option<Range<usize>>) {
        let parsed = Parser::new()
            .expect("parser init")
            .parse(source)
            .expect("parse");
        let calls = find_resource_calls(&parsed);
        let call = calls.first().expect("call");
        assert_eq!(null_safety_marker(call, source), expected);
    }

    #[test]
    fn edits_apply_from_the_end() {
        let edits = vec![
            Edit {
                range: 0..1,
                replacement: "xyz".to_owned(),
            },
            Edit {
                range: 4..6,
                replacement: String::new(),
            },
        ];
        assert_eq!(apply_edits("a b cd e", edits).expect("edits"), "xyz b  e");
    }
}
