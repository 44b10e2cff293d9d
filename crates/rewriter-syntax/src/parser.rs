//! Tree-sitter parsing wrapper for Swift source.
//!
//! Tree-sitter is error-tolerant: it always produces a tree and marks the
//! regions it could not parse with ERROR or MISSING nodes. Rewriting a file
//! whose structure was guessed at is unsafe, so [`ParseResult::ensure_valid`]
//! turns the first such node into a positioned [`SyntaxError`].

use crate::error::SyntaxError;
use crate::position::point_to_one_based;

const CONTEXT_LIMIT: usize = 24;

/// Result of parsing Swift source.
#[derive(Debug)]
pub struct ParseResult {
    tree: tree_sitter::Tree,
    source: String,
}

impl ParseResult {
    /// Returns the parsed syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Returns the source code that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Returns whether the tree contains ERROR or MISSING nodes.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.root_node().has_error()
    }

    /// Fails with the first syntax error in source order, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::ParseError`] pointing at the first ERROR or
    /// MISSING node.
    pub fn ensure_valid(&self) -> Result<(), SyntaxError> {
        if !self.has_errors() {
            return Ok(());
        }
        let mut first = None;
        visit_preorder(self.root_node(), |node| {
            if first.is_some() {
                return false;
            }
            if node.is_error() || node.is_missing() {
                first = Some(node);
                return false;
            }
            node.has_error()
        });
        let node = first.unwrap_or_else(|| self.root_node());
        let (line, column) = point_to_one_based(node.start_position());
        Err(SyntaxError::parse(line, column, describe(node, &self.source)))
    }
}

fn describe(node: tree_sitter::Node<'_>, source: &str) -> String {
    if node.is_missing() {
        return format!("missing `{}`", node.kind());
    }
    let context: String = source
        .get(node.byte_range())
        .and_then(|text| text.lines().next())
        .map(|line| line.trim().chars().take(CONTEXT_LIMIT).collect())
        .unwrap_or_default();
    if context.is_empty() {
        "syntax error".to_owned()
    } else {
        format!("syntax error near `{context}`")
    }
}

/// Tree-sitter parser configured for Swift.
pub struct Parser {
    inner: tree_sitter::Parser,
}

impl Parser {
    /// Creates a new Swift parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tree-sitter parser rejects the grammar, which
    /// happens when the grammar's ABI is incompatible with the runtime.
    pub fn new() -> Result<Self, SyntaxError> {
        let language: tree_sitter::Language = tree_sitter_swift::LANGUAGE.into();
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&language)
            .map_err(|error| SyntaxError::parser_init(error.to_string()))?;
        Ok(Self { inner })
    }

    /// Parses source code and returns the result.
    ///
    /// The result may contain syntax errors; see [`ParseResult::ensure_valid`].
    ///
    /// # Errors
    ///
    /// Returns an error if Tree-sitter fails to produce a tree at all.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult, SyntaxError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::internal_error("tree-sitter produced no tree"))?;
        Ok(ParseResult {
            tree,
            source: source.to_owned(),
        })
    }
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

/// Visits `root` and its descendants in source order without recursion.
///
/// `visit` returns whether to descend into the node it was given. Walking
/// with a cursor keeps deeply nested sources off the call stack.
pub(crate) fn visit_preorder<'tree, F>(root: tree_sitter::Node<'tree>, mut visit: F)
where
    F: FnMut(tree_sitter::Node<'tree>) -> bool,
{
    let mut cursor = root.walk();
    loop {
        if visit(cursor.node()) && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(source: &str) -> ParseResult {
        Parser::new()
            .expect("parser init")
            .parse(source)
            .expect("parse")
    }

    #[rstest]
    #[case("let image = UIImage(named: \"abc\")")]
    #[case("let s = \"\"\"\n    multi \\(line)\n    \"\"\"\n")]
    #[case("/* a /* nested */ comment */ let x = 1\n")]
    #[case("let r = #\"raw \"quoted\"\"#\n")]
    #[case("let e = `class`\nlet n = 0x1F + 1_000.5e3\n")]
    #[case("let regex = #/\\(/#\nlet quote = #/\"/#\n")]
    fn parser_accepts_valid_source(#[case] source: &str) {
        let result = parse(source);
        assert!(!result.has_errors());
        assert!(result.ensure_valid().is_ok());
        assert_eq!(result.source(), source);
    }

    #[rstest]
    #[case("let a = Image(\"abc)")]
    #[case("Image(\"abc\"]")]
    #[case("struct V { var body: some View {")]
    fn parser_reports_errors_on_the_first_line(#[case] source: &str) {
        let result = parse(source);
        assert!(result.has_errors());

        let error = result.ensure_valid().expect_err("syntax error");
        let (line, column) = error.position().expect("positioned error");
        assert_eq!(line, 1);
        assert!(column >= 1);
    }

    #[test]
    fn preorder_visits_in_source_order() {
        let result = parse("f(a, b)");
        let mut identifiers = Vec::new();
        visit_preorder(result.root_node(), |node| {
            if node.kind() == "simple_identifier" {
                identifiers.push(node.utf8_text(result.source().as_bytes()).expect("utf-8"));
            }
            true
        });
        assert_eq!(identifiers, ["f", "a", "b"]);
    }

    #[test]
    fn preorder_can_skip_subtrees() {
        let result = parse("f(g(a))");
        let mut calls = 0_usize;
        visit_preorder(result.root_node(), |node| {
            let is_call = node.kind() == "call_expression";
            if is_call {
                calls += 1;
            }
            !is_call
        });
        assert_eq!(calls, 1);
    }
}
