//! Recognises string-named resource lookups in a Swift syntax tree.

use std::ops::Range;

use crate::literal::represented_value;
use crate::normalise::{ResourcePath, normalise_resource_name};
use crate::rules::RewriteRule;

const STRING_LITERAL_KINDS: [&str; 2] = ["line_string_literal", "raw_string_literal"];

/// A call that can be rewritten to a typed accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCall {
    rule: &'static RewriteRule,
    path: ResourcePath,
    arguments: Range<usize>,
    end: usize,
    extra_arguments: usize,
}

impl ResourceCall {
    /// The rule the call matched.
    #[must_use]
    pub const fn rule(&self) -> &'static RewriteRule {
        self.rule
    }

    /// The normalised accessor the call resolves to.
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Byte range from the start of the first argument to the end of the
    /// last one. Whitespace and comments just inside the parentheses lie
    /// outside it.
    #[must_use]
    pub fn arguments(&self) -> Range<usize> {
        self.arguments.clone()
    }

    /// Byte offset just past the closing parenthesis.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of arguments after the asset name that the rewrite drops.
    #[must_use]
    pub const fn extra_arguments(&self) -> usize {
        self.extra_arguments
    }

    /// The single argument the rewritten call passes: `resource: .a.b` for
    /// UIKit lookups, `.a.b` for SwiftUI ones.
    #[must_use]
    pub fn replacement_argument(&self) -> String {
        match self.rule.output_label() {
            Some(label) => format!("{label}: {}", self.path),
            None => self.path.to_string(),
        }
    }
}

/// Matches `node` against the rewrite rules.
///
/// The node must be a call whose callee is exactly one of the known type
/// names, called with parentheses and no trailing closure. Its first argument
/// must carry the rule's label and be a single-line string literal with a
/// static value that normalises to an identifier. Anything else yields
/// `None`.
#[must_use]
pub fn match_resource_call(node: tree_sitter::Node<'_>, source: &str) -> Option<ResourceCall> {
    if node.kind() != "call_expression" {
        return None;
    }
    let bytes = source.as_bytes();
    let (callee, suffix) = match significant_children(node).as_slice() {
        [callee, suffix] => (*callee, *suffix),
        _ => return None,
    };
    let rule = RewriteRule::for_callee(callee.utf8_text(bytes).ok()?)?;

    let value_arguments = if suffix.kind() == "value_arguments" {
        suffix
    } else {
        match significant_children(suffix).as_slice() {
            [arguments] => *arguments,
            _ => return None,
        }
    };
    let opens_with_paren = bytes.get(value_arguments.start_byte()) == Some(&b'(');
    if value_arguments.kind() != "value_arguments" || !opens_with_paren {
        return None;
    }

    let arguments = significant_children(value_arguments);
    let (first, rest) = arguments.split_first()?;
    let (label, value) = match significant_children(*first).as_slice() {
        [value] => (None, *value),
        [label, value] if label.kind() == "value_argument_label" => {
            (Some(label.utf8_text(bytes).ok()?), *value)
        }
        _ => return None,
    };
    if label != rule.required_label() || !STRING_LITERAL_KINDS.contains(&value.kind()) {
        return None;
    }

    let name = represented_value(value.utf8_text(bytes).ok()?)?;
    if name.is_empty() {
        return None;
    }
    let path = normalise_resource_name(&name, rule.kind())?;
    let last = rest.last().unwrap_or(first);

    Some(ResourceCall {
        rule,
        path,
        arguments: first.start_byte()..last.end_byte(),
        end: node.end_byte(),
        extra_arguments: rest.len(),
    })
}

/// Named children, without comments.
fn significant_children(node: tree_sitter::Node<'_>) -> Vec<tree_sitter::Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Parser, visit_preorder};
    use crate::rules::ResourceKind;
    use rstest::rstest;

    fn first_call(source: &str) -> Option<ResourceCall> {
        let parsed = Parser::new()
            .expect("parser init")
            .parse(source)
            .expect("parse");
        let mut found = None;
        visit_preorder(parsed.root_node(), |node| {
            if found.is_none() {
                found = match_resource_call(node, source);
            }
            found.is_none()
        });
        found
    }

    #[rstest]
    #[case(r#"UIImage(named: "abc")"#, ResourceKind::Image, "resource: .abc", 0)]
    #[case(
        r#"UIColor(named: "abcColor", in: .main, compatibleWith: nil)"#,
        ResourceKind::Color,
        "resource: .abc",
        2
    )]
    #[case(r#"Image("icons/arrow")"#, ResourceKind::Image, ".Icons.arrow", 0)]
    #[case(r##"Color(#"brand"#)"##, ResourceKind::Color, ".brand", 0)]
    #[case(r#"Text("\(Image("star"))")"#, ResourceKind::Image, ".star", 0)]
    fn matches_resource_calls(
        #[case] source: &str,
        #[case] kind: ResourceKind,
        #[case] argument: &str,
        #[case] extra: usize,
    ) {
        let call = first_call(source).expect("match");
        assert_eq!(call.rule().kind(), kind);
        assert_eq!(call.replacement_argument(), argument);
        assert_eq!(call.extra_arguments(), extra);
    }

    #[test]
    fn argument_range_excludes_padding() {
        let source = "UIImage( named: \"a\", in: nil )";
        let call = first_call(source).expect("match");

        assert_eq!(source.get(call.arguments()), Some("named: \"a\", in: nil"));
        assert_eq!(call.end(), source.len());
    }

    #[rstest]
    #[case(r#"UIImage(systemName: "abc")"#)]
    #[case(r#"UIImage("abc")"#)]
    #[case(r#"Image(named: "abc")"#)]
    #[case(r#"Image(decorative: "abc")"#)]
    #[case(r#"Image(name)"#)]
    #[case(r#"Image("a" + "b")"#)]
    #[case(r#"Image("\(prefix)abc")"#)]
    #[case(r#"Color("")"#)]
    #[case(r#"SwiftUI.Image("abc")"#)]
    #[case(r#"Image()"#)]
    #[case(r#"NSImage(named: "abc")"#)]
    #[case("Image(\"\"\"\nabc\n\"\"\")")]
    fn rejects_other_shapes(#[case] source: &str) {
        assert!(first_call(source).is_none());
    }
}
