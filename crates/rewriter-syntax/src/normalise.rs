//! Turns human-chosen asset names into Swift identifiers.
//!
//! Asset catalogues allow names such as `"Icons/arrow-left"` or
//! `"TEMP_abc_TEMP"`. Generated accessors camel-case the name, lowercase its
//! leading capitals, and map folder prefixes to nested types. This module
//! reproduces that mapping so a rewritten call names the generated member.

use std::fmt;

use crate::rules::ResourceKind;

/// A normalised accessor: optional namespace types followed by a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    namespace: Vec<String>,
    identifier: String,
}

impl ResourcePath {
    /// The capitalised namespace segments, outermost first.
    #[must_use]
    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    /// The member identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Iterates the segments in access order, identifier last.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.namespace
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.identifier.as_str()))
    }
}

/// Renders as an implicit member access, e.g. `.Icons.arrowLeft`.
impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}

/// Normalises a resource name for the given asset kind.
///
/// Returns `None` when the name does not produce a usable accessor: the
/// identifier is empty after suffix stripping, or a namespace segment is
/// empty.
///
/// # Examples
///
/// ```
/// use rewriter_syntax::{ResourceKind, normalise_resource_name};
///
/// let path = normalise_resource_name("Icons/arrow-left", ResourceKind::Image);
/// assert_eq!(path.map(|p| p.to_string()).as_deref(), Some(".Icons.arrowLeft"));
/// ```
#[must_use]
pub fn normalise_resource_name(raw: &str, kind: ResourceKind) -> Option<ResourcePath> {
    let (namespace, leaf) = match raw.rsplit_once('/') {
        Some((prefix, leaf)) => {
            let namespace = prefix
                .split('/')
                .map(|segment| (!segment.is_empty()).then(|| uppercase_first(segment)))
                .collect::<Option<Vec<_>>>()?;
            (namespace, leaf)
        }
        None => (Vec::new(), raw),
    };

    let mut components = leaf.split([' ', '_', '-']);
    let mut identifier = components.next().map(lower_leading_run).unwrap_or_default();
    identifier.extend(components.map(uppercase_first));

    if let Some(stripped) = identifier.strip_suffix(kind.suffix()) {
        identifier.truncate(stripped.len());
    }
    if identifier.is_empty() {
        return None;
    }
    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }

    Some(ResourcePath {
        namespace,
        identifier,
    })
}

fn uppercase_first(component: &str) -> String {
    let mut chars = component.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Lowercases the leading run of capitals, keeping the last one of a longer
/// run when lowercase text follows it: `Abc` → `abc`, `ABcd` → `aBcd`,
/// `URL` → `url`.
fn lower_leading_run(component: &str) -> String {
    let mut chars = component.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if !first.is_uppercase() {
        return component.to_owned();
    }
    if component.chars().all(char::is_uppercase) {
        return component.to_lowercase();
    }

    let run_end = component
        .char_indices()
        .find(|(_, c)| !c.is_uppercase())
        .map_or(component.len(), |(index, _)| index);
    let (run, tail) = component.split_at(run_end);

    match run.char_indices().next_back() {
        Some((last_start, _)) if last_start > 0 && !tail.is_empty() => {
            let (lowered, kept) = run.split_at(last_start);
            let mut out = lowered.to_lowercase();
            out.push_str(kept);
            out.push_str(tail);
            out
        }
        _ => first.to_lowercase().chain(chars).collect(),
    }
}
