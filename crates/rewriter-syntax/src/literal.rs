//! Static evaluation of Swift string literals.

/// Returns the value the source text of a string literal represents.
///
/// Returns `None` when the value is not statically known: the literal
/// contains an interpolation, an invalid escape, or is a multi-line literal.
#[must_use]
pub(crate) fn represented_value(text: &str) -> Option<String> {
    let hash_count = text.chars().take_while(|c| *c == '#').count();
    let hashes = "#".repeat(hash_count);
    let quoted = text.get(hash_count..)?.strip_suffix(hashes.as_str())?;
    if quoted.starts_with(r#"""""#) {
        return None;
    }
    let body = quoted.strip_prefix('"')?.strip_suffix('"')?;

    let escape = format!("\\{hashes}");
    let mut value = String::with_capacity(body.len());
    let mut rest = body;
    while !rest.is_empty() {
        if let Some(escaped) = rest.strip_prefix(escape.as_str()) {
            let (resolved, tail) = resolve_escape(escaped)?;
            value.push(resolved);
            rest = tail;
            continue;
        }
        let mut chars = rest.chars();
        let Some(c) = chars.next() else { break };
        value.push(c);
        rest = chars.as_str();
    }
    Some(value)
}

/// Resolves the escape sequence at the start of `escaped` (the text after the
/// backslash and any raw-string hashes).
fn resolve_escape(escaped: &str) -> Option<(char, &str)> {
    let mut chars = escaped.chars();
    let resolved = match chars.next()? {
        '0' => '\0',
        '\\' => '\\',
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        '"' => '"',
        '\'' => '\'',
        'u' => {
            let (digits, tail) = chars.as_str().strip_prefix('{')?.split_once('}')?;
            let scalar = u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)?;
            return Some((scalar, tail));
        }
        // `(` starts an interpolation; anything else is not a valid escape.
        _ => return None,
    };
    Some((resolved, chars.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#""abc""#, Some("abc"))]
    #[case(r#""""#, Some(""))]
    #[case(r#""a\"b\\c""#, Some("a\"b\\c"))]
    #[case(r#""tab\tend""#, Some("tab\tend"))]
    #[case(r#""\u{C5}r""#, Some("År"))]
    #[case(r##"#"raw \(x) "q""#"##, Some("raw \\(x) \"q\""))]
    #[case(r##"#"esc\#t"#"##, Some("esc\t"))]
    #[case(r#""a\(b)c""#, None)]
    #[case(r##"#"a\#(b)c"#"##, None)]
    #[case(r#""bad\qescape""#, None)]
    #[case("\"\"\"\nabc\n\"\"\"", None)]
    fn evaluates_literals(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(represented_value(text).as_deref(), expected);
    }
}
