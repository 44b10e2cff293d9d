//! Shared position conversion helpers.
//!
//! Tree-sitter positions are zero-based, with columns counted in bytes. For
//! user-facing messages, we prefer one-based line and column numbers.

/// Converts a Tree-sitter position (0-based) to one-based display coordinates.
#[must_use]
pub(crate) fn point_to_one_based(point: tree_sitter::Point) -> (u32, u32) {
    // Line/column numbers will realistically never exceed u32::MAX.
    let line = u32::try_from(point.row.saturating_add(1)).unwrap_or(u32::MAX);
    let column = u32::try_from(point.column.saturating_add(1)).unwrap_or(u32::MAX);
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, (1, 1))]
    #[case(0, 2, (1, 3))]
    #[case(4, 7, (5, 8))]
    fn converts_points(#[case] row: usize, #[case] column: usize, #[case] expected: (u32, u32)) {
        let point = tree_sitter::Point { row, column };
        assert_eq!(point_to_one_based(point), expected);
    }
}
