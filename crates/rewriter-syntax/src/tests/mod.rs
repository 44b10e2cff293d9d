//! Crate-level tests for rewriter-syntax.
