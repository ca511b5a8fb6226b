//! Analyzer configuration

/// Switches between the permissive default grammar and stricter checks.
///
/// The default accepts exactly what the reference grammar accepts: a `)`
/// that does not close `( value` drops the nearest `(` on the stack, and an
/// identifier that is not followed by `:=` is skipped as a statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Every `)` must close the most recent unmatched `(`.
    pub strict_parens: bool,
    /// Reject bare identifiers and statements that start with a keyword.
    pub strict_statements: bool,
}

impl AnalyzerOptions {
    /// Both strict checks enabled.
    pub fn strict() -> Self {
        Self {
            strict_parens: true,
            strict_statements: true,
        }
    }

    pub fn with_strict_parens(mut self) -> Self {
        self.strict_parens = true;
        self
    }

    pub fn with_strict_statements(mut self) -> Self {
        self.strict_statements = true;
        self
    }
}
