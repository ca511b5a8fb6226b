//! Error types for both analysis stages
//!
//! [`LexError`] covers comment stripping and token classification,
//! [`AnalysisError`] covers the grammar analyzer. [`Error`] is the union
//! returned by [`crate::check`].
//!
//! All errors are fatal - the first one aborts the current run and there is
//! no partial result.

use thiserror::Error;

/// Errors raised while stripping comments or classifying lexemes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A `/*` with no `*/` after it
    #[error("unterminated block comment starting at `{excerpt}`")]
    UnterminatedComment { excerpt: String },

    /// A `*/` found before the `/*` being closed
    #[error("comment close `*/` appears before the opening `/*` at `{excerpt}`")]
    StrayCommentClose { excerpt: String },

    /// Lexeme is not in the code table and is neither an identifier nor an integer
    #[error("cannot classify lexeme `{lexeme}`")]
    UnclassifiedLexeme { lexeme: String },
}

impl LexError {
    /// Whether this is a comment error rather than a classification error.
    pub fn is_comment_error(&self) -> bool {
        matches!(
            self,
            LexError::UnterminatedComment { .. } | LexError::StrayCommentClose { .. }
        )
    }
}

/// Why an identifier could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadViolation {
    /// Never an assignment target
    NeverAssigned,
    /// Target of an assignment whose right-hand side is still being analysed
    AssignmentPending,
}

impl std::fmt::Display for ReadViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadViolation::NeverAssigned => write!(f, "it was never assigned"),
            ReadViolation::AssignmentPending => {
                write!(f, "its assignment has not completed")
            }
        }
    }
}

/// Errors raised by the grammar analyzer.
///
/// `position` is the token index the cursor was at when the error was
/// detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Generic syntactic violation
    #[error("grammar error at token {position}: {message}")]
    Grammar { message: String, position: usize },

    /// Identifier read before it is safe to read
    #[error("variable `{name}` read at token {position} but {reason}")]
    UndeclaredVariable {
        name: String,
        reason: ReadViolation,
        position: usize,
    },
}

impl AnalysisError {
    pub(crate) fn grammar(message: impl Into<String>, position: usize) -> Self {
        AnalysisError::Grammar {
            message: message.into(),
            position,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            AnalysisError::Grammar { position, .. }
            | AnalysisError::UndeclaredVariable { position, .. } => *position,
        }
    }

    pub fn is_grammar_error(&self) -> bool {
        matches!(self, AnalysisError::Grammar { .. })
    }

    pub fn is_undeclared_variable(&self) -> bool {
        matches!(self, AnalysisError::UndeclaredVariable { .. })
    }
}

/// Any error from the full lex + analyse pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl Error {
    pub fn is_comment_error(&self) -> bool {
        matches!(self, Error::Lex(e) if e.is_comment_error())
    }

    pub fn is_grammar_error(&self) -> bool {
        matches!(self, Error::Analysis(e) if e.is_grammar_error())
    }

    pub fn is_undeclared_variable(&self) -> bool {
        matches!(self, Error::Analysis(e) if e.is_undeclared_variable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undeclared_message_distinguishes_reason() {
        let never = AnalysisError::UndeclaredVariable {
            name: "y".to_string(),
            reason: ReadViolation::NeverAssigned,
            position: 3,
        };
        let pending = AnalysisError::UndeclaredVariable {
            name: "x".to_string(),
            reason: ReadViolation::AssignmentPending,
            position: 3,
        };
        assert_eq!(
            never.to_string(),
            "variable `y` read at token 3 but it was never assigned"
        );
        assert!(pending.to_string().ends_with("its assignment has not completed"));
    }

    #[test]
    fn test_error_classification() {
        let err: Error = LexError::UnterminatedComment {
            excerpt: "/* x".to_string(),
        }
        .into();
        assert!(err.is_comment_error());
        assert!(!err.is_grammar_error());

        let err: Error = AnalysisError::grammar("missing `begin`", 0).into();
        assert!(err.is_grammar_error());
        assert_eq!(err.to_string(), "grammar error at token 0: missing `begin`");
    }
}
