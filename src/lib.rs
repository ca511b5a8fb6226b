//! # Introduction
//!
//! lexgram checks programs written in a minimal imperative language:
//!
//! ```text
//! begin
//!     x := 9;            // assignment
//!     y := (x + 1) * 3   /* arithmetic and relational operators */
//! end #
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Source → Comment stripping → Tokenizer → Tokens → Analyzer → Verdict
//! ```
//!
//! 1. [`lexer`] — removes comments, splits the text into lexemes and
//!    classifies each one against the shared code table.
//! 2. [`grammar`] — checks the token sequence against the fixed grammar and
//!    enforces define-before-use on identifiers.
//! 3. [`errors`] — error types for both stages. The first error aborts the
//!    run; there is no recovery.
//!
//! [`check`] runs the whole pipeline on a fresh analyzer.

pub mod errors;
pub mod grammar;
pub mod lexer;

pub use errors::{AnalysisError, Error, LexError, ReadViolation};
pub use grammar::{Analyzer, AnalyzerOptions, VariableState, VariableTable};
pub use lexer::{tokenize, Code, Token};

/// Tokenize and analyse `source` with the default options.
pub fn check(source: &str) -> Result<bool, Error> {
    check_with(source, AnalyzerOptions::default())
}

/// Tokenize and analyse `source` with explicit analyzer options.
pub fn check_with(source: &str, options: AnalyzerOptions) -> Result<bool, Error> {
    let tokens = tokenize(source)?;
    let mut analyzer = Analyzer::with_options(tokens, options);
    Ok(analyzer.analyse()?)
}
