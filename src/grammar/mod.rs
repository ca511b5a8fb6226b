//! Grammar analysis
//!
//! The [`Analyzer`] walks the token sequence produced by
//! [`crate::lexer::tokenize`] and decides whether it is a valid program:
//!
//! ```text
//! program    = "begin" statement { ";" statement } "end" "#"
//! statement  = [ IDENT [ ":=" expression ] ]
//! expression = any run of values, operators and parentheses that reduces
//!              to a single value
//! ```
//!
//! - This module: the analyzer state and the statement loop
//! - `statements`: assignment recognition and the define-before-use rule
//! - `expressions`: the shift/reduce recognizer over category codes
//! - `variables`: the pending/enabled lifecycle of assignment targets
//! - `options`: strictness switches
//!
//! No syntax tree is built. Expressions are checked for shape only, on a
//! stack of category markers, and discarded once they reduce to one value.
//!
//! # Implementation
//!
//! Analyzer methods are split across the submodules using `impl Analyzer`
//! blocks, all sharing the cursor, the reduction stack and the variable
//! table defined here.

mod expressions;
pub mod options;
mod statements;
pub mod variables;

pub use options::AnalyzerOptions;
pub use variables::{VariableState, VariableTable};

use crate::errors::{AnalysisError, LexError};
use crate::lexer::{self, Code, Token};
use expressions::ReductionStack;
use tracing::debug;

/// Grammar analyzer over one token sequence.
///
/// All state (cursor, reduction stack, variable table) is owned by the
/// analyzer and reset at the start of every [`Analyzer::analyse`] call.
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) stack: ReductionStack,
    pub(crate) variables: VariableTable,
    pub(crate) options: AnalyzerOptions,
    accepted: bool,
}

impl Analyzer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_options(tokens, AnalyzerOptions::default())
    }

    pub fn with_options(tokens: Vec<Token>, options: AnalyzerOptions) -> Self {
        Self {
            tokens,
            position: 0,
            stack: ReductionStack::default(),
            variables: VariableTable::new(),
            options,
            accepted: false,
        }
    }

    /// Tokenize `source` and build an analyzer over the result.
    pub fn from_source(source: &str) -> Result<Self, LexError> {
        Ok(Self::new(lexer::tokenize(source)?))
    }

    /// Analyse the whole token sequence.
    ///
    /// Returns `Ok(true)` when the program is accepted and `Ok(false)` when
    /// the tokens run out after a `;` without the closing `end #`. Any
    /// violation is returned as an error and aborts the run.
    pub fn analyse(&mut self) -> Result<bool, AnalysisError> {
        self.reset();

        if self.peek_code() != Some(Code::Begin) {
            return Err(self.error(format!(
                "program must start with 'begin', found {}",
                self.describe_current()
            )));
        }
        self.advance();

        while self.position < self.tokens.len() {
            self.statement()?;

            if self.peek_code() == Some(Code::Semicolon) {
                self.advance();
            } else if self.position + 2 == self.tokens.len() {
                self.advance();
                self.expect_program_end()?;
                self.accepted = true;
                debug!(variables = self.variables.len(), "program accepted");
                return Ok(true);
            } else {
                return Err(self.error(format!(
                    "expected ';' or 'end #', found {}",
                    self.describe_current()
                )));
            }
        }

        debug!("tokens ran out before 'end #'");
        Ok(false)
    }

    /// Verdict of the last [`Analyzer::analyse`] call.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn options(&self) -> AnalyzerOptions {
        self.options
    }

    fn reset(&mut self) {
        self.position = 0;
        self.stack.clear();
        self.variables.clear();
        self.accepted = false;
    }

    fn expect_program_end(&self) -> Result<(), AnalysisError> {
        match &self.tokens[self.tokens.len() - 2..] {
            [end, hash] if end.code == Code::End && hash.code == Code::Hash => Ok(()),
            _ => Err(AnalysisError::grammar(
                "program must finish with 'end #'",
                self.tokens.len() - 2,
            )),
        }
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn peek_code(&self) -> Option<Code> {
        self.peek().map(|token| token.code)
    }

    pub(crate) fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    pub(crate) fn describe_current(&self) -> String {
        match self.peek() {
            Some(token) if token.code == Code::Identifier => {
                format!("identifier '{}'", token.lexeme)
            }
            Some(token) if token.code == Code::IntegerLiteral => {
                format!("integer literal {}", token.lexeme)
            }
            Some(token) => token.code.to_string(),
            None => "end of input".to_string(),
        }
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> AnalysisError {
        AnalysisError::grammar(message, self.position)
    }
}
