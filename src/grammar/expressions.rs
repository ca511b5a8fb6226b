//! Expression recognition
//!
//! A shift/reduce recognizer over category markers. Values are never
//! evaluated: identifiers and integer literals collapse to one `Value`
//! marker, and `value OP value` or `( value )` fold back to `Value`. There
//! are no precedence levels, only a shape check.
//!
//! Folding is eager: a new value folds into a `value OP` pair already on top
//! of the stack. Whatever cannot fold immediately (a value that follows a
//! parenthesized group, for instance) is folded when the expression closes.

use super::Analyzer;
use crate::errors::{AnalysisError, ReadViolation};
use crate::grammar::VariableState;
use crate::lexer::Code;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StackEntry {
    OpenParen,
    Value,
    Operator(Code),
}

/// Stack of category markers for the expression being recognized.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReductionStack {
    entries: Vec<StackEntry>,
}

impl ReductionStack {
    pub(crate) fn push_open_paren(&mut self) {
        self.entries.push(StackEntry::OpenParen);
    }

    pub(crate) fn push_operator(&mut self, code: Code) {
        self.entries.push(StackEntry::Operator(code));
    }

    /// Shift a value, folding `value OP` on top of the stack into it.
    pub(crate) fn push_value(&mut self) {
        if matches!(
            self.entries.as_slice(),
            [.., StackEntry::Value, StackEntry::Operator(_)]
        ) {
            self.entries.pop();
        } else {
            self.entries.push(StackEntry::Value);
        }
    }

    /// Handle `)`: collapse `( value`, otherwise drop the nearest `(`.
    ///
    /// Returns `false` if the stack holds fewer than two entries or no `(`
    /// at all.
    pub(crate) fn close_paren(&mut self) -> bool {
        if self.entries.len() < 2 {
            return false;
        }
        if self.collapse_group() {
            return true;
        }
        match self
            .entries
            .iter()
            .rposition(|entry| *entry == StackEntry::OpenParen)
        {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Handle `)` so that it closes exactly the most recent unmatched `(`.
    pub(crate) fn close_paren_strict(&mut self) -> bool {
        self.fold_operations();
        self.collapse_group()
    }

    /// Check that the finished expression reduces to a single value.
    ///
    /// Clears the stack on success and leaves it untouched otherwise.
    pub(crate) fn close(&mut self) -> bool {
        if self.entries.len() % 2 == 0 {
            return false;
        }
        self.fold_operations();
        if self.entries == [StackEntry::Value] {
            self.entries.clear();
            true
        } else {
            false
        }
    }

    pub(crate) fn has_open_paren(&self) -> bool {
        self.entries.contains(&StackEntry::OpenParen)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// `( value` on top becomes `value`.
    fn collapse_group(&mut self) -> bool {
        if matches!(
            self.entries.as_slice(),
            [.., StackEntry::OpenParen, StackEntry::Value]
        ) {
            let open = self.entries.len() - 2;
            self.entries.remove(open);
            true
        } else {
            false
        }
    }

    /// Fold `value OP value` triples on top of the stack, top down.
    fn fold_operations(&mut self) {
        while matches!(
            self.entries.as_slice(),
            [.., StackEntry::Value, StackEntry::Operator(_), StackEntry::Value]
        ) {
            let len = self.entries.len();
            self.entries.truncate(len - 2);
        }
    }
}

impl Analyzer {
    /// Recognize an expression starting at the cursor.
    ///
    /// Consumes tokens while the next one could extend the expression. The
    /// caller checks that the stack closes to a single value.
    pub(crate) fn expression(&mut self) -> Result<(), AnalysisError> {
        loop {
            let code = match self.peek_code() {
                Some(code) => code,
                None => return Err(self.error("expected an expression, found end of input")),
            };

            match code {
                Code::LParen => self.stack.push_open_paren(),
                Code::Identifier => {
                    self.check_readable()?;
                    self.stack.push_value();
                }
                Code::IntegerLiteral => self.stack.push_value(),
                Code::RParen => self.close_paren()?,
                code if code.is_operator() => self.stack.push_operator(code),
                code => {
                    return Err(self.error(format!("unexpected {code} in expression")));
                }
            }
            trace!(%code, stack = ?self.stack, "shift");

            self.advance();
            match self.peek_code() {
                Some(next) if next.continues_expression() => continue,
                _ => return Ok(()),
            }
        }
    }

    fn close_paren(&mut self) -> Result<(), AnalysisError> {
        let closed = if self.options.strict_parens {
            self.stack.close_paren_strict()
        } else {
            self.stack.close_paren()
        };

        if closed {
            Ok(())
        } else {
            Err(self.error("unbalanced parentheses"))
        }
    }

    fn check_readable(&self) -> Result<(), AnalysisError> {
        let name = &self.tokens[self.position].lexeme;
        if self.variables.is_readable(name) {
            return Ok(());
        }

        let reason = match self.variables.state(name) {
            Some(VariableState::Pending) => ReadViolation::AssignmentPending,
            _ => ReadViolation::NeverAssigned,
        };
        Err(AnalysisError::UndeclaredVariable {
            name: name.clone(),
            reason,
            position: self.position,
        })
    }
}
