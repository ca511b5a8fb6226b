//! Statement recognition
//!
//! Only assignments carry meaning. The assignment target becomes pending
//! before its right-hand side is read and enabled only after that
//! expression reduces, so `x := x + 1` cannot be the first use of `x`.

use super::Analyzer;
use crate::errors::AnalysisError;
use crate::lexer::Code;
use tracing::{debug, trace};

impl Analyzer {
    /// Recognize one statement starting at the cursor.
    ///
    /// Anything that is not an identifier is left for the statement loop to
    /// judge, unless strict statements are enabled.
    pub(crate) fn statement(&mut self) -> Result<(), AnalysisError> {
        match self.peek_code() {
            Some(Code::Identifier) => self.assignment(),
            Some(code)
                if self.options.strict_statements
                    && code.is_keyword()
                    && code != Code::End =>
            {
                Err(self.error(format!("{code} statements are not supported")))
            }
            _ => Ok(()),
        }
    }

    fn assignment(&mut self) -> Result<(), AnalysisError> {
        let target = self.tokens[self.position].lexeme.clone();
        self.variables.declare_pending(&target);
        self.advance();

        if self.peek_code() != Some(Code::Assign) {
            if self.options.strict_statements {
                return Err(self.error(format!(
                    "expected ':=' after '{target}', found {}",
                    self.describe_current()
                )));
            }
            trace!(%target, "bare identifier statement");
            return Ok(());
        }
        self.advance();

        debug!(%target, position = self.position, "assignment");
        self.expression()?;

        if !self.stack.close() {
            let message = if self.stack.has_open_paren() {
                "unbalanced parentheses".to_string()
            } else {
                format!("malformed expression assigned to '{target}'")
            };
            self.stack.clear();
            return Err(self.error(message));
        }

        self.variables.enable(&target);
        Ok(())
    }
}
