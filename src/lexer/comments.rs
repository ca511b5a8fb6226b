//! Comment stripping
//!
//! Block comments (`/* ... */`) and line comments (`// ...`) are removed
//! before the text is split into lexemes. Whichever comment starts first is
//! removed, then the search restarts on the updated text, so a marker formed
//! across a removed comment (`/` + `/*x*/` + `/`) is seen on the next pass.

use crate::errors::LexError;
use tracing::trace;

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const LINE_OPEN: &str = "//";

/// Length of the source excerpt quoted in comment errors.
const EXCERPT_LEN: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comment {
    Block(usize),
    Line(usize),
}

/// Remove every comment from `source`.
pub fn strip_comments(source: &str) -> Result<String, LexError> {
    let mut text = source.to_string();

    while let Some(comment) = next_comment(&text) {
        match comment {
            Comment::Block(start) => remove_block_comment(&mut text, start)?,
            Comment::Line(start) => remove_line_comment(&mut text, start),
        }
    }

    Ok(text)
}

/// Find the comment that starts first.
fn next_comment(text: &str) -> Option<Comment> {
    // Both openers begin with '/' and differ in the second byte, so they
    // never start at the same index.
    match (text.find(BLOCK_OPEN), text.find(LINE_OPEN)) {
        (None, None) => None,
        (Some(block), Some(line)) if line < block => Some(Comment::Line(line)),
        (Some(block), _) => Some(Comment::Block(block)),
        (None, Some(line)) => Some(Comment::Line(line)),
    }
}

fn remove_block_comment(text: &mut String, start: usize) -> Result<(), LexError> {
    if text[..start].contains(BLOCK_CLOSE) {
        return Err(LexError::StrayCommentClose {
            excerpt: excerpt(text, start),
        });
    }

    // The closer may not reuse the opener's '*', so `/*/` stays open.
    let body = start + BLOCK_OPEN.len();
    let close = text[body..]
        .find(BLOCK_CLOSE)
        .map(|offset| body + offset)
        .ok_or_else(|| LexError::UnterminatedComment {
            excerpt: excerpt(text, start),
        })?;

    let end = close + BLOCK_CLOSE.len();
    trace!(start, end, "removing block comment");
    text.replace_range(start..end, "");
    Ok(())
}

fn remove_line_comment(text: &mut String, start: usize) {
    match text[start..].find('\n') {
        Some(offset) => {
            // The terminator goes too; a `\r\n` ends at its `\n`.
            let end = start + offset + 1;
            trace!(start, end, "removing line comment");
            text.replace_range(start..end, "");
        }
        None => {
            // Last line of the file is a comment
            trace!(start, "removing trailing line comment");
            text.truncate(start);
        }
    }
}

fn excerpt(text: &str, start: usize) -> String {
    text[start..]
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(EXCERPT_LEN)
        .collect()
}
