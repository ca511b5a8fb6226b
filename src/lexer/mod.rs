//! Lexical analysis
//!
//! Converts raw program text into a flat sequence of [`Token`]s:
//! - [`comments`]: comment stripping (`/* ... */` and `// ...`)
//! - [`token`]: the code table and the token type
//!
//! Operators and delimiters may abut their neighbours without whitespace
//! (`x:=x+1;`), so every whitespace-separated unit is split again around
//! the symbols of the code table before it is classified.

pub mod comments;
pub mod token;

pub use comments::strip_comments;
pub use token::{Code, Token};

use crate::errors::LexError;
use tracing::debug;

/// Symbols a unit is split around, in the order they are tried.
///
/// Two-character symbols come before their one-character prefixes so that
/// `:=` is never read as `:` followed by `=`.
const SPLIT_SYMBOLS: [&str; 16] = [
    ":=", ">=", "<>", "<=", "+", "-", "*", "/", ":", "<", ">", "=", ";", "(", ")", "#",
];

/// Strip comments from `source` and classify every lexeme.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let text = strip_comments(source)?;

    let tokens = split_lexemes(&text)
        .into_iter()
        .map(|lexeme| classify(lexeme).map(|code| Token::new(code, lexeme)))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Split comment-free text into lexemes without classifying them.
pub fn split_lexemes(text: &str) -> Vec<&str> {
    let mut lexemes = Vec::new();
    for unit in text.split(is_separator).filter(|unit| !unit.is_empty()) {
        split_unit(unit, &mut lexemes);
    }
    lexemes
}

/// Classify a single lexeme.
///
/// The code table is consulted first, so keywords never become identifiers.
pub fn classify(lexeme: &str) -> Result<Code, LexError> {
    if let Some(code) = Code::from_symbol(lexeme) {
        Ok(code)
    } else if is_identifier(lexeme) {
        Ok(Code::Identifier)
    } else if is_integer(lexeme) {
        Ok(Code::IntegerLiteral)
    } else {
        Err(LexError::UnclassifiedLexeme {
            lexeme: lexeme.to_string(),
        })
    }
}

fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Split one whitespace-free unit around the symbols it contains.
///
/// For the first symbol (in [`SPLIT_SYMBOLS`] order) found in a piece, the
/// piece becomes prefix, symbol and suffix, and the prefix and suffix are
/// scanned again. Pieces are kept on an explicit stack with the leftmost on
/// top, so lexemes come out in source order.
fn split_unit<'a>(unit: &'a str, lexemes: &mut Vec<&'a str>) {
    let mut pending = vec![unit];

    while let Some(piece) = pending.pop() {
        if piece.is_empty() {
            continue;
        }

        match find_symbol(piece) {
            Some((index, symbol)) if piece.len() > symbol.len() => {
                let end = index + symbol.len();
                pending.push(&piece[end..]);
                pending.push(&piece[index..end]);
                pending.push(&piece[..index]);
            }
            _ => lexemes.push(piece),
        }
    }
}

fn find_symbol(piece: &str) -> Option<(usize, &'static str)> {
    SPLIT_SYMBOLS
        .iter()
        .find_map(|symbol| piece.find(symbol).map(|index| (index, *symbol)))
}

fn is_identifier(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|ch| ch.is_ascii_alphanumeric())
}

fn is_integer(lexeme: &str) -> bool {
    !lexeme.is_empty() && lexeme.bytes().all(|b| b.is_ascii_digit())
}
