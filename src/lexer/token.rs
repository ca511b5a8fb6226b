//! Category codes and tokens
//!
//! The code table is shared by the tokenizer and the grammar analyzer. The
//! numeric values are part of the external interface and must not change.

use std::fmt;

/// Category code of a lexeme.
///
/// Discriminants are the numeric codes of the code table. [`Code::Identifier`]
/// and [`Code::IntegerLiteral`] are not listed in the table; they are assigned
/// by pattern match during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Code {
    // End-of-input marker
    Hash = 0,

    // Keywords
    Begin = 1,
    If = 2,
    Then = 3,
    While = 4,
    Do = 5,
    End = 6,

    // Pattern-classified
    Identifier = 10,
    IntegerLiteral = 11,

    // Operators
    Plus = 13,    // +
    Minus = 14,   // -
    Star = 15,    // *
    Slash = 16,   // /
    Colon = 17,   // :
    Assign = 18,  // :=
    Lt = 20,      // <
    NotEq = 21,   // <>
    Le = 22,      // <=
    Gt = 23,      // >
    Ge = 24,      // >=
    Eq = 25,      // =

    // Delimiters
    Semicolon = 26, // ;
    LParen = 27,    // (
    RParen = 28,    // )
}

impl Code {
    /// Looks up a lexeme in the code table.
    ///
    /// Returns `None` for anything not literally listed, including
    /// identifiers and integer literals.
    pub fn from_symbol(symbol: &str) -> Option<Code> {
        let code = match symbol {
            "begin" => Code::Begin,
            "if" => Code::If,
            "then" => Code::Then,
            "while" => Code::While,
            "do" => Code::Do,
            "end" => Code::End,
            "+" => Code::Plus,
            "-" => Code::Minus,
            "*" => Code::Star,
            "/" => Code::Slash,
            ":" => Code::Colon,
            ":=" => Code::Assign,
            "<" => Code::Lt,
            "<>" => Code::NotEq,
            "<=" => Code::Le,
            ">" => Code::Gt,
            ">=" => Code::Ge,
            "=" => Code::Eq,
            ";" => Code::Semicolon,
            "(" => Code::LParen,
            ")" => Code::RParen,
            "#" => Code::Hash,
            _ => return None,
        };
        Some(code)
    }

    /// The integer category code.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Binary operators accepted inside expressions.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Code::Plus
                | Code::Minus
                | Code::Star
                | Code::Slash
                | Code::Colon
                | Code::Lt
                | Code::NotEq
                | Code::Le
                | Code::Gt
                | Code::Ge
                | Code::Eq
        )
    }

    /// Identifiers and integer literals.
    pub fn is_value(self) -> bool {
        matches!(self, Code::Identifier | Code::IntegerLiteral)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Code::Begin | Code::If | Code::Then | Code::While | Code::Do | Code::End
        )
    }

    /// Whether a token with this code can extend an expression in progress.
    pub fn continues_expression(self) -> bool {
        self.is_value() || self.is_operator() || matches!(self, Code::LParen | Code::RParen)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Hash => write!(f, "'#'"),
            Code::Begin => write!(f, "'begin'"),
            Code::If => write!(f, "'if'"),
            Code::Then => write!(f, "'then'"),
            Code::While => write!(f, "'while'"),
            Code::Do => write!(f, "'do'"),
            Code::End => write!(f, "'end'"),
            Code::Identifier => write!(f, "identifier"),
            Code::IntegerLiteral => write!(f, "integer literal"),
            Code::Plus => write!(f, "'+'"),
            Code::Minus => write!(f, "'-'"),
            Code::Star => write!(f, "'*'"),
            Code::Slash => write!(f, "'/'"),
            Code::Colon => write!(f, "':'"),
            Code::Assign => write!(f, "':='"),
            Code::Lt => write!(f, "'<'"),
            Code::NotEq => write!(f, "'<>'"),
            Code::Le => write!(f, "'<='"),
            Code::Gt => write!(f, "'>'"),
            Code::Ge => write!(f, "'>='"),
            Code::Eq => write!(f, "'='"),
            Code::Semicolon => write!(f, "';'"),
            Code::LParen => write!(f, "'('"),
            Code::RParen => write!(f, "')'"),
        }
    }
}

/// A classified lexeme: `(category code, lexeme text)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub code: Code,
    pub lexeme: String,
}

impl Token {
    pub fn new(code: Code, lexeme: impl Into<String>) -> Self {
        Self {
            code,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}')", self.code.value(), self.lexeme)
    }
}
