//! Tokenization with source positions
//!
//! Wraps the raw logos lexer into a stream of [`Token`]s that know where
//! they start and end. Positions use 1-based rows and byte columns within
//! the row, so that reassembly can slice the original lines directly.

use crate::lexing::tokens::RawToken;
use logos::Logos;
use std::fmt;

/// A location in the source: 1-based row, byte offset within that row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Token classification as seen by the stripper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    Str,
    Name,
    Number,
    Continuation,
    Newline,
    Whitespace,
    Symbol,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Comment => TokenKind::Comment,
            RawToken::Str => TokenKind::Str,
            RawToken::Name => TokenKind::Name,
            RawToken::Number => TokenKind::Number,
            RawToken::Continuation => TokenKind::Continuation,
            RawToken::Newline => TokenKind::Newline,
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::Symbol => TokenKind::Symbol,
        }
    }
}

/// A lexical unit with its location and raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Position,
    pub end: Position,
    pub text: String,
}

impl Token {
    /// The literal contents of a string token, with the prefix letters and
    /// the surrounding quotes removed. Escape sequences are left as written;
    /// the shader heuristic only does substring matching, so decoding them
    /// would not change any outcome.
    pub fn string_contents(&self) -> &str {
        let body = self
            .text
            .trim_start_matches(['r', 'R', 'b', 'B', 'u', 'U', 'f', 'F']);
        for quote in ["\"\"\"", "'''"] {
            if body.len() >= 6 && body.starts_with(quote) && body.ends_with(quote) {
                return &body[3..body.len() - 3];
            }
        }
        for quote in ["\"", "'"] {
            if body.len() >= 2 && body.starts_with(quote) && body.ends_with(quote) {
                return &body[1..body.len() - 1];
            }
        }
        body
    }
}

/// The source contains lexical structure the tokenizer cannot classify
/// (an unterminated string literal, a stray quote or backslash).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeError {
    pub at: Position,
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized lexical structure at line {}, column {}",
            self.at.row, self.at.col
        )
    }
}

impl std::error::Error for TokenizeError {}

/// Tokenize the full source, preserving position and raw text
///
/// The returned tokens are contiguous: concatenating their texts yields the
/// source exactly. Any unmatched input aborts the whole pass with an error;
/// the caller decides what the fallback is.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();
    let mut pos = Position { row: 1, col: 0 };

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let start = pos;
        let end = advance(pos, text);
        match result {
            Ok(raw) => tokens.push(Token {
                kind: raw.into(),
                start,
                end,
                text: text.to_string(),
            }),
            Err(()) => return Err(TokenizeError { at: start }),
        }
        pos = end;
    }

    Ok(tokens)
}

fn advance(mut pos: Position, text: &str) -> Position {
    for byte in text.bytes() {
        if byte == b'\n' {
            pos.row += 1;
            pos.col = 0;
        } else {
            pos.col += 1;
        }
    }
    pos
}
