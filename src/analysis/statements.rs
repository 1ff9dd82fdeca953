//! Statement-boundary tracking for docstring detection
//!
//! A docstring is a bare string-expression statement: a statement whose
//! entire content is a single string literal. Rather than building a full
//! syntax tree, this module tracks statement boundaries directly in the
//! token stream. A statement ends at a newline or `;` at bracket depth
//! zero, or at a `:` at depth zero when the statement opened with a
//! compound-statement keyword (so `def f(): "doc"` yields a fresh
//! statement for the string, while `x: int = 1` and `f = lambda: "x"` do
//! not).
//!
//! The position set is computed once, from the full original token stream,
//! before any filtering happens.

use crate::lexing::{Position, Token, TokenKind};
use std::collections::HashSet;

/// Keywords that open an indented suite after a `:` at depth zero
const SUITE_KEYWORDS: &[&str] = &[
    "class", "def", "if", "elif", "else", "for", "while", "try", "except", "finally", "with",
    "match", "case", "async",
];

/// Start positions of every bare string-expression statement
///
/// Best-effort: on structural failure (unbalanced brackets) the set is
/// empty and the caller proceeds without docstring removal.
pub fn bare_string_positions(tokens: &[Token]) -> HashSet<Position> {
    scan(tokens).unwrap_or_default()
}

struct Unbalanced;

fn scan(tokens: &[Token]) -> Result<HashSet<Position>, Unbalanced> {
    let mut positions = HashSet::new();
    let mut depth: usize = 0;
    let mut stmt: Vec<&Token> = Vec::new();

    for token in tokens {
        match token.kind {
            // Never part of a statement, never break bareness
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::Continuation => {}
            TokenKind::Newline => {
                if depth == 0 {
                    flush(&mut stmt, &mut positions);
                }
            }
            TokenKind::Symbol => match token.text.as_str() {
                "(" | "[" | "{" => {
                    depth += 1;
                    stmt.push(token);
                }
                ")" | "]" | "}" => {
                    depth = depth.checked_sub(1).ok_or(Unbalanced)?;
                    stmt.push(token);
                }
                ";" if depth == 0 => flush(&mut stmt, &mut positions),
                ":" if depth == 0 && opens_suite(&stmt) => flush(&mut stmt, &mut positions),
                _ => stmt.push(token),
            },
            TokenKind::Str | TokenKind::Name | TokenKind::Number => stmt.push(token),
        }
    }

    if depth != 0 {
        return Err(Unbalanced);
    }
    flush(&mut stmt, &mut positions);
    Ok(positions)
}

fn flush(stmt: &mut Vec<&Token>, positions: &mut HashSet<Position>) {
    if let [only] = stmt.as_slice() {
        if only.kind == TokenKind::Str {
            positions.insert(only.start);
        }
    }
    stmt.clear();
}

fn opens_suite(stmt: &[&Token]) -> bool {
    stmt.first().is_some_and(|token| {
        token.kind == TokenKind::Name && SUITE_KEYWORDS.contains(&token.text.as_str())
    })
}
