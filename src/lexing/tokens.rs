//! Raw token definitions for Python's lexical grammar
//!
//! The tokens are defined using the logos derive macro. The stripper only
//! needs to tell comments and string literals apart from everything else, so
//! the grammar is deliberately permissive about code it merely carries
//! through: names, numbers, and single-character symbols are enough to
//! reconstruct the source and to track statement boundaries.
use logos::Logos;

/// Raw lexical classes produced by the logos lexer
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    /// A `#` comment running to the end of the line
    #[regex(r"#[^\r\n]*")]
    Comment,

    /// A string literal with an optional prefix (r, b, u, f and their
    /// two-letter combinations). Triple-quoted contents may contain one or
    /// two quote characters in a row but never three; the trailing
    /// optional quotes handle contents that end right before the closing
    /// delimiter.
    #[regex(r#"[rRbBuUfF]{0,2}"""([^"\\]|\\[\s\S]|"[^"\\]|"\\[\s\S]|""[^"\\]|""\\[\s\S])*("|"")?""""#)]
    #[regex(r"[rRbBuUfF]{0,2}'''([^'\\]|\\[\s\S]|'[^'\\]|'\\[\s\S]|''[^'\\]|''\\[\s\S])*('|'')?'''")]
    #[regex(r#"[rRbBuUfF]{0,2}"([^"\\\r\n]|\\[\s\S])*""#)]
    #[regex(r"[rRbBuUfF]{0,2}'([^'\\\r\n]|\\[\s\S])*'")]
    Str,

    /// An identifier or keyword
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,

    /// A numeric literal (loose: segmentation matters, the value does not)
    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9]+)?[jJ]?")]
    #[regex(r"0[xXoObB][0-9a-fA-F_]+")]
    Number,

    /// A backslash-newline line continuation
    #[regex(r"\\\r?\n")]
    Continuation,

    #[regex(r"\r?\n")]
    Newline,

    /// Horizontal whitespace, including indentation
    #[regex(r"[ \t\f]+")]
    Whitespace,

    /// Any other single character. Bare quotes and stray backslashes are
    /// excluded so that unterminated strings surface as lexical errors
    /// instead of being silently split into pieces.
    #[regex(r#"[^ \t\f\r\n"'\\a-zA-Z0-9_#]"#)]
    Symbol,
}
