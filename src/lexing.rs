//! Lexical analysis of Python source
//!
//! Tokenization is the required half of the pipeline: the stripper cannot
//! produce any output without a successful token stream, so a lexical error
//! here surfaces as an error instead of being skipped. Tokens tile the source
//! contiguously and carry their raw text, which is what makes reassembly a
//! matter of removing byte ranges rather than re-deriving formatting.

pub mod reassemble;
pub mod tokenize;
pub mod tokens;

pub use reassemble::reassemble;
pub use tokenize::{tokenize, Position, Token, TokenKind, TokenizeError};
