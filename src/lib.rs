//! # pyshave
//!
//! Removes comments and docstring statements from Python source files,
//! with a few configurable exceptions: the shebang line, the encoding
//! declaration, TODO/FIXME markers, and strings that look like embedded
//! shader source.
//!
//! The pipeline is two decoupled passes over the same text. Tokenization
//! ([`lexing`]) is required: without a token stream there is no output, so
//! a lexical error makes the run fall back to returning the input
//! unchanged. Statement analysis ([`analysis`]) is best-effort: it only
//! finds the docstring positions, and a structural failure merely disables
//! docstring removal. The stripper itself ([`strip`]) is a pure function;
//! backups, encodings, and the in-place rewrite live in [`source`].

pub mod analysis;
pub mod lexing;
pub mod source;
pub mod strip;
