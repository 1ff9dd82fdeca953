//! Structural analysis over token streams
//!
//! This is the optional half of the pipeline: it only decides which string
//! literals are docstring-like, so a failure here degrades to "no strings
//! are removed" instead of aborting the run.

pub mod statements;

pub use statements::bare_string_positions;
