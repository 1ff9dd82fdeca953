//! Comment and docstring removal
//!
//! The stripper is a pure text transformation: it owns no file handles and
//! can be exercised entirely in memory. File-level plumbing lives in
//! [`crate::source`].

pub mod cleaner;
pub mod postprocess;
pub mod shader;

pub use cleaner::{clean_source, CleanResult, Options};
