//! File-level concerns: encodings, backups, and the read → clean → write cycle
//!
//! Everything here is thin glue around [`crate::strip::clean_source`]; the
//! stripper itself never touches the filesystem.

pub mod backup;
pub mod encoding;
pub mod process;

pub use backup::{make_backup, BackupRecord};
pub use encoding::SourceEncoding;
pub use process::{process_file, ProcessError, ProcessReport};
