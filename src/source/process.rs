//! Read, clean, back up, write: one file per run
//!
//! Order matters for the failure guarantees: nothing is written until the
//! backup copy exists, so every error before the final write leaves the
//! original file untouched.

use crate::source::backup::make_backup;
use crate::source::encoding::{detect, EncodingError, SourceEncoding};
use crate::strip::{clean_source, Options};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What one invocation did, reportable as text or JSON
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub path: PathBuf,
    pub backup_path: PathBuf,
    pub comments_removed: usize,
    pub docstrings_removed: usize,
    /// The file was written back unchanged because it could not be tokenized
    pub unchanged: bool,
}

#[derive(Debug)]
pub enum ProcessError {
    Read(PathBuf, io::Error),
    Decode(PathBuf, EncodingError),
    Backup(PathBuf, io::Error),
    Encode(PathBuf, EncodingError),
    Write(PathBuf, io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Read(path, e) => write!(f, "cannot read {}: {}", path.display(), e),
            ProcessError::Decode(path, e) => {
                write!(f, "cannot decode {}: {}", path.display(), e)
            }
            ProcessError::Backup(path, e) => {
                write!(f, "cannot back up {}: {}", path.display(), e)
            }
            ProcessError::Encode(path, e) => {
                write!(f, "cannot encode {}: {}", path.display(), e)
            }
            ProcessError::Write(path, e) => write!(f, "cannot write {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ProcessError {}

/// Read a file's bytes and decode them per the declared encoding
pub fn read_source(path: &Path) -> Result<(String, SourceEncoding), ProcessError> {
    let raw = fs::read(path).map_err(|e| ProcessError::Read(path.to_path_buf(), e))?;
    let encoding = detect(&raw).map_err(|e| ProcessError::Decode(path.to_path_buf(), e))?;
    let text = encoding
        .decode(&raw)
        .map_err(|e| ProcessError::Decode(path.to_path_buf(), e))?;
    Ok((text, encoding))
}

/// Clean one file in place, creating a backup first
///
/// The write uses the originally detected encoding and no newline
/// translation. There is no transactional guarantee beyond the backup: a
/// write failure after the backup succeeded leaves whatever was written.
pub fn process_file(path: &Path, options: &Options) -> Result<ProcessReport, ProcessError> {
    let (source, encoding) = read_source(path)?;
    let result = clean_source(&source, options);

    let record = make_backup(path).map_err(|e| ProcessError::Backup(path.to_path_buf(), e))?;
    let bytes = encoding
        .encode(&result.text)
        .map_err(|e| ProcessError::Encode(path.to_path_buf(), e))?;
    fs::write(path, bytes).map_err(|e| ProcessError::Write(path.to_path_buf(), e))?;

    Ok(ProcessReport {
        path: path.to_path_buf(),
        backup_path: record.backup,
        comments_removed: result.comments_removed,
        docstrings_removed: result.docstrings_removed,
        unchanged: result.fallback,
    })
}
