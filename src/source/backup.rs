//! Backup creation with collision-resistant naming
//!
//! The backup name is probed sequentially: `f.py.bak` first, then
//! `f.py.bak1`, `f.py.bak2`, ... until a free name is found. The copy is
//! byte-for-byte; it happens before the original is overwritten.

use std::io;
use std::path::{Path, PathBuf};

/// Original path and the backup path chosen for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupRecord {
    pub original: PathBuf,
    pub backup: PathBuf,
}

/// First non-colliding backup name for `path`
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut candidate = with_suffix(path, None);
    let mut counter = 1u32;
    while candidate.exists() {
        candidate = with_suffix(path, Some(counter));
        counter += 1;
    }
    candidate
}

fn with_suffix(path: &Path, counter: Option<u32>) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    match counter {
        None => name.push(".bak"),
        Some(n) => name.push(format!(".bak{}", n)),
    }
    PathBuf::from(name)
}

/// Copy `path` to the first free backup name
pub fn make_backup(path: &Path) -> io::Result<BackupRecord> {
    let backup = backup_path_for(path);
    std::fs::copy(path, &backup)?;
    Ok(BackupRecord {
        original: path.to_path_buf(),
        backup,
    })
}
