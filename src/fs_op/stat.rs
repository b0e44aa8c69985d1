use std::fs;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::fs_op::error::{PathError, Result};
use crate::fs_op::handle::PathHandle;

/// Metadata snapshot taken from a single `stat` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    /// Size in bytes.
    pub len: u64,
    /// Permission bits. Off Unix this is synthesized from the read-only flag.
    pub mode: u32,
    pub modified: Option<SystemTime>,
    pub is_dir: bool,
    /// True for regular files only (not sockets, FIFOs, devices). Only
    /// `PathType` looks at this; `is_file()` means "not a directory".
    pub is_regular: bool,
}

impl Info {
    fn from_metadata(meta: &fs::Metadata) -> Self {
        Self {
            len: meta.len(),
            mode: mode_bits(meta),
            modified: meta.modified().ok(),
            is_dir: meta.is_dir(),
            is_regular: meta.is_file(),
        }
    }

    /// Modification time in the local timezone, if the platform reports one.
    pub fn modified_local(&self) -> Option<DateTime<Local>> {
        self.modified.map(DateTime::<Local>::from)
    }
}

#[cfg(unix)]
fn mode_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

/// Lightweight classification of a path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The metadata query failed (missing path, or any other error).
    NotFound,
    Directory,
    /// A regular file.
    File,
    /// Exists but is neither a regular file nor a directory
    /// (socket, FIFO, block device, ...).
    Other,
}

impl PathType {
    fn of(info: Option<&Info>) -> Self {
        match info {
            None => PathType::NotFound,
            Some(i) if i.is_dir => PathType::Directory,
            Some(i) if i.is_regular => PathType::File,
            Some(_) => PathType::Other,
        }
    }
}

impl PathHandle {
    /// Return the cached snapshot, querying the filesystem on first use.
    ///
    /// Symlinks are followed. A failed query is not cached, so a later call
    /// tries again.
    pub fn info(&self) -> Result<&Info> {
        self.info.get_or_try_init(|| {
            tracing::trace!("stat {}", self.path.display());
            fs::metadata(&self.path)
                .map(|m| Info::from_metadata(&m))
                .map_err(|e| PathError::from_io(&self.path, e))
        })
    }

    /// True iff [`info`](Self::info) succeeds.
    pub fn exists(&self) -> bool {
        self.info().is_ok()
    }

    /// True for anything that exists and is not a directory: regular files,
    /// but also FIFOs, sockets and devices. Use [`kind`](Self::kind) to tell
    /// those apart.
    ///
    /// Every metadata failure reads as `false`, including permission errors;
    /// call [`info`](Self::info) to tell them apart.
    pub fn is_file(&self) -> bool {
        matches!(self.kind(), PathType::File | PathType::Other)
    }

    /// True for a directory. Metadata failures read as `false`, as in
    /// [`is_file`](Self::is_file).
    pub fn is_dir(&self) -> bool {
        self.kind() == PathType::Directory
    }

    pub fn kind(&self) -> PathType {
        PathType::of(self.info().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn path_type_nonexistent() {
        let tmp = tempdir().unwrap();
        let p = PathHandle::new(tmp.path().join("no_such_file_hopefully"));
        assert_eq!(p.kind(), PathType::NotFound);
        assert!(!p.exists());
        assert!(!p.is_file());
        assert!(!p.is_dir());
        assert!(matches!(p.info(), Err(PathError::NotFound(q)) if q == p.as_path()));
    }

    #[test]
    fn path_type_file_and_dir() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        let file = PathHandle::new(file);
        assert_eq!(file.kind(), PathType::File);
        assert!(file.exists());
        assert!(file.is_file());
        assert!(!file.is_dir());
        assert_eq!(file.info().unwrap().len, 5);

        let dir = tmp.path().join("subdir");
        fs::create_dir(&dir).unwrap();
        let dir = PathHandle::new(dir);
        assert_eq!(dir.kind(), PathType::Directory);
        assert!(dir.exists());
        assert!(dir.is_dir());
        assert!(!dir.is_file());
    }

    #[test]
    fn failed_query_is_retried() {
        let tmp = tempdir().unwrap();
        let p = PathHandle::new(tmp.path().join("late.txt"));
        assert!(!p.exists());
        fs::write(p.as_path(), b"x").unwrap();
        assert!(p.exists(), "a failed stat must not be cached");
    }

    #[cfg(unix)]
    #[test]
    fn mode_bits_are_reported() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempdir().unwrap();
        let f = tmp.path().join("m.txt");
        fs::write(&f, b"").unwrap();
        fs::set_permissions(&f, fs::Permissions::from_mode(0o640)).unwrap();
        let info = PathHandle::new(&f).info().unwrap().clone();
        assert_eq!(info.mode & 0o777, 0o640);
        assert!(info.modified_local().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn fifo_is_other() {
        use std::process::Command;
        let tmp = tempdir().unwrap();
        let fifo = tmp.path().join("pipe");
        let made = Command::new("mkfifo").arg(&fifo).status();
        if !matches!(made, Ok(s) if s.success()) {
            return;
        }
        let h = PathHandle::new(&fifo);
        assert_eq!(h.kind(), PathType::Other);
        assert!(h.exists());
        assert!(h.is_file(), "anything that is not a directory counts as a file");
        assert!(!h.is_dir());
    }
}
