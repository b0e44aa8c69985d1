use std::fmt;
use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;

use crate::fs_op::stat::Info;

/// A filesystem path plus a lazily fetched metadata snapshot.
///
/// The snapshot is taken on the first metadata query and never refreshed for
/// this instance, so a handle reflects the filesystem as it was at that
/// moment. Use [`PathHandle::fresh`] to observe the current state.
///
/// `Clone` copies the snapshot (if any) into the new handle; the two do not
/// share it afterwards.
#[derive(Clone)]
pub struct PathHandle {
    pub(crate) path: PathBuf,
    pub(crate) info: OnceCell<Info>,
}

impl PathHandle {
    /// Wrap `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            info: OnceCell::new(),
        }
    }

    /// A new handle for the same path with an empty metadata cache.
    pub fn fresh(&self) -> Self {
        Self::new(self.path.clone())
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// Path text for matching and display. Non UTF-8 bytes are replaced.
    pub fn to_string_lossy(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl fmt::Debug for PathHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathHandle")
            .field("path", &self.path)
            .field("cached", &self.info.get().is_some())
            .finish()
    }
}

impl fmt::Display for PathHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

// Equality is about the path only; two handles on the same path are equal
// whatever their caches hold.
impl PartialEq for PathHandle {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for PathHandle {}

impl AsRef<Path> for PathHandle {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<&str> for PathHandle {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PathHandle {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for PathHandle {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<PathBuf> for PathHandle {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}
