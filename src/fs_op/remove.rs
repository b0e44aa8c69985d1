use std::fs;
use std::io;

use crate::fs_op::error::Result;
use crate::fs_op::handle::PathHandle;

impl PathHandle {
    /// Remove this path. Directories are removed recursively with everything
    /// under them. There is no confirmation and no trash.
    ///
    /// The path is classified with a fresh `lstat`, not the cached snapshot,
    /// so a symlink (dangling or not) is removed itself and its target is
    /// left alone. If the path does not exist this returns `Ok(())` so
    /// callers do not need to check first; any other failure to inspect or
    /// remove it is returned. This handle's snapshot is stale afterwards, so
    /// query a `fresh()` handle.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pathlib::PathHandle;
    /// PathHandle::new("/tmp/some_dir").delete().expect("delete failed");
    /// ```
    pub fn delete(&self) -> Result<()> {
        let meta = match fs::symlink_metadata(&self.path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("delete: {} does not exist, nothing to do", self);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if meta.is_dir() {
            tracing::debug!("removing directory tree {}", self);
            fs::remove_dir_all(&self.path)?;
        } else {
            tracing::debug!("removing {}", self);
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
