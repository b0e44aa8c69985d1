use std::fs;
use std::path::PathBuf;

use crate::fs_op::create::DEFAULT_DIR_MODE;
use crate::fs_op::error::{PathError, Result};
use crate::fs_op::handle::PathHandle;

impl PathHandle {
    /// Rename within the same parent directory: only the final component
    /// changes. `new_name` includes any extension.
    ///
    /// Fails with `NotFound` if this path does not exist, and with
    /// `AlreadyExists` if the sibling exists and `overwrite` is false (in
    /// which case nothing on disk changes). Returns a handle for the new path.
    pub fn rename(&self, new_name: &str, overwrite: bool) -> Result<PathHandle> {
        if !self.exists() {
            return Err(PathError::NotFound(self.path.clone()));
        }
        let target = self.parent().join([new_name]);
        if !overwrite && target.exists() {
            return Err(PathError::AlreadyExists(target.into_path_buf()));
        }
        tracing::debug!("renaming {} -> {}", self, target);
        fs::rename(&self.path, target.as_path())?;
        Ok(target.fresh())
    }

    /// Move this path (file or whole directory) to `dest`, which names the
    /// final location including its file name.
    ///
    /// If `dest` exists and `overwrite` is false this fails with
    /// `AlreadyExists`. If `dest` does not exist its parent directories are
    /// created first. The move is a plain OS rename, so moving across
    /// filesystems fails with the OS error instead of copying.
    pub fn move_to(&self, dest: impl Into<PathBuf>, overwrite: bool) -> Result<PathHandle> {
        let target = PathHandle::new(dest);
        if target.exists() {
            if !overwrite {
                return Err(PathError::AlreadyExists(target.into_path_buf()));
            }
        } else {
            target.parent().make_dir_all(DEFAULT_DIR_MODE)?;
        }
        tracing::debug!("moving {} -> {}", self, target);
        fs::rename(&self.path, target.as_path())?;
        Ok(target.fresh())
    }
}
