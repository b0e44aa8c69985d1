use std::fs;

use crate::fs_op::error::{PathError, Result};
use crate::fs_op::handle::PathHandle;

impl PathHandle {
    /// Immediate children of this directory, in the order the OS returns
    /// them (not sorted). Each child is a new handle with an empty cache.
    ///
    /// This collects the whole listing; for very large directories prefer
    /// [`walk`](Self::walk), which reads entries one at a time.
    pub fn list_dir(&self) -> Result<Vec<PathHandle>> {
        if !self.exists() {
            return Err(PathError::NotFound(self.path.clone()));
        }
        if !self.is_dir() {
            return Err(PathError::NotDirectory(self.path.clone()));
        }

        let mut children = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            children.push(self.join([entry.file_name()]));
        }
        tracing::trace!("listed {} entries under {}", children.len(), self);
        Ok(children)
    }
}
