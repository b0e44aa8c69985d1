//! Depth-first directory traversal.
//!
//! The visitor decides after every entry whether to go on. Returning
//! `Ok(WalkControl::Stop)` ends the whole walk and the walk reports success;
//! returning `Err(e)` aborts it and hands `e` back to the caller unchanged.

use std::fs;

use crate::fs_op::error::PathError;
use crate::fs_op::handle::PathHandle;

/// What a walk visitor wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    /// Keep going (descending into the entry if it is a directory).
    Continue,
    /// End the traversal now. The walk returns `Ok(())`.
    Stop,
}

impl PathHandle {
    /// Walk everything below this directory in pre-order, depth first.
    ///
    /// For each entry the visitor gets the child handle (metadata already
    /// queried and cached) and the error from that metadata query, if any,
    /// for example for a dangling symlink. Entries whose metadata query
    /// failed are not descended into.
    ///
    /// Entries are read one at a time, so memory stays bounded on huge
    /// directories. Symlinks to directories are followed and there is no
    /// cycle detection: a symlink loop makes the walk run forever.
    ///
    /// Fails with `NotDirectory` if this path is not a directory. Errors
    /// opening or reading a directory abort the walk.
    pub fn walk<F, E>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&PathHandle, Option<&PathError>) -> Result<WalkControl, E>,
        E: From<PathError>,
    {
        if !self.is_dir() {
            return Err(PathError::NotDirectory(self.path.clone()).into());
        }
        tracing::debug!("walking {}", self);
        match self.walk_dir(&mut visitor)? {
            WalkControl::Continue => {}
            WalkControl::Stop => tracing::debug!("walk of {} stopped by visitor", self),
        }
        Ok(())
    }

    fn walk_dir<F, E>(&self, visitor: &mut F) -> Result<WalkControl, E>
    where
        F: FnMut(&PathHandle, Option<&PathError>) -> Result<WalkControl, E>,
        E: From<PathError>,
    {
        // `entries` owns the open directory stream and closes it on drop,
        // whichever way this function returns.
        let entries = fs::read_dir(&self.path).map_err(PathError::from)?;
        for entry in entries {
            let entry = entry.map_err(PathError::from)?;
            let child = self.join([entry.file_name()]);
            let stat_err = child.info().err();
            tracing::trace!("visiting {}", child);

            if visitor(&child, stat_err.as_ref())? == WalkControl::Stop {
                return Ok(WalkControl::Stop);
            }

            if child.is_dir() && child.walk_dir(visitor)? == WalkControl::Stop {
                return Ok(WalkControl::Stop);
            }
        }
        Ok(WalkControl::Continue)
    }
}
