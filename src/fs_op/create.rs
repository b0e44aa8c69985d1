use std::fs::DirBuilder;

use crate::fs_op::error::Result;
use crate::fs_op::handle::PathHandle;

/// Mode used for parent directories created implicitly by `move_to`.
/// The process umask still applies.
pub const DEFAULT_DIR_MODE: u32 = 0o777;

impl PathHandle {
    /// Create this directory and any missing ancestors with permission bits
    /// `mode` (before umask). Succeeds if the directory already exists.
    ///
    /// `mode` is ignored on platforms without Unix permissions.
    pub fn make_dir_all(&self, mode: u32) -> Result<()> {
        tracing::debug!("creating directory tree {} (mode {:o})", self, mode);
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        set_mode(&mut builder, mode);
        builder.create(&self.path)?;
        Ok(())
    }
}

#[cfg(unix)]
fn set_mode(builder: &mut DirBuilder, mode: u32) {
    use std::os::unix::fs::DirBuilderExt;
    builder.mode(mode);
}

#[cfg(not(unix))]
fn set_mode(_builder: &mut DirBuilder, _mode: u32) {}
