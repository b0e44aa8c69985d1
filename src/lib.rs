pub mod fs_op;
pub mod logging;
pub mod settings;

pub use crate::fs_op::{Info, PathError, PathHandle, PathType, WalkControl, DEFAULT_DIR_MODE};
