//! `PathHandle` and the filesystem operations hanging off it.
//!
//! Each submodule adds one group of methods to `PathHandle`:
//! - `stat`: cached metadata and type predicates
//! - `path`: lexical path algebra
//! - `create`, `mv`, `remove`: mutations
//! - `list`, `walk`, `find`: directory reading and search

pub mod create;
pub mod error;
pub mod find;
pub mod handle;
pub mod list;
pub mod mv;
pub mod path;
pub mod remove;
pub mod stat;
pub mod walk;

pub use create::DEFAULT_DIR_MODE;
pub use error::{PathError, Result};
pub use handle::PathHandle;
pub use stat::{Info, PathType};
pub use walk::WalkControl;
