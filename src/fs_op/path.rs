use std::path::{Component, Path, PathBuf};

use crate::fs_op::handle::PathHandle;

/// Lexical path operations. None of these touch the filesystem except
/// `clean_name`, which needs to know whether the path is a directory.
impl PathHandle {
    /// Append `segments` to this path and return the result as a new handle.
    ///
    /// Segments are appended component by component and never converted
    /// through UTF-8, so any name the OS hands out joins back unchanged. A
    /// root or drive prefix on a segment is dropped so a segment never
    /// replaces the base the way `PathBuf::push` would; only real separators
    /// count (a backslash is an ordinary byte on Unix). Empty segments are
    /// skipped. The result is normalized: repeated separators and `.`
    /// components go away.
    ///
    /// `..` is kept as-is rather than folded into its parent, unlike Go's
    /// `filepath.Join` (`a/b` + `../c` is `a/b/../c` here, `a/c` there):
    /// folding it lexically is wrong when the parent is a symlink.
    pub fn join<I, S>(&self, segments: I) -> PathHandle
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut joined = self.path.clone();
        for seg in segments {
            for c in seg.as_ref().components() {
                if matches!(c, Component::Normal(_) | Component::ParentDir) {
                    joined.push(c);
                }
            }
        }
        PathHandle::new(normalize(&joined))
    }

    /// Handle for the directory holding this path.
    ///
    /// A bare relative name has `.` as its parent; the root is its own parent.
    pub fn parent(&self) -> PathHandle {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => PathHandle::new(p),
            Some(_) => PathHandle::new("."),
            None if self.path.as_os_str().is_empty() => PathHandle::new("."),
            None => PathHandle::new(self.path.clone()),
        }
    }

    /// Final component, extension included. Empty when there is none
    /// (for example the root, or a path ending in `..`).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Final component without its extension.
    ///
    /// Directories keep their full name, dots and all.
    pub fn clean_name(&self) -> String {
        let name = self.name();
        if self.is_dir() {
            return name;
        }
        let ext = self.extension();
        name.strip_suffix(ext.as_str()).unwrap_or(&name).to_string()
    }

    /// Extension including the leading dot (`.txt`), or an empty string.
    ///
    /// Purely lexical: the last dot of the final component wins, and a
    /// leading dot alone (`.bashrc`) does not start an extension.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Build a handle from user input, expanding a leading `~` to the home
    /// directory. Input without `~` is wrapped unchanged.
    ///
    /// Returns `None` when the input starts with `~` and neither `HOME` nor
    /// `USERPROFILE` is set.
    pub fn expand_home(input: &str) -> Option<PathHandle> {
        if !input.starts_with('~') {
            return Some(PathHandle::new(input));
        }
        let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))?;
        let rest = input.trim_start_matches('~');
        Some(PathHandle::new(home).join([rest]))
    }
}

fn normalize(p: &Path) -> PathBuf {
    let cleaned: PathBuf = p
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    // Dropping every `.` from "./." leaves nothing.
    if cleaned.as_os_str().is_empty() && !p.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
