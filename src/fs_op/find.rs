use regex::Regex;

use crate::fs_op::error::PathError;
use crate::fs_op::handle::PathHandle;
use crate::fs_op::walk::WalkControl;

impl PathHandle {
    /// Walk this directory and hand every entry whose full path matches the
    /// regular expression `pattern` to `visitor`.
    ///
    /// The pattern is compiled before anything is read, so an invalid pattern
    /// fails with `InvalidPattern` without touching the filesystem. Visitor
    /// semantics are those of [`walk`](Self::walk): `Stop` ends the search
    /// successfully and an error aborts it.
    pub fn find_files<F, E>(&self, pattern: &str, visitor: F) -> Result<(), E>
    where
        F: FnMut(&PathHandle, Option<&PathError>) -> Result<WalkControl, E>,
        E: From<PathError>,
    {
        let re = Regex::new(pattern).map_err(PathError::from)?;
        self.find_matching(&re, visitor)
    }

    /// Same as [`find_files`](Self::find_files) with an already compiled
    /// expression.
    pub fn find_matching<F, E>(&self, re: &Regex, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&PathHandle, Option<&PathError>) -> Result<WalkControl, E>,
        E: From<PathError>,
    {
        tracing::debug!("searching {} for /{}/", self, re.as_str());
        self.walk(|entry, err| {
            if re.is_match(&entry.to_string_lossy()) {
                visitor(entry, err)
            } else {
                Ok(WalkControl::Continue)
            }
        })
    }
}
