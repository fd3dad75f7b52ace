//! Navigation state for dirpeek.
//!
//! Holds the current directory and the listing it produced on the last refresh.
//! Every mutation of the current directory goes through this type.

use crate::core::{FileEntry, Formatter, list_dir};
use crate::utils::resolve_input_path;

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Holds the navigation state of the browser.
#[derive(Debug)]
pub struct NavState {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
}

impl NavState {
    pub fn new(path: PathBuf) -> Self {
        Self {
            current_dir: path,
            entries: Vec::new(),
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Re-lists the current directory.
    ///
    /// On failure the listing is left empty and the error is returned for display.
    pub fn refresh(&mut self, formatter: &Formatter) -> io::Result<()> {
        match list_dir(&self.current_dir, formatter) {
            Ok(entries) => {
                self.entries = entries;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(dir = %self.current_dir.display(), error = %e, "listing failed");
                self.entries.clear();
                Err(e)
            }
        }
    }

    /// Returns the entry shown at the 1-based `index`, if any.
    pub fn entry_at(&self, index: usize) -> Option<&FileEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Enters the directory shown at the 1-based `index`.
    /// Returns `false` and changes nothing when the index is out of range or names a file.
    pub fn open(&mut self, index: usize) -> bool {
        let Some(target) = self
            .entry_at(index)
            .filter(|e| e.is_dir())
            .map(|e| e.path().to_path_buf())
        else {
            return false;
        };
        tracing::debug!(from = %self.current_dir.display(), to = %target.display(), "open");
        self.current_dir = target;
        true
    }

    /// Returns the file shown at the 1-based `index`, or `None` if it is out of range or a directory.
    pub fn file_at(&self, index: usize) -> Option<&FileEntry> {
        self.entry_at(index).filter(|e| !e.is_dir())
    }

    /// Moves to the parent directory.
    /// Returns `false` at a root (or a bare relative name), where there is no parent to go to.
    pub fn go_up(&mut self) -> bool {
        let parent = match self.current_dir.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => return false,
        };
        tracing::debug!(from = %self.current_dir.display(), to = %parent.display(), "go up");
        self.current_dir = parent;
        true
    }

    /// Changes to the directory typed by the user.
    ///
    /// The input is resolved against the current directory (see [resolve_input_path]).
    /// The new current directory is the canonical form of the target, or the target
    /// as typed if canonicalization fails.
    ///
    /// # Returns
    /// The resolved path as an error if it does not exist or is not a directory.
    /// Empty input is rejected with an empty path.
    pub fn change_dir(&mut self, input: impl AsRef<OsStr>) -> Result<(), PathBuf> {
        let input = input.as_ref();
        if input.is_empty() {
            return Err(PathBuf::new());
        }
        let target = resolve_input_path(input, &self.current_dir);

        if !fs::metadata(&target).is_ok_and(|md| md.is_dir()) {
            return Err(target);
        }

        self.current_dir = match fs::canonicalize(&target) {
            Ok(canonical) => canonical,
            Err(e) => {
                tracing::debug!(path = %target.display(), error = %e, "canonicalize failed, keeping path as typed");
                target
            }
        };
        Ok(())
    }
}
