//! Directory listing logic for dirpeek.
//!
//! Provides the [FileEntry] struct which is used throughout dirpeek,
//! and [browse_dir] / [list_dir] which produce a fresh snapshot of a directory on every call.

use crate::core::formatter::Formatter;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Represents a single entry in a directory listing.
/// Holds the name, resolvable path, size and attribute flags like is_dir and is_hidden.
/// Created and populated by the browse_dir function.
///
/// Entries are snapshots: they are never updated after listing.
#[derive(Debug, Clone)]
pub struct FileEntry {
    name: Box<OsStr>,
    lowercase_name: Box<str>,
    path: PathBuf,
    size: u64,
    flags: u8,
}

impl FileEntry {
    // Flag bit definitions
    pub(crate) const IS_DIR: u8 = 1 << 0;
    pub(crate) const IS_HIDDEN: u8 = 1 << 1;

    pub fn new(name: OsString, path: PathBuf, flags: u8, size: u64) -> Self {
        let lowercase_name = name.to_string_lossy().to_lowercase().into_boxed_str();
        FileEntry {
            name: name.into_boxed_os_str(),
            lowercase_name,
            path,
            // Directories never carry a byte count
            size: if flags & Self::IS_DIR != 0 { 0 } else { size },
            flags,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn lowercase_name(&self) -> &str {
        &self.lowercase_name
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte size of a file entry. Always `None` for directories.
    #[inline]
    pub fn size(&self) -> Option<u64> {
        if self.is_dir() { None } else { Some(self.size) }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }
}

/// Reads the immediate children of the provided directory, in enumeration order.
///
/// Kind and size come from the metadata of each child (symlinks are followed).
/// A child whose metadata cannot be read is still returned, as a file of size 0.
///
/// # Returns
/// A Result containing a vector of FileEntry structs, or the io::Error from opening the directory.
pub fn browse_dir(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(64);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(dir = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let name = entry.file_name();
        let entry_path = entry.path();
        let mut flags = 0u8;
        let mut size = 0u64;

        let ft = entry.file_type().ok();

        match fs::metadata(&entry_path) {
            Ok(md) => {
                if md.is_dir() {
                    flags |= FileEntry::IS_DIR;
                } else {
                    size = md.len();
                }
            }
            Err(e) => {
                tracing::debug!(entry = %entry_path.display(), error = %e, "metadata unavailable");
                if ft.is_some_and(|ft| ft.is_dir()) {
                    flags |= FileEntry::IS_DIR;
                }
            }
        }

        if is_dot_name(&name) {
            flags |= FileEntry::IS_HIDDEN;
        }

        entries.push(FileEntry::new(name, entry_path, flags, size));
    }
    Ok(entries)
}

/// Lists a directory the way the browser shows it: filtered and sorted by the [Formatter].
pub fn list_dir(path: &Path, formatter: &Formatter) -> io::Result<Vec<FileEntry>> {
    let mut entries = browse_dir(path)?;
    formatter.filter_entries(&mut entries);
    tracing::debug!(dir = %path.display(), count = entries.len(), "listed directory");
    Ok(entries)
}

#[cfg(unix)]
fn is_dot_name(name: &OsStr) -> bool {
    use std::os::unix::ffi::OsStrExt;
    name.as_bytes().first() == Some(&b'.')
}

#[cfg(not(unix))]
fn is_dot_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
