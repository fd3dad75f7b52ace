//! Sorting, filtering, and size formatting for file entries in dirpeek.
//!
//! The [Formatter] struct holds the display rules from the dirpeek.toml configuration
//! and is used to prepare every listing before it is rendered.

use crate::core::FileEntry;

use humansize::{DECIMAL, format_size};

use std::cmp::Ordering;

/// Formatter struct to handle filtering, sorting and size formatting of file entries
/// based on user preferences.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    show_hidden: bool,
    human_sizes: bool,
}

impl Formatter {
    pub fn new(show_hidden: bool, human_sizes: bool) -> Self {
        Self {
            show_hidden,
            human_sizes,
        }
    }

    /// Sorts the given file entries in place: directories first, then files,
    /// each group by case-insensitive name.
    ///
    /// The sort is stable, so names equal after case folding keep their enumeration order.
    pub fn sort_entries(&self, entries: &mut [FileEntry]) {
        entries.sort_by(compare_entries);
    }

    /// Filters the given file entries in place according to the formatter's settings,
    /// then sorts what is left.
    pub fn filter_entries(&self, entries: &mut Vec<FileEntry>) {
        if !self.show_hidden {
            entries.retain(|e| !e.is_hidden());
        }
        self.sort_entries(entries);
    }

    /// Formats the size column for an entry.
    /// # Returns
    /// "-" for directories, otherwise the byte count (or a humansize string if enabled).
    pub fn format_entry_size(&self, entry: &FileEntry) -> String {
        format_file_size(entry.size(), self.human_sizes)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new(true, false)
    }
}

/// Listing order: directories before files, then ascending lowercase name.
pub fn compare_entries(a: &FileEntry, b: &FileEntry) -> Ordering {
    match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.lowercase_name().cmp(b.lowercase_name()),
    }
}

/// Formats a file size into a display string.
/// # Returns
/// "-" when there is no size (directories), the raw byte count, or a decimal humansize string.
pub fn format_file_size(size: Option<u64>, human: bool) -> String {
    match size {
        None => "-".to_string(),
        Some(sz) if human => format_size(sz, DECIMAL),
        Some(sz) => sz.to_string(),
    }
}

/// Formatter tests
#[cfg(test)]
mod tests {
    use super::*;

    use rand::seq::SliceRandom;
    use rand::{Rng, rng};
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn entry(name: &str, is_dir: bool) -> FileEntry {
        let flags = if is_dir { FileEntry::IS_DIR } else { 0 };
        FileEntry::new(OsString::from(name), PathBuf::from(name), flags, 1)
    }

    fn names(entries: &[FileEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name_str().into_owned()).collect()
    }

    #[test]
    fn dirs_first_then_case_insensitive() {
        let mut entries = vec![
            entry("zeta.txt", false),
            entry("Beta", true),
            entry("alpha.txt", false),
            entry("alpha", true),
            entry("Alpha.md", false),
        ];
        Formatter::default().sort_entries(&mut entries);
        assert_eq!(
            names(&entries),
            vec!["alpha", "Beta", "Alpha.md", "alpha.txt", "zeta.txt"]
        );
    }

    #[test]
    fn case_folded_ties_keep_enumeration_order() {
        let mut entries = vec![
            entry("README", false),
            entry("readme", false),
            entry("ReadMe", false),
        ];
        Formatter::default().sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["README", "readme", "ReadMe"]);
    }

    #[test]
    fn randomized_sort_invariant_holds() {
        let mut rng = rng();
        let pool = ["a", "B", "c", "Dd", "dD", "e.txt", "F.rs", "g", "Hh", "zz"];

        for _ in 0..200 {
            let mut entries: Vec<FileEntry> = (0..rng.random_range(0..20))
                .map(|_| {
                    let name = pool[rng.random_range(0..pool.len())];
                    entry(name, rng.random_bool(0.5))
                })
                .collect();
            entries.shuffle(&mut rng);
            Formatter::default().sort_entries(&mut entries);

            for pair in entries.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                assert!(
                    (a.is_dir() && !b.is_dir())
                        || (a.is_dir() == b.is_dir() && a.lowercase_name() <= b.lowercase_name()),
                    "out of order: {:?} before {:?}",
                    a.name(),
                    b.name()
                );
            }
        }
    }

    #[test]
    fn hidden_filter() {
        let hidden = FileEntry::new(
            OsString::from(".git"),
            PathBuf::from(".git"),
            FileEntry::IS_DIR | FileEntry::IS_HIDDEN,
            0,
        );
        let mut entries = vec![entry("src", true), hidden.clone()];
        Formatter::new(false, false).filter_entries(&mut entries);
        assert_eq!(names(&entries), vec!["src"]);

        let mut entries = vec![entry("src", true), hidden];
        Formatter::new(true, false).filter_entries(&mut entries);
        assert_eq!(names(&entries), vec![".git", "src"]);
    }

    #[test]
    fn size_column() {
        assert_eq!(format_file_size(None, false), "-");
        assert_eq!(format_file_size(None, true), "-");
        assert_eq!(format_file_size(Some(1234), false), "1234");
        assert_eq!(format_file_size(Some(0), false), "0");
        assert_eq!(format_file_size(Some(1_000), true), "1 kB");

        let fmt = Formatter::default();
        assert_eq!(fmt.format_entry_size(&entry("docs", true)), "-");
        assert_eq!(fmt.format_entry_size(&entry("a.txt", false)), "1");
    }
}
