//! Core logic for dirpeek.
//!
//! This module contains the non-UI "engine" pieces used by the browser:
//! - [fm]: directory listing and the [FileEntry] snapshot type (see [browse_dir], [list_dir]).
//! - [formatter]: sorting, filtering and size formatting for listings.
//! - [preview]: bounded text preview of a file with binary detection (see [preview_file]).
//!
//! Most callers will import [list_dir], [FileEntry] and [preview_file] from this module.

pub mod fm;
pub mod formatter;
pub mod preview;

pub use fm::{FileEntry, browse_dir, list_dir};
pub use formatter::{Formatter, compare_entries, format_file_size};
pub use preview::{PreviewOptions, PreviewOutcome, preview_file};
