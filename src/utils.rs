//! Miscellaneous utility functions for dirpeek.
//!
//! This module holds the [helpers] submodule, which provides commonly used utilities such as:
//! - Clamping configured preview limits to safe values
//! - Turning raw input lines into paths, expanding "~" on the way
//! - Cleaning up paths for display

pub mod helpers;

pub use helpers::{
    MAX_BINARY_PEEK_BYTES, MAX_PREVIEW_LINES, clamp_binary_peek_bytes, clamp_preview_lines,
    expand_home_path, get_home, os_string_from_input, readable_path, resolve_input_path,
};
