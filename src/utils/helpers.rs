//! Helpers for dirpeek.
//!
//! This module defines the bounds for the configurable preview limits.
//! It also provides utility functions:
//! - Clamping preview limits to safe values
//! - Turning a raw input line into an OS string
//! - Expanding a leading "~" to the home directory
//! - Resolving a typed path against the current directory
//! - Displaying paths without Windows verbatim prefixes

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// The minimum for both preview limits.
pub const MIN_PREVIEW_LIMIT: usize = 1;
/// The largest line cap accepted from dirpeek.toml.
pub const MAX_PREVIEW_LINES: usize = 100_000;
/// The largest binary peek window accepted from dirpeek.toml (1 MiB).
pub const MAX_BINARY_PEEK_BYTES: usize = 1024 * 1024;

/// Safely clamp the preview line cap.
pub fn clamp_preview_lines(value: usize) -> usize {
    clamp_limit("max_lines", value, MAX_PREVIEW_LINES)
}

/// Safely clamp the number of bytes peeked for binary detection.
pub fn clamp_binary_peek_bytes(value: usize) -> usize {
    clamp_limit("binary_peek_bytes", value, MAX_BINARY_PEEK_BYTES)
}

fn clamp_limit(key: &str, value: usize, max: usize) -> usize {
    let clamped = value.clamp(MIN_PREVIEW_LIMIT, max);
    if clamped != value {
        tracing::warn!(
            "{}={} out of range ({}..={}), clamped to {}",
            key,
            value,
            MIN_PREVIEW_LIMIT,
            max,
            clamped
        );
    }
    clamped
}

/// Returns the home directory of the current user, if there is one.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Builds an OS string from one raw line of user input, minus surrounding ASCII whitespace.
///
/// On Unix the bytes are kept as they are, so names that are not valid UTF-8 can still be typed.
pub fn os_string_from_input(line: &[u8]) -> OsString {
    let line = line.trim_ascii();
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStringExt;
        OsString::from_vec(line.to_vec())
    }
    #[cfg(not(unix))]
    {
        OsString::from(String::from_utf8_lossy(line).into_owned())
    }
}

/// Expands a leading "~" (alone or followed by a separator) to the home directory.
/// Anything else, including "~user", is returned unchanged.
pub fn expand_home_path(input: &OsStr) -> PathBuf {
    if let Some(rest) = input.to_str().and_then(|s| s.strip_prefix('~'))
        && (rest.is_empty() || rest.starts_with('/') || rest.starts_with(std::path::MAIN_SEPARATOR))
        && let Some(home) = get_home()
    {
        let rest = rest.trim_start_matches(['/', std::path::MAIN_SEPARATOR]);
        return if rest.is_empty() {
            home
        } else {
            home.join(rest)
        };
    }
    PathBuf::from(input)
}

/// Turns a path typed by the user into a path to check.
///
/// "~" is expanded and relative paths are joined onto `base`.
pub fn resolve_input_path(input: &OsStr, base: &Path) -> PathBuf {
    let expanded = expand_home_path(input);
    if expanded.is_relative() {
        base.join(expanded)
    } else {
        expanded
    }
}

/// Path as shown to the user. Strips the `\\?\` prefix canonicalize adds on Windows.
pub fn readable_path(path: &Path) -> String {
    #[cfg(windows)]
    {
        let display = path.display().to_string();
        display
            .strip_prefix(r"\\?\")
            .unwrap_or(&display)
            .to_string()
    }
    #[cfg(not(windows))]
    {
        path.display().to_string()
    }
}

/// Helper utils tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_preview_limits() {
        assert_eq!(clamp_preview_lines(0), 1);
        assert_eq!(clamp_preview_lines(200), 200);
        assert_eq!(clamp_preview_lines(usize::MAX), MAX_PREVIEW_LINES);
        assert_eq!(clamp_binary_peek_bytes(4096), 4096);
        assert_eq!(clamp_binary_peek_bytes(0), 1);
    }

    #[test]
    fn test_expand_home_path() {
        let Some(home) = get_home() else {
            return;
        };
        assert_eq!(expand_home_path(OsStr::new("~")), home);
        assert_eq!(expand_home_path(OsStr::new("~/docs")), home.join("docs"));
        assert_eq!(
            expand_home_path(OsStr::new("~other")),
            PathBuf::from("~other")
        );
        assert_eq!(expand_home_path(OsStr::new("a/~")), PathBuf::from("a/~"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_input_path() {
        let base = Path::new("/srv/data");
        assert_eq!(
            resolve_input_path(OsStr::new("logs"), base),
            PathBuf::from("/srv/data/logs")
        );
        assert_eq!(
            resolve_input_path(OsStr::new(".."), base),
            PathBuf::from("/srv/data/..")
        );
        assert_eq!(
            resolve_input_path(OsStr::new("/etc"), base),
            PathBuf::from("/etc")
        );
    }

    #[test]
    fn test_os_string_from_input() {
        assert_eq!(os_string_from_input(b"  logs \r"), OsString::from("logs"));
        assert_eq!(os_string_from_input(b" \t "), OsString::new());
        assert_eq!(os_string_from_input(b""), OsString::new());
    }

    #[cfg(unix)]
    #[test]
    fn test_os_string_from_input_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;
        let os = os_string_from_input(b"caf\xe9 ");
        assert_eq!(os.as_bytes(), b"caf\xe9");
    }
}
