//! Text preview of a single file for dirpeek.
//!
//! [preview_file] streams a bounded number of lines of a file to any writer.
//! Files that look binary (a NUL byte near the start) are suppressed with a notice.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, Write};
use std::path::Path;

/// Default number of lines shown before the preview is truncated.
pub const DEFAULT_PREVIEW_LINES: usize = 200;
/// Default number of bytes peeked for NUL bytes in binary detection.
pub const DEFAULT_BINARY_PEEK_BYTES: usize = 4096;

/// Limits used by [preview_file].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    pub max_lines: usize,
    pub binary_peek_bytes: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        PreviewOptions {
            max_lines: DEFAULT_PREVIEW_LINES,
            binary_peek_bytes: DEFAULT_BINARY_PEEK_BYTES,
        }
    }
}

/// What a preview ended up showing.
#[derive(Debug)]
pub enum PreviewOutcome {
    /// Text was shown. `truncated` is set when content remained after `lines` lines.
    Shown { lines: usize, truncated: bool },
    /// The file looked binary; only the suppression notice was shown.
    Binary,
    /// The file could not be opened or read.
    Unreadable(io::Error),
}

/// Writes a preview of `path` to `out`.
///
/// File problems become a [PreviewOutcome] with a notice written to `out`.
/// The returned error is only ever a failure to write to `out`.
pub fn preview_file<W: Write>(
    path: &Path,
    opts: &PreviewOptions,
    out: &mut W,
) -> io::Result<PreviewOutcome> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => return report_unreadable(path, e, out),
    };

    match looks_binary(&mut file, opts.binary_peek_bytes) {
        Ok(true) => {
            writeln!(out, "(Binary file preview suppressed)")?;
            return Ok(PreviewOutcome::Binary);
        }
        Ok(false) => {}
        Err(e) => return report_unreadable(path, e, out),
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    writeln!(out, "\n----- File: {} -----", name)?;

    let mut reader = BufReader::new(file);
    let mut buf = Vec::with_capacity(256);
    let mut lines = 0;

    while lines < opts.max_lines {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                out.write_all(strip_line_ending(&buf))?;
                out.write_all(b"\n")?;
                lines += 1;
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "preview stopped early");
                break;
            }
        }
    }

    let truncated = lines == opts.max_lines && has_remaining(&mut reader);
    if truncated {
        writeln!(out, "... (truncated after {} lines)", opts.max_lines)?;
    }
    writeln!(out, "----- End of preview -----")?;

    Ok(PreviewOutcome::Shown { lines, truncated })
}

/// Reads up to `peek` bytes from the start of `file`, checks them for a NUL byte,
/// and rewinds so the caller reads from the beginning again.
fn looks_binary(file: &mut File, peek: usize) -> io::Result<bool> {
    let mut head = Vec::with_capacity(peek);
    Read::by_ref(file).take(peek as u64).read_to_end(&mut head)?;
    file.rewind()?;
    Ok(head.contains(&0))
}

fn has_remaining<R: BufRead>(reader: &mut R) -> bool {
    reader.fill_buf().map(|b| !b.is_empty()).unwrap_or(false)
}

/// Drops a trailing "\n" or "\r\n".
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn report_unreadable<W: Write>(
    path: &Path,
    err: io::Error,
    out: &mut W,
) -> io::Result<PreviewOutcome> {
    tracing::warn!(file = %path.display(), error = %err, "could not open file for preview");
    writeln!(out, "Could not open file: {}", path.display())?;
    Ok(PreviewOutcome::Unreadable(err))
}
