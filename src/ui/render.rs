//! Rendering of the listing table and the command menu.
//!
//! Output is line-oriented and meant for humans, not for parsing.
//! Rendering is a pure function of its inputs, so the same listing always prints the same bytes.

use crate::core::{FileEntry, Formatter};
use crate::utils::readable_path;

use std::io::{self, Write};
use std::path::Path;

/// Width of the rule printed under the table header.
const RULE_WIDTH: usize = 60;

/// Menu lines, in display order. The number is the selection to type.
pub const MENU: [(u8, &str); 6] = [
    (1, "Open directory by #"),
    (2, "View file by #"),
    (3, "Go up (..)"),
    (4, "Change directory by path"),
    (5, "Refresh"),
    (0, "Exit"),
];

/// Prints the current directory header and the entry table.
/// Row numbers start at 1, matching the index the user types.
pub fn render_listing<W: Write>(
    out: &mut W,
    dir: &Path,
    entries: &[FileEntry],
    formatter: &Formatter,
) -> io::Result<()> {
    write!(out, "\nCurrent directory:\n  {}\n\n", readable_path(dir))?;

    if entries.is_empty() {
        writeln!(out, "(empty)")?;
        return Ok(());
    }

    writeln!(out, "{:<5}{:<6}{:<12}NAME", "#", "TYPE", "SIZE")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{:<5}{:<6}{:<12}{}",
            i + 1,
            if entry.is_dir() { "DIR" } else { "FILE" },
            formatter.format_entry_size(entry),
            entry.name_str()
        )?;
    }
    Ok(())
}

/// Prints the command menu followed by the selection prompt.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nFile Explorer Menu:")?;
    for (choice, label) in MENU {
        writeln!(out, "  {}) {}", choice, label)?;
    }
    write!(out, "> ")?;
    out.flush()
}
