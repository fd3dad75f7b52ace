//! The file preview configuration for dirpeek.
//!
//! [Preview] is the raw `[preview]` table, [InternalPreview] holds the clamped values
//! actually handed to the previewer.

use crate::core::PreviewOptions;
use crate::core::preview::{DEFAULT_BINARY_PEEK_BYTES, DEFAULT_PREVIEW_LINES};
use crate::utils::{clamp_binary_peek_bytes, clamp_preview_lines};

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Preview {
    max_lines: usize,
    binary_peek_bytes: usize,
}

impl Default for Preview {
    fn default() -> Self {
        Preview {
            max_lines: DEFAULT_PREVIEW_LINES,
            binary_peek_bytes: DEFAULT_BINARY_PEEK_BYTES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternalPreview {
    options: PreviewOptions,
}

impl From<Preview> for InternalPreview {
    fn from(p: Preview) -> Self {
        Self {
            options: PreviewOptions {
                max_lines: clamp_preview_lines(p.max_lines),
                binary_peek_bytes: clamp_binary_peek_bytes(p.binary_peek_bytes),
            },
        }
    }
}

impl InternalPreview {
    #[inline]
    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{MAX_BINARY_PEEK_BYTES, MAX_PREVIEW_LINES};

    #[test]
    fn defaults_match_previewer_defaults() {
        let internal = InternalPreview::from(Preview::default());
        assert_eq!(internal.options(), &PreviewOptions::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() -> Result<(), Box<dyn std::error::Error>> {
        let raw: Preview = toml::from_str("max_lines = 0\nbinary_peek_bytes = 999999999")?;
        let internal = InternalPreview::from(raw);
        assert_eq!(internal.options().max_lines, 1);
        assert_eq!(internal.options().binary_peek_bytes, MAX_BINARY_PEEK_BYTES);

        let raw: Preview = toml::from_str("max_lines = 9999999999")?;
        assert_eq!(
            InternalPreview::from(raw).options().max_lines,
            MAX_PREVIEW_LINES
        );
        Ok(())
    }
}
