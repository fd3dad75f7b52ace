//! Display configuration options for dirpeek
//!
//! This module defines the `[display]` options which are read from the dirpeek.toml
//! configuration file.

use serde::Deserialize;

/// Display configuration options
///
/// Controls how the listing table is rendered.
/// Default values keep the plain byte-count output.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Display {
    human_sizes: bool,
}

impl Display {
    /// Render file sizes as "1.2 kB" instead of a raw byte count.
    #[inline]
    pub fn human_sizes(&self) -> bool {
        self.human_sizes
    }
}
