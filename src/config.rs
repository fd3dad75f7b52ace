//! Configuration for dirpeek.
//!
//! Settings are read once at startup from `dirpeek.toml` (see [Config::default_path]).
//! - [general]: which entries a listing shows.
//! - [display]: how the listing table is rendered.
//! - [preview]: limits for the file previewer.
//! - [load]: file lookup, parsing and the processed [Config].

pub mod display;
pub mod general;
pub mod load;
pub mod preview;

pub use display::Display;
pub use general::General;
pub use load::{Config, RawConfig};
pub use preview::{InternalPreview, Preview};
