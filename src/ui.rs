//! Console output for dirpeek.
//!
//! Everything printed by the browser loop goes through [render], which writes
//! plain line-oriented text to any [std::io::Write] sink.

pub mod render;

pub use render::{render_listing, render_menu};
