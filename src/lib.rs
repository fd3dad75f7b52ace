//! dirpeek: a line-oriented console file browser.
//!
//! - [core] lists directories ([core::list_dir]) and previews text files ([core::preview_file]).
//! - [app] holds the navigation state and the read-one-command loop ([app::Browser]).
//! - [ui] renders the listing table and the command menu.
//! - [config] loads `dirpeek.toml` into display and preview settings.
//! - [utils] has the path and limit helpers shared by the above.
//!
//! The `dirpeek` binary wires these to stdin/stdout; the library is not meant for external use.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;
