//! Application layer for dirpeek.
//!
//! - [commands]: menu selections and input parsing.
//! - [nav]: the navigation state (current directory and its last listing).
//! - [browser]: the interactive loop tying listing, rendering, input and preview together.

pub mod browser;
pub mod commands;
pub mod nav;

pub use browser::{Browser, Flow};
pub use commands::{Command, parse_number};
pub use nav::NavState;
