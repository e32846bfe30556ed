//! # termlink
//!
//! Clickable terminal hyperlinks with graceful degradation.
//!
//! This crate provides:
//!
//! - **Hyperlink Detection**: Decide from environment variables whether the
//!   terminal understands [OSC 8](https://gist.github.com/egmontkob/eb114294efbcd5adb1944c9f3cb5feda)
//!   hyperlinks
//! - **Color Detection**: Decide whether ANSI color output is appropriate
//! - **Style Composition**: Turn names like `"red bold"` into an SGR escape
//! - **Link Rendering**: Wrap text in an OSC 8 hyperlink, or fall back to
//!   `text (url)` when the terminal can't do better
//!
//! Nothing here writes to a stream. Every function returns a `String` for the
//! caller to print.
//!
//! ## Quick Start
//!
//! ```
//! use termlink::{color_link, link};
//!
//! println!("Docs live at {}", link("docs.rs", "https://docs.rs", false));
//! println!("{}", color_link("@twitter", "https://twitter.com/twitter", "italic green", false));
//!
//! // deterministic, regardless of the terminal
//! assert_eq!(
//!     link("Hello", "https://google.com", true),
//!     "Hello (https://google.com)\x1b[0m"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`discovery`] - Capability detection
//!   - [`discovery::env`] - Injectable environment lookup
//!   - [`discovery::version`] - Dotted version parsing
//!   - [`discovery::hyperlinks`] - OSC 8 support rules
//!   - [`discovery::color`] - ANSI color support
//! - [`terminal`] - The `Capabilities` snapshot a link is rendered against
//! - [`link`] - The `Link` value and the `link`/`color_link` helpers
//! - [`utils`] - Style tokens and escape code helpers

pub mod discovery;
pub mod error;
pub mod link;
pub mod terminal;
pub mod utils;

pub use discovery::color::supports_color;
pub use discovery::env::{EnvLookup, MapEnv, ProcessEnv};
pub use discovery::hyperlinks::{supports_hyperlinks, supports_hyperlinks_in};
pub use discovery::version::VersionTriple;
pub use error::StyleError;
pub use link::{Link, color_link, link};
pub use terminal::Capabilities;
pub use utils::style::{StyleSpec, StyleToken, compose_style};
