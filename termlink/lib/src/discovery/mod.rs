//! Terminal capability discovery
//!
//! This module provides functions for detecting hyperlink and color support
//! from the environment, useful for callers that need to adapt their output
//! to the terminal's capabilities.

pub mod color;
pub mod env;
pub mod hyperlinks;
pub mod version;
