//! Style tokens and escape code helpers.

pub mod escape_codes;
pub mod style;
