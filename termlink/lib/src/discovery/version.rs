//! Version strings as published by terminal emulators.
//!
//! Terminals advertise their version through environment variables such as
//! `TERM_PROGRAM_VERSION` and `VTE_VERSION`. The values are not always
//! well-formed (`"3.4.19beta2"`, `""`, `"unknown"`), so parsing here is
//! deliberately forgiving: whatever can't be read becomes zero.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `major.minor.patch` version.
///
/// Ordering is lexicographic over `(major, minor, patch)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionTriple {
    pub const ZERO: VersionTriple = VersionTriple::new(0, 0, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a dotted version string.
    ///
    /// Each dot-separated component contributes its leading decimal digits;
    /// trailing junk on a component is ignored. Parsing stops at the first
    /// component with no leading digit and everything from there on stays
    /// zero. Missing components are zero.
    ///
    /// ## Examples
    ///
    /// ```
    /// use termlink::VersionTriple;
    ///
    /// assert_eq!(VersionTriple::parse("3.4.19"), VersionTriple::new(3, 4, 19));
    /// assert_eq!(VersionTriple::parse("3.4.19beta2"), VersionTriple::new(3, 4, 19));
    /// assert_eq!(VersionTriple::parse("20230712"), VersionTriple::new(20230712, 0, 0));
    /// assert_eq!(VersionTriple::parse("nightly"), VersionTriple::ZERO);
    /// ```
    pub fn parse(input: &str) -> Self {
        let mut parts = [0u32; 3];

        for (slot, component) in parts.iter_mut().zip(input.trim().split('.')) {
            match leading_number(component) {
                Some(n) => *slot = n,
                None => break,
            }
        }

        let [major, minor, patch] = parts;
        Self::new(major, minor, patch)
    }

    /// Parses a `VTE_VERSION` value.
    ///
    /// VTE exports its version as a single integer, `major * 10000 +
    /// minor * 100 + micro` (so `5202` is 0.52.2). A dotted value is read
    /// with [`VersionTriple::parse`].
    pub fn parse_vte(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.contains('.') {
            return Self::parse(trimmed);
        }

        match trimmed.parse::<u32>() {
            Ok(n) => Self::new(n / 10_000, (n / 100) % 100, n % 100),
            Err(_) => Self::parse(trimmed),
        }
    }

    /// `true` for `0.0.0`, which is also what every unreadable string parses to.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Whether this version meets `minimum` (inclusive).
    ///
    /// A zero version never meets a non-zero minimum: it is far more likely
    /// to be a string that failed to parse than a real release.
    pub fn satisfies(&self, minimum: &VersionTriple) -> bool {
        if self.is_zero() && !minimum.is_zero() {
            return false;
        }
        self >= minimum
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The decimal number at the start of `component`, if there is one.
fn leading_number(component: &str) -> Option<u32> {
    let end = component
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(component.len());

    component.get(..end)?.parse().ok()
}
