use thiserror::Error;

/// Errors raised when a style specification is parsed strictly.
///
/// The lenient parser ([`StyleSpec::parse`](crate::StyleSpec::parse)) never
/// fails; it drops anything it doesn't recognize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A whitespace-delimited token was not a known style name.
    #[error("unknown style token '{token}' (run `termlink styles` for the list)")]
    UnknownToken {
        /// The offending token, exactly as written
        token: String,
    },
}
