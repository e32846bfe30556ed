//! OSC 8 hyperlink support detection.
//!
//! There is no terminfo capability for OSC 8, so support is inferred from the
//! environment variables terminal emulators export. The heuristics live in a
//! single ordered table, [`HYPERLINK_RULES`]; the first rule that matches
//! decides the answer.
//!
//! ## Rules (in evaluation order)
//!
//! 1. `FORCE_HYPERLINK` set to any non-empty value (escape hatch for CI and
//!    other environments that can't be detected)
//! 2. `DOMTERM` set to a non-empty value
//! 3. `VTE_VERSION` at least 0.50.0 (GNOME Terminal, Guake, ROXTerm, Tilix, ...)
//! 4. `TERM_PROGRAM` is `Hyper`, `iTerm.app` (3.1+), `terminology` or `WezTerm`
//! 5. `TERM` is `xterm-kitty`
//! 6. `WT_SESSION` (Windows Terminal) or `KONSOLE_VERSION` merely present
//!
//! ## Examples
//!
//! ```
//! use termlink::discovery::hyperlinks::{hyperlink_support_in, supports_hyperlinks_in};
//! use termlink::MapEnv;
//!
//! let gnome = MapEnv::from([("VTE_VERSION", "7600")]);
//! assert!(supports_hyperlinks_in(&gnome));
//!
//! let rule = hyperlink_support_in(&gnome).unwrap();
//! assert_eq!(rule.variable(), "VTE_VERSION");
//! ```

use serde::Serialize;

use crate::discovery::env::{EnvLookup, ProcessEnv};
use crate::discovery::version::VersionTriple;

/// How a rule's version variable is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VersionFormat {
    /// `major.minor.patch`
    Dotted,
    /// VTE's compact integer (`5202`) or dotted
    Vte,
}

impl VersionFormat {
    fn parse(self, value: &str) -> VersionTriple {
        match self {
            VersionFormat::Dotted => VersionTriple::parse(value),
            VersionFormat::Vte => VersionTriple::parse_vte(value),
        }
    }
}

/// A single heuristic for deciding whether a terminal renders OSC 8 links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HyperlinkRule {
    /// The user asked for hyperlinks explicitly (non-empty value).
    Forced { var: &'static str },
    /// A terminal that always supports hyperlinks identifies itself with a
    /// non-empty variable.
    Marker { var: &'static str },
    /// A terminal family that gained support in a known release.
    MinVersion {
        var: &'static str,
        minimum: VersionTriple,
        format: VersionFormat,
    },
    /// `TERM_PROGRAM` names a known terminal; when `minimum` is given,
    /// `TERM_PROGRAM_VERSION` must meet it.
    Program {
        program: &'static str,
        minimum: Option<VersionTriple>,
    },
    /// `TERM` has exactly this value.
    Term { value: &'static str },
    /// The variable is set at all, even to an empty string.
    Present { var: &'static str },
}

pub const TERM_PROGRAM: &str = "TERM_PROGRAM";
pub const TERM_PROGRAM_VERSION: &str = "TERM_PROGRAM_VERSION";
pub const TERM: &str = "TERM";

/// Every environment variable the rules consult.
pub const CONSULTED_VARS: [&str; 8] = [
    "FORCE_HYPERLINK",
    "DOMTERM",
    "VTE_VERSION",
    TERM_PROGRAM,
    TERM_PROGRAM_VERSION,
    TERM,
    "WT_SESSION",
    "KONSOLE_VERSION",
];

/// The detection table, evaluated top to bottom.
pub static HYPERLINK_RULES: &[HyperlinkRule] = &[
    HyperlinkRule::Forced {
        var: "FORCE_HYPERLINK",
    },
    HyperlinkRule::Marker { var: "DOMTERM" },
    HyperlinkRule::MinVersion {
        var: "VTE_VERSION",
        minimum: VersionTriple::new(0, 50, 0),
        format: VersionFormat::Vte,
    },
    HyperlinkRule::Program {
        program: "Hyper",
        minimum: None,
    },
    HyperlinkRule::Program {
        program: "iTerm.app",
        minimum: Some(VersionTriple::new(3, 1, 0)),
    },
    HyperlinkRule::Program {
        program: "terminology",
        minimum: None,
    },
    HyperlinkRule::Program {
        program: "WezTerm",
        minimum: None,
    },
    HyperlinkRule::Term {
        value: "xterm-kitty",
    },
    HyperlinkRule::Present { var: "WT_SESSION" },
    HyperlinkRule::Present {
        var: "KONSOLE_VERSION",
    },
];

impl HyperlinkRule {
    /// Whether this rule fires in `env`.
    pub fn matches(&self, env: &impl EnvLookup) -> bool {
        match *self {
            HyperlinkRule::Forced { var } | HyperlinkRule::Marker { var } => {
                env.non_empty(var).is_some()
            }
            HyperlinkRule::MinVersion {
                var,
                minimum,
                format,
            } => env
                .non_empty(var)
                .is_some_and(|v| format.parse(&v).satisfies(&minimum)),
            HyperlinkRule::Program { program, minimum } => {
                if env.var(TERM_PROGRAM).as_deref() != Some(program) {
                    return false;
                }
                match minimum {
                    None => true,
                    Some(minimum) => {
                        let version = env.var(TERM_PROGRAM_VERSION).unwrap_or_default();
                        VersionTriple::parse(&version).satisfies(&minimum)
                    }
                }
            }
            HyperlinkRule::Term { value } => env.var(TERM).as_deref() == Some(value),
            HyperlinkRule::Present { var } => env.is_present(var),
        }
    }

    /// The environment variable this rule is primarily keyed on.
    pub fn variable(&self) -> &'static str {
        match *self {
            HyperlinkRule::Forced { var }
            | HyperlinkRule::Marker { var }
            | HyperlinkRule::MinVersion { var, .. }
            | HyperlinkRule::Present { var } => var,
            HyperlinkRule::Program { .. } => TERM_PROGRAM,
            HyperlinkRule::Term { .. } => TERM,
        }
    }
}

/// The first rule in [`HYPERLINK_RULES`] that matches `env`, if any.
pub fn hyperlink_support_in(env: &impl EnvLookup) -> Option<&'static HyperlinkRule> {
    let matched = HYPERLINK_RULES.iter().find(|rule| rule.matches(env));

    match matched {
        Some(rule) => {
            let value = env.var(rule.variable()).unwrap_or_default();
            tracing::debug!(
                rule = ?rule,
                var = rule.variable(),
                value = %value,
                "Detected OSC 8 hyperlink support"
            );
        }
        None => tracing::debug!("No hyperlink rule matched, assuming OSC 8 is unsupported"),
    }

    matched
}

/// Whether the terminal described by `env` renders OSC 8 hyperlinks.
pub fn supports_hyperlinks_in(env: &impl EnvLookup) -> bool {
    hyperlink_support_in(env).is_some()
}

/// Whether the current terminal renders OSC 8 hyperlinks.
///
/// Reads the process environment on every call.
///
/// ## Examples
///
/// ```
/// use termlink::supports_hyperlinks;
///
/// if supports_hyperlinks() {
///     println!("\x1b]8;;https://example.com\x07example\x1b]8;;\x07");
/// }
/// ```
pub fn supports_hyperlinks() -> bool {
    supports_hyperlinks_in(&ProcessEnv)
}
