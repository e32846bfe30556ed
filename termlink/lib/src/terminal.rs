use serde::{Deserialize, Serialize};

use crate::discovery::{
    color::supports_color,
    env::{EnvLookup, ProcessEnv},
    hyperlinks::supports_hyperlinks_in,
};

fn new_capabilities() -> Capabilities {
    Capabilities::from_env(&ProcessEnv, supports_color())
}

/// What the terminal can render, as far as links are concerned.
///
/// A [`Link`](crate::Link) is always rendered against one of these. Detect it
/// from the environment, or build it by hand when the answer is already known
/// (tests, snapshot output, a remote terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Whether the terminal supports OSC 8 hyperlinks
    pub hyperlinks: bool,
    /// Whether ANSI color/style codes should be emitted
    pub color: bool,
}

impl Default for Capabilities {
    fn default() -> Capabilities {
        new_capabilities()
    }
}

impl Capabilities {
    /// Detects capabilities from the process environment and stdout.
    pub fn detect() -> Capabilities {
        new_capabilities()
    }

    /// Detects hyperlink support from `env`; color support is supplied
    /// because it also depends on the output stream.
    pub fn from_env(env: &impl EnvLookup, color: bool) -> Capabilities {
        Capabilities {
            hyperlinks: supports_hyperlinks_in(env),
            color,
        }
    }

    /// Neither hyperlinks nor color; always renders `text (url)`.
    pub const fn plain() -> Capabilities {
        Capabilities {
            hyperlinks: false,
            color: false,
        }
    }

    /// Hyperlinks and color.
    pub const fn full() -> Capabilities {
        Capabilities {
            hyperlinks: true,
            color: true,
        }
    }
}
