use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::StyleError;
use crate::utils::escape_codes::CSI;

/// A named SGR (Select Graphic Rendition) attribute.
///
/// Names are the camelCase variant names (`bold`, `red`, `bgCyan`, ...) and
/// are matched case-sensitively.
///
/// ## Examples
///
/// ```
/// use termlink::StyleToken;
///
/// let token: StyleToken = "bgCyan".parse().unwrap();
/// assert_eq!(token.code(), 46);
/// assert!("BgCyan".parse::<StyleToken>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum StyleToken {
    Reset = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    Blink = 5,

    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,

    BgBlack = 40,
    BgRed = 41,
    BgGreen = 42,
    BgYellow = 43,
    BgBlue = 44,
    BgMagenta = 45,
    BgCyan = 46,
    BgWhite = 47,
}

impl StyleToken {
    /// The SGR parameter for this attribute.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The name this token is written as in a style spec.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Every token, in code order.
    pub fn all() -> impl Iterator<Item = StyleToken> {
        StyleToken::iter()
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered list of style tokens, e.g. parsed from `"red bold italic"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSpec(Vec<StyleToken>);

impl StyleSpec {
    /// Parses a whitespace-separated list of token names, dropping any name
    /// that isn't a [`StyleToken`].
    pub fn parse(spec: &str) -> Self {
        let tokens = spec
            .split_whitespace()
            .filter_map(|name| match name.parse::<StyleToken>() {
                Ok(token) => Some(token),
                Err(_) => {
                    tracing::trace!(token = name, "Ignoring unknown style token");
                    None
                }
            })
            .collect();

        Self(tokens)
    }

    /// Like [`StyleSpec::parse`], but an unknown name is an error.
    pub fn parse_strict(spec: &str) -> Result<Self, StyleError> {
        spec.split_whitespace()
            .map(|name| {
                name.parse::<StyleToken>()
                    .map_err(|_| StyleError::UnknownToken {
                        token: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn tokens(&self) -> &[StyleToken] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The SGR escape for these tokens (`\x1b[31;1m`), or `""` when there
    /// are none.
    pub fn to_sgr(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }

        let codes: Vec<String> = self.0.iter().map(|t| t.code().to_string()).collect();
        format!("{}{}m", CSI, codes.join(";"))
    }
}

impl FromStr for StyleSpec {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl From<Vec<StyleToken>> for StyleSpec {
    fn from(tokens: Vec<StyleToken>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<StyleToken> for StyleSpec {
    fn from_iter<I: IntoIterator<Item = StyleToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Builds the SGR escape for a style spec such as `"red bold"`.
///
/// Tokens are applied in the order written. Unknown tokens are skipped, and
/// when nothing is left the result is the empty string.
///
/// ## Examples
///
/// ```
/// use termlink::compose_style;
///
/// assert_eq!(compose_style("bold italic"), "\x1b[1;3m");
/// assert_eq!(compose_style("red  sparkly bold"), "\x1b[31;1m");
/// assert_eq!(compose_style("sparkly"), "");
/// ```
pub fn compose_style(spec: &str) -> String {
    StyleSpec::parse(spec).to_sgr()
}
