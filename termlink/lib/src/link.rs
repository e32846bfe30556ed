//! Hyperlinks for terminal output.
//!
//! A link renders one of two ways:
//!
//! - **OSC 8**: `ESC ]8;;<url> BEL <style><text> ESC ]8;; BEL <reset>`, a
//!   clickable region in terminals that support it
//! - **Fallback**: `<style><text> (<url>)<reset>`, readable everywhere
//!
//! The reset is appended in both cases so that whatever the caller prints
//! next starts from default graphic attributes.

use std::fmt;

use crate::terminal::Capabilities;
use crate::utils::escape_codes::{BEL, OSC8_CLOSE, OSC8_PREFIX, RESET};
use crate::utils::style::StyleSpec;

/// Display text paired with the URL it should open.
///
/// ## Examples
///
/// ```
/// use termlink::{Capabilities, Link};
///
/// let link = Link::new("Hello", "https://google.com").with_style("red");
///
/// assert_eq!(
///     link.render(&Capabilities::full()),
///     "\x1b]8;;https://google.com\x07\x1b[31mHello\x1b]8;;\x07\x1b[0m"
/// );
/// assert_eq!(
///     link.render(&Capabilities::plain()),
///     "Hello (https://google.com)\x1b[0m"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The text to display
    text: String,
    /// Where the link points
    url: String,
    /// Style applied to the text when color is supported
    style: StyleSpec,
    /// Always render the `text (url)` fallback
    force_parenthetical: bool,
}

impl Link {
    /// Creates an unstyled link.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            style: StyleSpec::default(),
            force_parenthetical: false,
        }
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    /// Styles the text with a spec such as `"italic green"`; unknown names
    /// are ignored.
    pub fn with_style(self, spec: &str) -> Self {
        self.with_style_spec(StyleSpec::parse(spec))
    }

    pub fn with_style_spec(mut self, style: StyleSpec) -> Self {
        self.style = style;
        self
    }

    /// When `force` is true the link renders as `text (url)` whatever the
    /// terminal supports. Useful for snapshot tests and for terminals that
    /// claim OSC 8 support but mangle it.
    pub fn force_parenthetical(mut self, force: bool) -> Self {
        self.force_parenthetical = force;
        self
    }

    // -------------------------------------------------------------------------
    // Getters
    // -------------------------------------------------------------------------

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    pub fn is_forced_parenthetical(&self) -> bool {
        self.force_parenthetical
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Renders the link for a terminal with the given capabilities.
    pub fn render(&self, caps: &Capabilities) -> String {
        let style = if caps.color {
            self.style.to_sgr()
        } else {
            String::new()
        };

        if self.force_parenthetical || !caps.hyperlinks {
            format!("{}{} ({}){}", style, self.text, self.url, RESET)
        } else {
            format!(
                "{}{}{}{}{}{}{}",
                OSC8_PREFIX, self.url, BEL, style, self.text, OSC8_CLOSE, RESET
            )
        }
    }

    /// Renders the link for the current terminal.
    pub fn to_terminal(&self) -> String {
        self.render(&Capabilities::detect())
    }
}

impl fmt::Display for Link {
    /// Formats the link for the current terminal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_terminal())
    }
}

impl<S1, S2> From<(S1, S2)> for Link
where
    S1: Into<String>,
    S2: Into<String>,
{
    /// Creates a Link from a tuple of (text, url).
    fn from((text, url): (S1, S2)) -> Self {
        Link::new(text, url)
    }
}

/// Formats `text` as a clickable link to `url`.
///
/// Falls back to `text (url)` when the terminal doesn't support OSC 8, or
/// when `force_parenthetical` is set. The SGR reset is always appended.
///
/// ## Examples
///
/// ```
/// use termlink::link;
///
/// assert_eq!(
///     link("Hello", "https://google.com", true),
///     "Hello (https://google.com)\x1b[0m"
/// );
/// ```
pub fn link(text: &str, url: &str, force_parenthetical: bool) -> String {
    Link::new(text, url)
        .force_parenthetical(force_parenthetical)
        .to_terminal()
}

/// Formats `text` as a clickable, styled link to `url`.
///
/// `style` is a whitespace-separated list of style names (`"red bold"`),
/// applied only when the terminal supports color. In the OSC 8 form the style
/// sits inside the link markers; in the fallback form it prefixes the text.
pub fn color_link(text: &str, url: &str, style: &str, force_parenthetical: bool) -> String {
    Link::new(text, url)
        .with_style(style)
        .force_parenthetical(force_parenthetical)
        .to_terminal()
}
