use std::sync::LazyLock;

use regex::Regex;

/// The escape character that starts every sequence.
pub const ESC: &str = "\x1b";

/// Control Sequence Introducer, the prefix of SGR sequences.
pub const CSI: &str = "\x1b[";

/// The bell character, used here to terminate OSC sequences.
pub const BEL: &str = "\x07";

/// Opens an OSC 8 hyperlink; the URL and a [`BEL`] follow.
pub const OSC8_PREFIX: &str = "\x1b]8;;";

/// Closes an OSC 8 hyperlink (an OSC 8 with an empty URL).
pub const OSC8_CLOSE: &str = "\x1b]8;;\x07";

/// Resets all graphic attributes.
pub const RESET: &str = "\x1b[0m";

static CSI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?>]*[a-zA-Z]").expect("CSI pattern is valid"));

static OSC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\].*?(\x07|\x1b\\)").expect("OSC pattern is valid"));

static OSC8_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\]8;[^;\x07\x1b]*;[^\x07\x1b]*(\x07|\x1b\\)").expect("OSC 8 pattern is valid")
});

static SGR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is valid"));

/// Strips **all** CSI and OSC escape sequences out of the passed in string,
/// leaving only what a terminal would display.
pub fn strip_escape_codes<T: AsRef<str>>(content: T) -> String {
    let without_osc = OSC_PATTERN.replace_all(content.as_ref(), "");
    CSI_PATTERN.replace_all(&without_osc, "").into_owned()
}

/// Strips OSC 8 link markers out of the passed in text while retaining
/// other escape codes.
///
/// OSC 8 links have the format: `\x1b]8;<params>;<uri>\x07<text>\x1b]8;;\x07`
/// (either terminator, BEL or `ESC \`, is accepted).
pub fn strip_osc8_links<T: AsRef<str>>(content: T) -> String {
    OSC8_PATTERN.replace_all(content.as_ref(), "").into_owned()
}

/// Strips SGR color/style codes while retaining other escape codes.
pub fn strip_color_codes<T: AsRef<str>>(content: T) -> String {
    SGR_PATTERN.replace_all(content.as_ref(), "").into_owned()
}
