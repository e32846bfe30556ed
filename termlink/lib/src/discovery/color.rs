//! ANSI color support detection.
//!
//! Whether to emit color is a solved problem with well-known conventions, so
//! this follows them via `anstyle-query` rather than inventing new ones:
//!
//! - [`NO_COLOR`](https://no-color.org) set to a non-empty value disables color
//! - `CLICOLOR_FORCE` set to a non-empty value enables color, even when piped
//! - `CLICOLOR=0` disables color
//! - otherwise the stream must be a TTY, and `TERM` must not be `dumb`
//!   (unless `CLICOLOR` is set or we're running in CI)

use std::io::{self, IsTerminal};

use anstyle_query as query;

/// Whether ANSI color should be written to `stream`.
pub fn supports_color_on<T: IsTerminal>(stream: &T) -> bool {
    let clicolor = query::clicolor();

    let (supported, reason) = if query::no_color() {
        (false, "NO_COLOR")
    } else if query::clicolor_force() {
        (true, "CLICOLOR_FORCE")
    } else if clicolor == Some(false) {
        (false, "CLICOLOR")
    } else if !stream.is_terminal() {
        (false, "not a tty")
    } else {
        (
            query::term_supports_color() || clicolor == Some(true) || query::is_ci(),
            "TERM",
        )
    };

    tracing::debug!(supported, source = reason, "Detected ANSI color support");
    supported
}

/// Whether ANSI color should be written to stdout.
///
/// ## Examples
///
/// ```
/// use termlink::supports_color;
///
/// if supports_color() {
///     println!("\x1b[31mred\x1b[0m");
/// } else {
///     println!("red");
/// }
/// ```
pub fn supports_color() -> bool {
    supports_color_on(&io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR_VARS: [&str; 3] = ["NO_COLOR", "CLICOLOR", "CLICOLOR_FORCE"];

    /// Runs `f` with the color variables set as given, then restores them.
    fn with_color_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
        let original: Vec<_> = COLOR_VARS
            .iter()
            .map(|k| (*k, std::env::var_os(k)))
            .collect();

        // SAFETY: Callers are #[serial], no concurrent env access
        unsafe {
            for key in COLOR_VARS {
                std::env::remove_var(key);
            }
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
        }

        let result = f();

        // SAFETY: Same as above
        unsafe {
            for (key, value) in original {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }

        result
    }

    #[test]
    #[serial_test::serial]
    fn test_no_color_disables() {
        assert!(!with_color_env(&[("NO_COLOR", "1")], supports_color));
    }

    #[test]
    #[serial_test::serial]
    fn test_no_color_beats_clicolor_force() {
        assert!(!with_color_env(
            &[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")],
            supports_color
        ));
    }

    #[test]
    #[serial_test::serial]
    fn test_clicolor_force_enables_without_tty() {
        assert!(with_color_env(&[("CLICOLOR_FORCE", "1")], supports_color));
    }

    #[test]
    #[serial_test::serial]
    fn test_clicolor_zero_disables() {
        assert!(!with_color_env(&[("CLICOLOR", "0")], supports_color));
    }

    #[test]
    #[serial_test::serial]
    fn test_empty_no_color_is_ignored() {
        assert!(with_color_env(
            &[("NO_COLOR", ""), ("CLICOLOR_FORCE", "1")],
            supports_color
        ));
    }
}
