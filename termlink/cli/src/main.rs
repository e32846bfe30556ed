//! Terminal hyperlink utility CLI.
//!
//! Composes OSC 8 hyperlinks and reports what the current terminal supports:
//! - Hyperlink (OSC 8) detection, including which rule matched
//! - ANSI color support
//! - The available style names

use std::collections::BTreeMap;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use serde::Serialize;
use termlink::{
    discovery::{
        env::{EnvLookup, ProcessEnv},
        hyperlinks::{hyperlink_support_in, HyperlinkRule, CONSULTED_VARS},
    },
    utils::escape_codes::strip_escape_codes,
    Capabilities, Link, StyleSpec, StyleToken,
};

/// Terminal hyperlink utility
#[derive(Parser, Debug)]
#[command(name = "termlink")]
#[command(author, version, about = "Compose clickable terminal hyperlinks and inspect terminal support")]
#[command(after_help = "\
ENVIRONMENT:
  FORCE_HYPERLINK=1   treat the terminal as hyperlink capable
  NO_COLOR=1          never emit color
  CLICOLOR_FORCE=1    emit color even when not writing to a terminal
  RUST_LOG=debug      log detection decisions to stderr
")]
struct Args {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Strip escape codes from the output (show only the visible text)
    #[arg(long, global = true)]
    plain: bool,

    /// Generate shell completions and exit.
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Print TEXT as a link to URL
    ///
    /// Examples:
    ///   termlink link "Docs" https://docs.rs
    ///   termlink link --style "italic green" "@twitter" https://twitter.com/twitter
    ///   termlink link --force-parenthetical "Docs" https://docs.rs
    Link {
        /// The visible text
        text: String,

        /// The link destination
        url: String,

        /// Whitespace-separated style names (see `termlink styles`)
        #[arg(short, long, default_value = "")]
        style: String,

        /// Always render `text (url)`, even in terminals that support OSC 8
        #[arg(short = 'p', long)]
        force_parenthetical: bool,

        /// Fail on unknown style names instead of ignoring them
        #[arg(long)]
        strict: bool,
    },

    /// Report hyperlink and color support for this terminal (the default)
    Detect,

    /// List the available style names and their SGR codes
    Styles,

    /// Print a short paragraph showing plain and styled links
    Demo,
}

/// Detection results for the current terminal
#[derive(Debug, Serialize)]
struct DetectionReport {
    hyperlinks: bool,
    color: bool,
    /// The rule that enabled hyperlinks, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_rule: Option<HyperlinkRule>,
    /// Every variable hyperlink detection looks at
    environment: BTreeMap<&'static str, Option<String>>,
}

/// One row of `termlink styles`
#[derive(Debug, Serialize)]
struct StyleRow {
    name: StyleToken,
    code: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Setup logging if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Args::parse();

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "termlink", &mut std::io::stdout());
        return Ok(());
    }

    match args.command {
        Some(Command::Link {
            ref text,
            ref url,
            ref style,
            force_parenthetical,
            strict,
        }) => render_link(text, url, style, force_parenthetical, strict, &args),
        Some(Command::Styles) => list_styles(&args),
        Some(Command::Demo) => {
            emit(&demo(&Capabilities::detect()), &args);
            Ok(())
        }
        Some(Command::Detect) | None => report(&args),
    }
}

/// Prints `output`, stripped of escape codes when `--plain` was given.
fn emit(output: &str, args: &Args) {
    if args.plain {
        println!("{}", strip_escape_codes(output));
    } else {
        println!("{}", output);
    }
}

fn render_link(
    text: &str,
    url: &str,
    style: &str,
    force_parenthetical: bool,
    strict: bool,
    args: &Args,
) -> color_eyre::Result<()> {
    let spec = if strict {
        StyleSpec::parse_strict(style)?
    } else {
        StyleSpec::parse(style)
    };

    let caps = Capabilities::detect();
    tracing::debug!(?caps, style = %style, strict, "Rendering link");

    let link = Link::new(text, url)
        .with_style_spec(spec)
        .force_parenthetical(force_parenthetical);
    let rendered = link.render(&caps);

    if args.json {
        let output = serde_json::json!({
            "text": link.text(),
            "url": link.url(),
            "style": link.style().to_sgr(),
            "capabilities": caps,
            "rendered": rendered,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        emit(&rendered, args);
    }

    Ok(())
}

fn collect_report() -> DetectionReport {
    let caps = Capabilities::detect();
    let environment = CONSULTED_VARS
        .iter()
        .map(|var| (*var, ProcessEnv.var(var)))
        .collect();

    DetectionReport {
        hyperlinks: caps.hyperlinks,
        color: caps.color,
        matched_rule: hyperlink_support_in(&ProcessEnv).copied(),
        environment,
    }
}

fn report(args: &Args) -> color_eyre::Result<()> {
    let report = collect_report();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let yes_no = |b: bool| if b { "yes" } else { "no" };

    println!("Terminal Link Support");
    println!("=====================");
    println!("Hyperlinks (OSC 8): {}", yes_no(report.hyperlinks));
    if let Some(rule) = &report.matched_rule {
        println!("  matched:          {}", describe_rule(rule));
    }
    println!("Color (SGR):        {}", yes_no(report.color));
    println!();
    println!("Environment:");
    for (var, value) in &report.environment {
        match value {
            Some(v) => println!("  {:<22}{:?}", var, v),
            None => println!("  {:<22}(unset)", var),
        }
    }

    Ok(())
}

fn describe_rule(rule: &HyperlinkRule) -> String {
    match rule {
        HyperlinkRule::Forced { var } => format!("{} is set (forced)", var),
        HyperlinkRule::Marker { var } => format!("{} is set", var),
        HyperlinkRule::MinVersion { var, minimum, .. } => format!("{} >= {}", var, minimum),
        HyperlinkRule::Program {
            program,
            minimum: Some(minimum),
        } => format!("TERM_PROGRAM={} (version >= {})", program, minimum),
        HyperlinkRule::Program {
            program,
            minimum: None,
        } => format!("TERM_PROGRAM={}", program),
        HyperlinkRule::Term { value } => format!("TERM={}", value),
        HyperlinkRule::Present { var } => format!("{} is present", var),
    }
}

fn list_styles(args: &Args) -> color_eyre::Result<()> {
    if args.json {
        let rows: Vec<StyleRow> = StyleToken::all()
            .map(|name| StyleRow {
                name,
                code: name.code(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let color = Capabilities::detect().color && !args.plain;
    for token in StyleToken::all() {
        let sample = if color {
            format!(
                "{}{}{}",
                StyleSpec::from(vec![token]).to_sgr(),
                token.name(),
                termlink::utils::escape_codes::RESET
            )
        } else {
            token.name().to_string()
        };
        // padding is applied to the visible name, not the escape codes
        let pad = 12usize.saturating_sub(token.name().len());
        println!("{}{}{:>3}", sample, " ".repeat(pad), token.code());
    }

    Ok(())
}

/// The sample paragraph: one plain link and one styled link.
fn demo(caps: &Capabilities) -> String {
    let twitter = Link::new("Twitter", "https://twitter.com").render(caps);
    let handle = Link::new("@twitter", "https://twitter.com/twitter")
        .with_style("italic green")
        .render(caps);

    format!(
        "Hello I'm John.\nI'm 21 years old.\nHere's Twitter: {}.\nAnd here's Twitter's Twitter: {}.\nAnyways, see ya!",
        twitter, handle
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_plain() {
        let out = demo(&Capabilities::plain());
        assert!(out.contains("Here's Twitter: Twitter (https://twitter.com)\x1b[0m."));
        assert!(out.contains("@twitter (https://twitter.com/twitter)\x1b[0m"));
    }

    #[test]
    fn test_demo_full() {
        let out = demo(&Capabilities::full());
        assert!(out.contains(
            "\x1b]8;;https://twitter.com/twitter\x07\x1b[3;32m@twitter\x1b]8;;\x07\x1b[0m"
        ));
    }

    #[test]
    fn test_describe_rule() {
        let rule = HyperlinkRule::Program {
            program: "iTerm.app",
            minimum: Some(termlink::VersionTriple::new(3, 1, 0)),
        };
        assert_eq!(describe_rule(&rule), "TERM_PROGRAM=iTerm.app (version >= 3.1.0)");
    }

    #[test]
    fn test_args_parse_link() {
        let args = Args::try_parse_from([
            "termlink",
            "link",
            "--style",
            "red bold",
            "-p",
            "Hello",
            "https://google.com",
        ])
        .unwrap();

        match args.command {
            Some(Command::Link {
                text,
                url,
                style,
                force_parenthetical,
                strict,
            }) => {
                assert_eq!(text, "Hello");
                assert_eq!(url, "https://google.com");
                assert_eq!(style, "red bold");
                assert!(force_parenthetical);
                assert!(!strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }
}
