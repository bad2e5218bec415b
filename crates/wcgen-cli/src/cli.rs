//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and defaults wiring.  No business logic lives here.
//!
//! `wcgen` is a single-purpose command: every input has a flag for scripted
//! use, and anything omitted is prompted for interactively.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wcgen",
    bin_name = "wcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold a web component from remote boilerplate",
    long_about = "Wcgen locates your project's components directory, downloads \
                  the reference boilerplate, and generates a ready-to-use web \
                  component with your name and tag prefix substituted in.",
    after_help = "EXAMPLES:\n\
        \x20 wcgen                                # fully interactive\n\
        \x20 wcgen --name Header                  # prompt only for the prefix\n\
        \x20 wcgen --name nav --prefix x --yes    # no prompts, overwrite allowed\n\
        \x20 wcgen --dir-index 1                  # pick the second components dir",
)]
pub struct Cli {
    /// Component name; prompted for (default `Header`) when omitted.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Component name")]
    pub name: Option<String>,

    /// Tag prefix; prompted for (default `wc-`) when omitted.  A missing
    /// trailing `-` is added automatically.
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "PREFIX",
        help = "Custom element tag prefix"
    )]
    pub prefix: Option<String>,

    /// Zero-based index into the discovered `components` directories.
    /// Out-of-range values fall back to the first directory.
    #[arg(
        long = "dir-index",
        value_name = "N",
        help = "Index of the components directory to use"
    )]
    pub dir_index: Option<usize>,

    /// Overwrite an existing component without confirmation.
    #[arg(short = 'y', long = "yes", help = "Overwrite without confirmation")]
    pub yes: bool,

    /// Flags available regardless of inputs.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(long = "no-color", env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_bare_invocation() {
        let cli = Cli::parse_from(["wcgen"]);
        assert!(cli.name.is_none());
        assert!(cli.prefix.is_none());
        assert!(cli.dir_index.is_none());
        assert!(!cli.yes);
    }

    #[test]
    fn parses_all_inputs_as_flags() {
        let cli = Cli::parse_from([
            "wcgen",
            "--name",
            "nav",
            "--prefix",
            "x",
            "--dir-index",
            "2",
            "--yes",
        ]);
        assert_eq!(cli.name.as_deref(), Some("nav"));
        assert_eq!(cli.prefix.as_deref(), Some("x"));
        assert_eq!(cli.dir_index, Some(2));
        assert!(cli.yes);
    }

    #[test]
    fn short_flags() {
        let cli = Cli::parse_from(["wcgen", "-n", "card", "-p", "ui-", "-y"]);
        assert_eq!(cli.name.as_deref(), Some("card"));
        assert_eq!(cli.prefix.as_deref(), Some("ui-"));
        assert!(cli.yes);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["wcgen", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn dir_index_must_be_numeric() {
        assert!(Cli::try_parse_from(["wcgen", "--dir-index", "first"]).is_err());
    }
}
