//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, builder::PossibleValuesParser};

use lpg_core::domain::LanguageRegistry;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "lpg",
    bin_name = "lpg",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate local projects for LeetCode problems",
    long_about = "lpg turns a LeetCode code template into a solution stub plus a \
                  test harness that calls it, ready to build and run.",
    after_help = "EXAMPLES:\n\
        \x20 lpg new -s two-sum -l python3\n\
        \x20 lpg new -u https://leetcode.com/problems/add-two-integers/ -l go --git-init\n\
        \x20 lpg new --source-file ./two-sum.c -l c --run\n\
        \x20 lpg completions bash > /usr/share/bash-completion/completions/lpg",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project for a problem.
    #[command(
        visible_alias = "n",
        about = "Generate a project for a problem",
        after_help = "EXAMPLES:\n\
            \x20 lpg new -s two-sum -l c\n\
            \x20 lpg new -s two-sum -l golang -d '~/code/{language_name}' --force\n\
            \x20 lpg new -s two-sum -l py --problems-dir ./snippets --dry-run"
    )]
    New(NewArgs),

    /// List the supported languages.
    #[command(
        visible_alias = "ls",
        about = "List supported languages",
        after_help = "EXAMPLES:\n\
            \x20 lpg languages\n\
            \x20 lpg languages --format json"
    )]
    Languages(LanguagesArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 lpg init\n\
            \x20 lpg init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 lpg completions bash > ~/.local/share/bash-completion/completions/lpg\n\
            \x20 lpg completions zsh  > ~/.zfunc/_lpg\n\
            \x20 lpg completions fish > ~/.config/fish/completions/lpg.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 lpg config get defaults.language\n\
            \x20 lpg config list\n\
            \x20 lpg config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `lpg new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Title slug of the problem, e.g. `two-sum`.
    #[arg(
        short = 's',
        long = "title-slug",
        value_name = "SLUG",
        help = "Problem title slug (e.g. two-sum)"
    )]
    pub title_slug: Option<String>,

    /// Problem URL; the slug is taken from its `/problems/<slug>` segment.
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        conflicts_with = "title_slug",
        help = "Problem URL"
    )]
    pub url: Option<String>,

    /// Read the code template from a local file instead of the snippet
    /// directory.
    #[arg(
        long = "source-file",
        value_name = "FILE",
        conflicts_with = "problems_dir",
        help = "Code template file to generate from"
    )]
    pub source_file: Option<PathBuf>,

    /// Language slug or alias.  Falls back to `defaults.language`.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        ignore_case = true,
        value_parser = language_parser(),
        help = "Language to generate the project in"
    )]
    pub language: Option<String>,

    /// Directory pattern; `{language_name}` and a leading `~` are expanded.
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "PATTERN",
        help = "Directory the project is created in"
    )]
    pub directory: Option<String>,

    /// Directory of `<slug>.json` snippet files.
    #[arg(
        long = "problems-dir",
        value_name = "DIR",
        help = "Directory containing <slug>.json code snippets"
    )]
    pub problems_dir: Option<PathBuf>,

    /// Write into an existing project directory.
    #[arg(short = 'f', long = "force", help = "Write into an existing directory")]
    pub force: bool,

    /// Run `git init` in the new project.
    #[arg(short = 'g', long = "git-init", help = "Initialise a git repository")]
    pub git_init: bool,

    /// Build and run the test harness after generating.
    #[arg(long = "run", conflicts_with = "dry_run", help = "Build and run the harness")]
    pub run: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Every slug and alias of the built-in languages.
fn language_parser() -> PossibleValuesParser {
    let registry = LanguageRegistry::builtin();
    let names: Vec<&'static str> = registry
        .profiles()
        .flat_map(|profile| std::iter::once(profile.slug).chain(profile.aliases.iter().copied()))
        .collect();
    PossibleValuesParser::new(names)
}

// ── languages ─────────────────────────────────────────────────────────────────

/// Arguments for `lpg languages`.
#[derive(Debug, Args)]
pub struct LanguagesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `languages` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One slug per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `lpg init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `lpg completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `lpg config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.language`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["lpg", "new", "-s", "two-sum", "-l", "python3"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.title_slug.as_deref(), Some("two-sum"));
                assert_eq!(args.language.as_deref(), Some("python3"));
                assert!(!args.force);
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn language_aliases_are_accepted() {
        for alias in ["go", "py", "python", "golang", "c"] {
            let result = Cli::try_parse_from(["lpg", "new", "-s", "x", "-l", alias]);
            assert!(result.is_ok(), "alias {alias} rejected");
        }
    }

    #[test]
    fn unknown_language_is_rejected() {
        let result = Cli::try_parse_from(["lpg", "new", "-s", "x", "-l", "cobol"]);
        assert!(result.is_err());
    }

    #[test]
    fn slug_and_url_conflict() {
        let result = Cli::try_parse_from([
            "lpg",
            "new",
            "-s",
            "two-sum",
            "-u",
            "https://leetcode.com/problems/two-sum/",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn run_and_dry_run_conflict() {
        let result = Cli::try_parse_from(["lpg", "new", "-s", "x", "--run", "--dry-run"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["lpg", "--quiet", "--verbose", "languages"]);
        assert!(result.is_err());
    }
}
