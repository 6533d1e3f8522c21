//! Command-line interface definition.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point for the dots dotfiles manager.
#[derive(Parser, Debug)]
#[command(
    name = "dots",
    about = "Keep dotfiles in ~/.dots and symlink them into place",
    version
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options every subcommand accepts
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Override the home directory (defaults to $HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create ~/.dots and an empty manifest
    Init(InitOpts),
    /// Move a file into ~/.dots and symlink it back
    Add(FileOpts),
    /// Show the sync status of every tracked file
    Status,
    /// Create any missing symlinks
    Apply,
    /// List tracked files
    List,
    /// Stop tracking a file and restore it as a plain copy
    Remove(FileOpts),
    /// Show differences between live files and their stored copies
    Diff(DiffOpts),
    /// Generate shell completions
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Short name used for the per-command log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Add(_) => "add",
            Self::Status => "status",
            Self::Apply => "apply",
            Self::List => "list",
            Self::Remove(_) => "remove",
            Self::Diff(_) => "diff",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}

/// Options for the `init` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct InitOpts {
    /// Do not initialize a git repository in ~/.dots
    #[arg(long)]
    pub no_git: bool,
}

/// A single file argument, for `add` and `remove`.
#[derive(Parser, Debug, Clone)]
pub struct FileOpts {
    /// Path of the live file
    pub file: PathBuf,
}

/// Options for the `diff` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct DiffOpts {
    /// Only diff this file (defaults to every diverged file)
    pub file: Option<PathBuf>,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init() {
        let cli = Cli::parse_from(["dots", "init"]);
        assert!(matches!(
            cli.command,
            Command::Init(InitOpts { no_git: false })
        ));
    }

    #[test]
    fn parse_init_no_git() {
        let cli = Cli::parse_from(["dots", "init", "--no-git"]);
        assert!(matches!(
            cli.command,
            Command::Init(InitOpts { no_git: true })
        ));
    }

    #[test]
    fn parse_add_file() {
        let cli = Cli::parse_from(["dots", "add", "~/.bashrc"]);
        assert!(
            matches!(&cli.command, Command::Add(_)),
            "Expected Add command"
        );
        if let Command::Add(opts) = cli.command {
            assert_eq!(opts.file, PathBuf::from("~/.bashrc"));
        }
    }

    #[test]
    fn add_requires_file() {
        assert!(Cli::try_parse_from(["dots", "add"]).is_err());
    }

    #[test]
    fn parse_diff_without_file() {
        let cli = Cli::parse_from(["dots", "diff"]);
        assert!(matches!(
            cli.command,
            Command::Diff(DiffOpts { file: None })
        ));
    }

    #[test]
    fn parse_diff_with_file() {
        let cli = Cli::parse_from(["dots", "diff", ".vimrc"]);
        assert!(matches!(&cli.command, Command::Diff(_)));
        if let Command::Diff(opts) = cli.command {
            assert_eq!(opts.file, Some(PathBuf::from(".vimrc")));
        }
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["dots", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Command::Completions(CompletionsOpts {
                shell: clap_complete::Shell::Zsh
            })
        ));
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["dots", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["dots", "-v", "status"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_home_override_after_subcommand() {
        let cli = Cli::parse_from(["dots", "list", "--home", "/tmp/home"]);
        assert_eq!(cli.global.home, Some(PathBuf::from("/tmp/home")));
    }

    #[test]
    fn command_names() {
        let cli = Cli::parse_from(["dots", "remove", "x"]);
        assert_eq!(cli.command.name(), "remove");
        assert_eq!(Command::Apply.name(), "apply");
    }
}
