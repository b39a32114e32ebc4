//! CLI argument definitions and parsing structures
//!
//! This module defines the command-line interface structure using clap,
//! including the main `Cli` struct and the subcommand enum.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// vidflow - phase tracking for a video production pipeline
#[derive(Parser)]
#[command(name = "vidflow")]
#[command(about = "Classify videos into lifecycle phases and score per-phase progress")]
#[command(long_about = r#"
vidflow reads a YAML video index and the video records it points at, derives
each video's lifecycle phase from its current fields, and scores how far each
production phase has progressed. Nothing is written back.

EXAMPLES:
  # How many videos sit in each phase
  vidflow phases

  # Videos that were handed to the editor
  vidflow list --phase edit_requested

  # Per-phase progress of a single record
  vidflow status manuscript/devops/argo-cd.yaml

  # Browse videos grouped by phase
  vidflow tui

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Config file is discovered by searching upward from CWD for .vidflow/config.toml
  Use --config to specify an explicit config file path

PHASES:
  Ideas → Started → Material Done → Edit Requested → Publish Pending → Published
  Delayed and Sponsored Blocked take videos out of the normal flow
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Path to the video index file
    #[arg(long, global = true)]
    pub index: Option<Utf8PathBuf>,

    /// Directory holding the video records
    #[arg(long, global = true)]
    pub manuscript_dir: Option<Utf8PathBuf>,

    /// Disable colored output (also honored via NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count indexed videos per lifecycle phase
    ///
    /// Every phase is listed, including empty ones.
    ///
    /// EXAMPLES:
    ///   vidflow phases
    ///   vidflow phases --json
    Phases {
        /// Output counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// List indexed videos with their lifecycle phase
    ///
    /// EXAMPLES:
    ///   vidflow list
    ///   vidflow list --phase publish_pending
    ///   vidflow list --phase "Sponsored Blocked" --json
    List {
        /// Only show videos in this phase (snake_case, kebab-case or display name)
        #[arg(long)]
        phase: Option<String>,

        /// Output the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show phase and per-phase progress of one video record
    ///
    /// EXAMPLES:
    ///   vidflow status manuscript/devops/argo-cd.yaml
    ///   vidflow status manuscript/devops/argo-cd.yaml --explain
    ///   vidflow status manuscript/devops/argo-cd.yaml --json
    Status {
        /// Path to the video record file
        path: Utf8PathBuf,

        /// List every scored field under its phase
        #[arg(long)]
        explain: bool,

        /// Output status as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse videos grouped by phase in a terminal UI (read-only)
    Tui,

    /// Show the effective configuration and where each value came from
    ///
    /// EXAMPLES:
    ///   vidflow config
    ///   vidflow config --json
    Config {
        /// Output configuration as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Operation name used in error reports.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Phases { .. } => "phases",
            Self::List { .. } => "list",
            Self::Status { .. } => "status",
            Self::Tui => "tui",
            Self::Config { .. } => "config",
        }
    }
}

/// Build the clap command (for completions and docs tooling).
#[must_use]
pub fn build_cli() -> clap::Command {
    <Cli as clap::CommandFactory>::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_parse_list_with_phase() {
        let cli = Cli::try_parse_from(["vidflow", "list", "--phase", "ideas", "--json"]).unwrap();
        match cli.command {
            Commands::List { phase, json } => {
                assert_eq!(phase.as_deref(), Some("ideas"));
                assert!(json);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vidflow",
            "phases",
            "--index",
            "data/index.yaml",
            "--no-color",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.index.as_deref().map(|p| p.as_str()), Some("data/index.yaml"));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert_eq!(cli.command.operation(), "phases");
    }

    #[test]
    fn test_status_requires_path() {
        assert!(Cli::try_parse_from(["vidflow", "status"]).is_err());
    }
}
