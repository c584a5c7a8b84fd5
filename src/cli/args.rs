//! Command-line argument parsing
//!
//! Clap-based CLI: no subcommand starts the interactive session.

use crate::config::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// teambudget - Build a team under a fixed budget from the terminal
#[derive(Parser, Debug)]
#[command(name = "teambudget")]
#[command(version = "0.3.0")]
#[command(about = "Build a team under a fixed budget", long_about = None)]
pub struct Args {
    /// Roster file (JSON array of candidates); built-in demo roster when omitted
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Budget ceiling override in whole currency units
    #[arg(long)]
    pub budget: Option<u64>,

    /// Verbosity level: -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the roster and exit
    Roster,

    /// Inspect or change persisted settings
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print current settings
    Show,

    /// Set and persist the display theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_starts_session() {
        let args = Args::parse_from(["teambudget"]);
        assert!(args.command.is_none());
        assert!(args.roster.is_none());
        assert!(args.budget.is_none());
    }

    #[test]
    fn test_budget_override() {
        let args = Args::parse_from(["teambudget", "--budget", "80000"]);
        assert_eq!(args.budget, Some(80_000));
    }

    #[test]
    fn test_config_theme_subcommand() {
        let args = Args::parse_from(["teambudget", "config", "theme", "dark"]);
        match args.command {
            Some(Commands::Config {
                action: ConfigCommand::Theme { theme },
            }) => assert_eq!(theme, Theme::Dark),
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_roster_subcommand() {
        let args = Args::parse_from(["teambudget", "--roster", "team.json", "roster"]);
        assert!(matches!(args.command, Some(Commands::Roster)));
        assert_eq!(args.roster, Some(PathBuf::from("team.json")));
    }
}
