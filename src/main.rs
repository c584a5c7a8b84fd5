//! teambudget - Main CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use teambudget::cli::{Args, Commands, ConfigCommand};
use teambudget::config::Settings;
use teambudget::repl::display::{fmt_currency, DisplayManager};
use teambudget::repl::ReplSession;
use teambudget::roster::Roster;
use teambudget::selector::{SelectorConfig, DEFAULT_BUDGET_CEILING};
use teambudget::session::TeamSession;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load().context("Failed to load settings")?;

    if args.verbose > 0 {
        println!(
            "{}",
            format!("settings: {}", Settings::config_path()?.display()).dimmed()
        );
    }

    let roster = match &args.roster {
        Some(path) => Roster::load(path)
            .with_context(|| format!("Failed to load roster from {}", path.display()))?,
        None => Roster::builtin(),
    };

    // CLI flag wins over persisted default
    let ceiling = args
        .budget
        .or(settings.budget)
        .unwrap_or(DEFAULT_BUDGET_CEILING);

    match args.command {
        Some(Commands::Roster) => {
            let display = DisplayManager::new(settings.theme);
            let selector = teambudget::BudgetSelector::with_config(SelectorConfig::with_ceiling(
                ceiling,
            ));
            display.show_roster(&roster, &selector);
            Ok(())
        }
        Some(Commands::Config { action }) => match action {
            ConfigCommand::Show => {
                println!("Settings file: {}", Settings::config_path()?.display());
                println!("  theme:  {}", settings.theme);
                println!(
                    "  budget: {}",
                    settings
                        .budget
                        .map(fmt_currency)
                        .unwrap_or_else(|| format!("{} (default)", fmt_currency(ceiling)))
                );
                Ok(())
            }
            ConfigCommand::Theme { theme } => {
                settings.theme = theme;
                settings.save().context("Failed to save settings")?;
                println!("{}", format!("Theme set to {}", theme).green());
                Ok(())
            }
        },
        None => {
            let (session, events) = TeamSession::with_config(
                roster,
                SelectorConfig::with_ceiling(ceiling),
                teambudget::notify::DEFAULT_NOTICE_TTL,
            );

            let history_path = dirs::home_dir().map(|home| home.join(".teambudget").join("history.txt"));

            let mut repl = ReplSession::new(session, events, settings, history_path)?;
            repl.run().await
        }
    }
}
