//! Slash-command handling for the interactive session

use crate::config::{Settings, Theme};
use crate::repl::display::DisplayManager;
use crate::selector::ToggleOutcome;
use crate::session::TeamSession;
use anyhow::Result;
use colored::*;

/// Check if input is a slash command
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Roster,
    Team,
    Add { id: Option<u32> },
    Remove { id: Option<u32> },
    Status,
    History { limit: Option<usize> },
    Theme { theme: Option<Theme> },
    Reset,
    Clear,
    Exit,
    Unknown { input: String },
}

/// Parser and executor for slash commands
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        CommandHandler
    }

    /// Parse an input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "roster" | "r" => Command::Roster,
            "team" | "t" => Command::Team,
            "add" | "a" => Command::Add {
                id: parts.get(1).and_then(|s| s.parse().ok()),
            },
            "remove" | "rm" => Command::Remove {
                id: parts.get(1).and_then(|s| s.parse().ok()),
            },
            "status" => Command::Status,
            "history" => Command::History {
                limit: parts.get(1).and_then(|s| s.parse().ok()),
            },
            "theme" => Command::Theme {
                theme: parts.get(1).and_then(|s| match s.to_lowercase().as_str() {
                    "light" => Some(Theme::Light),
                    "dark" => Some(Theme::Dark),
                    _ => None,
                }),
            },
            "reset" => Command::Reset,
            "clear" | "cls" => Command::Clear,
            "exit" | "quit" | "q" => Command::Exit,
            _ => Command::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Execute a command
    ///
    /// Returns true if the session should continue, false to exit.
    pub async fn execute(
        &mut self,
        command: Command,
        session: &mut TeamSession,
        settings: &mut Settings,
        display: &mut DisplayManager,
    ) -> Result<bool> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(true)
            }
            Command::Roster => {
                display.show_roster(session.roster(), session.selector());
                Ok(true)
            }
            Command::Team => {
                display.show_team(session.selector());
                Ok(true)
            }
            Command::Add { id } => {
                match id {
                    Some(id) => self.toggle(session, display, id, true).await,
                    None => display.show_error("Usage: /add <id>"),
                }
                Ok(true)
            }
            Command::Remove { id } => {
                match id {
                    Some(id) => self.toggle(session, display, id, false).await,
                    None => display.show_error("Usage: /remove <id>"),
                }
                Ok(true)
            }
            Command::Status => {
                display.show_status(
                    session.selector(),
                    &session.stats().get_stats(),
                    session.stats().session_duration(),
                );
                Ok(true)
            }
            Command::History { limit } => {
                let records = session.history(limit.unwrap_or(10));
                display.show_history(&records);
                Ok(true)
            }
            Command::Theme { theme } => {
                let new_theme = match theme {
                    Some(theme) => {
                        settings.theme = theme;
                        theme
                    }
                    None => settings.toggle_theme(),
                };
                display.set_theme(new_theme);
                match settings.save() {
                    Ok(()) => display.show_info(&format!("Theme set to {}", new_theme)),
                    Err(err) => display.show_error(&format!("Could not save settings: {}", err)),
                }
                Ok(true)
            }
            Command::Reset => {
                session.reset().await;
                Ok(true)
            }
            Command::Clear => {
                let _ = display.clear_screen();
                Ok(true)
            }
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                Ok(false)
            }
            Command::Unknown { input } => {
                display.show_error(&format!("Unknown command: {}", input));
                println!("Type {} for available commands", "/help".cyan());
                Ok(true)
            }
        }
    }

    async fn toggle(
        &mut self,
        session: &mut TeamSession,
        display: &DisplayManager,
        id: u32,
        want_selected: bool,
    ) {
        let result = if want_selected {
            session.add(id).await
        } else {
            session.remove(id).await
        };

        match result {
            // Committed/Removed/Rejected are rendered from the event stream
            Ok(ToggleOutcome::NoChange) => {
                let state = if want_selected {
                    "already selected"
                } else {
                    "not selected"
                };
                display.show_info(&format!("Candidate {} is {}", id, state));
            }
            Ok(_) => {}
            Err(err) => display.show_error(&err.to_string()),
        }
    }

    fn show_help(&self) {
        println!("\n{}", "Available commands:".bold());
        let entries = [
            ("/roster, /r", "Show the roster with selection marks"),
            ("/team, /t", "Show your team, total, and budget bar"),
            ("/add <id>", "Add a candidate to your team"),
            ("/remove <id>", "Remove a candidate from your team"),
            ("/status", "Show session statistics"),
            ("/history [n]", "Show recent actions (default 10)"),
            ("/theme [light|dark]", "Switch theme (toggles without argument)"),
            ("/reset", "Clear the selection"),
            ("/clear, /cls", "Clear the screen"),
            ("/help, /h", "Show this help"),
            ("/exit, /q", "Quit"),
        ];
        for (cmd, desc) in entries {
            println!("  {:<22} {}", cmd.green(), desc);
        }
        println!();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
