//! Interactive read-eval-print loop
//!
//! Coordinates input handling, slash commands, event rendering, and the
//! rejection banner. The presentation layer only applies state the core
//! approved: toggle outcomes arrive through the event channel, never by
//! mutating UI state optimistically.

pub mod commands;
pub mod display;
pub mod input;

use crate::config::Settings;
use crate::events::SelectorEvent;
use crate::repl::commands::{is_command, CommandHandler};
use crate::repl::display::DisplayManager;
use crate::repl::input::InputHandler;
use crate::session::TeamSession;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// REPL session coordinator
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    session: TeamSession,
    events: mpsc::Receiver<SelectorEvent>,
    settings: Settings,
    display: DisplayManager,
}

impl ReplSession {
    /// Create a REPL over an existing team session
    pub fn new(
        session: TeamSession,
        events: mpsc::Receiver<SelectorEvent>,
        settings: Settings,
        history_path: Option<PathBuf>,
    ) -> Result<Self> {
        let input_handler = match history_path {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };
        let display = DisplayManager::new(settings.theme);

        Ok(ReplSession {
            input_handler,
            command_handler: CommandHandler::new(),
            session,
            events,
            settings,
            display,
        })
    }

    /// Run the interactive loop until exit or EOF
    pub async fn run(&mut self) -> Result<()> {
        self.display.show_banner(
            env!("CARGO_PKG_VERSION"),
            self.session.selector().ceiling(),
            self.session.roster().len(),
        );
        self.display
            .show_roster(self.session.roster(), self.session.selector());

        loop {
            // Surface the rejection banner while its window is open
            let notice = self.session.notices().snapshot();
            self.display.show_notice(&notice);

            let line = match self.input_handler.read_line()? {
                Some(line) => line,
                None => break,
            };

            if line.trim().is_empty() {
                continue;
            }

            if !is_command(&line) {
                println!(
                    "Commands start with {}. Type {} for the list.",
                    "/".green(),
                    "/help".green()
                );
                continue;
            }

            let command = self.command_handler.parse(&line);
            let keep_going = self
                .command_handler
                .execute(
                    command,
                    &mut self.session,
                    &mut self.settings,
                    &mut self.display,
                )
                .await?;

            self.drain_events();

            if !keep_going {
                break;
            }
        }

        self.input_handler.save_history()?;
        Ok(())
    }

    /// Render any pending selection events
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.display.show_event(&event);
        }
    }

    pub fn session(&self) -> &TeamSession {
        &self.session
    }
}
