//! Display manager for the interactive terminal UI
//!
//! Renders the roster table, team list, budget utilization bar, and the
//! transient rejection banner. Colors follow the persisted theme.

use crate::config::Theme;
use crate::events::SelectorEvent;
use crate::notify::Notification;
use crate::roster::Roster;
use crate::selector::BudgetSelector;
use crate::session::{ActionKind, ActionRecord};
use crate::telemetry::SelectionStats;
use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Format whole currency units with thousands separators, e.g. `$52,000`
pub fn fmt_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

/// Theme-aware terminal renderer
pub struct DisplayManager {
    theme: Theme,
}

impl DisplayManager {
    pub fn new(theme: Theme) -> Self {
        DisplayManager { theme }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn accent(&self) -> Color {
        match self.theme {
            Theme::Light => Color::Cyan,
            Theme::Dark => Color::Blue,
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, ceiling: u64, roster_size: usize) {
        let width = 64;
        let rule = "=".repeat(width).color(self.accent());
        let title = format!("  teambudget {} - Build Your Team", version);
        let info = format!(
            "  Budget: {} | Roster: {} candidates | Theme: {}",
            fmt_currency(ceiling),
            roster_size,
            self.theme
        );

        println!("\n{}", rule);
        println!("{}", title.bold().color(self.accent()));
        println!("{}", info.dimmed());
        println!("{}\n", rule);
        println!(
            "Type {} for commands, {} to quit\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Roster table with selection marks
    pub fn show_roster(&self, roster: &Roster, selector: &BudgetSelector) {
        self.show_section("Roster");
        for candidate in roster.candidates() {
            let mark = if selector.is_selected(candidate.id) {
                "[x]".green()
            } else {
                "[ ]".dimmed()
            };
            println!(
                "  {} {:>2}  {:<16} {:<12} {:>8}",
                mark,
                candidate.id,
                candidate.name,
                candidate.department.dimmed(),
                fmt_currency(candidate.cost)
            );
        }
        println!();
    }

    /// Team list plus totals and the budget bar
    pub fn show_team(&self, selector: &BudgetSelector) {
        self.show_section("My Team");
        if selector.selection().is_empty() {
            println!("  {}", "Select candidates to add them to your team.".dimmed());
        } else {
            for candidate in selector.selection() {
                println!(
                    "  {} {} ({})",
                    "•".color(self.accent()),
                    candidate.name,
                    fmt_currency(candidate.cost).dimmed()
                );
            }
        }
        println!(
            "\n  Total: {} / {} | Remaining: {} | Selected: {}",
            fmt_currency(selector.total()).bold(),
            fmt_currency(selector.ceiling()),
            fmt_currency(selector.remaining()),
            selector.selected_count()
        );
        self.show_budget_bar(selector.total(), selector.ceiling());
        println!();
    }

    /// Static budget utilization bar
    pub fn show_budget_bar(&self, total: u64, ceiling: u64) {
        let pb = ProgressBar::new(ceiling.max(1));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Budget [{bar:40.green/blue}] {percent}% | {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb.set_position(total.min(ceiling));
        pb.set_message(format!(
            "{} of {}",
            fmt_currency(total),
            fmt_currency(ceiling)
        ));
        // Leave the rendered bar in place
        pb.abandon();
    }

    /// Transient rejection banner
    pub fn show_notice(&self, notice: &Notification) {
        if notice.is_visible() {
            println!("{} {}", "Error:".red().bold(), notice.message.red());
        }
    }

    /// Render a selection event line
    pub fn show_event(&self, event: &SelectorEvent) {
        match event {
            SelectorEvent::CandidateAdded { name, total, .. } => {
                println!(
                    "{} Added {} {}",
                    "✓".green(),
                    name,
                    format!("(total {})", fmt_currency(*total)).dimmed()
                );
            }
            SelectorEvent::CandidateRemoved { name, total, .. } => {
                println!(
                    "{} Removed {} {}",
                    "✓".yellow(),
                    name,
                    format!("(total {})", fmt_currency(*total)).dimmed()
                );
            }
            SelectorEvent::SelectionRejected { message, .. } => {
                println!("{} {}", "✗".red(), message.red());
            }
            SelectorEvent::SelectionReset => {
                println!("{}", "Selection cleared.".yellow());
            }
        }
    }

    /// Session status summary
    pub fn show_status(
        &self,
        selector: &BudgetSelector,
        stats: &SelectionStats,
        uptime: Duration,
    ) {
        self.show_section("Session Status");
        println!(
            "  Total: {} / {} ({:.0}% of budget used)",
            fmt_currency(selector.total()),
            fmt_currency(selector.ceiling()),
            selector.utilization() * 100.0
        );
        println!("  Selected: {}", selector.selected_count());
        println!(
            "  Toggles: {} | Commits: {} | Removals: {} | Rejections: {}",
            stats.toggles, stats.commits, stats.removals, stats.rejections
        );
        println!("  Uptime: {}s\n", uptime.as_secs());
    }

    /// Action history, newest first
    pub fn show_history(&self, records: &[&ActionRecord]) {
        self.show_section("History");
        if records.is_empty() {
            println!("  {}", "No actions yet.".dimmed());
        }
        for record in records {
            let verb = match record.action {
                ActionKind::Added => "added".green(),
                ActionKind::Removed => "removed".yellow(),
                ActionKind::Rejected => "rejected".red(),
            };
            println!(
                "  {} {} {} {}",
                record.timestamp.format("%H:%M:%S").to_string().dimmed(),
                verb,
                record.candidate_name,
                format!("(total {})", fmt_currency(record.total_after)).dimmed()
            );
        }
        println!();
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".color(self.accent()), info);
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        io::stdout().flush()
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().color(self.accent()));
        println!("{}", "-".repeat(40).color(self.accent()));
    }
}
