//! Colored terminal output for the permission editor

use std::io::{self, Write};
use std::ops::Range;

use colored::*;

use crate::model::{PermissionRecord, RuleKind, ScopeFlags};

/// Console handles all terminal output with colored formatting
pub struct Console {
    tab_color: Color,
    accent_color: Color,
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            tab_color: Color::Cyan,
            accent_color: Color::Yellow,
        }
    }

    /// Print the welcome banner and key reference
    pub fn print_banner(&self) {
        println!("{}", "=".repeat(60).bright_blue());
        println!("{}", "  permsync - permission scope editor".bright_blue().bold());
        println!("{}", "=".repeat(60).bright_blue());
        println!();
        self.print_help();
    }

    /// Print the key reference
    pub fn print_help(&self) {
        println!("{}", "Commands (press Enter after each):".bold());
        println!("  j/k         move down/up        J/K     scroll down/up");
        println!("  h/l         promote/demote      [/]     previous/next project");
        println!("  u, 2, 3     toggle user/project/local scope");
        println!("  x           delete rule         s       save");
        println!("  q           quit                ?       this help");
        println!();
    }

    /// Print the project tab line
    pub fn print_tabs(&self, names: &[String], selected: usize) {
        let tabs: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                if index == selected {
                    format!("[{}]", name).color(self.tab_color).bold().to_string()
                } else {
                    format!(" {} ", name).bright_black().to_string()
                }
            })
            .collect();
        println!("{}", tabs.join(" "));
    }

    /// Print the visible rows of the rule list
    pub fn print_rules(
        &self,
        records: &[PermissionRecord],
        visible: Range<usize>,
        selected: usize,
    ) {
        if records.is_empty() {
            println!("  {}", "no permission rules".bright_black());
            return;
        }

        if visible.start > 0 {
            println!("  {}", format!("... {} above", visible.start).bright_black());
        }

        for index in visible.clone() {
            let record = &records[index];
            let cursor = if index == selected {
                ">".color(self.accent_color).bold().to_string()
            } else {
                " ".to_string()
            };
            let kind = match record.id.kind {
                RuleKind::Allow => "allow".green(),
                RuleKind::Deny => "deny ".red(),
            };
            let pattern = if record.pending_delete() {
                record.id.pattern.strikethrough().bright_black()
            } else {
                record.id.pattern.normal()
            };
            let marker = if record.is_changed() {
                "*".color(self.accent_color).to_string()
            } else {
                " ".to_string()
            };

            println!(
                "{} {} {} {} {}",
                cursor,
                flags_cell(record.scopes),
                kind,
                pattern,
                marker
            );
        }

        if visible.end < records.len() {
            let below = records.len() - visible.end;
            println!("  {}", format!("... {} below", below).bright_black());
        }
    }

    /// Print the status line
    pub fn print_status(&self, has_changes: bool, message: Option<&str>) {
        let changes = if has_changes {
            "unsaved changes".color(self.accent_color).bold().to_string()
        } else {
            "no changes".bright_black().to_string()
        };
        match message {
            Some(msg) => println!("{} {} {}", changes, "|".bright_black(), msg),
            None => println!("{}", changes),
        }
    }

    /// Print a separator line
    pub fn print_separator(&self) {
        println!("{}", "-".repeat(60).bright_black());
    }

    /// Print an error message
    pub fn print_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    /// Print the input prompt without a newline
    pub fn print_prompt(&self) {
        print!("{} ", ">".color(self.tab_color).bold());
        let _ = io::stdout().flush();
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Render scope membership as a `[U P L]` cell with dashes for unset tiers
fn flags_cell(flags: ScopeFlags) -> String {
    let mark = |enabled: bool, letter: &str| {
        if enabled {
            letter.cyan().bold().to_string()
        } else {
            "-".bright_black().to_string()
        }
    };
    format!(
        "[{} {} {}]",
        mark(flags.user, "U"),
        mark(flags.project, "P"),
        mark(flags.local, "L")
    )
}
