//! Input events for the editor loop

use crate::model::Scope;

/// One editor input event
///
/// Events are queued and processed to completion one at a time; handlers
/// never enqueue further events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Move the selection one row up
    Up,
    /// Move the selection one row down
    Down,
    /// Wheel scroll up (same clamping as `Up`, distinct entry point)
    ScrollUp,
    /// Wheel scroll down
    ScrollDown,
    /// Switch to the next project tab
    NextProject,
    /// Switch to the previous project tab
    PrevProject,
    /// One step toward the user tier
    Promote,
    /// One step toward the local tier
    Demote,
    /// Flip one scope flag on the selected rule
    Toggle(Scope),
    /// Clear every scope flag on the selected rule
    Delete,
    /// Write all tiers and resynchronize
    Save,
    /// Leave the editor (asks to confirm when changes are unsaved)
    Quit,
    /// Show the key reference
    Help,
    /// Repaint without changing state
    Redraw,
}

/// Parse one console command line into an event
pub fn parse_command(line: &str) -> Option<Event> {
    match line.trim() {
        "k" | "up" => Some(Event::Up),
        "j" | "down" => Some(Event::Down),
        "K" => Some(Event::ScrollUp),
        "J" => Some(Event::ScrollDown),
        "]" | "n" | "next" => Some(Event::NextProject),
        "[" | "p" | "prev" => Some(Event::PrevProject),
        "h" | "left" | "promote" => Some(Event::Promote),
        "l" | "right" | "demote" => Some(Event::Demote),
        "u" | "1" | "user" => Some(Event::Toggle(Scope::User)),
        "2" | "project" => Some(Event::Toggle(Scope::Project)),
        "3" | "local" => Some(Event::Toggle(Scope::Local)),
        "x" | "d" | "delete" => Some(Event::Delete),
        "s" | "w" | "save" => Some(Event::Save),
        "q" | "quit" | "exit" => Some(Event::Quit),
        "?" | "help" => Some(Event::Help),
        "" => Some(Event::Redraw),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_keys() {
        assert_eq!(parse_command("k"), Some(Event::Up));
        assert_eq!(parse_command("j\n"), Some(Event::Down));
        assert_eq!(parse_command("K"), Some(Event::ScrollUp));
        assert_eq!(parse_command("J"), Some(Event::ScrollDown));
        assert_eq!(parse_command("]"), Some(Event::NextProject));
        assert_eq!(parse_command("["), Some(Event::PrevProject));
    }

    #[test]
    fn test_parse_mutation_keys() {
        assert_eq!(parse_command("h"), Some(Event::Promote));
        assert_eq!(parse_command("l"), Some(Event::Demote));
        assert_eq!(parse_command("u"), Some(Event::Toggle(Scope::User)));
        assert_eq!(parse_command("2"), Some(Event::Toggle(Scope::Project)));
        assert_eq!(parse_command("3"), Some(Event::Toggle(Scope::Local)));
        assert_eq!(parse_command("x"), Some(Event::Delete));
    }

    #[test]
    fn test_parse_session_keys() {
        assert_eq!(parse_command("save"), Some(Event::Save));
        assert_eq!(parse_command("q"), Some(Event::Quit));
        assert_eq!(parse_command(""), Some(Event::Redraw));
        assert_eq!(parse_command("   "), Some(Event::Redraw));
        assert_eq!(parse_command("bogus"), None);
    }
}
