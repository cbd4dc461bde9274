//! Interactive editor loop
//!
//! Input lines are parsed into events on a blocking reader task, queued on
//! an mpsc channel, and drained one at a time against the session and
//! navigation state. A handler runs to completion before the next event is
//! taken, and never enqueues further events itself.

use std::io::BufRead;

use tokio::sync::mpsc;

use crate::core::SyncResult;
use crate::engine::Session;
use crate::nav::NavState;

use super::console::Console;
use super::event::{parse_command, Event};

/// Buffer size for the input event channel
pub const EVENT_CHANNEL_SIZE: usize = 32;

/// The interactive editor: session plus navigation plus console
pub struct App {
    session: Session,
    nav: NavState,
    console: Console,
    status: Option<String>,
    confirm_quit: bool,
}

impl App {
    /// Create an editor over a loaded session
    pub fn new(session: Session, viewport_height: usize) -> Self {
        Self {
            session,
            nav: NavState::new(viewport_height),
            console: Console::new(),
            status: None,
            confirm_quit: false,
        }
    }

    /// Run the editor until the operator quits or stdin closes
    pub async fn run(mut self) -> SyncResult<()> {
        let (tx, mut rx) = mpsc::channel(EVENT_CHANNEL_SIZE);
        spawn_input_reader(tx);

        self.console.print_banner();
        self.redraw();

        while let Some(event) = rx.recv().await {
            if !self.handle(event) {
                break;
            }
            self.redraw();
        }

        tracing::info!("Editor loop finished");
        Ok(())
    }

    /// Apply one event; returns false when the loop should exit
    pub fn handle(&mut self, event: Event) -> bool {
        let row_count = self.current_row_count();
        let project_count = self.session.projects().len();
        let project = self.nav.selected_project();
        let row = self.nav.selected_row();

        // Anything but a repeated quit cancels a pending quit confirmation
        let was_confirming = self.confirm_quit;
        self.confirm_quit = false;
        self.status = None;

        match event {
            Event::Up => self.nav.move_up(row_count),
            Event::Down => self.nav.move_down(row_count),
            Event::ScrollUp => self.nav.scroll_up(row_count),
            Event::ScrollDown => self.nav.scroll_down(row_count),
            Event::NextProject => self.nav.next_project(project_count),
            Event::PrevProject => self.nav.prev_project(project_count),
            Event::Promote => self.session.promote(project, row),
            Event::Demote => self.session.demote(project, row),
            Event::Toggle(scope) => self.session.toggle_scope(project, row, scope),
            Event::Delete => self.session.delete_rule(project, row),
            Event::Save => self.do_save(),
            Event::Help => self.console.print_help(),
            Event::Redraw => {}
            Event::Quit => {
                if self.session.has_changes() && !was_confirming {
                    self.confirm_quit = true;
                    self.status =
                        Some("unsaved changes - press q again to quit without saving".into());
                } else {
                    return false;
                }
            }
        }

        true
    }

    /// The session state; read access for the presentation layer
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The navigation state
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    fn current_row_count(&self) -> usize {
        self.session
            .project_records(self.nav.selected_project())
            .len()
    }

    fn do_save(&mut self) {
        match self.session.save() {
            Ok(()) => {
                // Deleted rules vanish on reload; re-clamp the selection
                self.nav.clamp_rows(self.current_row_count());
                self.status = Some("saved".into());
            }
            Err(err) => {
                tracing::error!("Save failed: {}", err);
                self.status = Some(format!("save failed: {}", err));
            }
        }
    }

    fn redraw(&self) {
        self.console.print_separator();

        let names: Vec<String> = self
            .session
            .projects()
            .iter()
            .map(|project| project.name.clone())
            .collect();
        self.console.print_tabs(&names, self.nav.selected_project());

        let records = self.session.project_records(self.nav.selected_project());
        self.console.print_rules(
            records,
            self.nav.visible_range(records.len()),
            self.nav.selected_row(),
        );

        self.console
            .print_status(self.session.has_changes(), self.status.as_deref());
        self.console.print_prompt();
    }
}

/// Read stdin lines on a blocking thread and queue parsed events
fn spawn_input_reader(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => {
                    // EOF: a quit confirmation cannot be answered, so quit
                    // unconditionally
                    let _ = tx.blocking_send(Event::Quit);
                    let _ = tx.blocking_send(Event::Quit);
                    break;
                }
                Ok(_) => {
                    let event = parse_command(&line).unwrap_or(Event::Help);
                    if tx.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!("Stdin read failed: {}", err);
                    break;
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::session::test_support::Fixture;
    use crate::model::{Scope, ScopeFlags};

    fn two_project_app() -> (Fixture, App) {
        let fixture = Fixture::new();
        let p1 = fixture.add_project("one");
        let p2 = fixture.add_project("two");
        fixture.write_local_settings(
            &p1,
            r#"{"permissions": {"allow": ["A", "B", "C"], "deny": []}}"#,
        );
        fixture.write_project_settings(&p2, r#"{"permissions": {"allow": ["A"], "deny": []}}"#);

        let session = Session::load(&[p1, p2], Some(&fixture.user_settings));
        let app = App::new(session, 2);
        (fixture, app)
    }

    #[test]
    fn test_events_drive_selection_and_mutation() {
        let (_fixture, mut app) = two_project_app();

        assert!(app.handle(Event::Down));
        assert_eq!(app.nav().selected_row(), 1);

        // Promote row 1 of project 0: local -> project
        assert!(app.handle(Event::Promote));
        let record = &app.session().project_records(0)[1];
        assert_eq!(record.scopes, ScopeFlags::single(Scope::Project));
    }

    #[test]
    fn test_project_switch_resets_selection() {
        let (_fixture, mut app) = two_project_app();
        app.handle(Event::Down);
        app.handle(Event::Down);

        app.handle(Event::NextProject);
        assert_eq!(app.nav().selected_project(), 1);
        assert_eq!(app.nav().selected_row(), 0);

        app.handle(Event::PrevProject);
        assert_eq!(app.nav().selected_project(), 0);
    }

    #[test]
    fn test_quit_requires_confirmation_with_changes() {
        let (_fixture, mut app) = two_project_app();
        app.handle(Event::Toggle(Scope::User));
        assert!(app.session().has_changes());

        // First quit is intercepted, second exits
        assert!(app.handle(Event::Quit));
        assert!(!app.handle(Event::Quit));
    }

    #[test]
    fn test_intervening_event_cancels_quit_confirmation() {
        let (_fixture, mut app) = two_project_app();
        app.handle(Event::Toggle(Scope::User));

        assert!(app.handle(Event::Quit));
        assert!(app.handle(Event::Down));
        // The confirmation window closed; quit asks again
        assert!(app.handle(Event::Quit));
    }

    #[test]
    fn test_quit_without_changes_exits_immediately() {
        let (_fixture, mut app) = two_project_app();
        assert!(!app.handle(Event::Quit));
    }

    #[test]
    fn test_save_event_persists_and_reclamps() {
        let (_fixture, mut app) = two_project_app();

        // Delete the last row of project 0, park the selection on it, save
        app.handle(Event::Down);
        app.handle(Event::Down);
        app.handle(Event::Delete);
        app.handle(Event::Save);

        assert!(!app.session().has_changes());
        assert_eq!(app.session().project_records(0).len(), 2);
        assert!(app.nav().selected_row() < 2);
    }

    #[tokio::test]
    async fn test_queue_drains_in_order() {
        let (_fixture, mut app) = two_project_app();
        let (tx, mut rx) = mpsc::channel(EVENT_CHANNEL_SIZE);

        for event in [Event::Down, Event::Down, Event::Up] {
            tx.send(event).await.unwrap();
        }
        drop(tx);

        while let Some(event) = rx.recv().await {
            app.handle(event);
        }
        assert_eq!(app.nav().selected_row(), 1);
    }
}
