//! Presentation Layer - interactive terminal session
//!
//! A login screen followed by a role-gated menu. Each menu entry renders a
//! table view and, for mutating entries, a form. A successful mutation clears
//! the screen and redraws the whole view.

pub mod forms;
pub mod handlers;
pub mod menu;
pub mod prompt;
pub mod screens;

use inquire::InquireError;
use crate::service::Tracker;
use crate::session::Session;
use crate::ui::{self, Icons};
use crate::{Error, Result};

pub use handlers::{AssignChoices, Outcome, View};
pub use menu::{menu_for, MenuItem};

pub struct App {
    tracker: Tracker,
    session: Session,
}

impl App {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            session: Session::new(),
        }
    }

    /// Run until the user quits from the login screen or presses Ctrl+C
    pub fn run(&mut self) -> Result<()> {
        match self.event_loop() {
            Err(Error::Prompt(InquireError::OperationInterrupted)) => {
                tracing::debug!("Interrupted, leaving");
                Ok(())
            }
            other => other,
        }
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut current = MenuItem::Dashboard;

        loop {
            let Some(identity) = self.session.current().cloned() else {
                if !self.login_screen()? {
                    return Ok(());
                }
                current = MenuItem::Dashboard;
                self.show(current)?;
                continue;
            };

            println!();
            screens::banner(&identity);
            let Some(choice) = prompt::menu(&menu_for(identity.role), current)? else {
                continue;
            };
            tracing::debug!(item = %choice, "Navigated");

            if choice == MenuItem::Logout {
                handlers::logout(&mut self.session);
                ui::clear_screen();
                continue;
            }

            current = choice;
            ui::clear_screen();
            let view = self.show(choice)?;

            let outcome = self.interact(choice, view.as_ref());
            if let Some(Some(Outcome::Saved(message))) = recover(outcome)? {
                ui::clear_screen();
                self.show(choice)?;
                ui::success(&message);
            }
        }
    }

    /// Prompt until credentials match. `false` means the user quit.
    fn login_screen(&mut self) -> Result<bool> {
        ui::header(Icons::LOCK, "Auditors Tracker");
        loop {
            let Some((username, password)) = prompt::credentials()? else {
                return Ok(false);
            };
            match handlers::login(&mut self.session, &self.tracker, &username, &password)? {
                Outcome::SignedIn(name) => {
                    ui::clear_screen();
                    ui::success(&format!("Welcome {}!", name));
                    return Ok(true);
                }
                _ => ui::error("Invalid credentials"),
            }
        }
    }

    /// Load and draw the view for `item`, returning it when it could be shown
    fn show(&self, item: MenuItem) -> Result<Option<View>> {
        let view = recover(handlers::load_view(&self.session, &self.tracker, item))?.flatten();
        if let Some(view) = &view {
            screens::render(item, view);
        }
        Ok(view)
    }

    /// Run the form attached to `item`, if it has one
    fn interact(&self, item: MenuItem, view: Option<&View>) -> Result<Option<Outcome>> {
        let (session, tracker) = (&self.session, &self.tracker);

        match item {
            MenuItem::AddAuditor => match prompt::auditor_form()? {
                Some(form) => handlers::add_auditor(session, tracker, &form).map(Some),
                None => Ok(None),
            },
            MenuItem::AssignTask => match handlers::assignment_choices(session, tracker)? {
                AssignChoices::Unavailable(reason) => {
                    ui::warn(reason);
                    Ok(None)
                }
                AssignChoices::Ready { findings, auditors } => {
                    match prompt::assignment_form(findings, auditors)? {
                        Some(form) => handlers::assign_finding(session, tracker, &form).map(Some),
                        None => Ok(None),
                    }
                }
            },
            MenuItem::AddFinding => match prompt::finding_form()? {
                Some(form) => handlers::add_finding(session, tracker, &form).map(Some),
                None => Ok(None),
            },
            MenuItem::Assignments
                if matches!(view, Some(View::Assignments { can_write_note: true, .. })) =>
            {
                ui::section("Write a Note About Audited Department");
                if !prompt::confirm("Write a note now?")? {
                    return Ok(None);
                }
                match prompt::note_form()? {
                    Some(form) => handlers::submit_note(session, tracker, &form).map(Some),
                    None => Ok(None),
                }
            }
            _ => Ok(None),
        }
    }
}

/// Show user-facing failures as a warning and carry on; anything else aborts
fn recover<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_user_facing() => {
            ui::warn(&e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
