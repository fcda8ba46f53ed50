//! Session-aware handlers
//!
//! Every handler checks the session's capability for its action before it
//! reaches the service layer. Nothing here prints; the caller renders.

use crate::access::{allowed, Action};
use crate::app::forms::{AssignmentForm, AuditorForm, FindingForm, NoteForm};
use crate::app::menu::MenuItem;
use crate::model::{AssignmentRow, Auditor, Finding, NoteRow, StatusCount};
use crate::service::Tracker;
use crate::session::Session;
use crate::Result;

/// Result of one interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A mutation went through; the screen is redrawn with this message
    Saved(String),
    SignedIn(String),
    InvalidCredentials,
    SignedOut,
}

/// Data behind one screen
#[derive(Debug, Clone)]
pub enum View {
    Dashboard {
        findings: Vec<Finding>,
        distribution: Vec<StatusCount>,
    },
    Auditors(Vec<Auditor>),
    Assignments {
        rows: Vec<AssignmentRow>,
        can_write_note: bool,
    },
    Notes(Vec<NoteRow>),
    Findings(Vec<Finding>),
}

/// What the assign form can offer
#[derive(Debug, Clone)]
pub enum AssignChoices {
    Ready {
        findings: Vec<Finding>,
        auditors: Vec<Auditor>,
    },
    Unavailable(&'static str),
}

pub fn login(session: &mut Session, tracker: &Tracker, username: &str, password: &str) -> Result<Outcome> {
    match tracker.authenticate(username, password)? {
        Some(identity) => {
            let name = identity.name.clone();
            session.sign_in(identity);
            Ok(Outcome::SignedIn(name))
        }
        None => Ok(Outcome::InvalidCredentials),
    }
}

pub fn logout(session: &mut Session) -> Outcome {
    session.sign_out();
    Outcome::SignedOut
}

/// Load the read-only part of a menu entry
pub fn load_view(session: &Session, tracker: &Tracker, item: MenuItem) -> Result<Option<View>> {
    let Some(action) = item.action() else {
        return Ok(None);
    };
    let identity = session.require(action)?;

    let view = match item {
        MenuItem::Dashboard => View::Dashboard {
            findings: tracker.fetch_findings()?,
            distribution: tracker.status_distribution()?,
        },
        MenuItem::Auditors | MenuItem::AddAuditor => View::Auditors(tracker.fetch_auditors()?),
        MenuItem::Assignments | MenuItem::AssignTask => View::Assignments {
            rows: tracker.fetch_assignments()?,
            can_write_note: allowed(identity.role, Action::SubmitNote),
        },
        MenuItem::AuditorNotes => View::Notes(tracker.fetch_all_notes()?),
        MenuItem::AddFinding => View::Findings(tracker.fetch_findings()?),
        MenuItem::Logout => return Ok(None),
    };
    Ok(Some(view))
}

pub fn add_auditor(session: &Session, tracker: &Tracker, form: &AuditorForm) -> Result<Outcome> {
    session.require(Action::AddAuditor)?;
    form.validate()?;
    tracker.create_auditor(form.name.trim(), form.username.trim(), &form.password, form.role)?;
    Ok(Outcome::Saved(format!("Auditor '{}' added.", form.name.trim())))
}

pub fn assignment_choices(session: &Session, tracker: &Tracker) -> Result<AssignChoices> {
    session.require(Action::AssignFinding)?;
    let findings = tracker.fetch_findings()?;
    if findings.is_empty() {
        return Ok(AssignChoices::Unavailable("No findings available to assign."));
    }
    let auditors = tracker.fetch_auditors()?;
    if auditors.is_empty() {
        return Ok(AssignChoices::Unavailable("No auditors available to assign."));
    }
    Ok(AssignChoices::Ready { findings, auditors })
}

pub fn assign_finding(session: &Session, tracker: &Tracker, form: &AssignmentForm) -> Result<Outcome> {
    session.require(Action::AssignFinding)?;
    tracker.assign_finding(form.finding_id, form.auditor_id, &form.due_date_iso())?;
    Ok(Outcome::Saved("Finding assigned successfully.".to_string()))
}

pub fn submit_note(session: &Session, tracker: &Tracker, form: &NoteForm) -> Result<Outcome> {
    let author = session.require(Action::SubmitNote)?;
    form.validate()?;
    tracker.add_auditor_note(author.id, form.department.trim(), form.note.trim())?;
    Ok(Outcome::Saved("Note submitted successfully.".to_string()))
}

pub fn add_finding(session: &Session, tracker: &Tracker, form: &FindingForm) -> Result<Outcome> {
    session.require(Action::AddFinding)?;
    form.validate()?;
    let finding = form.to_new_finding();
    tracker.add_finding(&finding)?;
    Ok(Outcome::Saved(format!("Finding '{}' logged.", finding.title)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use crate::storage::SqliteStore;
    use crate::Error;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Tracker, Session) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(&dir.path().join("auditors.db")).unwrap();
        (dir, Tracker::new(store), Session::new())
    }

    fn signed_in(tracker: &Tracker, username: &str, password: &str) -> Session {
        let mut session = Session::new();
        login(&mut session, tracker, username, password).unwrap();
        session
    }

    fn note(department: &str, text: &str) -> NoteForm {
        NoteForm { department: department.into(), note: text.into() }
    }

    #[test]
    fn test_login_and_logout() {
        let (_dir, tracker, mut session) = setup();

        let outcome = login(&mut session, &tracker, "admin", "nope").unwrap();
        assert_eq!(outcome, Outcome::InvalidCredentials);
        assert!(session.current().is_none());

        let outcome = login(&mut session, &tracker, "admin", "admin123").unwrap();
        assert_eq!(outcome, Outcome::SignedIn("ADMIN User".into()));
        assert_eq!(session.current().unwrap().role, Role::Admin);

        assert_eq!(logout(&mut session), Outcome::SignedOut);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_signed_out_session_sees_nothing() {
        let (_dir, tracker, session) = setup();
        let err = load_view(&session, &tracker, MenuItem::Dashboard).unwrap_err();
        assert!(matches!(err, Error::NotSignedIn));
    }

    #[test]
    fn test_auditor_cannot_reach_admin_views() {
        let (_dir, tracker, _) = setup();
        let session = signed_in(&tracker, "shema", "pass123");

        for item in [MenuItem::AddAuditor, MenuItem::AssignTask, MenuItem::AuditorNotes, MenuItem::AddFinding] {
            let err = load_view(&session, &tracker, item).unwrap_err();
            assert!(matches!(err, Error::Forbidden { role: Role::Auditor, .. }), "{item} leaked");
        }
    }

    #[test]
    fn test_assignments_view_offers_note_to_auditors_only() {
        let (_dir, tracker, _) = setup();

        let auditor = signed_in(&tracker, "karenzi", "audit2024");
        match load_view(&auditor, &tracker, MenuItem::Assignments).unwrap() {
            Some(View::Assignments { can_write_note, .. }) => assert!(can_write_note),
            other => panic!("unexpected view {other:?}"),
        }

        let admin = signed_in(&tracker, "admin", "admin123");
        match load_view(&admin, &tracker, MenuItem::Assignments).unwrap() {
            Some(View::Assignments { can_write_note, .. }) => assert!(!can_write_note),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_dashboard_view() {
        let (_dir, tracker, _) = setup();
        let session = signed_in(&tracker, "shema", "pass123");

        match load_view(&session, &tracker, MenuItem::Dashboard).unwrap() {
            Some(View::Dashboard { findings, distribution }) => {
                assert_eq!(findings.len(), 2);
                let total: usize = distribution.iter().map(|d| d.count).sum();
                assert_eq!(total, 2);
                assert!(distribution.iter().any(|d| d.status == "Open" && d.count == 1));
                assert!(distribution.iter().any(|d| d.status == "In Progress" && d.count == 1));
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_admin_adds_auditor() {
        let (_dir, tracker, _) = setup();
        let admin = signed_in(&tracker, "admin", "admin123");
        let form = AuditorForm {
            name: "Test".into(),
            username: "tuser".into(),
            password: "pw".into(),
            role: Role::Auditor,
        };

        let outcome = add_auditor(&admin, &tracker, &form).unwrap();
        assert_eq!(outcome, Outcome::Saved("Auditor 'Test' added.".into()));

        let err = add_auditor(&admin, &tracker, &form).unwrap_err();
        assert!(matches!(err, Error::UsernameTaken(_)));
    }

    #[test]
    fn test_auditor_cannot_add_auditor() {
        let (_dir, tracker, _) = setup();
        let session = signed_in(&tracker, "shema", "pass123");
        let form = AuditorForm {
            name: "Sneaky".into(),
            username: "sneaky".into(),
            password: "pw".into(),
            role: Role::Admin,
        };

        assert!(matches!(add_auditor(&session, &tracker, &form), Err(Error::Forbidden { .. })));
        assert_eq!(tracker.fetch_auditors().unwrap().len(), 3);
    }

    #[test]
    fn test_blank_form_never_reaches_storage() {
        let (_dir, tracker, _) = setup();
        let admin = signed_in(&tracker, "admin", "admin123");
        let form = AuditorForm {
            name: String::new(),
            username: "ghost".into(),
            password: "pw".into(),
            role: Role::Auditor,
        };

        assert!(matches!(add_auditor(&admin, &tracker, &form), Err(Error::MissingFields(_))));
        assert_eq!(tracker.counts().unwrap().auditors, 3);
    }

    #[test]
    fn test_assign_flow() {
        let (_dir, tracker, _) = setup();
        let admin = signed_in(&tracker, "admin", "admin123");

        let (findings, auditors) = match assignment_choices(&admin, &tracker).unwrap() {
            AssignChoices::Ready { findings, auditors } => (findings, auditors),
            AssignChoices::Unavailable(msg) => panic!("{msg}"),
        };
        let form = AssignmentForm {
            finding_id: findings[0].id,
            auditor_id: auditors[0].id,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };

        assign_finding(&admin, &tracker, &form).unwrap();
        let rows = tracker.fetch_assignments().unwrap();
        assert_eq!(rows[0].due_date, "2024-06-01");
        assert_eq!(rows[0].status, "Not Started");
    }

    #[test]
    fn test_auditor_notes() {
        let (_dir, tracker, _) = setup();
        let auditor = signed_in(&tracker, "shema", "pass123");

        assert!(matches!(submit_note(&auditor, &tracker, &note(" ", "x")), Err(Error::MissingFields(_))));
        submit_note(&auditor, &tracker, &note("Finance", "test note")).unwrap();

        let admin = signed_in(&tracker, "admin", "admin123");
        assert!(matches!(submit_note(&admin, &tracker, &note("HR", "admin note")), Err(Error::Forbidden { .. })));

        match load_view(&admin, &tracker, MenuItem::AuditorNotes).unwrap() {
            Some(View::Notes(notes)) => {
                assert_eq!(notes.len(), 1);
                assert_eq!(notes[0].department, "Finance");
                assert_eq!(notes[0].auditor_name, "SHEMA Jackson");
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_admin_logs_finding() {
        let (_dir, tracker, _) = setup();
        let admin = signed_in(&tracker, "admin", "admin123");
        let form = FindingForm {
            title: "Duplicate vendor payments".into(),
            description: "Same invoice paid twice".into(),
            department: "Procurement".into(),
            flagged: true,
        };

        let outcome = add_finding(&admin, &tracker, &form).unwrap();
        assert_eq!(outcome, Outcome::Saved("Finding 'Duplicate vendor payments' logged.".into()));
        assert_eq!(tracker.fetch_findings().unwrap().len(), 3);
    }
}
