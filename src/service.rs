//! Tracker service
//!
//! Domain-named operations over the store:
//! - Credential check
//! - Auditor, finding, assignment and note listings
//! - Registering auditors, logging findings, assigning findings, writing notes
//!
//! Each call maps to exactly one storage statement.

use chrono::Local;
use crate::Result;
use crate::model::{
    ASSIGNMENT_NOT_STARTED, AssignmentRow, Auditor, Finding, Identity, NewAuditor, NewFinding,
    NoteRow, Role, StatusCount, TableCounts,
};
use crate::storage::SqliteStore;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Service facade used by the presentation layer
#[derive(Debug, Clone)]
pub struct Tracker {
    store: SqliteStore,
}

impl Tracker {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Look up an identity by exact username and password.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<Identity>> {
        let identity = self.store.find_identity(username, password)?;
        match &identity {
            Some(id) => tracing::info!(username, role = %id.role, "Authenticated"),
            None => tracing::warn!(username, "Rejected credentials"),
        }
        Ok(identity)
    }

    pub fn fetch_auditors(&self) -> Result<Vec<Auditor>> {
        self.store.list_auditors()
    }

    pub fn fetch_findings(&self) -> Result<Vec<Finding>> {
        self.store.list_findings()
    }

    pub fn fetch_assignments(&self) -> Result<Vec<AssignmentRow>> {
        self.store.list_assignments()
    }

    pub fn fetch_all_notes(&self) -> Result<Vec<NoteRow>> {
        self.store.list_notes()
    }

    pub fn create_auditor(&self, name: &str, username: &str, password: &str, role: Role) -> Result<i64> {
        let id = self.store.insert_auditor(&NewAuditor {
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            role,
        })?;
        tracing::info!(id, username, %role, "Registered auditor");
        Ok(id)
    }

    /// Pair a finding with an auditor. New assignments are always `Not Started`.
    pub fn assign_finding(&self, finding_id: i64, auditor_id: i64, due_date: &str) -> Result<i64> {
        let id = self
            .store
            .insert_assignment(finding_id, auditor_id, due_date, ASSIGNMENT_NOT_STARTED)?;
        tracing::info!(id, finding_id, auditor_id, due_date, "Assigned finding");
        Ok(id)
    }

    /// Append a note stamped with the current local time
    pub fn add_auditor_note(&self, auditor_id: i64, department: &str, note: &str) -> Result<i64> {
        let written_at = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let id = self.store.insert_note(auditor_id, department, note, &written_at)?;
        tracing::info!(id, auditor_id, department, "Recorded note");
        Ok(id)
    }

    /// Log a finding dated today
    pub fn add_finding(&self, finding: &NewFinding) -> Result<i64> {
        let today = Local::now().format(DATE_FORMAT).to_string();
        let id = self.store.insert_finding(finding, &today)?;
        tracing::info!(id, title = %finding.title, "Logged finding");
        Ok(id)
    }

    pub fn status_distribution(&self) -> Result<Vec<StatusCount>> {
        self.store.status_distribution()
    }

    pub fn counts(&self) -> Result<TableCounts> {
        self.store.counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    fn temp_tracker() -> (TempDir, Tracker) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(&dir.path().join("auditors.db")).unwrap();
        (dir, Tracker::new(store))
    }

    #[test]
    fn test_authenticate_seeded_accounts() {
        let (_dir, tracker) = temp_tracker();

        let shema = tracker.authenticate("shema", "pass123").unwrap().unwrap();
        assert_eq!(shema.id, 1);
        assert_eq!(shema.name, "SHEMA Jackson");
        assert_eq!(shema.role, Role::Auditor);

        assert!(tracker.authenticate("shema", "wrong").unwrap().is_none());
        assert!(tracker.authenticate("nobody", "pass123").unwrap().is_none());
    }

    #[test]
    fn test_create_auditor() {
        let (_dir, tracker) = temp_tracker();
        tracker.create_auditor("Test", "tuser", "pw", "auditor".parse().unwrap()).unwrap();

        let auditors = tracker.fetch_auditors().unwrap();
        let created = auditors.iter().find(|a| a.username == "tuser").unwrap();
        assert_eq!(created.name, "Test");
        assert_eq!(created.role, Role::Auditor);

        let err = tracker.create_auditor("Other", "tuser", "pw2", Role::Admin).unwrap_err();
        assert!(matches!(err, Error::UsernameTaken(_)));
        assert!(tracker.authenticate("tuser", "pw").unwrap().is_some());
    }

    #[test]
    fn test_assign_finding() {
        let (_dir, tracker) = temp_tracker();
        tracker.assign_finding(1, 1, "2024-06-01").unwrap();

        let rows = tracker.fetch_assignments().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].finding_title, "Irregular Budget Usage");
        assert_eq!(rows[0].auditor_name, "SHEMA Jackson");
        assert_eq!(rows[0].due_date, "2024-06-01");
        assert_eq!(rows[0].status, "Not Started");
    }

    #[test]
    fn test_same_finding_assigned_twice() {
        let (_dir, tracker) = temp_tracker();
        tracker.assign_finding(2, 1, "2024-06-01").unwrap();
        tracker.assign_finding(2, 2, "2024-07-01").unwrap();

        let rows = tracker.fetch_assignments().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.finding_title == "Unregistered Equipment"));
    }

    #[test]
    fn test_add_auditor_note() {
        let (_dir, tracker) = temp_tracker();
        tracker.store().insert_note(2, "Logistics", "old note", "2000-01-01 00:00:00").unwrap();
        tracker.add_auditor_note(1, "Finance", "test note").unwrap();

        let notes = tracker.fetch_all_notes().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].department, "Finance");
        assert_eq!(notes[0].note, "test note");
        assert_eq!(notes[0].auditor_name, "SHEMA Jackson");
        assert!(chrono::NaiveDateTime::parse_from_str(&notes[0].date_written, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_note_from_unknown_auditor_is_stored_but_hidden() {
        let (_dir, tracker) = temp_tracker();
        tracker.add_auditor_note(99, "Finance", "nobody wrote this").unwrap();
        tracker.assign_finding(1, 99, "2024-06-01").unwrap();

        assert_eq!(tracker.counts().unwrap().notes, 1);
        assert!(tracker.fetch_all_notes().unwrap().is_empty());
        assert!(tracker.fetch_assignments().unwrap().is_empty());
    }

    #[test]
    fn test_fresh_findings() {
        let (_dir, tracker) = temp_tracker();
        let findings = tracker.fetch_findings().unwrap();

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].title, "Irregular Budget Usage");
        assert_eq!(findings[0].status, "Open");
        assert!(findings[0].flagged);
        assert_eq!(findings[1].title, "Unregistered Equipment");
        assert_eq!(findings[1].status, "In Progress");
        assert!(!findings[1].flagged);
    }

    #[test]
    fn test_reinitialize_keeps_seed_count() {
        let (_dir, tracker) = temp_tracker();
        tracker.store().initialize().unwrap();
        assert_eq!(tracker.fetch_auditors().unwrap().len(), 3);
        assert_eq!(tracker.fetch_findings().unwrap().len(), 2);
    }

    #[test]
    fn test_add_finding_dated_today() {
        let (_dir, tracker) = temp_tracker();
        let id = tracker
            .add_finding(&NewFinding::open("Petty cash gaps", "Unreconciled", "Finance").flagged(true))
            .unwrap();

        let findings = tracker.fetch_findings().unwrap();
        let added = findings.iter().find(|f| f.id == id).unwrap();
        assert!(added.flagged);
        assert!(chrono::NaiveDate::parse_from_str(&added.date_logged, DATE_FORMAT).is_ok());
        assert_eq!(tracker.counts().unwrap().findings, 3);
    }
}
