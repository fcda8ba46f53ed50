//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - auditors(id, name, username, password, role)
//! - findings(id, title, description, department, status, flagged, date_logged)
//! - assignments(id, finding_id, auditor_id, due_date, action_taken, status)
//! - auditor_notes(id, auditor_id, department, note, date_written)

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStore;
