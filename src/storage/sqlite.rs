//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, OptionalExtension, ffi, params};
use crate::{Result, Error};
use crate::model::{
    AssignmentRow, Auditor, Finding, Identity, NewAuditor, NewFinding, NoteRow, Role,
    StatusCount, TableCounts,
};
use super::schema;

/// SQLite-backed storage for the tracker tables.
///
/// Holds only the database location; every operation opens its own
/// connection and drops it before returning.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open a database file (creates it and its directory if missing)
    pub fn open(path: &Path) -> Result<Self> {
        let store = Self { path: path.to_path_buf() };
        store.initialize()?;
        Ok(store)
    }

    /// Foreign keys stay declarative: the bundled SQLite enforces them by default.
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", false)?;
        Ok(conn)
    }

    /// Create missing tables and seed the empty ones. Safe to run repeatedly.
    pub fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = self.connect()?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }

        for (table, seed) in schema::seed_statements() {
            let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
            if count == 0 {
                conn.execute_batch(seed)?;
                tracing::info!("Seeded demo rows into {}", table);
            }
        }

        tracing::debug!("Schema ready at {}", self.path.display());
        Ok(())
    }

    // ========== Auditor Operations ==========

    /// Exact-match credential lookup. Accounts with an unknown role cannot sign in.
    pub fn find_identity(&self, username: &str, password: &str) -> Result<Option<Identity>> {
        let conn = self.connect()?;
        let found = conn
            .query_row(
                "SELECT id, name, role FROM auditors WHERE username = ?1 AND password = ?2",
                params![username, password],
                |row| {
                    let id: i64 = row.get(0)?;
                    let name = text_column(row, 1)?;
                    let role: Option<String> = row.get(2)?;
                    Ok((id, name, role))
                },
            )
            .optional()?;

        Ok(found.and_then(|(id, name, role)| {
            parse_role(id, role.as_deref()).map(|role| Identity { id, name, role })
        }))
    }

    pub fn list_auditors(&self) -> Result<Vec<Auditor>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, name, username, role FROM auditors ORDER BY id")?;

        let rows = stmt
            .query_map([], |row| {
                let role: Option<String> = row.get(3)?;
                Ok((row.get::<_, i64>(0)?, text_column(row, 1)?, text_column(row, 2)?, role))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let auditors = rows
            .into_iter()
            .filter_map(|(id, name, username, role)| {
                parse_role(id, role.as_deref()).map(|role| Auditor { id, name, username, role })
            })
            .collect();

        Ok(auditors)
    }

    /// Insert an auditor, returning the new id
    pub fn insert_auditor(&self, auditor: &NewAuditor) -> Result<i64> {
        let conn = self.connect()?;
        let inserted = conn.execute(
            "INSERT INTO auditors (name, username, password, role) VALUES (?1, ?2, ?3, ?4)",
            params![auditor.name, auditor.username, auditor.password, auditor.role.as_str()],
        );

        match inserted {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE => {
                Err(Error::UsernameTaken(auditor.username.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    // ========== Finding Operations ==========

    pub fn list_findings(&self) -> Result<Vec<Finding>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, description, department, status, flagged, date_logged FROM findings ORDER BY id"
        )?;

        let findings = stmt
            .query_map([], |row| {
                let flagged: Option<i64> = row.get(5)?;
                Ok(Finding {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    department: row.get(3)?,
                    status: text_column(row, 4)?,
                    flagged: flagged.unwrap_or(0) != 0,
                    date_logged: text_column(row, 6)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(findings)
    }

    /// Insert a finding, returning the new id
    pub fn insert_finding(&self, finding: &NewFinding, date_logged: &str) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            r#"
            INSERT INTO findings (title, description, department, status, flagged, date_logged)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                finding.title,
                finding.description,
                finding.department,
                finding.status,
                finding.flagged as i64,
                date_logged,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Count findings per status, most common first
    pub fn status_distribution(&self) -> Result<Vec<StatusCount>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT status, COUNT(*) AS n FROM findings GROUP BY status ORDER BY n DESC, status ASC"
        )?;

        let counts = stmt
            .query_map([], |row| {
                let status: Option<String> = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok(StatusCount {
                    status: status.unwrap_or_default(),
                    count: count as usize,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(counts)
    }

    // ========== Assignment Operations ==========

    /// Insert an assignment, returning the new id
    pub fn insert_assignment(&self, finding_id: i64, auditor_id: i64, due_date: &str, status: &str) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO assignments (finding_id, auditor_id, due_date, status) VALUES (?1, ?2, ?3, ?4)",
            params![finding_id, auditor_id, due_date, status],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Assignments joined with finding titles and auditor names
    pub fn list_assignments(&self) -> Result<Vec<AssignmentRow>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT s.id, f.id, f.title, a.id, a.name, s.due_date, s.status, s.action_taken
            FROM assignments s
            JOIN auditors a ON a.id = s.auditor_id
            JOIN findings f ON f.id = s.finding_id
            ORDER BY s.id
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(AssignmentRow {
                    id: row.get(0)?,
                    finding_id: row.get(1)?,
                    finding_title: row.get(2)?,
                    auditor_id: row.get(3)?,
                    auditor_name: text_column(row, 4)?,
                    due_date: text_column(row, 5)?,
                    status: text_column(row, 6)?,
                    action_taken: row.get(7)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    // ========== Note Operations ==========

    /// Append a note, returning the new id
    pub fn insert_note(&self, auditor_id: i64, department: &str, note: &str, written_at: &str) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO auditor_notes (auditor_id, department, note, date_written) VALUES (?1, ?2, ?3, ?4)",
            params![auditor_id, department, note, written_at],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Notes joined with author names, newest first
    pub fn list_notes(&self) -> Result<Vec<NoteRow>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT n.id, n.department, a.name, n.note, n.date_written
            FROM auditor_notes n
            JOIN auditors a ON a.id = n.auditor_id
            ORDER BY n.date_written DESC, n.id DESC
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(NoteRow {
                    id: row.get(0)?,
                    department: text_column(row, 1)?,
                    auditor_name: text_column(row, 2)?,
                    note: text_column(row, 3)?,
                    date_written: text_column(row, 4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    // ========== Statistics ==========

    pub fn counts(&self) -> Result<TableCounts> {
        let conn = self.connect()?;
        let counts = conn.query_row(
            r#"
            SELECT
                (SELECT COUNT(*) FROM auditors),
                (SELECT COUNT(*) FROM findings),
                (SELECT COUNT(*) FROM assignments),
                (SELECT COUNT(*) FROM auditor_notes)
            "#,
            [],
            |row| {
                Ok(TableCounts {
                    auditors: row.get::<_, i64>(0)? as usize,
                    findings: row.get::<_, i64>(1)? as usize,
                    assignments: row.get::<_, i64>(2)? as usize,
                    notes: row.get::<_, i64>(3)? as usize,
                })
            },
        )?;
        Ok(counts)
    }
}

/// Nullable text column, NULL read as empty
fn text_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

/// Known role of auditor `id`; rows written with any other role are skipped
fn parse_role(id: i64, raw: Option<&str>) -> Option<Role> {
    match raw.unwrap_or_default().parse::<Role>() {
        Ok(role) => Some(role),
        Err(e) => {
            tracing::warn!(id, "Skipping auditor row: {}", e);
            None
        }
    }
}
