//! Domain types - auditors, findings, assignments and notes
//!
//! Rows are read back from storage into these plain structs. Joined views
//! (`AssignmentRow`, `NoteRow`) carry the display names resolved by the join
//! so the presentation layer never has to look anything up twice.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default status of a newly logged finding
pub const FINDING_OPEN: &str = "Open";

/// Status every new assignment starts with
pub const ASSIGNMENT_NOT_STARTED: &str = "Not Started";

/// Role of a registered auditor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Views assignments and writes department notes
    Auditor,
    /// Manages auditors, findings and assignments
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Auditor => "auditor",
            Role::Admin => "admin",
        }
    }

    pub fn all() -> &'static [Role] {
        &[Role::Auditor, Role::Admin]
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auditor" => Ok(Role::Auditor),
            "admin" => Ok(Role::Admin),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated party of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

/// A registered auditor. The password column is never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Auditor {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub role: Role,
}

impl std::fmt::Display for Auditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}

/// Input for registering an auditor
#[derive(Debug, Clone)]
pub struct NewAuditor {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// A recorded audit issue tied to a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub status: String,
    pub flagged: bool,
    /// `YYYY-MM-DD`
    pub date_logged: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.id, self.title)
    }
}

/// Input for logging a finding
#[derive(Debug, Clone)]
pub struct NewFinding {
    pub title: String,
    pub description: String,
    pub department: String,
    pub status: String,
    pub flagged: bool,
}

impl NewFinding {
    /// An unflagged finding in the default `Open` status
    pub fn open(
        title: impl Into<String>,
        description: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            department: department.into(),
            status: FINDING_OPEN.to_string(),
            flagged: false,
        }
    }

    pub fn flagged(mut self, flagged: bool) -> Self {
        self.flagged = flagged;
        self
    }
}

/// An assignment joined with its finding title and auditor name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRow {
    pub id: i64,
    pub finding_id: i64,
    pub finding_title: String,
    pub auditor_id: i64,
    pub auditor_name: String,
    pub due_date: String,
    pub status: String,
    /// Never written by any code path; kept for schema parity
    pub action_taken: Option<String>,
}

/// A department note joined with its author's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteRow {
    pub id: i64,
    pub department: String,
    pub auditor_name: String,
    pub note: String,
    /// `YYYY-MM-DD HH:MM:SS`, local time
    pub date_written: String,
}

/// Number of findings sharing one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Row counts of every table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub auditors: usize,
    pub findings: usize,
    pub assignments: usize,
    pub notes: usize,
}

impl std::fmt::Display for TableCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Auditors:    {}", self.auditors)?;
        writeln!(f, "Findings:    {}", self.findings)?;
        writeln!(f, "Assignments: {}", self.assignments)?;
        write!(f, "Notes:       {}", self.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::all() {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
        }
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = "manager".parse::<Role>().unwrap_err();
        assert!(matches!(err, Error::InvalidRole(ref r) if r == "manager"));
    }

    #[test]
    fn test_selector_labels() {
        let auditor = Auditor {
            id: 3,
            name: "ADMIN User".into(),
            username: "admin".into(),
            role: Role::Admin,
        };
        assert_eq!(auditor.to_string(), "3 - ADMIN User");

        let finding = Finding {
            id: 1,
            title: "Irregular Budget Usage".into(),
            description: None,
            department: Some("Finance".into()),
            status: FINDING_OPEN.into(),
            flagged: true,
            date_logged: "2024-01-01".into(),
        };
        assert_eq!(finding.to_string(), "1 - Irregular Budget Usage");
    }

    #[test]
    fn test_new_finding_defaults() {
        let finding = NewFinding::open("Title", "Desc", "HR");
        assert_eq!(finding.status, "Open");
        assert!(!finding.flagged);
        assert!(finding.flagged(true).flagged);
    }
}
