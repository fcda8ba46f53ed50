//! Form payloads and their validation
//!
//! Validation is limited to rejecting blank text fields.

use chrono::NaiveDate;
use crate::model::{NewFinding, Role};
use crate::{Error, Result};

/// Fail with the names of every empty or whitespace-only field
fn require_filled(fields: &[(&'static str, &str)]) -> Result<()> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingFields(missing))
    }
}

#[derive(Debug, Clone)]
pub struct AuditorForm {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl AuditorForm {
    pub fn validate(&self) -> Result<()> {
        require_filled(&[
            ("name", &self.name),
            ("username", &self.username),
            ("password", &self.password),
        ])
    }
}

#[derive(Debug, Clone)]
pub struct AssignmentForm {
    pub finding_id: i64,
    pub auditor_id: i64,
    pub due_date: NaiveDate,
}

impl AssignmentForm {
    /// Due date as stored, `YYYY-MM-DD`
    pub fn due_date_iso(&self) -> String {
        self.due_date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct NoteForm {
    pub department: String,
    pub note: String,
}

impl NoteForm {
    pub fn validate(&self) -> Result<()> {
        require_filled(&[("department", &self.department), ("note", &self.note)])
    }
}

#[derive(Debug, Clone)]
pub struct FindingForm {
    pub title: String,
    pub description: String,
    pub department: String,
    pub flagged: bool,
}

impl FindingForm {
    pub fn validate(&self) -> Result<()> {
        require_filled(&[
            ("title", &self.title),
            ("description", &self.description),
            ("department", &self.department),
        ])
    }

    pub fn to_new_finding(&self) -> NewFinding {
        NewFinding::open(self.title.trim(), self.description.trim(), self.department.trim())
            .flagged(self.flagged)
    }
}
