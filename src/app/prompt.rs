//! Interactive input via `inquire`
//!
//! Each prompt returns `Ok(None)` when the user backs out with Esc. Ctrl+C
//! surfaces as `Error::Prompt` and ends the session loop.

use chrono::Local;
use inquire::{Confirm, DateSelect, InquireError, Password, PasswordDisplayMode, Select, Text};
use crate::app::forms::{AssignmentForm, AuditorForm, FindingForm, NoteForm};
use crate::app::menu::MenuItem;
use crate::model::{Auditor, Finding, Role};
use crate::Result;

fn optional<T>(answer: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Username and password, or `None` to quit
pub fn credentials() -> Result<Option<(String, String)>> {
    let Some(username) = optional(Text::new("Username:").prompt())? else {
        return Ok(None);
    };
    let Some(password) = optional(
        Password::new("Password:")
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    Ok(Some((username, password)))
}

pub fn menu(items: &[MenuItem], current: MenuItem) -> Result<Option<MenuItem>> {
    let cursor = items.iter().position(|i| *i == current).unwrap_or(0);
    optional(
        Select::new("Menu", items.to_vec())
            .with_starting_cursor(cursor)
            .prompt(),
    )
}

pub fn confirm(question: &str) -> Result<bool> {
    Ok(optional(Confirm::new(question).with_default(false).prompt())?.unwrap_or(false))
}

pub fn auditor_form() -> Result<Option<AuditorForm>> {
    let Some(name) = optional(Text::new("Full Name:").prompt())? else {
        return Ok(None);
    };
    let Some(username) = optional(Text::new("Username:").prompt())? else {
        return Ok(None);
    };
    let Some(password) = optional(
        Password::new("Password:")
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    let Some(role) = optional(Select::new("Role:", Role::all().to_vec()).prompt())? else {
        return Ok(None);
    };
    Ok(Some(AuditorForm { name, username, password, role }))
}

pub fn assignment_form(findings: Vec<Finding>, auditors: Vec<Auditor>) -> Result<Option<AssignmentForm>> {
    let Some(finding) = optional(Select::new("Select Finding:", findings).prompt())? else {
        return Ok(None);
    };
    let Some(auditor) = optional(Select::new("Assign To:", auditors).prompt())? else {
        return Ok(None);
    };
    let Some(due_date) = optional(
        DateSelect::new("Due Date:")
            .with_default(Local::now().date_naive())
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    Ok(Some(AssignmentForm {
        finding_id: finding.id,
        auditor_id: auditor.id,
        due_date,
    }))
}

pub fn note_form() -> Result<Option<NoteForm>> {
    let Some(department) = optional(Text::new("Department Name:").prompt())? else {
        return Ok(None);
    };
    let Some(note) = optional(Text::new("Note:").prompt())? else {
        return Ok(None);
    };
    Ok(Some(NoteForm { department, note }))
}

pub fn finding_form() -> Result<Option<FindingForm>> {
    let Some(title) = optional(Text::new("Title:").prompt())? else {
        return Ok(None);
    };
    let Some(description) = optional(Text::new("Description:").prompt())? else {
        return Ok(None);
    };
    let Some(department) = optional(Text::new("Department:").prompt())? else {
        return Ok(None);
    };
    let flagged = confirm("Flag this finding?")?;
    Ok(Some(FindingForm { title, description, department, flagged }))
}
