//! Role capabilities
//!
//! A single table decides what each role may do. The menu is built from it and
//! every handler consults it again before touching storage.

use crate::model::Role;

/// Something a signed-in user can attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ViewDashboard,
    ViewAuditors,
    ViewAssignments,
    AddAuditor,
    AssignFinding,
    ViewNotes,
    SubmitNote,
    AddFinding,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ViewDashboard => "view dashboard",
            Action::ViewAuditors => "view auditors",
            Action::ViewAssignments => "view assignments",
            Action::AddAuditor => "add auditor",
            Action::AssignFinding => "assign finding",
            Action::ViewNotes => "view auditor notes",
            Action::SubmitNote => "submit note",
            Action::AddFinding => "add finding",
        }
    }

    pub fn all() -> &'static [Action] {
        &[
            Action::ViewDashboard,
            Action::ViewAuditors,
            Action::ViewAssignments,
            Action::AddAuditor,
            Action::AssignFinding,
            Action::ViewNotes,
            Action::SubmitNote,
            Action::AddFinding,
        ]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether `role` may perform `action`
pub fn allowed(role: Role, action: Action) -> bool {
    match action {
        Action::ViewDashboard | Action::ViewAuditors | Action::ViewAssignments => true,
        Action::AddAuditor | Action::AssignFinding | Action::ViewNotes | Action::AddFinding => {
            role == Role::Admin
        }
        // Admins read notes; only auditors write them.
        Action::SubmitNote => role == Role::Auditor,
    }
}
