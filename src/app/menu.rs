//! Role-gated navigation

use crate::access::{allowed, Action};
use crate::model::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Dashboard,
    Auditors,
    Assignments,
    AddAuditor,
    AssignTask,
    AuditorNotes,
    AddFinding,
    Logout,
}

impl MenuItem {
    pub const ALL: [MenuItem; 8] = [
        MenuItem::Dashboard,
        MenuItem::Auditors,
        MenuItem::Assignments,
        MenuItem::AddAuditor,
        MenuItem::AssignTask,
        MenuItem::AuditorNotes,
        MenuItem::AddFinding,
        MenuItem::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Dashboard => "Dashboard",
            MenuItem::Auditors => "Auditors",
            MenuItem::Assignments => "Assignments",
            MenuItem::AddAuditor => "Add Auditor",
            MenuItem::AssignTask => "Assign Task",
            MenuItem::AuditorNotes => "Auditor Notes",
            MenuItem::AddFinding => "Add Finding",
            MenuItem::Logout => "Logout",
        }
    }

    /// Capability needed to open this entry; `None` for entries open to anyone signed in
    pub fn action(&self) -> Option<Action> {
        match self {
            MenuItem::Dashboard => Some(Action::ViewDashboard),
            MenuItem::Auditors => Some(Action::ViewAuditors),
            MenuItem::Assignments => Some(Action::ViewAssignments),
            MenuItem::AddAuditor => Some(Action::AddAuditor),
            MenuItem::AssignTask => Some(Action::AssignFinding),
            MenuItem::AuditorNotes => Some(Action::ViewNotes),
            MenuItem::AddFinding => Some(Action::AddFinding),
            MenuItem::Logout => None,
        }
    }
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Entries visible to `role`, in display order
pub fn menu_for(role: Role) -> Vec<MenuItem> {
    MenuItem::ALL
        .iter()
        .copied()
        .filter(|item| item.action().is_none_or(|action| allowed(role, action)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auditor_menu() {
        assert_eq!(
            menu_for(Role::Auditor),
            vec![MenuItem::Dashboard, MenuItem::Auditors, MenuItem::Assignments, MenuItem::Logout]
        );
    }

    #[test]
    fn test_admin_menu() {
        let labels: Vec<_> = menu_for(Role::Admin).iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Auditors",
                "Assignments",
                "Add Auditor",
                "Assign Task",
                "Auditor Notes",
                "Add Finding",
                "Logout",
            ]
        );
    }
}
