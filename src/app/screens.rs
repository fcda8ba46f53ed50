//! Terminal rendering of views

use crate::app::handlers::View;
use crate::app::menu::MenuItem;
use crate::model::Identity;
use crate::ui::{
    self, assignments_table, auditors_table, findings_table, notes_table, render_distribution, Icons,
};

fn title(item: MenuItem) -> (&'static str, &'static str) {
    match item {
        MenuItem::Dashboard => (Icons::STATS, "Dashboard Overview"),
        MenuItem::Auditors => (Icons::PEOPLE, "Registered Auditors"),
        MenuItem::Assignments => (Icons::FOLDER, "Audit Assignments"),
        MenuItem::AddAuditor => (Icons::PLUS, "Add New Auditor (Admin Only)"),
        MenuItem::AssignTask => (Icons::NOTE, "Assign Audit Finding"),
        MenuItem::AuditorNotes => (Icons::NOTE, "Auditor Notes (Admin Only)"),
        MenuItem::AddFinding => (Icons::FLAG, "Log New Finding (Admin Only)"),
        MenuItem::Logout => (Icons::DOOR, "Logout"),
    }
}

pub fn banner(identity: &Identity) {
    ui::status(
        Icons::PERSON,
        "Logged in as",
        &format!("{} ({})", identity.name, identity.role),
    );
}

pub fn render(item: MenuItem, view: &View) {
    let (icon, text) = title(item);
    ui::header(icon, text);

    match view {
        View::Dashboard { findings, distribution } => {
            ui::table_or_empty(&findings_table(findings), "No findings available.");
            if !distribution.is_empty() {
                ui::section("Audit Status Distribution");
                println!("{}", render_distribution(distribution));
            }
        }
        View::Auditors(auditors) => {
            ui::table_or_empty(&auditors_table(auditors), "No auditors found.");
        }
        View::Assignments { rows, .. } => {
            ui::table_or_empty(&assignments_table(rows), "No assignments found.");
        }
        View::Notes(notes) => {
            ui::table_or_empty(&notes_table(notes), "No auditor notes available.");
        }
        View::Findings(findings) => {
            ui::table_or_empty(&findings_table(findings), "No findings available.");
        }
    }
}
