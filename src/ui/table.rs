use tabled::{settings::Style, Table, Tabled};
use crate::model::{AssignmentRow, Auditor, Finding, NoteRow, StatusCount, TableCounts};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
struct FindingLine {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Flagged")]
    flagged: &'static str,
    #[tabled(rename = "Date Logged")]
    date_logged: String,
}

#[derive(Tabled)]
struct AuditorLine {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Role")]
    role: &'static str,
}

#[derive(Tabled)]
struct AssignmentLine {
    #[tabled(rename = "Finding")]
    finding: String,
    #[tabled(rename = "Auditor")]
    auditor: String,
    #[tabled(rename = "Due Date")]
    due_date: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Action Taken")]
    action_taken: String,
}

#[derive(Tabled)]
struct NoteLine {
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Auditor")]
    auditor: String,
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "Date Written")]
    date_written: String,
}

/// Render rows with the shared style; empty input renders as an empty string
fn render<T: Tabled>(rows: Vec<T>) -> String {
    if rows.is_empty() {
        return String::new();
    }
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn findings_table(findings: &[Finding]) -> String {
    render(
        findings
            .iter()
            .map(|f| FindingLine {
                id: f.id,
                title: f.title.clone(),
                department: f.department.clone().unwrap_or_default(),
                status: f.status.clone(),
                flagged: if f.flagged { "Yes" } else { "No" },
                date_logged: f.date_logged.clone(),
            })
            .collect(),
    )
}

pub fn auditors_table(auditors: &[Auditor]) -> String {
    render(
        auditors
            .iter()
            .map(|a| AuditorLine {
                id: a.id,
                name: a.name.clone(),
                username: a.username.clone(),
                role: a.role.as_str(),
            })
            .collect(),
    )
}

pub fn assignments_table(assignments: &[AssignmentRow]) -> String {
    render(
        assignments
            .iter()
            .map(|s| AssignmentLine {
                finding: s.finding_title.clone(),
                auditor: s.auditor_name.clone(),
                due_date: s.due_date.clone(),
                status: s.status.clone(),
                action_taken: s.action_taken.clone().unwrap_or_default(),
            })
            .collect(),
    )
}

pub fn notes_table(notes: &[NoteRow]) -> String {
    render(
        notes
            .iter()
            .map(|n| NoteLine {
                department: n.department.clone(),
                auditor: n.auditor_name.clone(),
                note: n.note.clone(),
                date_written: n.date_written.clone(),
            })
            .collect(),
    )
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(self) -> String {
        render(self.rows)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Table counts followed by one row per finding status
pub fn stats_table(counts: &TableCounts, distribution: &[StatusCount]) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Auditors", &counts.auditors.to_string());
    builder.add_row("Findings", &counts.findings.to_string());
    builder.add_row("Assignments", &counts.assignments.to_string());
    builder.add_row("Notes", &counts.notes.to_string());
    for entry in distribution {
        builder.add_row(&format!("Status: {}", entry.status), &entry.count.to_string());
    }
    builder.build()
}
