//! Database schema definitions

/// SQL to create the auditors table
pub const CREATE_AUDITORS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS auditors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    username TEXT UNIQUE,
    password TEXT,
    role TEXT
)
"#;

/// SQL to create the findings table
pub const CREATE_FINDINGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS findings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    department TEXT,
    status TEXT DEFAULT 'Open',
    flagged INTEGER DEFAULT 0,
    date_logged TEXT DEFAULT CURRENT_DATE
)
"#;

/// SQL to create the assignments table
/// Foreign keys are declared only; each connection switches enforcement off.
pub const CREATE_ASSIGNMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS assignments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    finding_id INTEGER,
    auditor_id INTEGER,
    due_date TEXT,
    action_taken TEXT,
    status TEXT DEFAULT 'Not Started',
    FOREIGN KEY (finding_id) REFERENCES findings(id),
    FOREIGN KEY (auditor_id) REFERENCES auditors(id)
)
"#;

/// SQL to create the auditor_notes table
pub const CREATE_AUDITOR_NOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS auditor_notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    auditor_id INTEGER,
    department TEXT,
    note TEXT,
    date_written TEXT DEFAULT CURRENT_DATE,
    FOREIGN KEY (auditor_id) REFERENCES auditors(id)
)
"#;

/// Demo accounts inserted into an empty auditors table
pub const SEED_AUDITORS: &str = r#"
INSERT INTO auditors (name, username, password, role) VALUES
    ('SHEMA Jackson', 'shema', 'pass123', 'auditor'),
    ('KARENZI Paul', 'karenzi', 'audit2024', 'auditor'),
    ('ADMIN User', 'admin', 'admin123', 'admin')
"#;

/// Demo findings inserted into an empty findings table
pub const SEED_FINDINGS: &str = r#"
INSERT INTO findings (title, description, department, status, flagged) VALUES
    ('Irregular Budget Usage', 'Spending over budget without approval', 'Finance', 'Open', 1),
    ('Unregistered Equipment', 'Missing inventory in records', 'Logistics', 'In Progress', 0)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![
        CREATE_AUDITORS_TABLE,
        CREATE_FINDINGS_TABLE,
        CREATE_ASSIGNMENTS_TABLE,
        CREATE_AUDITOR_NOTES_TABLE,
    ]
}

/// Seed statements keyed by the table whose emptiness gates them
pub fn seed_statements() -> Vec<(&'static str, &'static str)> {
    vec![("auditors", SEED_AUDITORS), ("findings", SEED_FINDINGS)]
}
