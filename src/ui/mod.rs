pub mod chart;
pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use chart::render_distribution;
pub use icons::Icons;
pub use output::{
    clear_screen, error, header, info, section, status, success, table_or_empty, warn,
};
pub use table::{
    assignments_table, auditors_table, findings_table, notes_table, stats_table, TableBuilder,
};
pub use theme::{theme, Theme};
