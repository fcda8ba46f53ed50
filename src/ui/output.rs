use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(icon: &str, text: &str) {
    println!("{} {}", icon, text.style(theme().header.clone()));
}

pub fn status(icon: &str, label: &str, value: &str) {
    println!("{} {}: {}", icon, label.style(theme().dim.clone()), value);
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str) {
    println!("{} {}", Icons::INFO.style(theme().info.clone()), label.style(theme().dim.clone()));
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

/// Print a rendered table, or an info line when there is nothing to show
pub fn table_or_empty(table: &str, empty: &str) {
    if table.is_empty() {
        info(empty);
    } else {
        println!("{}", table);
    }
}

/// Wipe the terminal before a full re-render; no-op when piped
pub fn clear_screen() {
    let term = console::Term::stdout();
    if term.is_term() {
        term.clear_screen().ok();
    }
}
