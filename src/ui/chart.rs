//! Text bar chart of the finding status distribution

use crate::model::StatusCount;
use crate::ui::theme;
use owo_colors::OwoColorize;

/// Cells available to a bar covering every finding
pub const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: usize,
    pub percent: f64,
    pub cells: usize,
}

/// Share of each status, sized against `width`
pub fn distribution_bars(counts: &[StatusCount], width: usize) -> Vec<Bar> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }

    counts
        .iter()
        .map(|c| {
            let percent = c.count as f64 * 100.0 / total as f64;
            let cells = ((percent / 100.0) * width as f64).round() as usize;
            Bar {
                label: c.status.clone(),
                count: c.count,
                percent,
                // a non-empty status always shows at least one cell
                cells: cells.max(usize::from(c.count > 0)),
            }
        })
        .collect()
}

pub fn render_distribution(counts: &[StatusCount]) -> String {
    let bars = distribution_bars(counts, BAR_WIDTH);
    let label_width = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);

    bars.iter()
        .map(|b| {
            let filled = "█".repeat(b.cells);
            let rest = "░".repeat(BAR_WIDTH.saturating_sub(b.cells));
            format!(
                "{:<lw$}  {}{} {:>5.1}% ({})",
                b.label,
                filled.style(theme().bar.clone()),
                rest.style(theme().muted.clone()),
                b.percent,
                b.count,
                lw = label_width,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
