//! Terminal rendering for the month grid.
//!
//! The grid arrives as a pure view model; this module only decides colors
//! and column widths. Rest days (Sundays and holidays) render red, Saturdays
//! blue, today bold with a marker.

use owo_colors::OwoColorize;

use shiftcal_core::grid::{DayGroup, DayKind, MonthGrid};

const SLOT_LABEL_WIDTH: usize = 7; // "morning"
const MIN_CELL_WIDTH: usize = 4;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DayGroup {
    fn render(&self) -> String {
        let mut label = format!("{}", self.date.format("%a %d"));
        if let Some(ref holiday) = self.holiday {
            label.push_str("  ");
            label.push_str(holiday);
        }

        let mut line = match self.kind {
            DayKind::Sunday | DayKind::Holiday => label.red().to_string(),
            DayKind::Saturday => label.blue().to_string(),
            DayKind::Weekday => label,
        };
        if self.is_today {
            line = format!("{} {}", line.bold(), "● today".yellow());
        }
        line
    }
}

/// Render a month grid, optionally windowed to ±`context` days around today.
///
/// The window stands in for the original UI's scroll-to-today behavior; with
/// no context (or a month that does not contain today) the whole month is
/// shown.
pub fn render_grid(grid: &MonthGrid, context: Option<u32>) -> String {
    let width = cell_width(grid);
    let mut lines = Vec::new();

    lines.push(header_line(grid, width));

    let today = grid.today_index();
    for (i, day) in grid.days.iter().enumerate() {
        if let (Some(n), Some(today)) = (context, today) {
            if i.abs_diff(today) > n as usize {
                continue;
            }
        }

        lines.push(String::new());
        lines.push(day.render());

        if day.hidden {
            lines.push(format!("   {}", "(hidden)".dimmed()));
            continue;
        }

        for row in &day.rows {
            let mut line = format!("   {:<label$}", row.slot.as_str(), label = SLOT_LABEL_WIDTH);
            for cell in &row.cells {
                line.push_str(&format!(" | {:<width$}", cell.pattern_name));
            }
            lines.push(line);
        }

        if !day.note.is_empty() {
            lines.push(format!("   {}", format!("note: {}", day.note).dimmed()));
        }
    }

    lines.join("\n")
}

fn header_line(grid: &MonthGrid, width: usize) -> String {
    let mut line = format!("   {:<label$}", "", label = SLOT_LABEL_WIDTH);
    for employee in &grid.employees {
        // Pad before styling: ANSI escapes would throw the width off.
        let padded = format!("{:<width$}", employee.name);
        line.push_str(&format!(" | {}", padded.bold()));
    }
    line
}

/// One shared cell width keeps the columns aligned: the widest employee
/// name or pattern name that can appear in any cell.
fn cell_width(grid: &MonthGrid) -> usize {
    grid.employees
        .iter()
        .map(|e| e.name.len())
        .chain(
            grid.days
                .iter()
                .flat_map(|d| d.rows.iter())
                .flat_map(|r| r.cells.iter())
                .map(|c| c.pattern_name.len()),
        )
        .max()
        .unwrap_or(MIN_CELL_WIDTH)
        .max(MIN_CELL_WIDTH)
}
