//! Text rendering of grid occupancy and controller events.

use grid_store::GridStore;
use shared::{
    domain::{day_label, week_label, PendingSelection, DAY_LABELS},
    protocol::SheetEvent,
};

const EMPTY_MARK: &str = ".";
const PENDING_MARK: &str = "?";

/// Week rows by Sun..Sat columns. Claimed cells show the name, the open cell shows `?`.
pub fn render_grid(grid: &GridStore, pending: Option<&PendingSelection>) -> String {
    let is_pending = |row: usize, col: usize| {
        pending.is_some_and(|p| &p.grid == grid.label() && p.row == row && p.col == col)
    };

    let cells: Vec<Vec<String>> = grid
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell.name() {
                    Some(name) => name.to_string(),
                    None if is_pending(row, col) => PENDING_MARK.to_string(),
                    None => EMPTY_MARK.to_string(),
                })
                .collect()
        })
        .collect();

    let label_width = (0..cells.len())
        .map(|row| week_label(row).len())
        .max()
        .unwrap_or(0);
    let mut widths: Vec<usize> = DAY_LABELS.iter().map(|day| day.len()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![format!("Grid {}", grid.label())];
    let header: Vec<String> = DAY_LABELS
        .iter()
        .zip(&widths)
        .map(|(day, &width)| format!("{day:<width$}"))
        .collect();
    lines.push(format!("{:label_width$} | {}", "", header.join(" | ")));

    for (row, cells) in cells.iter().enumerate() {
        let body: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        lines.push(
            format!("{:label_width$} | {}", week_label(row), body.join(" | "))
                .trim_end()
                .to_string(),
        );
    }

    lines.join("\n")
}

fn describe_cell(grid: &str, row: usize, col: usize) -> String {
    format!(
        "grid {grid}, {} {}",
        week_label(row),
        day_label(col).unwrap_or("?")
    )
}

pub fn render_event(event: &SheetEvent) -> String {
    match event {
        SheetEvent::SelectionOpened { pending, replaced } => {
            let mut text = format!(
                "Selected {}. Enter a name with `name <text>`.",
                describe_cell(pending.grid.as_str(), pending.row, pending.col)
            );
            if let Some(previous) = replaced {
                text.push_str(&format!(
                    " (Discarded open selection at {}.)",
                    describe_cell(previous.grid.as_str(), previous.row, previous.col)
                ));
            }
            text
        }
        SheetEvent::SelectionIgnored { grid, row, col } => {
            format!("{} is already taken.", describe_cell(grid.as_str(), *row, *col))
        }
        SheetEvent::CellClaimed { record } => format!(
            "Claimed {} for {}.",
            describe_cell(record.grid.as_str(), record.week, record.day_of_week),
            record.name
        ),
        SheetEvent::SelectionCancelled { pending: Some(pending) } => format!(
            "Cancelled selection at {}.",
            describe_cell(pending.grid.as_str(), pending.row, pending.col)
        ),
        SheetEvent::SelectionCancelled { pending: None } => "Nothing to cancel.".to_string(),
    }
}
