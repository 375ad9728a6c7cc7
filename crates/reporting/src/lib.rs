//! Maintenance view over the sign-up board: every claimed cell, in a fixed order.

use grid_store::GridStore;
use shared::{domain::SelectionRecord, protocol::SelectionRow};

const TABLE_HEADERS: [&str; 4] = ["Grid", "Week", "Day", "Name"];

/// Claimed cells ordered by grid, then row, then column. Reads only.
pub fn iter_all(grids: &[GridStore]) -> impl Iterator<Item = SelectionRecord> + '_ {
    grids.iter().flat_map(|grid| {
        grid.occupied().map(move |(row, col, name)| SelectionRecord {
            grid: grid.label().clone(),
            week: row,
            day_of_week: col,
            name: name.to_string(),
        })
    })
}

pub fn list_all(grids: &[GridStore]) -> Vec<SelectionRecord> {
    iter_all(grids).collect()
}

pub fn to_rows(records: &[SelectionRecord]) -> Vec<SelectionRow> {
    records.iter().map(SelectionRow::from).collect()
}

/// Plain-text table with a Grid | Week | Day | Name header.
pub fn render_table(records: &[SelectionRecord]) -> String {
    render_rows(&to_rows(records))
}

pub fn render_rows(rows: &[SelectionRow]) -> String {
    let rows: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.grid.clone(),
                row.week.clone(),
                row.day.clone(),
                row.name.clone(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&TABLE_HEADERS.map(str::to_string), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    if rows.is_empty() {
        lines.push("(no selections)".to_string());
    }
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_store::SignupBoard;

    #[test]
    fn empty_board_lists_nothing() {
        let board = SignupBoard::default();
        assert!(list_all(board.grids()).is_empty());
    }

    #[test]
    fn orders_by_grid_then_row_then_column() {
        let mut board = SignupBoard::default();
        board.grid_mut("B").expect("B").set(0, 0, "b00").expect("set");
        board.grid_mut("A").expect("A").set(4, 0, "a40").expect("set");
        board.grid_mut("A").expect("A").set(0, 6, "a06").expect("set");
        board.grid_mut("A").expect("A").set(0, 2, "a02").expect("set");

        let names: Vec<_> = list_all(board.grids())
            .into_iter()
            .map(|record| record.name)
            .collect();
        assert_eq!(names, vec!["a02", "a06", "a40", "b00"]);
    }

    #[test]
    fn repeated_calls_yield_identical_sequences() {
        let mut board = SignupBoard::default();
        board.grid_mut("A").expect("A").set(1, 1, "x").expect("set");
        board.grid_mut("B").expect("B").set(2, 2, "y").expect("set");

        let first = list_all(board.grids());
        let second: Vec<_> = iter_all(board.grids()).collect();
        assert_eq!(first, second);
        assert_eq!(first, list_all(board.grids()));
    }

    #[test]
    fn follows_board_order_not_label_order() {
        let mut board = SignupBoard::new(["Z", "A"]).expect("board");
        board.grid_mut("A").expect("A").set(0, 0, "first-a").expect("set");
        board.grid_mut("Z").expect("Z").set(4, 6, "last-z").expect("set");

        let grids: Vec<_> = list_all(board.grids())
            .into_iter()
            .map(|record| record.grid.to_string())
            .collect();
        assert_eq!(grids, vec!["Z", "A"]);
    }

    #[test]
    fn renders_maintenance_table() {
        let mut board = SignupBoard::default();
        board.grid_mut("A").expect("A").set(0, 1, "Alice").expect("set");
        board.grid_mut("B").expect("B").set(2, 6, "Bob").expect("set");

        let table = render_table(&list_all(board.grids()));
        let expected = [
            "Grid | Week   | Day | Name",
            "-----+--------+-----+------",
            "A    | Week 1 | Mon | Alice",
            "B    | Week 3 | Sat | Bob",
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let table = render_table(&[]);
        assert!(table.ends_with("(no selections)"));
        assert!(table.starts_with("Grid | Week | Day | Name"));
    }

    #[test]
    fn rows_serialize_for_json_output() {
        let mut board = SignupBoard::default();
        board.grid_mut("B").expect("B").set(4, 0, "Hal").expect("set");

        let rows = to_rows(&list_all(board.grids()));
        let json = serde_json::to_value(&rows).expect("json");
        assert_eq!(
            json,
            serde_json::json!([{"grid": "B", "week": "Week 5", "day": "Sun", "name": "Hal"}])
        );
    }
}
