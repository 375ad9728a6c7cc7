use serde::{Deserialize, Serialize};

use crate::domain::{GridLabel, PendingSelection, SelectionRecord};

/// Actions a front end can send to the selection controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SheetCommand {
    SelectCell { grid: String, row: usize, col: usize },
    SubmitName { name: String },
    Cancel,
}

/// Read-only requests answered from the current grid contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SheetQuery {
    ShowGrid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        grid: Option<String>,
    },
    ListSelections,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SheetEvent {
    SelectionOpened {
        pending: PendingSelection,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        replaced: Option<PendingSelection>,
    },
    /// The clicked cell was already claimed; nothing changed.
    SelectionIgnored { grid: GridLabel, row: usize, col: usize },
    CellClaimed { record: SelectionRecord },
    SelectionCancelled {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pending: Option<PendingSelection>,
    },
}

/// Occupancy of one grid, row-major, `None` for empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub label: GridLabel,
    pub rows: Vec<Vec<Option<String>>>,
}

/// A maintenance-view row with week and day already labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRow {
    pub grid: String,
    pub week: String,
    pub day: String,
    pub name: String,
}

impl From<&SelectionRecord> for SelectionRow {
    fn from(record: &SelectionRecord) -> Self {
        Self {
            grid: record.grid.to_string(),
            week: record.week_label(),
            day: record.day_label().to_string(),
            name: record.name.clone(),
        }
    }
}
