use std::{fmt, str::FromStr};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{NameRejection, SheetError};

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 7;
pub const MAX_NAME_LEN: usize = 15;

pub const DEFAULT_GRID_LABELS: [&str; 2] = ["A", "B"];

/// Column headers, column 0 is Sunday.
pub const DAY_LABELS: [&str; GRID_COLS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAYS: [Weekday; GRID_COLS] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn check_bounds(row: usize, col: usize) -> Result<(), SheetError> {
    if row >= GRID_ROWS || col >= GRID_COLS {
        return Err(SheetError::OutOfRange { row, col });
    }
    Ok(())
}

/// "Week 1" for row 0.
pub fn week_label(row: usize) -> String {
    format!("Week {}", row + 1)
}

pub fn day_label(col: usize) -> Option<&'static str> {
    DAY_LABELS.get(col).copied()
}

pub fn day_of_week(col: usize) -> Option<Weekday> {
    WEEKDAYS.get(col).copied()
}

/// Identifies one grid on the board ("A", "B", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GridLabel(String);

impl GridLabel {
    pub fn new(raw: &str) -> Result<Self, SheetError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SheetError::InvalidGridLabel(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Labels of the two grids every board starts with.
pub fn default_grid_labels() -> Vec<GridLabel> {
    DEFAULT_GRID_LABELS
        .iter()
        .map(|label| GridLabel(label.to_string()))
        .collect()
}

impl fmt::Display for GridLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GridLabel {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for GridLabel {
    type Error = SheetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<GridLabel> for String {
    fn from(value: GridLabel) -> Self {
        value.0
    }
}

/// A name that passed validation: trimmed, 1 to `MAX_NAME_LEN` characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimName(String);

impl ClaimName {
    pub fn parse(raw: &str) -> Result<Self, SheetError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NameRejection::Empty.into());
        }

        let len = trimmed.chars().count();
        if len > MAX_NAME_LEN {
            return Err(NameRejection::TooLong {
                len,
                max: MAX_NAME_LEN,
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ClaimName {
    type Error = SheetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClaimName> for String {
    fn from(value: ClaimName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "name", rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    Claimed(ClaimName),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Cell::Empty => None,
            Cell::Claimed(name) => Some(name.as_str()),
        }
    }
}

/// The one cell currently waiting for a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSelection {
    pub grid: GridLabel,
    pub row: usize,
    pub col: usize,
}

/// One occupied cell as seen by the maintenance view. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub grid: GridLabel,
    pub week: usize,
    pub day_of_week: usize,
    pub name: String,
}

impl SelectionRecord {
    pub fn week_label(&self) -> String {
        week_label(self.week)
    }

    pub fn day_label(&self) -> &'static str {
        day_label(self.day_of_week).unwrap_or("?")
    }

    pub fn weekday(&self) -> Option<Weekday> {
        day_of_week(self.day_of_week)
    }
}
