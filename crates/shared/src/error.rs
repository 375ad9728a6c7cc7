use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{GRID_COLS, GRID_ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameRejection {
    #[error("name is empty")]
    Empty,
    #[error("name is {len} characters long, at most {max} are allowed")]
    TooLong { len: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    #[error("cell ({row}, {col}) is outside the {}x{} grid", GRID_ROWS, GRID_COLS)]
    OutOfRange { row: usize, col: usize },
    #[error("cell ({row}, {col}) in grid {grid} is already claimed")]
    Occupied { grid: String, row: usize, col: usize },
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameRejection),
    #[error("no cell is waiting for a name")]
    NoPendingSelection,
    #[error("grid '{0}' not found")]
    UnknownGrid(String),
    #[error("invalid grid label '{0}'")]
    InvalidGridLabel(String),
    #[error("grid '{0}' is defined more than once")]
    DuplicateGrid(String),
}

impl SheetError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SheetError::OutOfRange { .. } => ErrorCode::OutOfRange,
            SheetError::Occupied { .. } => ErrorCode::Occupied,
            SheetError::InvalidName(_)
            | SheetError::InvalidGridLabel(_)
            | SheetError::DuplicateGrid(_) => ErrorCode::Validation,
            SheetError::NoPendingSelection => ErrorCode::NoPendingSelection,
            SheetError::UnknownGrid(_) => ErrorCode::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    OutOfRange,
    Occupied,
    Validation,
    NoPendingSelection,
    NotFound,
}

impl ErrorCode {
    /// Out-of-range coordinates mean the caller computed a bad index; everything else can be
    /// corrected by the user.
    pub fn is_recoverable(self) -> bool {
        !matches!(self, ErrorCode::OutOfRange)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorView {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorView {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&SheetError> for ErrorView {
    fn from(value: &SheetError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}
