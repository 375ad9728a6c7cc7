//! Selection flow for the sign-up sheet: a cell is opened, a name is submitted, the grid is
//! updated. At most one cell waits for a name at any time.

use grid_store::SignupBoard;
use shared::{
    domain::{ClaimName, PendingSelection, SelectionRecord},
    error::SheetError,
    protocol::{SheetCommand, SheetEvent},
};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened {
        /// A selection that was still waiting and got discarded; last click wins.
        replaced: Option<PendingSelection>,
    },
    /// Cell already claimed. Pending state is untouched.
    AlreadyClaimed,
}

#[derive(Debug, Default)]
pub struct SelectionController {
    pending: Option<PendingSelection>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&PendingSelection> {
        self.pending.as_ref()
    }

    pub fn open_cell(
        &mut self,
        board: &SignupBoard,
        grid: &str,
        row: usize,
        col: usize,
    ) -> Result<OpenOutcome, SheetError> {
        let store = board.grid(grid)?;
        if store.is_occupied(row, col)? {
            debug!(grid = %store.label(), row, col, "ignoring selection of claimed cell");
            return Ok(OpenOutcome::AlreadyClaimed);
        }

        let selection = PendingSelection {
            grid: store.label().clone(),
            row,
            col,
        };
        let replaced = self.pending.replace(selection);
        match &replaced {
            Some(previous) => debug!(
                grid = %store.label(),
                row,
                col,
                previous_grid = %previous.grid,
                previous_row = previous.row,
                previous_col = previous.col,
                "replaced pending selection"
            ),
            None => debug!(grid = %store.label(), row, col, "opened selection"),
        }

        Ok(OpenOutcome::Opened { replaced })
    }

    /// Validates `raw_input` and commits it to the pending cell.
    ///
    /// A rejected name keeps the selection open for another attempt. If the cell was claimed
    /// behind the controller's back the selection is dropped, since it can no longer succeed.
    pub fn submit_name(
        &mut self,
        board: &mut SignupBoard,
        raw_input: &str,
    ) -> Result<SelectionRecord, SheetError> {
        let Some(pending) = self.pending.clone() else {
            warn!("name submitted with no open selection");
            return Err(SheetError::NoPendingSelection);
        };

        let name = ClaimName::parse(raw_input).inspect_err(|error| {
            warn!(grid = %pending.grid, row = pending.row, col = pending.col, %error, "rejected name");
        })?;

        let store = board.grid_mut(pending.grid.as_str())?;
        if let Err(error) = store.claim(pending.row, pending.col, name.clone()) {
            if matches!(error, SheetError::Occupied { .. }) {
                self.pending = None;
            }
            warn!(grid = %pending.grid, row = pending.row, col = pending.col, %error, "claim failed");
            return Err(error);
        }

        self.pending = None;
        info!(grid = %pending.grid, row = pending.row, col = pending.col, claimant = %name, "cell claimed");

        Ok(SelectionRecord {
            grid: pending.grid,
            week: pending.row,
            day_of_week: pending.col,
            name: name.into(),
        })
    }

    pub fn cancel(&mut self) -> Option<PendingSelection> {
        let cleared = self.pending.take();
        if let Some(pending) = &cleared {
            debug!(grid = %pending.grid, row = pending.row, col = pending.col, "selection cancelled");
        }
        cleared
    }

    pub fn apply(
        &mut self,
        board: &mut SignupBoard,
        command: SheetCommand,
    ) -> Result<SheetEvent, SheetError> {
        match command {
            SheetCommand::SelectCell { grid, row, col } => {
                match self.open_cell(board, &grid, row, col)? {
                    OpenOutcome::Opened { replaced } => {
                        let pending = self
                            .pending
                            .clone()
                            .ok_or(SheetError::NoPendingSelection)?;
                        Ok(SheetEvent::SelectionOpened { pending, replaced })
                    }
                    OpenOutcome::AlreadyClaimed => Ok(SheetEvent::SelectionIgnored {
                        grid: board.grid(&grid)?.label().clone(),
                        row,
                        col,
                    }),
                }
            }
            SheetCommand::SubmitName { name } => {
                let record = self.submit_name(board, &name)?;
                Ok(SheetEvent::CellClaimed { record })
            }
            SheetCommand::Cancel => Ok(SheetEvent::SelectionCancelled {
                pending: self.cancel(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
