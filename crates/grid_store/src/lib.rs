use shared::{
    domain::{
        check_bounds, default_grid_labels, Cell, ClaimName, GridLabel, GRID_COLS, GRID_ROWS,
    },
    error::SheetError,
    protocol::GridSnapshot,
};

/// Fixed 5x7 table of cells for one labelled grid. Cells go from empty to claimed exactly once.
#[derive(Debug, Clone)]
pub struct GridStore {
    label: GridLabel,
    cells: [[Cell; GRID_COLS]; GRID_ROWS],
}

impl GridStore {
    pub fn new(label: GridLabel) -> Self {
        Self {
            label,
            cells: Default::default(),
        }
    }

    pub fn label(&self) -> &GridLabel {
        &self.label
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&Cell, SheetError> {
        check_bounds(row, col)?;
        Ok(&self.cells[row][col])
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, SheetError> {
        Ok(!self.get(row, col)?.is_empty())
    }

    /// Validates `name` and commits it. An occupied cell is reported before the name is
    /// looked at, and its value is never touched.
    pub fn set(&mut self, row: usize, col: usize, name: &str) -> Result<(), SheetError> {
        self.ensure_vacant(row, col)?;
        let name = ClaimName::parse(name)?;
        self.claim(row, col, name)
    }

    /// Commits an already validated name.
    pub fn claim(&mut self, row: usize, col: usize, name: ClaimName) -> Result<(), SheetError> {
        self.ensure_vacant(row, col)?;
        self.cells[row][col] = Cell::Claimed(name);
        Ok(())
    }

    fn ensure_vacant(&self, row: usize, col: usize) -> Result<(), SheetError> {
        if self.is_occupied(row, col)? {
            return Err(SheetError::Occupied {
                grid: self.label.to_string(),
                row,
                col,
            });
        }
        Ok(())
    }

    /// Claimed cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.name().map(|name| (row, col, name)))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_COLS]> + '_ {
        self.cells.iter()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            label: self.label.clone(),
            rows: self
                .cells
                .iter()
                .map(|row| row.iter().map(|cell| cell.name().map(str::to_string)).collect())
                .collect(),
        }
    }
}

/// Ordered set of grids. Order is the reporting order.
#[derive(Debug, Clone)]
pub struct SignupBoard {
    grids: Vec<GridStore>,
}

impl SignupBoard {
    pub fn new<I, S>(labels: I) -> Result<Self, SheetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grids: Vec<GridStore> = Vec::new();
        for raw in labels {
            let label = GridLabel::new(raw.as_ref())?;
            if grids.iter().any(|grid| grid.label == label) {
                return Err(SheetError::DuplicateGrid(label.to_string()));
            }
            grids.push(GridStore::new(label));
        }
        Ok(Self { grids })
    }

    /// Grids "A" and "B", both empty.
    pub fn with_default_grids() -> Self {
        Self {
            grids: default_grid_labels()
                .into_iter()
                .map(GridStore::new)
                .collect(),
        }
    }

    pub fn grid(&self, label: &str) -> Result<&GridStore, SheetError> {
        self.grids
            .iter()
            .find(|grid| grid.label.as_str() == label.trim())
            .ok_or_else(|| SheetError::UnknownGrid(label.to_string()))
    }

    pub fn grid_mut(&mut self, label: &str) -> Result<&mut GridStore, SheetError> {
        self.grids
            .iter_mut()
            .find(|grid| grid.label.as_str() == label.trim())
            .ok_or_else(|| SheetError::UnknownGrid(label.to_string()))
    }

    pub fn grids(&self) -> &[GridStore] {
        &self.grids
    }

    pub fn labels(&self) -> impl Iterator<Item = &GridLabel> + '_ {
        self.grids.iter().map(GridStore::label)
    }
}

impl Default for SignupBoard {
    fn default() -> Self {
        Self::with_default_grids()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
