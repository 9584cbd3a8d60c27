//! Grid module - fixed-size 2D storage
//!
//! Maps (column, row) to an optional occupant using a flat, row-major vector
//! (`row * columns + column`). The extent is fixed at construction.
//!
//! Indexing outside the extent is a caller bug and panics. Callers that work with
//! signed piece coordinates check [`Grid2D::contains`] first.

/// Fixed `columns x rows` grid of optional cells
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D<T> {
    columns: usize,
    rows: usize,
    cells: Vec<Option<T>>,
}

impl<T> Grid2D<T> {
    /// Create a grid with every cell empty
    pub fn new(columns: usize, rows: usize) -> Self {
        let mut cells = Vec::with_capacity(columns * rows);
        cells.resize_with(columns * rows, || None);
        Self {
            columns,
            rows,
            cells,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True if (column, row) lies inside the grid
    #[inline]
    pub fn contains(&self, column: i32, row: i32) -> bool {
        column >= 0 && row >= 0 && (column as usize) < self.columns && (row as usize) < self.rows
    }

    #[inline(always)]
    fn index(&self, column: usize, row: usize) -> usize {
        assert!(
            column < self.columns && row < self.rows,
            "grid access ({column}, {row}) outside {}x{}",
            self.columns,
            self.rows
        );
        row * self.columns + column
    }

    /// Occupant at (column, row)
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn get(&self, column: usize, row: usize) -> Option<&T> {
        let idx = self.index(column, row);
        self.cells[idx].as_ref()
    }

    /// Replace the occupant at (column, row), returning the previous one
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn set(&mut self, column: usize, row: usize, value: Option<T>) -> Option<T> {
        let idx = self.index(column, row);
        std::mem::replace(&mut self.cells[idx], value)
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Occupied cells in row-major order as (column, row, occupant)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.as_ref().map(|v| (idx % columns, idx / columns, v)))
    }

    /// Raw row-major cells
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }
}
