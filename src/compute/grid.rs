//! Bounded boolean grid storage.
//!
//! Cells are stored as a flat row-major array: index = row * cols + col.
//! The grid has hard edges; coordinates outside `[0, rows) x [0, cols)` are
//! never stored and never read.

/// Offsets of the eight Moore neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rectangular grid of live/dead cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create an all-dead grid. Callers guarantee both dimensions are non-zero.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell state at (row, col), or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.contains(row, col).then(|| self.cells[self.idx(row, col)])
    }

    /// Set the cell at (row, col). Returns false (and stores nothing) outside the grid.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let idx = self.idx(row, col);
        self.cells[idx] = alive;
        true
    }

    /// Cell state for an in-range coordinate.
    #[inline]
    pub(crate) fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.idx(row, col)]
    }

    /// Count live neighbors of an in-range cell.
    ///
    /// Neighbors falling outside the grid are skipped, so edge cells see five
    /// neighbors and corner cells see three.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0u8;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if self.contains(r, c) && self.cells[self.idx(r, c)] {
                count += 1;
            }
        }
        count
    }

    /// Cells of one row as a slice, or `None` past the last row.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        (row < self.rows).then(|| {
            let start = row * self.cols;
            &self.cells[start..start + self.cols]
        })
    }

    /// Flat row-major view of every cell.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Mutable flat view, used by the engine to fill the next generation.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate over live cell coordinates in row-major order.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Kill every cell.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(false);
    }
}
