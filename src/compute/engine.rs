//! Game of Life engine - Grid state, generation stepping and change tracking.
//!
//! Each step computes the next generation into a pre-allocated buffer from an
//! immutable snapshot of the current one, records every cell whose state
//! changed, then swaps the buffers.

use rayon::prelude::*;

use super::{Grid, next_state};

/// Engine errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Grid dimensions must be non-zero with a cell count that fits in usize (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Conway's Game of Life on a bounded grid with hard edges.
///
/// ```
/// use game_of_life::Engine;
///
/// let mut engine = Engine::new(10, 10).unwrap();
/// for col in 4..=6 {
///     engine.set(5, col, true).unwrap();
/// }
/// engine.advance_generation();
/// assert_eq!(engine.dirty_cells(), &[(4, 5), (5, 4), (5, 6), (6, 5)]);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    /// Pre-allocated buffer for the next generation (reused each step).
    next: Grid,
    /// Cells changed by the most recent step, row-major.
    dirty: Vec<(usize, usize)>,
    generation: u64,
}

impl Engine {
    /// Create an engine with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        validate_dimensions(rows, cols)?;
        log::debug!("Creating {}x{} engine", rows, cols);

        Ok(Self {
            grid: Grid::new(rows, cols),
            next: Grid::new(rows, cols),
            dirty: Vec::new(),
            generation: 0,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Read-only view of the current generation.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell state at (row, col), or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.grid.get(row, col)
    }

    /// Set a cell between generation steps.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), EngineError> {
        if self.grid.set(row, col, alive) {
            Ok(())
        } else {
            Err(self.out_of_bounds(row, col))
        }
    }

    /// Flip a cell and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, EngineError> {
        let alive = !self
            .grid
            .get(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.grid.set(row, col, alive);
        Ok(alive)
    }

    /// Live cells of the current generation in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid.iter_live()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Generations advanced since construction, the last clear or the last resize.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live neighbors of (row, col), ignoring positions beyond the grid edges.
    ///
    /// Returns `None` when (row, col) itself is outside the grid.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> Option<u8> {
        self.grid
            .get(row, col)
            .map(|_| self.grid.live_neighbors(row, col))
    }

    /// Cells whose state changed during the most recent generation step.
    ///
    /// Ordered row-major; empty until the first step.
    #[inline]
    pub fn dirty_cells(&self) -> &[(usize, usize)] {
        &self.dirty
    }

    /// Advance the grid by one generation.
    pub fn advance_generation(&mut self) {
        self.dirty.clear();

        let current = &self.grid;
        let cols = current.cols();

        // Every row reads only the pre-step snapshot.
        self.next
            .as_mut_slice()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    let alive = current.is_alive(row, col);
                    *cell = next_state(alive, current.live_neighbors(row, col));
                }
            });

        for (i, (old, new)) in current
            .as_slice()
            .iter()
            .zip(self.next.as_slice())
            .enumerate()
        {
            if old != new {
                self.dirty.push((i / cols, i % cols));
            }
        }

        std::mem::swap(&mut self.grid, &mut self.next);
        self.generation += 1;

        log::trace!(
            "Generation {}: {} cells changed",
            self.generation,
            self.dirty.len()
        );
    }

    /// Advance the grid by `generations` steps.
    ///
    /// Only the changes of the final step remain in [`Engine::dirty_cells`].
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance_generation();
        }
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.dirty.clear();
        self.generation = 0;
        log::debug!("Cleared {}x{} engine", self.rows(), self.cols());
    }

    /// Rebuild the grid at a new size, discarding all existing cells.
    ///
    /// On error the engine is left untouched.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), EngineError> {
        validate_dimensions(rows, cols)?;
        log::debug!(
            "Resizing engine {}x{} -> {}x{}",
            self.rows(),
            self.cols(),
            rows,
            cols
        );

        self.grid = Grid::new(rows, cols);
        self.next = Grid::new(rows, cols);
        self.dirty = Vec::new();
        self.generation = 0;
        Ok(())
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> EngineError {
        EngineError::OutOfBounds {
            row,
            col,
            rows: self.rows(),
            cols: self.cols(),
        }
    }
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<(), EngineError> {
    if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
        return Err(EngineError::InvalidDimensions { rows, cols });
    }
    Ok(())
}
