//! Transition rule for Conway's Game of Life.
//!
//! The rule is fixed at B3/S23: a dead cell with exactly three live neighbors
//! is born, a live cell with two or three live neighbors survives, and every
//! other cell is dead in the next generation.

/// Compute the next state of a cell from its current state and live neighbor count.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (_, 3))
}
