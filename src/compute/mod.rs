//! Compute module - Grid storage, transition rule and the generation engine.

mod engine;
mod grid;
mod rule;
mod stats;

pub use engine::*;
pub use grid::*;
pub use rule::*;
pub use stats::*;
