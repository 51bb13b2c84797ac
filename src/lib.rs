//! Game of Life - Conway's cellular automaton on a bounded grid.
//!
//! This crate provides a Game of Life engine that advances a fixed-size
//! boolean grid one generation at a time under the B3/S23 rule and reports
//! exactly which cells changed, so front ends only redraw what moved.
//!
//! # Architecture
//!
//! - `compute`: Grid storage, the transition rule and the [`Engine`]
//! - `schema`: Configuration and seeding types
//! - `driver`: Headless start/pause/step/stop state machine around an engine
//!
//! The grid has hard edges: cells beyond the border are never read, so edge
//! and corner cells have fewer than eight neighbors.
//!
//! # Example
//!
//! ```rust
//! use game_of_life::{
//!     compute::Engine,
//!     schema::{Pattern, Seed, Shape},
//! };
//!
//! let mut engine = Engine::new(10, 10).unwrap();
//! let seed = Seed {
//!     pattern: Pattern::Shape {
//!         shape: Shape::Blinker,
//!         origin: (5, 4),
//!     },
//! };
//! seed.apply(&mut engine).unwrap();
//!
//! engine.advance_generation();
//! for &(row, col) in engine.dirty_cells() {
//!     println!("redraw ({}, {}) -> {:?}", row, col, engine.get(row, col));
//! }
//! ```

pub mod compute;
pub mod driver;
pub mod schema;

// Re-export commonly used types
pub use compute::{Engine, EngineError, GenerationStats, Grid};
pub use driver::{CancelHandle, Driver, DriverState};
pub use schema::{Pattern, Seed, Shape, SimulationConfig};
