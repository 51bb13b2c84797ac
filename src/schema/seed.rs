//! Seed types for initializing Game of Life grids.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::compute::{Engine, EngineError};

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random {
                density: 0.3,
                seed: None,
            },
        }
    }
}

/// Initial patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Leave the grid untouched.
    Empty,
    /// Uniform random fill.
    Random {
        /// Probability (0.0-1.0) that a cell is set alive.
        density: f64,
        /// Random seed (None = entropy).
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Explicit list of live (row, col) cells.
    Cells { cells: Vec<(usize, usize)> },
    /// A well-known shape anchored at its top-left corner.
    Shape {
        shape: Shape,
        /// Top-left (row, col) of the shape's bounding box.
        origin: (usize, usize),
    },
}

/// Well-known small patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// 2x2 still life.
    Block,
    /// Period-2 oscillator, horizontal phase.
    Blinker,
    /// Period-2 oscillator.
    Toad,
    /// Period-2 oscillator.
    Beacon,
    /// Period-4 spaceship heading down-right.
    Glider,
}

impl Shape {
    /// Live cells relative to the shape's top-left corner.
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Shape::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Shape::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Shape::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
            Shape::Beacon => &[
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (2, 2),
                (2, 3),
                (3, 2),
                (3, 3),
            ],
            Shape::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        }
    }
}

/// Seeding errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Density must be within [0, 1] (got {0})")]
    InvalidDensity(f64),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl Seed {
    /// Set the seed's cells alive on top of the engine's current grid.
    ///
    /// Cells outside the grid are skipped. Returns the number of cells set.
    pub fn apply(&self, engine: &mut Engine) -> Result<usize, SeedError> {
        match &self.pattern {
            Pattern::Empty => Ok(0),
            Pattern::Random { density, seed } => apply_random(engine, *density, *seed),
            Pattern::Cells { cells } => Ok(apply_cells(engine, cells.iter().copied())),
            Pattern::Shape { shape, origin } => {
                let (r0, c0) = *origin;
                let cells = shape
                    .cells()
                    .iter()
                    .filter_map(|&(r, c)| Some((r0.checked_add(r)?, c0.checked_add(c)?)));
                Ok(apply_cells(engine, cells))
            }
        }
    }
}

fn apply_random(
    engine: &mut Engine,
    density: f64,
    seed: Option<u64>,
) -> Result<usize, SeedError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(SeedError::InvalidDensity(density));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut set = 0;
    for row in 0..engine.rows() {
        for col in 0..engine.cols() {
            if rng.gen_bool(density) {
                engine.set(row, col, true)?;
                set += 1;
            }
        }
    }
    Ok(set)
}

fn apply_cells(engine: &mut Engine, cells: impl Iterator<Item = (usize, usize)>) -> usize {
    let mut set = 0;
    for (row, col) in cells {
        match engine.set(row, col, true) {
            Ok(()) => set += 1,
            Err(err) => log::warn!("Skipping seed cell: {}", err),
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_seed(shape: Shape, origin: (usize, usize)) -> Seed {
        Seed {
            pattern: Pattern::Shape { shape, origin },
        }
    }

    #[test]
    fn test_empty_sets_nothing() {
        let mut engine = Engine::new(5, 5).unwrap();
        let seed = Seed {
            pattern: Pattern::Empty,
        };
        assert_eq!(seed.apply(&mut engine).unwrap(), 0);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_random_is_reproducible() {
        let seed = Seed {
            pattern: Pattern::Random {
                density: 0.4,
                seed: Some(42),
            },
        };
        let mut a = Engine::new(32, 32).unwrap();
        let mut b = Engine::new(32, 32).unwrap();

        let set = seed.apply(&mut a).unwrap();
        seed.apply(&mut b).unwrap();

        assert_eq!(a.grid(), b.grid());
        assert_eq!(set, a.population());
        assert!(set > 0 && set < 32 * 32);
    }

    #[test]
    fn test_random_density_bounds() {
        let mut engine = Engine::new(8, 8).unwrap();

        let full = Pattern::Random {
            density: 1.0,
            seed: Some(1),
        };
        assert_eq!(Seed { pattern: full }.apply(&mut engine).unwrap(), 64);

        let bad = Pattern::Random {
            density: 1.5,
            seed: Some(1),
        };
        assert!(matches!(
            Seed { pattern: bad }.apply(&mut engine),
            Err(SeedError::InvalidDensity(_))
        ));

        let nan = Pattern::Random {
            density: f64::NAN,
            seed: None,
        };
        assert!(Seed { pattern: nan }.apply(&mut engine).is_err());
    }

    #[test]
    fn test_cells_skip_out_of_range() {
        let mut engine = Engine::new(4, 4).unwrap();
        let seed = Seed {
            pattern: Pattern::Cells {
                cells: vec![(0, 0), (3, 3), (4, 0), (0, 9)],
            },
        };
        assert_eq!(seed.apply(&mut engine).unwrap(), 2);
        assert_eq!(engine.live_cells().collect::<Vec<_>>(), vec![(0, 0), (3, 3)]);
    }

    #[test]
    fn test_shape_block_is_still() {
        let mut engine = Engine::new(6, 6).unwrap();
        shape_seed(Shape::Block, (2, 2)).apply(&mut engine).unwrap();
        engine.advance_generation();
        assert_eq!(engine.population(), 4);
        assert!(engine.dirty_cells().is_empty());
    }

    #[test]
    fn test_period_two_shapes() {
        for shape in [Shape::Blinker, Shape::Toad, Shape::Beacon] {
            let mut engine = Engine::new(12, 12).unwrap();
            shape_seed(shape, (4, 4)).apply(&mut engine).unwrap();
            let start = engine.grid().clone();

            engine.advance_generation();
            assert_ne!(engine.grid(), &start, "{:?} should change", shape);
            engine.advance_generation();
            assert_eq!(engine.grid(), &start, "{:?} should return", shape);
        }
    }

    #[test]
    fn test_shape_clipped_at_edge() {
        let mut engine = Engine::new(5, 5).unwrap();
        let set = shape_seed(Shape::Glider, (3, 3)).apply(&mut engine).unwrap();
        // Only the top cell (3, 4) fits.
        assert_eq!(set, 1);
        assert_eq!(engine.live_cells().collect::<Vec<_>>(), vec![(3, 4)]);
    }

    #[test]
    fn test_serialization() {
        let seed = shape_seed(Shape::Glider, (1, 2));
        let json = serde_json::to_string(&seed).unwrap();
        assert!(json.contains(r#""type":"Shape""#));
        let parsed: Seed = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, seed);

        let random: Seed =
            serde_json::from_str(r#"{"pattern": {"type": "Random", "density": 0.2}}"#).unwrap();
        assert_eq!(
            random.pattern,
            Pattern::Random {
                density: 0.2,
                seed: None
            }
        );
    }
}
