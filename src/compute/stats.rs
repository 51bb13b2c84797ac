//! Per-generation statistics for monitoring.

use serde::{Deserialize, Serialize};

use super::Engine;

/// Snapshot of an engine after its most recent step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub rows: usize,
    pub cols: usize,
    /// Live cells.
    pub population: usize,
    /// Cells changed by the most recent step.
    pub changed: usize,
}

impl GenerationStats {
    /// Compute statistics from engine state.
    pub fn from_engine(engine: &Engine) -> Self {
        Self {
            generation: engine.generation(),
            rows: engine.rows(),
            cols: engine.cols(),
            population: engine.population(),
            changed: engine.dirty_cells().len(),
        }
    }

    /// Fraction of the grid that is alive.
    pub fn density(&self) -> f64 {
        self.population as f64 / (self.rows * self.cols) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_track_blinker() {
        let mut engine = Engine::new(10, 10).unwrap();
        for col in 4..=6 {
            engine.set(5, col, true).unwrap();
        }
        engine.advance_generation();

        let stats = GenerationStats::from_engine(&engine);
        assert_eq!(
            stats,
            GenerationStats {
                generation: 1,
                rows: 10,
                cols: 10,
                population: 3,
                changed: 4,
            }
        );
        assert!((stats.density() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let stats = GenerationStats::from_engine(&Engine::new(2, 3).unwrap());
        let json = serde_json::to_string(&stats).unwrap();
        let parsed: GenerationStats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stats);
    }
}
