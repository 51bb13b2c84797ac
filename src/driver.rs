//! Headless simulation driver.
//!
//! Owns an [`Engine`] and sequences calls to it the way an interactive front
//! end would: start, pause, single-step and stop commands, a configurable
//! delay between generations, and a cancellation flag that can be raised from
//! another thread. Cancellation only prevents the next scheduled step; every
//! step already in progress runs to completion.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::compute::{Engine, EngineError};
use crate::schema::{Pattern, Seed, SeedError, SimulationConfig};

/// Driver run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Not running; editing and reseeding expected.
    Idle,
    /// Generations advance on every tick.
    Running,
    /// Suspended; can resume or single-step.
    Paused,
}

/// Shared flag used to stop a running generation loop.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Request that the loop stop before its next step.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

/// Start/pause/step/stop state machine around an [`Engine`].
pub struct Driver {
    engine: Engine,
    state: DriverState,
    delay: Duration,
    cancel: CancelHandle,
}

impl Driver {
    /// Create an idle driver.
    pub fn new(engine: Engine, delay: Duration) -> Self {
        Self {
            engine,
            state: DriverState::Idle,
            delay,
            cancel: CancelHandle::default(),
        }
    }

    /// Create an idle driver with an empty grid sized from configuration.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, EngineError> {
        let engine = Engine::new(config.grid.rows, config.grid.cols)?;
        Ok(Self::new(engine, Duration::from_millis(config.driver.delay_ms)))
    }

    /// Current run state.
    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The driven engine.
    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Mutable access to the engine for editing between steps.
    #[inline]
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Delay between generations.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay between generations; takes effect on the next step.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Handle for stopping [`Driver::run`] from elsewhere.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    fn transition(&mut self, to: DriverState) {
        log::debug!("Driver {:?} -> {:?}", self.state, to);
        self.state = to;
    }

    /// Begin or resume running.
    pub fn start(&mut self) {
        match self.state {
            DriverState::Idle | DriverState::Paused => {
                self.cancel.reset();
                self.transition(DriverState::Running);
            }
            DriverState::Running => log::debug!("Driver already running"),
        }
    }

    /// Suspend a running simulation.
    pub fn pause(&mut self) {
        match self.state {
            DriverState::Running => self.transition(DriverState::Paused),
            state => log::debug!("Ignoring pause while {:?}", state),
        }
    }

    /// Stop and cancel any running loop.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        if self.state != DriverState::Idle {
            self.transition(DriverState::Idle);
        }
    }

    /// Advance exactly one generation, pausing first if running.
    pub fn step(&mut self) -> &[(usize, usize)] {
        if self.state == DriverState::Running {
            self.transition(DriverState::Paused);
        }
        self.engine.advance_generation();
        self.engine.dirty_cells()
    }

    /// Advance one generation if running, returning the cells to redraw.
    pub fn tick(&mut self) -> Option<&[(usize, usize)]> {
        if self.cancel.is_cancelled() && self.state == DriverState::Running {
            self.transition(DriverState::Idle);
        }
        if self.state != DriverState::Running {
            return None;
        }
        self.engine.advance_generation();
        Some(self.engine.dirty_cells())
    }

    /// Run the generation loop on the calling thread.
    ///
    /// Returns immediately when `max_generations` is `Some(0)`. Otherwise
    /// starts the driver if needed, then ticks until it stops running, the
    /// cancel handle fires, or `max_generations` steps have been taken.
    /// `on_generation` sees the engine after each step and may pause or stop
    /// the driver. Returns the number of generations advanced.
    pub fn run<F>(&mut self, max_generations: Option<u64>, mut on_generation: F) -> u64
    where
        F: FnMut(&mut Driver),
    {
        if max_generations == Some(0) {
            return 0;
        }
        self.start();
        let mut advanced = 0u64;

        while max_generations.is_none_or(|max| advanced < max) {
            if self.tick().is_none() {
                break;
            }
            advanced += 1;
            on_generation(self);

            if self.state != DriverState::Running || self.cancel.is_cancelled() {
                break;
            }
            if !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
        }

        log::debug!(
            "Driver loop ended after {} generations ({:?})",
            advanced,
            self.state
        );
        advanced
    }

    /// Flip a cell.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, EngineError> {
        self.engine.toggle(row, col)
    }

    /// Stop and kill every cell.
    pub fn clear(&mut self) {
        self.stop();
        self.engine.clear();
    }

    /// Stop and rebuild the grid at a new size.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), EngineError> {
        self.stop();
        self.engine.resize(rows, cols)
    }

    /// Stop, clear and refill the grid at random.
    pub fn randomize(&mut self, density: f64, seed: Option<u64>) -> Result<usize, SeedError> {
        self.clear();
        Seed {
            pattern: Pattern::Random { density, seed },
        }
        .apply(&mut self.engine)
    }
}
