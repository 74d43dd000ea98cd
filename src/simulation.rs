use crate::{initialize_with, Engine, Grid, Result, SequentialEngine, SimulationConfig};

/// One run of the automaton: the current generation plus a scratch buffer
/// that the next generation is written into before the two are swapped.
pub struct Simulation<E: Engine = SequentialEngine> {
    curr: Grid,
    next: Grid,
    generation: u64,
    engine: E,
}

impl Simulation<SequentialEngine> {
    /// Creates the starting grid described by `config`.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        Self::with_engine(config, SequentialEngine)
    }

    /// Starts from an existing grid.
    pub fn from_grid(grid: Grid) -> Self {
        Self::from_grid_with_engine(grid, SequentialEngine)
    }
}

impl<E: Engine> Simulation<E> {
    /// Same as [`Simulation::new`], stepping with `engine`.
    pub fn with_engine(config: &SimulationConfig, engine: E) -> Result<Self> {
        Ok(Self::from_grid_with_engine(initialize_with(config)?, engine))
    }

    /// Same as [`Simulation::from_grid`], stepping with `engine`.
    pub fn from_grid_with_engine(grid: Grid, engine: E) -> Self {
        Self {
            next: grid.clone(),
            curr: grid,
            generation: 0,
            engine,
        }
    }

    /// Advances by one generation.
    pub fn step(&mut self) -> &Grid {
        self.engine.step_into(&self.curr, &mut self.next);
        std::mem::swap(&mut self.curr, &mut self.next);
        self.generation += 1;
        log::trace!(
            "generation {}: population {}",
            self.generation,
            self.curr.population()
        );
        &self.curr
    }

    /// Advances by `generations`.
    pub fn run(&mut self, generations: u64) -> &Grid {
        for _ in 0..generations {
            self.step();
        }
        &self.curr
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid {
        &self.curr
    }

    /// Number of generations computed since the start.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Alive cells in the current generation.
    pub fn population(&self) -> usize {
        self.curr.population()
    }

    /// Consumes the run, returning the current generation.
    pub fn into_grid(self) -> Grid {
        self.curr
    }
}
