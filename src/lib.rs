#![warn(clippy::all)]

mod engine;
mod grid;
mod pattern;
mod simulation;
mod utils;

pub use engine::{
    initialize, initialize_with, neighbor_count, step, transition, Engine, ParallelEngine,
    SequentialEngine,
};
pub use grid::{Cell, Grid};
pub use pattern::Pattern;
pub use simulation::Simulation;
pub use utils::{Error, NiceInt, Result, SeedMode, SimulationConfig};

pub type DefaultEngine = SequentialEngine;

/// Smallest side length of a grid.
pub const MIN_SIZE: usize = 3;
