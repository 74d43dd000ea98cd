mod config;
mod error;
mod format_int;

pub use config::{SeedMode, SimulationConfig};
pub use error::{Error, Result};
pub use format_int::NiceInt;
