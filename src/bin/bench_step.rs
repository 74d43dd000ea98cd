use anyhow::{Context, Result};
use std::time::Instant;
use torus_life::{
    DefaultEngine, Engine, NiceInt, ParallelEngine, SeedMode, Simulation, SimulationConfig,
};

const SIZE: usize = 1 << 10;
const GENERATIONS: u64 = 100;
const SEED: u64 = 42;

fn bench<E: Engine>(name: &str, config: &SimulationConfig, engine: E) -> Result<usize> {
    let mut sim = Simulation::with_engine(config, engine)
        .with_context(|| format!("building {} simulation", name))?;

    let timer = Instant::now();
    sim.run(GENERATIONS);
    let elapsed = timer.elapsed();

    let cells_per_sec = (SIZE * SIZE) as f64 * GENERATIONS as f64 / elapsed.as_secs_f64();
    println!(
        "{}: {:?} on {} generations, {} cells/s, population {}",
        name,
        elapsed,
        GENERATIONS,
        NiceInt::from_f64(cells_per_sec),
        NiceInt::from_usize(sim.population()),
    );
    Ok(sim.population())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimulationConfig::new(SIZE, SeedMode::Random)?.with_seed(Some(SEED));
    log::info!("benchmarking {}x{} grid, seed {}", SIZE, SIZE, SEED);

    let sequential = bench("sequential", &config, DefaultEngine::default())?;
    let parallel = bench("parallel", &config, ParallelEngine)?;
    anyhow::ensure!(
        sequential == parallel,
        "engines disagree: {} vs {}",
        sequential,
        parallel
    );
    Ok(())
}
