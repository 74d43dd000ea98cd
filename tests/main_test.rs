use torus_life::{
    initialize, step, Cell, Engine, Error, Grid, Pattern, SeedMode, SequentialEngine,
};

const SEED: u64 = 42;

#[test]
fn test_create_is_dead() {
    for n in 3..20 {
        let grid = Grid::new(n).unwrap();
        assert_eq!(grid.population(), 0);
        assert!((0..n).all(|i| (0..n).all(|j| grid.get(i, j) == Cell::Dead)));
    }
    assert_eq!(Grid::new(2), Err(Error::InvalidSize { size: 2 }));
}

#[test]
fn test_wraparound_periodicity() {
    let grid = Grid::random(23, Some(SEED)).unwrap();
    let n = grid.size();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(grid.get(i, j), grid.get(i + n, j + n));
            assert_eq!(grid.get(i, j), grid.cells()[i * n + j]);
        }
    }
}

#[test]
fn test_extinction_is_fixpoint() {
    let mut grid = Grid::new(32).unwrap();
    for _ in 0..10 {
        grid = step(&grid);
        assert!(grid.is_empty());
    }
}

#[test]
fn test_step_keeps_input() {
    let grid = Grid::random(64, Some(SEED)).unwrap();
    let snapshot = grid.clone();
    let next = step(&grid);
    assert_eq!(grid, snapshot);
    assert_ne!(next, snapshot);
}

#[test]
fn test_glider_period_four() {
    // N >= 8 keeps the glider away from its own wrapped copy
    let n = 10;
    let mut grid = initialize(SeedMode::Glider, n).unwrap();
    for _ in 0..4 {
        grid = step(&grid);
    }
    let mut expected = Grid::new(n).unwrap();
    expected.stamp(&Pattern::glider(), 2, 2).unwrap();
    assert_eq!(grid, expected);
}

#[test]
fn test_rle_glider_runs_like_builtin() {
    let pattern = Pattern::from_rle(b"#N Glider\nx = 3, y = 3, rule = B3/S23\n2bo$obo$b2o!").unwrap();
    let mut grid = Grid::new(12).unwrap();
    grid.stamp(&pattern, 1, 1).unwrap();
    assert_eq!(grid, initialize(SeedMode::Glider, 12).unwrap());
    assert_eq!(
        SequentialEngine.run(grid.clone(), 8),
        SequentialEngine.run(initialize(SeedMode::Glider, 12).unwrap(), 8)
    );
}

#[test]
fn test_randomize_fill_rate() {
    const N: usize = 1000;
    for seed in 0..5 {
        let grid = Grid::random(N, Some(seed)).unwrap();
        let rate = grid.population() as f64 / (N * N) as f64;
        // standard deviation is 0.0005 for a million cells
        assert!((rate - 0.5).abs() < 0.005, "seed={} rate={}", seed, rate);
    }

    let mut grid = Grid::new(N).unwrap();
    grid.randomize(None);
    let rate = grid.population() as f64 / (N * N) as f64;
    assert!((rate - 0.5).abs() < 0.005, "rate={}", rate);
}
