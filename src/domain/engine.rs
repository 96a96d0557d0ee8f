use super::{Cell, Grid, Placement, SeedError, Stepping, seeder};

/// LifeEngine owns one board and its generation counter.
/// Every advance swaps in a freshly computed grid, so readers between
/// advances always see a complete generation.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    grid: Grid,
    generation: u64,
    stepping: Stepping,
}

impl LifeEngine {
    /// Create an engine over an all-dead `size`×`size` grid at generation 0
    pub fn new(size: usize) -> Self {
        Self::from_grid(Grid::new(size))
    }

    /// Start from an existing board, generation 0
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            stepping: Stepping::default(),
        }
    }

    /// Select the stepping strategy (builder pattern)
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }

    pub fn stepping(&self) -> Stepping {
        self.stepping
    }

    /// Place a catalog pattern on the board
    pub fn seed(&mut self, name: &str, x: i32, y: i32) -> Result<Placement, SeedError> {
        seeder::seed(&mut self.grid, name, x, y)
    }

    /// Compute the next generation and bump the counter by one
    pub fn advance(&mut self) -> &Grid {
        self.grid = match self.stepping {
            Stepping::Serial => self.grid.next_generation(),
            Stepping::Parallel => self.grid.next_generation_parallel(),
        };
        self.generation += 1;
        &self.grid
    }

    /// Advance only when the host says so; returns whether a step happened
    pub fn advance_if(&mut self, should_advance: bool) -> bool {
        if should_advance {
            self.advance();
        }
        should_advance
    }

    /// Generations completed since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_state(&self, x: usize, y: usize) -> Cell {
        self.grid.cell_state(x, y)
    }

    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.grid.live_neighbors(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(size: usize, name: &str, x: i32, y: i32) -> LifeEngine {
        let mut engine = LifeEngine::new(size);
        assert_eq!(engine.seed(name, x, y), Ok(Placement::Placed));
        engine
    }

    /// Live cells shifted by (dx, dy) with toroidal wrap, sorted row-major
    fn translated(cells: &[(usize, usize)], dx: usize, dy: usize, n: usize) -> Vec<(usize, usize)> {
        let mut moved: Vec<_> = cells
            .iter()
            .map(|&(x, y)| ((x + dx) % n, (y + dy) % n))
            .collect();
        moved.sort_by_key(|&(x, y)| (y, x));
        moved
    }

    #[test]
    fn test_still_lifes_are_stable() {
        for name in ["block", "beehive", "loaf"] {
            let mut engine = seeded(12, name, 4, 4);
            let before = engine.grid().clone();
            assert_eq!(engine.advance(), &before, "{name}");
        }
    }

    #[test]
    fn test_oscillators_have_period_two() {
        for name in ["blinker", "toad", "beacon"] {
            let mut engine = seeded(12, name, 4, 4);
            let start = engine.grid().clone();

            engine.advance();
            assert_ne!(engine.grid(), &start, "{name} should change after one step");
            engine.advance();
            assert_eq!(engine.grid(), &start, "{name}");
        }
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let mut engine = seeded(16, "glider", 3, 3);
        let start = engine.grid().live_cells();

        for _ in 0..4 {
            engine.advance();
        }
        assert_eq!(engine.grid().live_cells(), translated(&start, 1, 1, 16));
    }

    #[test]
    fn test_glider_wraps_around_edges() {
        let n = 8;
        let mut engine = seeded(n, "glider", 5, 5);
        let start = engine.grid().live_cells();

        for _ in 0..4 {
            engine.advance();
        }
        let after_one = translated(&start, 1, 1, n);
        assert_eq!(engine.grid().live_cells(), after_one);
        assert!(after_one.iter().any(|&(x, y)| x == 0 || y == 0));

        // A full lap of the torus returns the glider home
        for _ in 0..(4 * (n - 1)) {
            engine.advance();
        }
        assert_eq!(engine.grid().live_cells(), start);
    }

    #[test]
    fn test_generation_counts_every_advance() {
        let mut engine = LifeEngine::new(5);
        assert_eq!(engine.generation(), 0);

        // Empty grid: nothing changes but the counter still moves
        for k in 1..=7 {
            engine.advance();
            assert_eq!(engine.generation(), k);
        }
        assert_eq!(engine.grid().population(), 0);

        let mut busy = seeded(10, "glider", 1, 1);
        busy.advance();
        let before = busy.generation();
        for _ in 0..5 {
            busy.advance();
        }
        assert_eq!(busy.generation(), before + 5);
    }

    #[test]
    fn test_advance_if_respects_pause() {
        let mut engine = seeded(8, "blinker", 2, 2);
        let start = engine.grid().clone();

        assert!(!engine.advance_if(false));
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.grid(), &start);

        assert!(engine.advance_if(true));
        assert_eq!(engine.generation(), 1);
        assert_ne!(engine.grid(), &start);
    }

    #[test]
    fn test_parallel_stepping_matches_serial() {
        let mut serial = LifeEngine::new(20);
        for (name, x, y) in [("glider", 1, 1), ("toad", 10, 3), ("loaf", 5, 12), ("beacon", 14, 14)] {
            assert_eq!(serial.seed(name, x, y), Ok(Placement::Placed));
        }
        let mut parallel = serial.clone().with_stepping(Stepping::Parallel);

        for _ in 0..12 {
            assert_eq!(serial.advance(), parallel.advance());
        }
        assert_eq!(serial.generation(), parallel.generation());
    }

    #[test]
    fn test_zero_size_engine_counts_without_panicking() {
        let mut engine = LifeEngine::new(0);
        engine.advance();
        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_stepping_builder() {
        assert_eq!(LifeEngine::new(4).stepping(), Stepping::Serial);
        let engine = LifeEngine::new(4).with_stepping(Stepping::Parallel);
        assert_eq!(engine.stepping(), Stepping::Parallel);
    }

    #[test]
    fn test_cell_state_reads_grid() {
        let engine = seeded(6, "block", 1, 1);
        assert_eq!(engine.cell_state(1, 1), Cell::Alive);
        assert_eq!(engine.cell_state(0, 0), Cell::Dead);
        assert_eq!(engine.live_neighbors(0, 0), 1);
    }
}
