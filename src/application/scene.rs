use crate::domain::{LifeEngine, Placement, SeedError};

/// An ordered list of pattern placements composing the starting board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    placements: Vec<(&'static str, i32, i32)>,
}

impl Scene {
    pub fn new(placements: Vec<(&'static str, i32, i32)>) -> Self {
        Self { placements }
    }

    /// One of each still life, oscillator and the glider, spread over a 50x50 board
    pub fn classic() -> Self {
        Self::new(vec![
            ("glider", 2, 2),
            ("blinker", 15, 5),
            ("toad", 25, 8),
            ("beacon", 35, 12),
            ("loaf", 10, 20),
            ("beehive", 25, 30),
            ("block", 40, 40),
        ])
    }

    pub fn placements(&self) -> &[(&'static str, i32, i32)] {
        &self.placements
    }

    /// Seed every placement in order, stopping at the first error.
    /// Returns how many patterns actually landed on the board.
    pub fn apply(&self, engine: &mut LifeEngine) -> Result<usize, SeedError> {
        let mut placed = 0;
        for &(name, x, y) in &self.placements {
            match engine.seed(name, x, y)? {
                Placement::Placed => placed += 1,
                Placement::OutOfBounds => {
                    log::warn!("{} at ({}, {}) does not fit the board, skipped", name, x, y);
                }
            }
        }
        log::info!("Scene placed {}/{} patterns", placed, self.placements.len());
        Ok(placed)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::classic()
    }
}
