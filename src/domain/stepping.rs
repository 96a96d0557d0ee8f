//! Stepping strategy for advancing the grid.
//!
//! Both strategies compute the same next generation from a read-only
//! snapshot; they only differ in how the rows are scheduled.

/// Available ways to compute one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stepping {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows split across the rayon thread pool, joined before returning
    Parallel,
}

impl Stepping {
    /// Get all available strategies
    pub fn all() -> Vec<Stepping> {
        vec![Stepping::Serial, Stepping::Parallel]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Stepping::Serial => "Serial",
            Stepping::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Stepping::Serial => "Cell enum array, single thread",
            Stepping::Parallel => "Cell enum array, rows on rayon pool",
        }
    }
}
