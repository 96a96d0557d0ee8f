/// Cell represents one position on the board.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Next state under B3/S23:
    /// 1. Live cell with fewer than 2 neighbors dies
    /// 2. Live cell with more than 3 neighbors dies
    /// 3. Dead cell with exactly 3 neighbors is born
    /// 4. Anything else keeps its current state
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 0 | 1) => Cell::Dead,
            (Cell::Alive, 4..) => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (current, _) => current,
        }
    }
}
