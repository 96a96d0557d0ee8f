use super::Cell;
use rayon::prelude::*;

/// Moore neighborhood offsets, (dx, dy), excluding the cell itself.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid is the square N×N board.
/// Edges wrap toroidally and the side length is fixed at construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Cells per side
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.size && y < self.size)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Read accessor for rendering. Out-of-range positions read as dead.
    pub fn cell_state(&self, x: usize, y: usize) -> Cell {
        self.get(x, y).unwrap_or_default()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell_state(x, y).is_alive()
    }

    /// Set cell at position; ignored outside the board
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.size && y < self.size {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    /// Always in `0..=8`.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        if self.size == 0 {
            return 0;
        }
        let n = self.size as i64;

        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| {
                // rem_euclid keeps x = 0, dx = -1 on the far edge
                let nx = (x as i64 + dx).rem_euclid(n) as usize;
                let ny = (y as i64 + dy).rem_euclid(n) as usize;
                self.cells[self.get_index(nx, ny)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Next state of a single cell, read from this (previous) generation
    fn next_cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.get_index(x, y)].evolve(self.live_neighbors(x, y))
    }

    /// Pure functional evolution - returns new grid (serial).
    /// Neighbor counts only ever see `self`, never the buffer being written.
    pub fn next_generation(&self) -> Self {
        let cells = (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| (x, y)))
            .map(|(x, y)| self.next_cell(x, y))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Same step as [`Grid::next_generation`], rows split across rayon workers
    pub fn next_generation_parallel(&self) -> Self {
        let mut cells = vec![Cell::Dead; self.cells.len()];
        if self.size > 0 {
            cells
                .par_chunks_mut(self.size)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = self.next_cell(x, y);
                    }
                });
        }

        Self {
            size: self.size,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.size)
            .flat_map(move |y| (0..self.size).map(move |x| (x, y)))
            .map(move |(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }

    /// Positions of every live cell, row-major
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}
