use super::{Cell, Grid, Pattern, PatternCatalog, SeedError};

/// Outcome of a placement that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Placement {
    /// Every offset cell was set alive
    Placed,
    /// Some offset ran past the far edge; nothing was written
    OutOfBounds,
}

/// Look up `name` in the catalog and place it with its top-left corner at (x, y).
pub fn seed(grid: &mut Grid, name: &str, x: i32, y: i32) -> Result<Placement, SeedError> {
    let pattern = PatternCatalog::lookup(name)?;
    seed_pattern(grid, pattern, x, y)
}

/// Place an already-resolved pattern.
///
/// Negative anchors are rejected with [`SeedError::InvalidAnchor`]; they are
/// never wrapped. If any cell would land at or beyond the grid size the whole
/// pattern is skipped. Live cells already on the grid are left alone.
pub fn seed_pattern(grid: &mut Grid, pattern: &Pattern, x: i32, y: i32) -> Result<Placement, SeedError> {
    let (Ok(ax), Ok(ay)) = (usize::try_from(x), usize::try_from(y)) else {
        return Err(SeedError::InvalidAnchor { x, y });
    };

    let size = grid.size();
    // Bounding box reaches the furthest offset on each axis
    let fits = ax + pattern.width() <= size && ay + pattern.height() <= size;

    if !fits {
        log::debug!(
            "Skipping {} at ({}, {}): does not fit on a {}x{} grid",
            pattern.name, x, y, size, size
        );
        return Ok(Placement::OutOfBounds);
    }

    for &(dx, dy) in pattern.cells {
        grid.set(ax + dx, ay + dy, Cell::Alive);
    }
    Ok(Placement::Placed)
}
