/// Errors raised while placing a pattern on the grid.
///
/// Placement that would run off the positive edge is not an error; see
/// [`Placement::OutOfBounds`](super::Placement::OutOfBounds).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("Unknown pattern: {0:?}")]
    UnknownPattern(String),
    #[error("Anchor ({x}, {y}) is negative")]
    InvalidAnchor { x: i32, y: i32 },
}
