// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Configuration and host-loop coordination
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeEngine, Pattern, PatternCatalog, Placement, SeedError, Stepping};
pub use application::{ConfigError, GameState, Scene, SimConfig};
