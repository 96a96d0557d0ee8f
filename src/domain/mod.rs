mod cell;
mod engine;
mod error;
mod grid;
mod patterns;
mod stepping;
pub mod seeder;

pub use cell::Cell;
pub use engine::LifeEngine;
pub use error::SeedError;
pub use grid::Grid;
pub use patterns::{Pattern, PatternCatalog};
pub use seeder::{Placement, seed, seed_pattern};
pub use stepping::Stepping;
