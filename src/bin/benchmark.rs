//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;
use species_life::{LifeEngine, Placement, Stepping};

/// Tile the board with gliders, one every 6 cells in both directions
fn glider_field(size: usize, stepping: Stepping) -> LifeEngine {
    let mut engine = LifeEngine::new(size).with_stepping(stepping);
    let mut placed = 0usize;

    for y in (0..size).step_by(6) {
        for x in (0..size).step_by(6) {
            match engine.seed("glider", x as i32, y as i32) {
                Ok(Placement::Placed) => placed += 1,
                Ok(Placement::OutOfBounds) => {}
                Err(err) => log::warn!("Seeding failed at ({}, {}): {}", x, y, err),
            }
        }
    }
    log::debug!("{}x{}: {} gliders", size, size, placed);
    engine
}

fn benchmark(size: usize, stepping: Stepping, iterations: u32) -> f64 {
    let mut engine = glider_field(size, stepping);

    let start = Instant::now();
    for _ in 0..iterations {
        engine.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();

    println!("=== Game of Life Stepping Benchmark ===\n");

    let sizes = [50, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, Stepping::Serial, iterations);
        let parallel_ms = benchmark(size, Stepping::Parallel, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    for stepping in Stepping::all() {
        println!("\n{}: {}", stepping.name(), stepping.description());
    }
}
