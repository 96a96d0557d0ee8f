use macroquad::prelude::*;
use crate::domain::Grid;
use crate::application::GameState;

/// Draw live cells as black tiles on a white background.
/// Reads the grid only; never advances it.
pub fn draw_grid(grid: &Grid, tile_size: f32) {
    clear_background(WHITE);

    for (x, y) in grid.live_cells() {
        draw_rectangle(
            x as f32 * tile_size,
            y as f32 * tile_size,
            tile_size,
            tile_size,
            BLACK,
        );
    }
}

/// Draw the generation counter and run state in the top-left corner
pub fn draw_overlay(state: &GameState) {
    let panel = Color::from_rgba(255, 255, 255, 200);
    draw_rectangle(4.0, 4.0, 190.0, 62.0, panel);

    let labels = [
        (format!("Generation: {}", state.generation()), 22.0, DARKGRAY),
        (format!("Population: {}", state.grid().population()), 40.0, DARKGRAY),
        (
            if state.is_running { "Running".to_owned() } else { "Paused (Space)".to_owned() },
            58.0,
            if state.is_running { DARKGREEN } else { ORANGE },
        ),
    ];

    labels.iter().for_each(|(text, y, color)| {
        draw_text(text, 10.0, *y, 18.0, *color);
    });
}
