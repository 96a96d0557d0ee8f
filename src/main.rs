use macroquad::prelude::*;
use species_life::{
    GameState, Scene, SimConfig,
    input::{self, Control},
    rendering,
};

fn window_conf() -> Conf {
    let config = SimConfig::default();
    Conf {
        window_title: "Game of Life - Species".to_owned(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimConfig::default();
    if let Err(err) = config.validate() {
        log::error!("Invalid configuration: {}", err);
        return;
    }
    log::debug!("Starting with {:?}", config);

    let scene = Scene::classic();
    for (name, x, y) in scene.placements() {
        log::debug!("Placing {} at ({}, {})", name, x, y);
    }
    let mut state = match GameState::with_scene(&config, &scene) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Failed to seed starting scene: {}", err);
            return;
        }
    };
    let tile_size = config.tile_size();
    log::info!(
        "{}x{} board, {} stepping, {} live cells",
        config.board_size,
        config.board_size,
        state.engine.stepping().name(),
        state.grid().population()
    );

    loop {
        let (next, control) = input::process_keyboard_input(state);
        if control == Control::Quit {
            break;
        }

        // Render the current generation, then advance if running
        rendering::draw_grid(next.grid(), tile_size);
        rendering::draw_overlay(&next);
        state = next.tick(get_frame_time());

        next_frame().await;
    }
}
