use crate::domain::{Grid, LifeEngine, SeedError};
use super::{Scene, SimConfig};

/// GameState orchestrates the simulation for the host loop.
/// It owns the engine and decides each frame whether to advance it.
pub struct GameState {
    pub engine: LifeEngine,
    pub is_running: bool,
    pub update_timer: f32,
    pub generations_per_second: f32,
}

impl GameState {
    /// Create game state over an empty board sized by `config`
    pub fn new(config: &SimConfig) -> Self {
        Self {
            engine: LifeEngine::new(config.board_size).with_stepping(config.stepping),
            is_running: !config.start_paused,
            update_timer: 0.0,
            generations_per_second: config.generations_per_second,
        }
    }

    /// Create game state and seed `scene` onto the board
    pub fn with_scene(config: &SimConfig, scene: &Scene) -> Result<Self, SeedError> {
        let mut state = Self::new(config);
        scene.apply(&mut state.engine)?;
        Ok(state)
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::info!(
            "{} at generation {}",
            if self.is_running { "Resumed" } else { "Paused" },
            self.engine.generation()
        );
        self
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    /// Update simulation by one frame.
    /// Advances at most once per frame, and only while running.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.generations_per_second;

        let due = self.update_timer >= update_interval;
        if self.engine.advance_if(due) {
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let config = SimConfig::default().with_board_size(10).with_rate(10.0);
        GameState::with_scene(&config, &Scene::new(vec![("blinker", 3, 3)])).unwrap()
    }

    #[test]
    fn test_paused_tick_does_not_advance() {
        let state = state().with_running(false).tick(1.0);
        assert_eq!(state.generation(), 0);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let state = state().tick(0.05);
        assert_eq!(state.generation(), 0);

        let state = state.tick(0.06);
        assert_eq!(state.generation(), 1);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_long_frame_advances_once() {
        let state = state().tick(5.0);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_toggle_running() {
        let state = state();
        assert!(state.is_running);
        let state = state.toggle_running();
        assert!(!state.is_running);
        assert!(state.toggle_running().is_running);
    }

    #[test]
    fn test_start_paused_config() {
        let config = SimConfig::default().with_start_paused(true);
        let state = GameState::new(&config);
        assert!(!state.is_running);
        assert_eq!(state.grid().size(), 50);
    }

    #[test]
    fn test_scene_errors_surface() {
        let config = SimConfig::default();
        let scene = Scene::new(vec![("dragon", 0, 0)]);
        assert!(matches!(
            GameState::with_scene(&config, &scene),
            Err(SeedError::UnknownPattern(_))
        ));
    }
}
