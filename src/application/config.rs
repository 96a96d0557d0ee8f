use crate::domain::Stepping;

/// Startup settings for the simulator.
/// Fixed for the lifetime of a run; the board is never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Cells per side
    pub board_size: usize,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Upper bound on generation advances per second
    pub generations_per_second: f32,
    pub stepping: Stepping,
    pub start_paused: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board_size: 50,
            screen_width: 720,
            screen_height: 720,
            generations_per_second: 20.0,
            stepping: Stepping::Serial,
            start_paused: false,
        }
    }
}

impl SimConfig {
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_rate(mut self, generations_per_second: f32) -> Self {
        self.generations_per_second = generations_per_second;
        self
    }

    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }

    pub fn with_start_paused(mut self, start_paused: bool) -> Self {
        self.start_paused = start_paused;
        self
    }

    /// Side length of one tile in pixels: the screen area shared evenly by N² tiles
    pub fn tile_size(&self) -> f32 {
        let area = self.screen_width as f32 * self.screen_height as f32;
        (area / (self.board_size * self.board_size) as f32).sqrt()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::InvalidScreenSize {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.generations_per_second.is_finite() && self.generations_per_second > 0.0) {
            return Err(ConfigError::InvalidRate(self.generations_per_second));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Board size must be non-zero")]
    ZeroBoardSize,
    #[error("Screen size {width}x{height} must be non-zero")]
    InvalidScreenSize { width: u32, height: u32 },
    #[error("Generation rate must be positive, got {0}")]
    InvalidRate(f32),
}
