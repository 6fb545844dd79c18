use std::fs;
use std::path::Path;
use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::snake::Position;

/// Fixed square play field centred on the origin.
///
/// Valid cells are `-half_extent..=half_extent` on both axes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PlayField {
    pub half_extent: i32,
}

impl PlayField {
    /// Returns true when `position` lies on the field.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        (-self.half_extent..=self.half_extent).contains(&position.x)
            && (-self.half_extent..=self.half_extent).contains(&position.y)
    }

    /// Number of cells along one side.
    #[must_use]
    pub fn side(self) -> u16 {
        u16::try_from(self.half_extent * 2 + 1).unwrap_or(0)
    }

    /// Iterates every cell, bottom row first.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let extent = self.half_extent;
        (-extent..=extent).flat_map(move |y| (-extent..=extent).map(move |x| Position { x, y }))
    }
}

/// The one and only play field: 29 × 29 cells.
pub const PLAY_FIELD: PlayField = PlayField { half_extent: 14 };

/// Where the head is placed on start and after every reset.
pub const ORIGIN: Position = Position { x: 0, y: 0 };

/// Base tick interval in milliseconds.
pub const DEFAULT_BASE_DELAY_MS: u64 = 100;

/// Tick interval floor in milliseconds.
pub const MIN_DELAY_MS: u64 = 50;

/// Pause after a loss before play resumes.
pub const DEFAULT_DEATH_PAUSE_MS: u64 = 2_000;

/// Message shown while the loss pause runs.
pub const LOSS_MESSAGE: &str = "You lost! Restarting...";

/// Hint shown while the snake waits for its first direction.
pub const START_HINT: &str = "Arrows / WASD to move";

/// Tunable gameplay timing and seeding, loadable from a JSON file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub base_delay_ms: u64,
    pub death_pause_ms: u64,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            death_pause_ms: DEFAULT_DEATH_PAUSE_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw)
    }

    /// Parses and validates config JSON.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(self) -> Result<(), ConfigError> {
        if self.base_delay_ms < MIN_DELAY_MS {
            return Err(ConfigError::DelayBelowFloor {
                value_ms: self.base_delay_ms,
                floor_ms: MIN_DELAY_MS,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn base_delay(self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    #[must_use]
    pub fn death_pause(self) -> Duration {
        Duration::from_millis(self.death_pause_ms)
    }
}

/// Colours for everything that is not food.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub banner_fg: Color,
}

/// Black head on a pink field, like the classic turtle window.
pub const THEME: Theme = Theme {
    snake_head: Color::Black,
    snake_body: Color::DarkGray,
    play_bg: Color::Rgb(255, 192, 203),
    border_fg: Color::Rgb(219, 112, 147),
    border_bg: Color::Black,
    hud_score: Color::White,
    banner_fg: Color::Black,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Upper half-block glyph for compositing two grid rows into one terminal row.
pub const GLYPH_HALF_UPPER: &str = "▀";
