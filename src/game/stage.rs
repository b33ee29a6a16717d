//! Stages and Platforms
//!
//! Static arena geometry. Each game mode maps to a fixed platform
//! layout; the ground platform is appended unconditionally so every
//! stage has a floor. Platforms are immutable for the match duration.

use serde::{Deserialize, Serialize};

use crate::core::rect::Rect;
use crate::{ARENA_WIDTH, GROUND_Y};

/// Height of every floating platform in pixels.
pub const PLATFORM_HEIGHT: f32 = 20.0;

/// Default platform color tag. Purely cosmetic; the renderer is free
/// to ignore it.
pub const PLATFORM_COLOR: &str = "#00ff41";

/// One static platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
    /// Visual-only color tag
    pub color: String,
}

impl Platform {
    /// Create a platform with the default color tag.
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            x,
            y,
            width,
            height: PLATFORM_HEIGHT,
            color: PLATFORM_COLOR.to_string(),
        }
    }

    /// The platform's bounding rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Match mode. Selects the platform layout and the end condition
/// (only [`GameMode::TimeAttack`] is timed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Traditional 1v1
    #[default]
    Classic,
    /// Wider layout with a high perch
    Survival,
    /// Timed; higher health wins at the bell
    TimeAttack,
    /// Symmetric bracket stage
    Tournament,
    /// Classic layout, relaxed stakes
    Practice,
}

impl GameMode {
    /// Time limit in seconds, for modes that have one.
    pub fn time_limit(&self) -> Option<f32> {
        match self {
            GameMode::TimeAttack => Some(120.0),
            _ => None,
        }
    }

    /// Stage display name.
    pub fn stage_name(&self) -> &'static str {
        match self {
            GameMode::Classic => "CYBER ARENA",
            GameMode::Survival => "NEON BATTLEGROUND",
            GameMode::TimeAttack => "SPEED ZONE",
            GameMode::Tournament => "CHAMPIONSHIP STAGE",
            GameMode::Practice => "TRAINING GROUNDS",
        }
    }

    /// Build this mode's platform list, ground included.
    pub fn layout(&self) -> Vec<Platform> {
        let mut platforms = match self {
            GameMode::Classic | GameMode::Practice => vec![
                Platform::new(ARENA_WIDTH * 0.2, GROUND_Y - 150.0, 200.0),
                Platform::new(ARENA_WIDTH * 0.6, GROUND_Y - 150.0, 200.0),
                Platform::new(ARENA_WIDTH * 0.4, GROUND_Y - 250.0, 150.0),
            ],
            GameMode::Survival => vec![
                Platform::new(ARENA_WIDTH * 0.1, GROUND_Y - 100.0, 150.0),
                Platform::new(ARENA_WIDTH * 0.35, GROUND_Y - 200.0, 300.0),
                Platform::new(ARENA_WIDTH * 0.75, GROUND_Y - 100.0, 150.0),
                Platform::new(ARENA_WIDTH * 0.45, GROUND_Y - 350.0, 100.0),
            ],
            GameMode::TimeAttack => vec![
                Platform::new(ARENA_WIDTH * 0.25, GROUND_Y - 120.0, 180.0),
                Platform::new(ARENA_WIDTH * 0.55, GROUND_Y - 120.0, 180.0),
            ],
            GameMode::Tournament => vec![
                Platform::new(ARENA_WIDTH * 0.15, GROUND_Y - 180.0, 160.0),
                Platform::new(ARENA_WIDTH * 0.65, GROUND_Y - 180.0, 160.0),
                Platform::new(ARENA_WIDTH * 0.4, GROUND_Y - 300.0, 200.0),
            ],
        };

        // The ground spans the whole arena, always
        platforms.push(Platform::new(0.0, GROUND_Y, ARENA_WIDTH));
        platforms
    }
}
