//! # Combo Brawl Simulation Core
//!
//! Headless two-fighter arena simulation: per-tick physics, platform
//! collision, melee/special combat with percentage-style knockback
//! scaling, a reactive AI opponent, and match win-condition
//! evaluation. Rendering, menus, the shop, and persistence are
//! presentation concerns that live in front ends built on top of this
//! crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    COMBO BRAWL CORE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Simulation primitives                     │
//! │  ├── vec2.rs     - 2D vector math                            │
//! │  ├── rect.rs     - AABB geometry                             │
//! │  └── rng.rs      - Seeded Xorshift128+ PRNG                  │
//! │                                                              │
//! │  game/           - Game logic                                │
//! │  ├── archetype.rs- Character base stats                      │
//! │  ├── fighter.rs  - Per-combatant state                       │
//! │  ├── input.rs    - Keybinds + per-tick input snapshots       │
//! │  ├── emote.rs    - Emote catalog                             │
//! │  ├── stage.rs    - Modes and platform layouts                │
//! │  ├── physics.rs  - Integration and collision                 │
//! │  ├── combat.rs   - Hitboxes and hit resolution               │
//! │  ├── ai.rs       - Reactive opponent + difficulty            │
//! │  ├── state.rs    - Match state machine                       │
//! │  ├── tick.rs     - The per-frame driver                      │
//! │  └── events.rs   - Events for the presentation layer         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tick model
//!
//! One simulation tick per rendered frame, no fixed-timestep
//! decoupling. Constants are tuned at 60 ticks/second and every
//! time-dependent quantity is scaled by `dt * 60`, so gameplay feel
//! survives variable frame rates; `dt` itself is clamped to bound
//! integration error on slow frames. Health is derived from
//! accumulated damage rather than stored, and both damage dealt and
//! knockback received scale with that accumulation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::rect::Rect;
pub use crate::core::rng::GameRng;
pub use crate::core::vec2::Vec2;
pub use game::{
    ArchetypeTable, Difficulty, EndReason, Fighter, FighterSlot, GameEvent, GameMode, InputFrame,
    MatchOutcome, MatchSettings, MatchState, SetupError, TickInputs, TickResult,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation reference rate (Hz). All tick-denominated constants
/// assume this rate; `dt * TICK_RATE` converts wall-clock deltas to
/// ticks.
pub const TICK_RATE: u32 = 60;

/// Arena width in pixels.
pub const ARENA_WIDTH: f32 = 1200.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f32 = 800.0;

/// Y coordinate of the ground surface.
pub const GROUND_Y: f32 = ARENA_HEIGHT - 100.0;

/// Maximum (and starting) health for every fighter.
pub const MAX_HEALTH: f32 = 100.0;
