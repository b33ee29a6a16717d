//! Game Logic Module
//!
//! The whole simulation. Synchronous and single-threaded: the match
//! controller owns all mutable state and every tick runs to
//! completion.
//!
//! ## Module Structure
//!
//! - `archetype`: Character base-stat table
//! - `fighter`: Per-combatant mutable state
//! - `input`: Key capture, keybinds, per-tick input snapshots
//! - `emote`: Emote catalog and unlock-order resolution
//! - `stage`: Game modes and platform layouts
//! - `physics`: Per-fighter integration and collision
//! - `combat`: Hitboxes and hit resolution
//! - `ai`: Reactive computer opponent + difficulty presets
//! - `state`: Match state and phase machine
//! - `tick`: The per-frame driver
//! - `events`: Events surfaced to the presentation layer

pub mod ai;
pub mod archetype;
pub mod combat;
pub mod emote;
pub mod events;
pub mod fighter;
pub mod input;
pub mod physics;
pub mod stage;
pub mod state;
pub mod tick;

// Re-export key types
pub use ai::Difficulty;
pub use archetype::{Archetype, ArchetypeTable, SetupError};
pub use events::{EndReason, GameEvent, MatchOutcome};
pub use fighter::{Fighter, FighterSlot};
pub use input::{ActiveKeys, InputFrame, Keybinds};
pub use stage::{GameMode, Platform};
pub use state::{MatchPhase, MatchSettings, MatchState};
pub use tick::{TickInputs, TickResult};
