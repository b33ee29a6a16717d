//! Core simulation primitives.
//!
//! Small self-contained math and randomness types the game layer is
//! built on.

pub mod rect;
pub mod rng;
pub mod vec2;

// Re-export core types
pub use rect::Rect;
pub use rng::GameRng;
pub use vec2::Vec2;
