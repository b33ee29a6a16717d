//! Game Events
//!
//! Events surfaced out of the simulation each tick, so the
//! presentation layer can drive sounds, particles, and the results
//! screen without poking at fighter internals. The terminal
//! `MatchEnded` event is produced exactly once per match.

use serde::{Deserialize, Serialize};

use crate::game::combat::AttackKind;
use crate::game::fighter::FighterSlot;

/// Why the match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A fighter's health reached zero
    Knockout,
    /// The timed mode's clock ran out
    TimeExpired,
}

/// Terminal result of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Winning character's display name; `None` is a draw
    pub winner: Option<String>,
    /// Why the match ended
    pub reason: EndReason,
}

impl MatchOutcome {
    /// Winner label for display: the character name, or "Draw".
    pub fn winner_label(&self) -> &str {
        self.winner.as_deref().unwrap_or("Draw")
    }
}

/// One simulation event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An attack connected
    FighterHit {
        /// Who swung
        attacker: FighterSlot,
        /// Who was struck
        victim: FighterSlot,
        /// Basic or special
        kind: AttackKind,
        /// Damage dealt after scaling
        damage: f32,
        /// Victim's derived health after the hit
        victim_health: f32,
    },

    /// A fighter displayed an emote
    EmoteShown {
        /// Who emoted
        slot: FighterSlot,
        /// The icon shown
        icon: String,
    },

    /// The match reached a terminal state
    MatchEnded {
        /// Final result
        outcome: MatchOutcome,
    },
}

impl GameEvent {
    /// Create a hit event.
    pub fn fighter_hit(
        attacker: FighterSlot,
        victim: FighterSlot,
        kind: AttackKind,
        damage: f32,
        victim_health: f32,
    ) -> Self {
        Self::FighterHit {
            attacker,
            victim,
            kind,
            damage,
            victim_health,
        }
    }

    /// Create an emote event.
    pub fn emote_shown(slot: FighterSlot, icon: &str) -> Self {
        Self::EmoteShown {
            slot,
            icon: icon.to_string(),
        }
    }

    /// Create a match-ended event.
    pub fn match_ended(outcome: MatchOutcome) -> Self {
        Self::MatchEnded { outcome }
    }
}
