//! Match State
//!
//! The match controller's data: both fighters, the platform set, the
//! clock, and the phase machine (Setup -> Running -> Ended). All of it
//! is owned exclusively by the controller for the duration of a match
//! and mutated in a fixed order each tick.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::rng::GameRng;
use crate::game::ai::Difficulty;
use crate::game::archetype::{ArchetypeTable, SetupError};
use crate::game::emote::UnlockedEmotes;
use crate::game::events::{GameEvent, MatchOutcome};
use crate::game::fighter::{Fighter, FighterSlot};
use crate::game::stage::{GameMode, Platform};

/// Current phase of the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Constructed but not yet ticking
    #[default]
    Setup,
    /// Live; fighters update every tick
    Running,
    /// Terminal; an outcome has been produced and physics has stopped
    Ended,
}

/// Everything needed to construct a match.
///
/// Deserializable so a front end or a config file can describe a
/// match; every field has a sensible default.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Player 1's archetype key
    pub player1: String,
    /// Player 2's archetype key
    pub player2: String,
    /// Match mode (platform layout + end condition)
    pub mode: GameMode,
    /// AI difficulty, applied to player 2 when it is AI-controlled
    pub difficulty: Difficulty,
    /// Whether player 2 is the computer
    pub ai_opponent: bool,
    /// Seed for the AI's probability rolls
    pub seed: u64,
    /// Emote keys the local profile has unlocked
    pub unlocked_emotes: Vec<String>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            player1: "blaze".into(),
            player2: "verdant".into(),
            mode: GameMode::Classic,
            difficulty: Difficulty::Normal,
            ai_opponent: true,
            seed: 0,
            unlocked_emotes: Vec::new(),
        }
    }
}

/// Complete state of a match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Match identifier, for log/event correlation only
    pub match_id: Uuid,

    /// Current phase
    pub phase: MatchPhase,

    /// Match mode
    pub mode: GameMode,

    /// Stage display name
    pub stage_name: String,

    /// Both fighters; index 0 is player 1 and always updates first
    pub fighters: [Fighter; 2],

    /// Static stage geometry, ground included
    pub platforms: Vec<Platform>,

    /// Seconds elapsed since the match started running
    pub elapsed: f32,

    /// Time limit in seconds (timed mode only)
    pub time_limit: Option<f32>,

    /// Terminal result, set exactly once at the Running -> Ended
    /// transition
    pub outcome: Option<MatchOutcome>,

    /// Unlocked emotes available to human fighters
    pub emotes: UnlockedEmotes,

    /// AI probability roll generator
    #[serde(skip)]
    pub rng: GameRng,

    /// Events generated this tick (drained by the tick driver)
    #[serde(skip)]
    pending_events: Vec<GameEvent>,
}

impl MatchState {
    /// Construct a match from settings.
    ///
    /// Both archetype keys are validated against the table before
    /// anything is built; an unknown key is fatal here, by design -
    /// there is no partially-constructed match.
    pub fn new(settings: &MatchSettings, table: &ArchetypeTable) -> Result<Self, SetupError> {
        let arch1 = table.get(&settings.player1)?;
        let arch2 = table.get(&settings.player2)?;

        let fighter1 = Fighter::new(&settings.player1, arch1, FighterSlot::P1, false);
        let mut fighter2 = Fighter::new(
            &settings.player2,
            arch2,
            FighterSlot::P2,
            settings.ai_opponent,
        );

        if fighter2.is_ai {
            settings.difficulty.apply(&mut fighter2);
        }

        Ok(Self {
            match_id: Uuid::new_v4(),
            phase: MatchPhase::Setup,
            mode: settings.mode,
            stage_name: settings.mode.stage_name().to_string(),
            fighters: [fighter1, fighter2],
            platforms: settings.mode.layout(),
            elapsed: 0.0,
            time_limit: settings.mode.time_limit(),
            outcome: None,
            emotes: UnlockedEmotes::new(&settings.unlocked_emotes),
            rng: GameRng::new(settings.seed),
            pending_events: Vec::new(),
        })
    }

    /// Begin ticking. A no-op unless the match is still in Setup.
    pub fn start(&mut self) {
        if self.phase == MatchPhase::Setup {
            self.phase = MatchPhase::Running;
        }
    }

    /// Get a fighter by slot.
    pub fn fighter(&self, slot: FighterSlot) -> &Fighter {
        &self.fighters[slot.index()]
    }

    /// Get a fighter mutably by slot.
    pub fn fighter_mut(&mut self, slot: FighterSlot) -> &mut Fighter {
        &mut self.fighters[slot.index()]
    }

    /// True once a terminal result exists.
    pub fn is_ended(&self) -> bool {
        self.phase == MatchPhase::Ended
    }

    /// Transition Running -> Ended with the given outcome.
    ///
    /// Idempotent: only the first call stores the outcome and emits
    /// the MatchEnded event.
    pub fn end_with(&mut self, outcome: MatchOutcome) {
        if self.outcome.is_some() {
            return;
        }
        self.phase = MatchPhase::Ended;
        self.outcome = Some(outcome.clone());
        self.push_event(GameEvent::match_ended(outcome));
    }

    /// Queue an event for this tick.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
