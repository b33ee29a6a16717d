//! Simulation Tick
//!
//! The per-frame driver. Each tick runs, in fixed order:
//!
//! 1. Decision step for each fighter (slot 1 first): human input
//!    intents or the AI heuristic.
//! 2. Physics & collision step for each fighter.
//! 3. Combat resolution across fighters - after BOTH physics steps,
//!    so hitboxes are tested against settled positions. Slot 1
//!    attacks first, which is what makes the one-hit-per-victim
//!    window deterministic.
//! 4. Win-condition check.
//!
//! Nothing suspends: a tick is synchronous and complete when it
//! returns.

use tracing::{debug, info};

use crate::game::ai;
use crate::game::combat;
use crate::game::events::{EndReason, GameEvent, MatchOutcome};
use crate::game::fighter::FighterSlot;
use crate::game::input::{self, InputFrame};
use crate::game::physics;
use crate::game::state::{MatchPhase, MatchState};

/// Input snapshots for both fighters for one tick.
///
/// AI-controlled fighters ignore theirs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInputs {
    /// Player 1's snapshot
    pub player1: InputFrame,
    /// Player 2's snapshot
    pub player2: InputFrame,
}

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
    /// Whether the match is in its terminal state
    pub match_ended: bool,
    /// Terminal result, present once the match has ended
    pub outcome: Option<MatchOutcome>,
}

/// Run one simulation tick.
///
/// `dt` is the elapsed wall-clock seconds since the previous frame; it
/// is clamped to [`physics::MAX_FRAME_DT`] before use. Ticking a match
/// in Setup does nothing; ticking an Ended match reports the stored
/// outcome without touching the fighters.
pub fn tick(state: &mut MatchState, inputs: &TickInputs, dt: f32) -> TickResult {
    let mut result = TickResult::default();

    match state.phase {
        MatchPhase::Setup => return result,
        MatchPhase::Ended => {
            result.match_ended = true;
            result.outcome = state.outcome.clone();
            return result;
        }
        MatchPhase::Running => {}
    }

    let dt = physics::clamp_dt(dt);
    state.elapsed += dt;

    // 1. Decisions, slot 1 first
    let mut emotes_shown: Vec<(FighterSlot, String)> = Vec::new();
    {
        let (fighters, rng, emotes) = (&mut state.fighters, &mut state.rng, &state.emotes);
        let [fighter1, fighter2] = fighters;

        if fighter1.is_ai {
            if let Some(icon) = ai::decide(fighter1, fighter2, rng, dt) {
                emotes_shown.push((FighterSlot::P1, icon.to_string()));
            }
        } else if let Some(def) = input::apply_intents(fighter1, &inputs.player1, emotes) {
            emotes_shown.push((FighterSlot::P1, def.icon.to_string()));
        }

        if fighter2.is_ai {
            if let Some(icon) = ai::decide(fighter2, fighter1, rng, dt) {
                emotes_shown.push((FighterSlot::P2, icon.to_string()));
            }
        } else if let Some(def) = input::apply_intents(fighter2, &inputs.player2, emotes) {
            emotes_shown.push((FighterSlot::P2, def.icon.to_string()));
        }
    }
    for (slot, icon) in emotes_shown {
        state.push_event(GameEvent::emote_shown(slot, &icon));
    }

    // 2. Physics for both fighters
    for fighter in state.fighters.iter_mut() {
        physics::step(fighter, &state.platforms, dt);
    }

    // 3. Cross-fighter combat, slot 1 attacking first
    let mut hits: Vec<GameEvent> = Vec::new();
    {
        let [fighter1, fighter2] = &mut state.fighters;

        if let Some(hit) = combat::resolve(fighter1, fighter2) {
            debug!(
                attacker = %fighter1.display_name,
                damage = hit.damage,
                victim_health = fighter2.health(),
                "hit landed"
            );
            hits.push(GameEvent::fighter_hit(
                FighterSlot::P1,
                FighterSlot::P2,
                hit.kind,
                hit.damage,
                fighter2.health(),
            ));
        }
        if let Some(hit) = combat::resolve(fighter2, fighter1) {
            debug!(
                attacker = %fighter2.display_name,
                damage = hit.damage,
                victim_health = fighter1.health(),
                "hit landed"
            );
            hits.push(GameEvent::fighter_hit(
                FighterSlot::P2,
                FighterSlot::P1,
                hit.kind,
                hit.damage,
                fighter1.health(),
            ));
        }
    }
    for event in hits {
        state.push_event(event);
    }

    // 4. Win conditions
    check_end_conditions(state);

    result.events = state.take_events();
    result.match_ended = state.is_ended();
    result.outcome = state.outcome.clone();
    result
}

/// Check Running -> Ended transitions. Knockouts take priority over
/// the clock; player 1 is checked first when both fall in the same
/// tick.
fn check_end_conditions(state: &mut MatchState) {
    let outcome = if state.fighters[0].health() <= 0.0 {
        Some(MatchOutcome {
            winner: Some(state.fighters[1].display_name.clone()),
            reason: EndReason::Knockout,
        })
    } else if state.fighters[1].health() <= 0.0 {
        Some(MatchOutcome {
            winner: Some(state.fighters[0].display_name.clone()),
            reason: EndReason::Knockout,
        })
    } else if state
        .time_limit
        .is_some_and(|limit| state.elapsed >= limit)
    {
        let health1 = state.fighters[0].health();
        let health2 = state.fighters[1].health();
        let winner = if health1 > health2 {
            Some(state.fighters[0].display_name.clone())
        } else if health2 > health1 {
            Some(state.fighters[1].display_name.clone())
        } else {
            None
        };
        Some(MatchOutcome {
            winner,
            reason: EndReason::TimeExpired,
        })
    } else {
        None
    };

    if let Some(outcome) = outcome {
        info!(
            match_id = %state.match_id,
            winner = outcome.winner_label(),
            reason = ?outcome.reason,
            elapsed = state.elapsed,
            "match ended"
        );
        state.end_with(outcome);
    }
}

/// Drive a match to completion with a scripted input sequence.
///
/// Ticks at a fixed `dt` until the match ends or `max_ticks` elapse;
/// ticks past the end of the script get idle inputs. Returns the final
/// state and every event generated along the way.
pub fn run_match(
    mut state: MatchState,
    script: &[TickInputs],
    dt: f32,
    max_ticks: u32,
) -> (MatchState, Vec<GameEvent>) {
    state.start();
    let mut all_events = Vec::new();

    for t in 0..max_ticks {
        let inputs = script.get(t as usize).copied().unwrap_or_default();
        let result = tick(&mut state, &inputs, dt);
        all_events.extend(result.events);

        if result.match_ended {
            break;
        }
    }

    (state, all_events)
}
