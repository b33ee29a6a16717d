//! AI Decision Step
//!
//! The computer opponent is a reactive heuristic, not a planner: every
//! tick it looks at the signed distance to its opponent and rolls a
//! handful of independent probabilities. Each probability is scaled by
//! `dt * 60` so the AI stays equally aggressive at any frame rate.
//!
//! Stun suppresses the whole decision step; physics still applies.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::game::emote::AI_EMOTE_POOL;
use crate::game::fighter::Fighter;
use crate::TICK_RATE;

/// Horizontal distance beyond which the AI closes in.
pub const APPROACH_DISTANCE: f32 = 80.0;

/// Vertical offset (opponent above) that always triggers a jump.
pub const JUMP_HEIGHT_TRIGGER: f32 = -40.0;

/// Horizontal proximity inside which the AI jumps probabilistically.
pub const JUMP_PROXIMITY: f32 = 150.0;

/// Melee engagement range, horizontal.
pub const MELEE_RANGE_X: f32 = 100.0;

/// Melee engagement range, vertical.
pub const MELEE_RANGE_Y: f32 = 60.0;

/// Per-tick chance of a cosmetic taunt.
pub const EMOTE_CHANCE: f32 = 0.0008;

/// AI difficulty presets.
///
/// Applied exactly once, to the AI fighter, at match setup. Easy and
/// the upper tiers scale movement speed, basic attack power, and the
/// per-tick attack probability; special power and the special/jump
/// probabilities stay at their archetype defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Slow, timid opponent
    Easy,
    /// Archetype stats, unscaled
    #[default]
    Normal,
    /// Faster and more aggressive
    Hard,
    /// Relentless
    Insane,
}

impl Difficulty {
    /// Scale an AI fighter's stats for this difficulty.
    pub fn apply(self, fighter: &mut Fighter) {
        match self {
            Difficulty::Easy => {
                fighter.speed *= 0.6;
                fighter.attack_power *= 0.7;
                fighter.ai_attack_chance = 0.04;
            }
            Difficulty::Normal => {}
            Difficulty::Hard => {
                fighter.speed *= 1.3;
                fighter.attack_power *= 1.3;
                fighter.ai_attack_chance = 0.18;
            }
            Difficulty::Insane => {
                fighter.speed *= 1.6;
                fighter.attack_power *= 1.6;
                fighter.ai_attack_chance = 0.25;
            }
        }
    }
}

/// Run one tick of AI decisions for `fighter` against `opponent`.
///
/// Returns the emote icon shown this tick, if the rare taunt roll
/// fired.
///
/// Movement is asymmetric to the human path on purpose: the AI sets
/// `vx = speed * dt * 60` where the human path sets the constant
/// `speed`. At 60 Hz the two are identical.
pub fn decide(
    fighter: &mut Fighter,
    opponent: &Fighter,
    rng: &mut GameRng,
    dt: f32,
) -> Option<&'static str> {
    if fighter.stunned() {
        return None;
    }

    let ticks = dt * TICK_RATE as f32;
    let distance_x = opponent.position.x - fighter.position.x;
    let distance_y = opponent.position.y - fighter.position.y;

    // Always square up to the opponent
    fighter.facing_right = distance_x > 0.0;

    if distance_x.abs() > APPROACH_DISTANCE {
        fighter.velocity.x = if distance_x > 0.0 {
            fighter.speed * ticks
        } else {
            -fighter.speed * ticks
        };
    }

    let wants_jump = distance_y < JUMP_HEIGHT_TRIGGER
        || (distance_x.abs() < JUMP_PROXIMITY && rng.chance(fighter.ai_jump_chance * ticks));
    if wants_jump && fighter.jumps_left > 0 {
        fighter.jump();
    }

    // In melee range: attack first, special as the fallback, at most
    // one of the two per tick
    if distance_x.abs() < MELEE_RANGE_X && distance_y.abs() < MELEE_RANGE_Y {
        if rng.chance(fighter.ai_attack_chance * ticks) && fighter.attack_cooldown <= 0.0 {
            fighter.start_attack();
        } else if rng.chance(fighter.ai_special_chance * ticks) && fighter.special_cooldown <= 0.0 {
            fighter.start_special();
        }
    }

    // Occasional taunt, ignoring unlock state
    if rng.chance(EMOTE_CHANCE * ticks) && fighter.emote_timer <= 0.0 {
        if let Some(icon) = rng.choose(&AI_EMOTE_POOL).copied() {
            fighter.show_emote(icon);
            return Some(icon);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::game::archetype::ArchetypeTable;
    use crate::game::fighter::FighterSlot;

    const DT: f32 = 1.0 / 60.0;

    fn duo() -> (Fighter, Fighter) {
        let table = ArchetypeTable::builtin();
        let ai = Fighter::new("verdant", table.get("verdant").unwrap(), FighterSlot::P2, true);
        let human = Fighter::new("blaze", table.get("blaze").unwrap(), FighterSlot::P1, false);
        (ai, human)
    }

    #[test]
    fn test_faces_opponent() {
        let (mut ai, mut human) = duo();
        let mut rng = GameRng::new(1);

        human.position.x = ai.position.x - 300.0;
        decide(&mut ai, &human, &mut rng, DT);
        assert!(!ai.facing_right);

        human.position.x = ai.position.x + 300.0;
        decide(&mut ai, &human, &mut rng, DT);
        assert!(ai.facing_right);
    }

    #[test]
    fn test_approaches_when_far() {
        let (mut ai, mut human) = duo();
        let mut rng = GameRng::new(2);
        human.position.x = ai.position.x - 400.0;

        decide(&mut ai, &human, &mut rng, DT);

        // At the reference rate, dt * 60 == 1
        assert_eq!(ai.velocity.x, -ai.speed);
    }

    #[test]
    fn test_holds_ground_when_close() {
        let (mut ai, mut human) = duo();
        let mut rng = GameRng::new(3);
        human.position = ai.position + Vec2::new(50.0, 0.0);

        decide(&mut ai, &human, &mut rng, DT);

        assert_eq!(ai.velocity.x, 0.0);
    }

    #[test]
    fn test_jumps_when_opponent_above() {
        let (mut ai, mut human) = duo();
        let mut rng = GameRng::new(4);
        human.position = ai.position + Vec2::new(500.0, -120.0);

        decide(&mut ai, &human, &mut rng, DT);

        assert!(ai.velocity.y < 0.0);
        assert_eq!(ai.jumps_left, 1);
    }

    #[test]
    fn test_stun_suppresses_decisions() {
        let (mut ai, mut human) = duo();
        let mut rng = GameRng::new(5);
        ai.stun_timer = 10.0;
        human.position = ai.position + Vec2::new(400.0, -100.0);

        decide(&mut ai, &human, &mut rng, DT);

        assert_eq!(ai.velocity, Vec2::ZERO);
        assert_eq!(ai.jumps_left, 2);
    }

    #[test]
    fn test_attacks_in_melee_range() {
        let (mut ai, mut human) = duo();
        let mut rng = GameRng::new(6);
        human.position = ai.position + Vec2::new(40.0, 0.0);

        // With attack chance 0.1 per tick, 600 ticks without a single
        // swing would be a broken generator
        let mut attacked = false;
        for _ in 0..600 {
            decide(&mut ai, &human, &mut rng, DT);
            if ai.attacking {
                attacked = true;
                break;
            }
        }
        assert!(attacked);
    }

    #[test]
    fn test_never_attacks_out_of_range() {
        let (mut ai, mut human) = duo();
        let mut rng = GameRng::new(7);
        human.position = ai.position + Vec2::new(500.0, 0.0);

        for _ in 0..600 {
            decide(&mut ai, &human, &mut rng, DT);
            // Keep it planted so approach movement can't close the gap
            ai.velocity = Vec2::ZERO;
            assert!(!ai.attacking);
            assert!(!ai.special_attacking);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed: u64| {
            let (mut ai, mut human) = duo();
            let mut rng = GameRng::new(seed);
            human.position = ai.position + Vec2::new(60.0, 0.0);

            let mut trace = Vec::new();
            for _ in 0..200 {
                decide(&mut ai, &human, &mut rng, DT);
                trace.push((ai.attacking, ai.special_attacking, ai.jumps_left));
                ai.advance_timers(1.0);
            }
            trace
        };

        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_difficulty_scaling() {
        let table = ArchetypeTable::builtin();
        let base = table.get("verdant").unwrap();

        let mut easy = Fighter::new("verdant", base, FighterSlot::P2, true);
        Difficulty::Easy.apply(&mut easy);
        assert_eq!(easy.speed, base.speed * 0.6);
        assert_eq!(easy.attack_power, base.attack_power * 0.7);
        assert_eq!(easy.ai_attack_chance, 0.04);
        // Special power and the other probabilities are untouched
        assert_eq!(easy.special_power, base.special_power);
        assert_eq!(easy.ai_special_chance, 0.02);
        assert_eq!(easy.ai_jump_chance, 0.02);

        let mut normal = Fighter::new("verdant", base, FighterSlot::P2, true);
        Difficulty::Normal.apply(&mut normal);
        assert_eq!(normal.speed, base.speed);
        assert_eq!(normal.ai_attack_chance, 0.1);

        let mut insane = Fighter::new("verdant", base, FighterSlot::P2, true);
        Difficulty::Insane.apply(&mut insane);
        assert_eq!(insane.speed, base.speed * 1.6);
        assert_eq!(insane.attack_power, base.attack_power * 1.6);
        assert_eq!(insane.ai_attack_chance, 0.25);
    }

    #[test]
    fn test_insane_swings_more_than_easy() {
        let count_swings = |difficulty: Difficulty, seed: u64| {
            let (mut ai, mut human) = duo();
            difficulty.apply(&mut ai);
            let mut rng = GameRng::new(seed);
            human.position = ai.position + Vec2::new(40.0, 0.0);

            let mut swings = 0;
            for _ in 0..5000 {
                decide(&mut ai, &human, &mut rng, DT);
                if ai.attacking {
                    swings += 1;
                    // Reset so each tick is an independent opportunity
                    ai.attacking = false;
                    ai.hitbox_live = false;
                    ai.attack_cooldown = 0.0;
                }
                ai.velocity = Vec2::ZERO;
            }
            swings
        };

        let easy = count_swings(Difficulty::Easy, 1234);
        let insane = count_swings(Difficulty::Insane, 1234);

        assert!(insane > easy * 2, "easy={easy} insane={insane}");
    }
}
