//! Fighter State
//!
//! The mutable record for one combatant. Health is never stored: it is
//! derived from cumulative damage taken, which also feeds the
//! damage-scaling and knockback-scaling formulas. All timers count in
//! ticks at the 60 Hz reference rate and are decremented by
//! `dt * 60` so behaviour is frame-rate-independent.

use serde::{Deserialize, Serialize};

use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::game::archetype::Archetype;
use crate::{ARENA_WIDTH, GROUND_Y, MAX_HEALTH};

/// Basic attack cooldown in ticks.
pub const ATTACK_COOLDOWN_TICKS: f32 = 15.0;

/// Special attack cooldown in ticks.
pub const SPECIAL_COOLDOWN_TICKS: f32 = 45.0;

/// Hit-invulnerability window after being struck, in ticks.
pub const HIT_COOLDOWN_TICKS: f32 = 25.0;

/// Emote display duration in ticks.
pub const EMOTE_DISPLAY_TICKS: f32 = 90.0;

/// Stun ticks applied per point of damage dealt.
pub const STUN_TICKS_PER_DAMAGE: f32 = 1.5;

/// Damage-taken divisor for the victim's knockback multiplier.
pub const KNOCKBACK_DAMAGE_DIVISOR: f32 = 50.0;

/// Mid-air jumps available after leaving the ground (double jump).
pub const MAX_JUMPS: u8 = 2;

/// Which side of the match a fighter occupies.
///
/// Slot 1 always updates before slot 2 within a tick.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum FighterSlot {
    /// Player 1, spawns on the left facing right
    #[default]
    P1,
    /// Player 2, spawns on the right facing left
    P2,
}

impl FighterSlot {
    /// Array index for this slot.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            FighterSlot::P1 => 0,
            FighterSlot::P2 => 1,
        }
    }

    /// The opposing slot.
    #[inline]
    pub fn opponent(self) -> FighterSlot {
        match self {
            FighterSlot::P1 => FighterSlot::P2,
            FighterSlot::P2 => FighterSlot::P1,
        }
    }
}

/// State of a single fighter in the match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fighter {
    /// Archetype key this fighter was created from
    pub archetype_key: String,

    /// Display name (from the archetype), used in results and logs
    pub display_name: String,

    /// Player slot
    pub slot: FighterSlot,

    /// True for the AI-controlled fighter
    pub is_ai: bool,

    /// Top-left position
    pub position: Vec2,

    /// Velocity in pixels per tick (at the 60 Hz reference rate)
    pub velocity: Vec2,

    /// Body width
    pub width: f32,

    /// Body height
    pub height: f32,

    /// True when facing right
    pub facing_right: bool,

    /// True while standing on the ground or a platform
    pub on_ground: bool,

    /// Remaining jumps; reset to [`MAX_JUMPS`] on any landing
    pub jumps_left: u8,

    // =========================================================================
    // Combat stats (copied from the archetype; mutated only by the
    // one-time difficulty scaling at match setup)
    // =========================================================================
    /// Horizontal movement speed
    pub speed: f32,

    /// Jump impulse magnitude
    pub jump_power: f32,

    /// Base damage of a basic attack
    pub attack_power: f32,

    /// Base damage of a special attack
    pub special_power: f32,

    /// Cumulative damage taken. Unbounded upward; health derives from
    /// it and both damage dealt and knockback received scale with it.
    pub damage_taken: f32,

    // =========================================================================
    // Timers (ticks, decremented by dt * 60, clamped at zero)
    // =========================================================================
    /// Hit-invulnerability remaining
    pub hit_cooldown: f32,

    /// Basic attack cooldown remaining
    pub attack_cooldown: f32,

    /// Special attack cooldown remaining
    pub special_cooldown: f32,

    /// Stun remaining; while positive, new intents are suppressed but
    /// physics still applies
    pub stun_timer: f32,

    /// Emote display remaining
    pub emote_timer: f32,

    // =========================================================================
    // Transient combat state
    // =========================================================================
    /// A basic attack swing is in progress
    pub attacking: bool,

    /// A special attack is in progress
    pub special_attacking: bool,

    /// The current swing's hitbox can still land a hit; cleared on the
    /// first connect so one swing hits at most once
    pub hitbox_live: bool,

    /// Attack hitbox, recomputed each tick while a swing is live
    pub attack_hitbox: Rect,

    /// Emote icon currently displayed, if any
    pub current_emote: Option<String>,

    // =========================================================================
    // AI tuning (per-tick probabilities at 60 Hz, scaled by difficulty
    // at match setup)
    // =========================================================================
    /// Chance per tick of attacking while in melee range
    pub ai_attack_chance: f32,

    /// Chance per tick of attempting a special while in melee range
    pub ai_special_chance: f32,

    /// Chance per tick of jumping while near the opponent
    pub ai_jump_chance: f32,
}

impl Fighter {
    /// Create a fighter from an archetype, positioned at its slot's
    /// start point: standing on the ground at 1/4 (slot 1) or 3/4
    /// (slot 2) of the arena width, facing the center, full health,
    /// both jumps available.
    pub fn new(key: &str, archetype: &Archetype, slot: FighterSlot, is_ai: bool) -> Self {
        let x = match slot {
            FighterSlot::P1 => ARENA_WIDTH / 4.0,
            FighterSlot::P2 => 3.0 * ARENA_WIDTH / 4.0,
        };

        Self {
            archetype_key: key.to_string(),
            display_name: archetype.name.clone(),
            slot,
            is_ai,
            position: Vec2::new(x, GROUND_Y - archetype.height),
            velocity: Vec2::ZERO,
            width: archetype.width,
            height: archetype.height,
            facing_right: slot == FighterSlot::P1,
            on_ground: true,
            jumps_left: MAX_JUMPS,
            speed: archetype.speed,
            jump_power: archetype.jump_power,
            attack_power: archetype.attack_power,
            special_power: archetype.special_power,
            damage_taken: 0.0,
            hit_cooldown: 0.0,
            attack_cooldown: 0.0,
            special_cooldown: 0.0,
            stun_timer: 0.0,
            emote_timer: 0.0,
            attacking: false,
            special_attacking: false,
            hitbox_live: false,
            attack_hitbox: Rect::default(),
            current_emote: None,
            ai_attack_chance: 0.1,
            ai_special_chance: 0.02,
            ai_jump_chance: 0.02,
        }
    }

    /// Current health, derived from damage taken. Always in
    /// `[0, MAX_HEALTH]`.
    #[inline]
    pub fn health(&self) -> f32 {
        (MAX_HEALTH - self.damage_taken).max(0.0)
    }

    /// True while this fighter ignores new intents.
    #[inline]
    pub fn stunned(&self) -> bool {
        self.stun_timer > 0.0
    }

    /// Full body bounding box.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    /// Jump if any jumps remain.
    pub fn jump(&mut self) {
        if self.jumps_left == 0 {
            return;
        }
        self.velocity.y = -self.jump_power;
        self.jumps_left -= 1;
        self.on_ground = false;
    }

    /// Start a basic attack if the cooldown has elapsed.
    pub fn start_attack(&mut self) {
        if self.attack_cooldown > 0.0 {
            return;
        }
        self.attacking = true;
        self.hitbox_live = true;
        self.attack_cooldown = ATTACK_COOLDOWN_TICKS;
    }

    /// Start a special attack if the cooldown has elapsed.
    pub fn start_special(&mut self) {
        if self.special_cooldown > 0.0 {
            return;
        }
        self.special_attacking = true;
        self.hitbox_live = true;
        self.special_cooldown = SPECIAL_COOLDOWN_TICKS;
    }

    /// Display an emote above the fighter.
    pub fn show_emote(&mut self, icon: &str) {
        self.current_emote = Some(icon.to_string());
        self.emote_timer = EMOTE_DISPLAY_TICKS;
    }

    /// Receive a hit: accumulate damage, then apply knockback scaled
    /// by the *post-hit* damage total, stun proportional to the
    /// damage, and the hit-invulnerability window.
    ///
    /// Knockback velocity is SET, not added - a hit overrides whatever
    /// motion the victim had.
    pub fn take_hit(&mut self, damage: f32, knockback: Vec2) {
        self.damage_taken += damage;

        let multiplier = 1.0 + self.damage_taken / KNOCKBACK_DAMAGE_DIVISOR;
        self.velocity = knockback.scale(multiplier);

        self.stun_timer = damage * STUN_TICKS_PER_DAMAGE;
        self.hit_cooldown = HIT_COOLDOWN_TICKS;
    }

    /// Advance all timers by `ticks` (= dt * 60). Expiring cooldowns
    /// clear their attack flags; an expiring emote timer clears the
    /// displayed emote. Timers never go negative.
    pub fn advance_timers(&mut self, ticks: f32) {
        if self.hit_cooldown > 0.0 {
            self.hit_cooldown = (self.hit_cooldown - ticks).max(0.0);
        }

        if self.attack_cooldown > 0.0 {
            self.attack_cooldown -= ticks;
            if self.attack_cooldown <= 0.0 {
                self.attack_cooldown = 0.0;
                self.attacking = false;
            }
        }

        if self.special_cooldown > 0.0 {
            self.special_cooldown -= ticks;
            if self.special_cooldown <= 0.0 {
                self.special_cooldown = 0.0;
                self.special_attacking = false;
            }
        }

        if !self.attacking && !self.special_attacking {
            self.hitbox_live = false;
        }

        if self.stun_timer > 0.0 {
            self.stun_timer = (self.stun_timer - ticks).max(0.0);
        }

        if self.emote_timer > 0.0 {
            self.emote_timer -= ticks;
            if self.emote_timer <= 0.0 {
                self.emote_timer = 0.0;
                self.current_emote = None;
            }
        }
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::game::archetype::ArchetypeTable;
    use crate::MAX_HEALTH;
    use proptest::prelude::*;

    fn fresh() -> Fighter {
        let table = ArchetypeTable::builtin();
        Fighter::new("blaze", table.get("blaze").unwrap(), FighterSlot::P1, false)
    }

    proptest! {
        #[test]
        fn health_is_a_pure_function_of_damage(damage in 0.0f32..500.0) {
            let mut f = fresh();
            f.damage_taken = damage;

            let health = f.health();
            prop_assert!((0.0..=MAX_HEALTH).contains(&health));
            prop_assert_eq!(health, (MAX_HEALTH - damage).max(0.0));
        }

        #[test]
        fn knockback_strictly_grows_with_prior_damage(
            prior_low in 0.0f32..200.0,
            extra in 1.0f32..100.0,
            damage in 1.0f32..40.0,
        ) {
            let mut lightly_worn = fresh();
            let mut heavily_worn = fresh();
            lightly_worn.damage_taken = prior_low;
            heavily_worn.damage_taken = prior_low + extra;

            let kb = Vec2::new(12.0, -10.0);
            lightly_worn.take_hit(damage, kb);
            heavily_worn.take_hit(damage, kb);

            prop_assert!(
                heavily_worn.velocity.length() > lightly_worn.velocity.length()
            );
        }

        #[test]
        fn timers_never_negative_after_any_advance(
            hit in 0.0f32..100.0,
            stun in 0.0f32..100.0,
            ticks in 0.0f32..500.0,
        ) {
            let mut f = fresh();
            f.hit_cooldown = hit;
            f.stun_timer = stun;
            f.start_attack();
            f.start_special();

            f.advance_timers(ticks);

            prop_assert!(f.hit_cooldown >= 0.0);
            prop_assert!(f.stun_timer >= 0.0);
            prop_assert!(f.attack_cooldown >= 0.0);
            prop_assert!(f.special_cooldown >= 0.0);
            prop_assert!(f.emote_timer >= 0.0);
        }
    }
}
