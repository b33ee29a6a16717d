//! Combat Resolver
//!
//! Hitbox computation and cross-fighter hit resolution. Runs after the
//! physics step for both fighters, so hitboxes are tested against
//! settled positions.
//!
//! Damage scales UP with the attacker's own accumulated damage (a
//! comeback mechanic), and knockback scales up with the victim's -
//! computed after the new hit is added, so every hit both hurts more
//! and flies further as a match drags on.

use serde::{Deserialize, Serialize};

use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::game::fighter::Fighter;

/// Knockback velocity imparted by a basic attack (facing right).
pub const BASIC_KNOCKBACK: Vec2 = Vec2::new(12.0, -10.0);

/// Knockback velocity imparted by a special attack (facing right).
pub const SPECIAL_KNOCKBACK: Vec2 = Vec2::new(18.0, -12.0);

/// Damage-taken divisor for the attacker's damage multiplier.
pub const DAMAGE_SCALING_DIVISOR: f32 = 100.0;

/// Which attack a hit came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackKind {
    /// Quick melee swing
    Basic,
    /// Slower, harder-hitting special
    Special,
}

/// A hit that connected this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandedHit {
    /// Attack kind that landed
    pub kind: AttackKind,
    /// Damage dealt, after the attacker's scaling
    pub damage: f32,
}

/// Compute the live attack hitbox for a fighter, if any.
///
/// A hitbox exists while a swing is in progress AND it has not yet
/// connected. When both attack kinds are somehow in flight at once the
/// basic attack drives the hitbox.
///
/// Basic geometry: 1.5w x 0.6h, pushed 0.8w in front of the fighter,
/// covering the lower 80% of the body. Specials get their own larger
/// reach: 2.0w x 0.8h, pushed 0.5w forward.
pub fn attack_hitbox(fighter: &Fighter) -> Option<(Rect, AttackKind)> {
    if !fighter.hitbox_live {
        return None;
    }

    let (kind, hb_width, hb_height, front_offset, top_offset) = if fighter.attacking {
        (
            AttackKind::Basic,
            fighter.width * 1.5,
            fighter.height * 0.6,
            fighter.width * 0.8,
            fighter.height * 0.2,
        )
    } else if fighter.special_attacking {
        (
            AttackKind::Special,
            fighter.width * 2.0,
            fighter.height * 0.8,
            fighter.width * 0.5,
            fighter.height * 0.1,
        )
    } else {
        return None;
    };

    let x = if fighter.facing_right {
        fighter.position.x + front_offset
    } else {
        fighter.position.x - hb_width * (front_offset / fighter.width)
    };

    Some((
        Rect::new(x, fighter.position.y + top_offset, hb_width, hb_height),
        kind,
    ))
}

/// Resolve one attacker-vs-defender pair for this tick.
///
/// Recomputes and stores the attacker's hitbox while the swing is
/// live, then applies damage/knockback/stun on overlap - at most once
/// per swing, and never through the defender's hit-invulnerability
/// window. A miss leaves the defender completely untouched.
pub fn resolve(attacker: &mut Fighter, defender: &mut Fighter) -> Option<LandedHit> {
    let (hitbox, kind) = attack_hitbox(attacker)?;
    attacker.attack_hitbox = hitbox;

    if !hitbox.intersects(&defender.bounds()) {
        return None;
    }
    if defender.hit_cooldown > 0.0 {
        return None;
    }

    let base_power = match kind {
        AttackKind::Basic => attacker.attack_power,
        AttackKind::Special => attacker.special_power,
    };
    let damage = base_power * (1.0 + attacker.damage_taken / DAMAGE_SCALING_DIVISOR);

    let knockback = match kind {
        AttackKind::Basic => BASIC_KNOCKBACK,
        AttackKind::Special => SPECIAL_KNOCKBACK,
    };
    let knockback = if attacker.facing_right {
        knockback
    } else {
        Vec2::new(-knockback.x, knockback.y)
    };

    defender.take_hit(damage, knockback);

    // One hit per swing activation
    attacker.hitbox_live = false;

    Some(LandedHit { kind, damage })
}
