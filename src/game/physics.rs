//! Physics & Collision Step
//!
//! Per-tick integration for one fighter: gravity, friction, position
//! update, arena boundary clamping, and ground/platform landing. Runs
//! every tick for every fighter regardless of stun or input state.
//!
//! All constants are tuned for 60 ticks/second; the `dt * 60`
//! normalization keeps gameplay feel stable at other frame rates.
//! There is no sub-stepping - `dt` is clamped instead, bounding the
//! integration error of a slow frame.

use crate::game::fighter::{Fighter, MAX_JUMPS};
use crate::game::stage::Platform;
use crate::{ARENA_WIDTH, GROUND_Y, TICK_RATE};

/// Downward acceleration per tick while airborne. Tuned so a full
/// jump arcs over roughly one second.
pub const GRAVITY: f32 = 0.8;

/// Horizontal velocity multiplier applied every tick, unconditionally.
/// This is the sole decelerating force.
pub const FRICTION: f32 = 0.85;

/// Upper bound on per-frame elapsed time, in seconds. A frame slower
/// than this integrates as if it took exactly this long.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Clamp a raw frame delta to the integrable range.
#[inline]
pub fn clamp_dt(dt: f32) -> f32 {
    dt.clamp(0.0, MAX_FRAME_DT)
}

/// Advance one fighter by one tick.
///
/// Order matters: gravity, friction, integration, horizontal clamp,
/// ground test, platform tests (which may override the ground result -
/// last write wins), then timers.
pub fn step(fighter: &mut Fighter, platforms: &[Platform], dt: f32) {
    let ticks = dt * TICK_RATE as f32;

    if !fighter.on_ground {
        fighter.velocity.y += GRAVITY * ticks;
    }

    fighter.velocity.x *= FRICTION;

    fighter.position += fighter.velocity.scale(ticks);

    // Horizontal arena bounds; clamping kills horizontal momentum
    if fighter.position.x < 0.0 {
        fighter.position.x = 0.0;
        fighter.velocity.x = 0.0;
    } else if fighter.position.x > ARENA_WIDTH - fighter.width {
        fighter.position.x = ARENA_WIDTH - fighter.width;
        fighter.velocity.x = 0.0;
    }

    // Ground test
    fighter.on_ground = false;
    if fighter.position.y >= GROUND_Y - fighter.height {
        fighter.position.y = GROUND_Y - fighter.height;
        fighter.velocity.y = 0.0;
        fighter.on_ground = true;
        fighter.jumps_left = MAX_JUMPS;
    }

    // Platform tests: only downward landings. A fighter rising through
    // a platform passes freely.
    for platform in platforms {
        let bottom = fighter.position.y + fighter.height;
        if fighter.velocity.y > 0.0
            && bottom >= platform.y
            && bottom <= platform.y + platform.height
            && fighter.position.x + fighter.width > platform.x
            && fighter.position.x < platform.x + platform.width
        {
            fighter.position.y = platform.y - fighter.height;
            fighter.velocity.y = 0.0;
            fighter.on_ground = true;
            fighter.jumps_left = MAX_JUMPS;
        }
    }

    fighter.advance_timers(ticks);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::game::archetype::ArchetypeTable;
    use crate::game::fighter::FighterSlot;

    const DT: f32 = 1.0 / 60.0;

    fn grounded_fighter() -> Fighter {
        let table = ArchetypeTable::builtin();
        Fighter::new("blaze", table.get("blaze").unwrap(), FighterSlot::P1, false)
    }

    #[test]
    fn test_rest_is_idempotent() {
        let mut f = grounded_fighter();
        let start = f.position;

        for _ in 0..120 {
            step(&mut f, &[], DT);
        }

        assert_eq!(f.position, start);
        assert_eq!(f.velocity, Vec2::ZERO);
        assert!(f.on_ground);
    }

    #[test]
    fn test_gravity_only_while_airborne() {
        let mut f = grounded_fighter();

        step(&mut f, &[], DT);
        assert_eq!(f.velocity.y, 0.0);

        f.jump();
        let vy_at_takeoff = f.velocity.y;
        step(&mut f, &[], DT);
        assert!(f.velocity.y > vy_at_takeoff);
    }

    #[test]
    fn test_friction_decays_vx() {
        let mut f = grounded_fighter();
        f.velocity.x = 10.0;

        step(&mut f, &[], DT);
        assert_eq!(f.velocity.x, 10.0 * FRICTION);

        step(&mut f, &[], DT);
        assert_eq!(f.velocity.x, 10.0 * FRICTION * FRICTION);
    }

    #[test]
    fn test_left_boundary_clamp_zeroes_vx() {
        let mut f = grounded_fighter();
        f.position.x = 0.0;
        f.velocity.x = -5.0;

        step(&mut f, &[], DT);

        assert_eq!(f.position.x, 0.0);
        assert_eq!(f.velocity.x, 0.0);
    }

    #[test]
    fn test_right_boundary_clamp() {
        let mut f = grounded_fighter();
        f.position.x = ARENA_WIDTH - f.width;
        f.velocity.x = 50.0;

        step(&mut f, &[], DT);

        assert_eq!(f.position.x, ARENA_WIDTH - f.width);
        assert_eq!(f.velocity.x, 0.0);
    }

    #[test]
    fn test_jump_arcs_back_to_ground() {
        let mut f = grounded_fighter();
        f.jump();
        assert!(!f.on_ground);

        // A full jump lands again well within two seconds
        let mut landed_tick = None;
        for tick in 0..180 {
            step(&mut f, &[], DT);
            if f.on_ground {
                landed_tick = Some(tick);
                break;
            }
        }

        let landed_tick = landed_tick.expect("fighter never landed");
        assert!(landed_tick > 10, "landed suspiciously fast: {landed_tick}");
        assert_eq!(f.position.y, GROUND_Y - f.height);
        assert_eq!(f.velocity.y, 0.0);
        assert_eq!(f.jumps_left, MAX_JUMPS);
    }

    #[test]
    fn test_platform_landing_resets_jumps() {
        let platform = Platform::new(200.0, GROUND_Y - 150.0, 200.0);
        let mut f = grounded_fighter();

        // Falling from just above the platform, horizontally over it
        f.position = Vec2::new(250.0, platform.y - f.height - 4.0);
        f.velocity = Vec2::new(0.0, 5.0);
        f.on_ground = false;
        f.jumps_left = 0;

        step(&mut f, &[platform.clone()], DT);

        assert!(f.on_ground);
        assert_eq!(f.position.y, platform.y - f.height);
        assert_eq!(f.velocity.y, 0.0);
        assert_eq!(f.jumps_left, MAX_JUMPS);
    }

    #[test]
    fn test_rising_passes_through_platform() {
        let platform = Platform::new(200.0, GROUND_Y - 150.0, 200.0);
        let mut f = grounded_fighter();

        f.position = Vec2::new(250.0, platform.y - f.height + 2.0);
        f.velocity = Vec2::new(0.0, -12.0);
        f.on_ground = false;

        step(&mut f, &[platform], DT);

        assert!(!f.on_ground);
        assert!(f.velocity.y < 0.0);
    }

    #[test]
    fn test_no_landing_without_horizontal_overlap() {
        let platform = Platform::new(600.0, GROUND_Y - 150.0, 100.0);
        let mut f = grounded_fighter();

        f.position = Vec2::new(100.0, platform.y - f.height - 1.0);
        f.velocity = Vec2::new(0.0, 3.0);
        f.on_ground = false;

        step(&mut f, &[platform], DT);

        assert!(!f.on_ground);
    }

    #[test]
    fn test_clamp_dt() {
        assert_eq!(clamp_dt(0.016), 0.016);
        assert_eq!(clamp_dt(0.5), MAX_FRAME_DT);
        assert_eq!(clamp_dt(-0.01), 0.0);
    }

    #[test]
    fn test_slow_frame_matches_two_fast_frames_roughly() {
        // dt-scaling keeps displacement comparable across frame rates
        let mut fast = grounded_fighter();
        let mut slow = grounded_fighter();
        fast.velocity.x = 8.0;
        slow.velocity.x = 8.0;

        step(&mut slow, &[], 2.0 * DT);
        step(&mut fast, &[], DT);
        step(&mut fast, &[], DT);

        let diff = (fast.position.x - slow.position.x).abs();
        assert!(diff < 1.0, "positions diverged by {diff}");
    }

    #[test]
    fn test_timers_advance_during_stun() {
        let mut f = grounded_fighter();
        f.take_hit(10.0, Vec2::ZERO);
        assert!(f.stunned());

        // Physics keeps running and timers keep counting while stunned
        step(&mut f, &[], DT);
        assert!(f.stun_timer < 15.0);
        assert!(f.hit_cooldown < 25.0);
    }
}
