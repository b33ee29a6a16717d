//! Input Capture and Intents
//!
//! The presentation layer owns raw key events; the simulation only ever
//! sees an immutable per-tick [`InputFrame`] snapshot. [`ActiveKeys`]
//! sits between the two: it tracks currently-held key identifiers,
//! resolves them through a [`Keybinds`] table, and *consumes* the
//! edge-triggered identifiers (jump, attack, special, emotes) as it
//! samples — held movement keys stay put, discrete presses fire once.
//!
//! Identifiers that match no binding are ignored silently.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::game::emote::{EmoteDef, UnlockedEmotes};
use crate::game::fighter::Fighter;

// =============================================================================
// INPUT FRAME
// =============================================================================

/// Immutable input snapshot for one fighter for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Held movement direction: -1 (left), 0 (none), +1 (right)
    pub move_x: i8,

    /// Edge-triggered action flags (packed bits):
    /// - Bit 0: Jump pressed this tick
    /// - Bit 1: Attack pressed this tick
    /// - Bit 2: Special pressed this tick
    /// - Bits 3-5: Emote slots 1-3
    pub flags: u8,
}

impl InputFrame {
    /// Jump flag bit
    pub const FLAG_JUMP: u8 = 0x01;

    /// Attack flag bit
    pub const FLAG_ATTACK: u8 = 0x02;

    /// Special attack flag bit
    pub const FLAG_SPECIAL: u8 = 0x04;

    /// Emote slot flag bits, slots 0-2
    pub const FLAG_EMOTES: [u8; 3] = [0x08, 0x10, 0x20];

    /// Create an empty (idle) frame.
    pub const fn new() -> Self {
        Self { move_x: 0, flags: 0 }
    }

    /// Create a frame with held movement.
    pub const fn with_movement(move_x: i8) -> Self {
        Self { move_x, flags: 0 }
    }

    /// Check if jump was pressed this tick.
    #[inline]
    pub fn jump_pressed(&self) -> bool {
        self.flags & Self::FLAG_JUMP != 0
    }

    /// Check if attack was pressed this tick.
    #[inline]
    pub fn attack_pressed(&self) -> bool {
        self.flags & Self::FLAG_ATTACK != 0
    }

    /// Check if special attack was pressed this tick.
    #[inline]
    pub fn special_pressed(&self) -> bool {
        self.flags & Self::FLAG_SPECIAL != 0
    }

    /// Check if an emote slot (0-2) was pressed this tick.
    #[inline]
    pub fn emote_pressed(&self, slot: usize) -> bool {
        Self::FLAG_EMOTES
            .get(slot)
            .is_some_and(|bit| self.flags & bit != 0)
    }

    /// Check if this is an idle frame.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.move_x == 0 && self.flags == 0
    }

    /// Set a flag bit.
    #[inline]
    pub fn set_flag(&mut self, bit: u8) {
        self.flags |= bit;
    }
}

// =============================================================================
// KEYBINDS
// =============================================================================

/// Action-to-key-identifier bindings.
///
/// Identifiers use the browser `KeyboardEvent.code` convention
/// ("KeyA", "Digit1", ...) but the simulation treats them as opaque
/// strings, so any front end naming scheme works. The settings layer
/// persists this table; here it is just consulted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keybinds {
    /// Jump
    pub up: String,
    /// Move left
    pub left: String,
    /// Crouch (reserved; the simulation does not read it, but the
    /// settings screen binds it)
    pub down: String,
    /// Move right
    pub right: String,
    /// Basic attack
    pub attack: String,
    /// Special attack
    pub special: String,
    /// Emote slot 1
    pub emote1: String,
    /// Emote slot 2
    pub emote2: String,
    /// Emote slot 3
    pub emote3: String,
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            up: "KeyW".into(),
            left: "KeyA".into(),
            down: "KeyS".into(),
            right: "KeyD".into(),
            attack: "KeyF".into(),
            special: "KeyG".into(),
            emote1: "Digit1".into(),
            emote2: "Digit2".into(),
            emote3: "Digit3".into(),
        }
    }
}

// =============================================================================
// ACTIVE KEYS
// =============================================================================

/// Currently-held key identifiers, fed by the front end's key
/// down/up events.
#[derive(Clone, Debug, Default)]
pub struct ActiveKeys {
    held: BTreeSet<String>,
}

impl ActiveKeys {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press.
    pub fn press(&mut self, identifier: &str) {
        self.held.insert(identifier.to_string());
    }

    /// Record a key release.
    pub fn release(&mut self, identifier: &str) {
        self.held.remove(identifier);
    }

    /// Check whether an identifier is currently held.
    pub fn is_held(&self, identifier: &str) -> bool {
        self.held.contains(identifier)
    }

    /// Drop all held keys (e.g. on window focus loss).
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Produce this tick's input snapshot.
    ///
    /// Held movement keys are read without being removed, so they keep
    /// applying every tick. Edge-triggered keys are *removed* as they
    /// are recognized: they represent discrete presses layered over a
    /// continuously-polled held set, and leaving them in place would
    /// re-fire them every tick until key-up.
    pub fn sample(&mut self, binds: &Keybinds) -> InputFrame {
        let mut frame = InputFrame::new();

        if self.held.contains(&binds.left) {
            frame.move_x = -1;
        } else if self.held.contains(&binds.right) {
            frame.move_x = 1;
        }

        if self.held.remove(&binds.up) {
            frame.set_flag(InputFrame::FLAG_JUMP);
        }
        if self.held.remove(&binds.attack) {
            frame.set_flag(InputFrame::FLAG_ATTACK);
        }
        if self.held.remove(&binds.special) {
            frame.set_flag(InputFrame::FLAG_SPECIAL);
        }

        let emote_binds = [&binds.emote1, &binds.emote2, &binds.emote3];
        for (slot, bind) in emote_binds.into_iter().enumerate() {
            if self.held.remove(bind) {
                frame.set_flag(InputFrame::FLAG_EMOTES[slot]);
            }
        }

        frame
    }
}

// =============================================================================
// HUMAN DECISION STEP
// =============================================================================

/// Apply one tick's input snapshot to a human-controlled fighter.
///
/// Stunned fighters ignore all intents; physics still runs for them.
/// Returns the emote shown this tick, if any.
pub fn apply_intents(
    fighter: &mut Fighter,
    frame: &InputFrame,
    emotes: &UnlockedEmotes,
) -> Option<&'static EmoteDef> {
    if fighter.stunned() {
        return None;
    }

    // Held movement overwrites vx each tick; releasing both keys lets
    // friction alone decay it.
    match frame.move_x {
        x if x < 0 => {
            fighter.velocity.x = -fighter.speed;
            fighter.facing_right = false;
        }
        x if x > 0 => {
            fighter.velocity.x = fighter.speed;
            fighter.facing_right = true;
        }
        _ => {}
    }

    if frame.jump_pressed() {
        fighter.jump();
    }
    if frame.attack_pressed() {
        fighter.start_attack();
    }
    if frame.special_pressed() {
        fighter.start_special();
    }

    let mut shown = None;
    for slot in 0..3 {
        if frame.emote_pressed(slot) {
            if let Some(def) = emotes.nth(slot) {
                fighter.show_emote(def.icon);
                shown = Some(def);
            }
        }
    }

    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::archetype::ArchetypeTable;
    use crate::game::fighter::{Fighter, FighterSlot};

    fn test_fighter() -> Fighter {
        let table = ArchetypeTable::builtin();
        Fighter::new("blaze", table.get("blaze").unwrap(), FighterSlot::P1, false)
    }

    #[test]
    fn test_frame_flags() {
        let mut frame = InputFrame::new();
        assert!(frame.is_idle());

        frame.set_flag(InputFrame::FLAG_JUMP);
        assert!(frame.jump_pressed());
        assert!(!frame.attack_pressed());

        frame.set_flag(InputFrame::FLAG_EMOTES[1]);
        assert!(!frame.emote_pressed(0));
        assert!(frame.emote_pressed(1));
        assert!(!frame.emote_pressed(2));
    }

    #[test]
    fn test_held_movement_survives_sampling() {
        let binds = Keybinds::default();
        let mut keys = ActiveKeys::new();
        keys.press("KeyA");

        let first = keys.sample(&binds);
        let second = keys.sample(&binds);

        assert_eq!(first.move_x, -1);
        assert_eq!(second.move_x, -1);
    }

    #[test]
    fn test_left_wins_over_right() {
        let binds = Keybinds::default();
        let mut keys = ActiveKeys::new();
        keys.press("KeyA");
        keys.press("KeyD");

        assert_eq!(keys.sample(&binds).move_x, -1);
    }

    #[test]
    fn test_edge_triggered_keys_consumed() {
        let binds = Keybinds::default();
        let mut keys = ActiveKeys::new();
        keys.press("KeyW");
        keys.press("KeyF");
        keys.press("KeyG");
        keys.press("Digit2");

        let first = keys.sample(&binds);
        assert!(first.jump_pressed());
        assert!(first.attack_pressed());
        assert!(first.special_pressed());
        assert!(first.emote_pressed(1));

        // Without a fresh key-down, nothing re-fires next tick
        let second = keys.sample(&binds);
        assert!(second.is_idle());
    }

    #[test]
    fn test_unbound_identifiers_ignored() {
        let binds = Keybinds::default();
        let mut keys = ActiveKeys::new();
        keys.press("KeyQ");
        keys.press("GamepadButton9");

        assert!(keys.sample(&binds).is_idle());
        // Unrecognized identifiers stay held; they never match anything
        assert!(keys.is_held("KeyQ"));
    }

    #[test]
    fn test_rebound_keys() {
        let binds = Keybinds {
            attack: "KeyJ".into(),
            ..Keybinds::default()
        };
        let mut keys = ActiveKeys::new();
        keys.press("KeyF");
        keys.press("KeyJ");

        let frame = keys.sample(&binds);
        assert!(frame.attack_pressed());
        // The old default no longer matches and is left untouched
        assert!(keys.is_held("KeyF"));
    }

    #[test]
    fn test_apply_movement_sets_velocity_and_facing() {
        let mut fighter = test_fighter();
        let emotes = UnlockedEmotes::default();

        apply_intents(&mut fighter, &InputFrame::with_movement(-1), &emotes);
        assert_eq!(fighter.velocity.x, -fighter.speed);
        assert!(!fighter.facing_right);

        apply_intents(&mut fighter, &InputFrame::with_movement(1), &emotes);
        assert_eq!(fighter.velocity.x, fighter.speed);
        assert!(fighter.facing_right);
    }

    #[test]
    fn test_stun_suppresses_intents() {
        let mut fighter = test_fighter();
        fighter.stun_timer = 10.0;
        let emotes = UnlockedEmotes::default();

        let mut frame = InputFrame::with_movement(1);
        frame.set_flag(InputFrame::FLAG_ATTACK);
        apply_intents(&mut fighter, &frame, &emotes);

        assert_eq!(fighter.velocity.x, 0.0);
        assert!(!fighter.attacking);
    }

    #[test]
    fn test_emote_slot_resolves_nth_unlocked() {
        let mut fighter = test_fighter();
        let emotes = UnlockedEmotes::new(["fire", "wave"]);

        let mut frame = InputFrame::new();
        frame.set_flag(InputFrame::FLAG_EMOTES[1]);
        let shown = apply_intents(&mut fighter, &frame, &emotes).unwrap();

        assert_eq!(shown.key, "wave");
        assert_eq!(fighter.current_emote.as_deref(), Some("👋"));
        assert_eq!(fighter.emote_timer, 90.0);
    }

    #[test]
    fn test_emote_slot_without_unlock_is_noop() {
        let mut fighter = test_fighter();
        let emotes = UnlockedEmotes::new(["fire"]);

        let mut frame = InputFrame::new();
        frame.set_flag(InputFrame::FLAG_EMOTES[2]);
        let shown = apply_intents(&mut fighter, &frame, &emotes);

        assert!(shown.is_none());
        assert!(fighter.current_emote.is_none());
    }
}
