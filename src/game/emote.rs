//! Emote Catalog
//!
//! The full emote roster in its fixed catalog order, plus the
//! per-player view of which emotes are unlocked. Unlocking itself is
//! shop bookkeeping and happens outside the simulation; the core only
//! needs the stable "Nth unlocked emote" mapping that the three emote
//! keys trigger.

use serde::{Deserialize, Serialize};

/// One emote definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EmoteDef {
    /// Stable catalog key
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Icon shown above the fighter
    pub icon: &'static str,
}

const fn emote(key: &'static str, name: &'static str, icon: &'static str) -> EmoteDef {
    EmoteDef { key, name, icon }
}

/// Every emote, in catalog order. Slot resolution ("emote key 2 fires
/// the 2nd unlocked emote") depends on this order staying stable.
pub const EMOTE_CATALOG: &[EmoteDef] = &[
    // Victory & celebration
    emote("victory", "VICTORY", "🏆"),
    emote("party", "PARTY", "🎉"),
    emote("dance", "DANCE", "💃"),
    emote("flex", "FLEX", "💪"),
    emote("crown", "CROWN", "👑"),
    // Combat & action
    emote("fire", "FIRE", "🔥"),
    emote("lightning", "LIGHTNING", "⚡"),
    emote("explosion", "EXPLOSION", "💥"),
    emote("sword", "SWORD", "⚔️"),
    emote("shield", "SHIELD", "🛡️"),
    // Emotions & reactions
    emote("cool", "COOL", "😎"),
    emote("angry", "ANGRY", "😡"),
    emote("laugh", "LAUGH", "😂"),
    emote("shocked", "SHOCKED", "😱"),
    emote("smirk", "SMIRK", "😏"),
    // Gestures
    emote("thumbs_up", "THUMBS UP", "👍"),
    emote("thumbs_down", "THUMBS DOWN", "👎"),
    emote("wave", "WAVE", "👋"),
    emote("peace", "PEACE", "✌️"),
    emote("fist", "FIST BUMP", "👊"),
    // Special & rare
    emote("star", "STAR", "⭐"),
    emote("diamond", "DIAMOND", "💎"),
    emote("rocket", "ROCKET", "🚀"),
    emote("magic", "MAGIC", "✨"),
    emote("skull", "SKULL", "💀"),
];

/// Fixed pool the AI taunts from, independent of unlock state.
pub const AI_EMOTE_POOL: [&str; 4] = ["👍", "🔥", "⚡", "💪"];

/// A player's unlocked emotes, in catalog order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UnlockedEmotes {
    keys: Vec<String>,
}

impl UnlockedEmotes {
    /// Build from a set of unlocked keys.
    ///
    /// Input order does not matter: entries are kept in catalog order,
    /// and keys not in the catalog are dropped.
    pub fn new<I, S>(unlocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: Vec<String> = unlocked
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        let keys = EMOTE_CATALOG
            .iter()
            .filter(|def| requested.iter().any(|k| k == def.key))
            .map(|def| def.key.to_string())
            .collect();

        Self { keys }
    }

    /// The Nth unlocked emote (0-based slot index), if enough are
    /// unlocked.
    pub fn nth(&self, slot: usize) -> Option<&'static EmoteDef> {
        let key = self.keys.get(slot)?;
        EMOTE_CATALOG.iter().find(|def| def.key == key)
    }

    /// Number of unlocked emotes.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when nothing is unlocked.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
