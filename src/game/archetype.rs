//! Character Archetypes
//!
//! The immutable template each fighter is stamped from: display name,
//! body dimensions, and base combat stats. The built-in roster matches
//! the shipped character select; front ends with their own unlock
//! bookkeeping can also assemble a table from their own data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that prevent a match from being constructed.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The requested character key is not in the archetype table.
    /// Callers are expected to validate selections against the table
    /// before starting a match.
    #[error("unknown archetype key: {0}")]
    UnknownArchetype(String),
}

/// Immutable base stats for one character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    /// Display name, used in match results and logs
    pub name: String,
    /// Body width in pixels
    pub width: f32,
    /// Body height in pixels
    pub height: f32,
    /// Horizontal movement speed (pixels per tick at 60 Hz)
    pub speed: f32,
    /// Jump impulse magnitude
    pub jump_power: f32,
    /// Base damage of a basic attack
    pub attack_power: f32,
    /// Base damage of a special attack
    pub special_power: f32,
}

/// Lookup table from character key to archetype.
///
/// Keys iterate in sorted order (BTreeMap), which keeps roster
/// listings stable.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ArchetypeTable {
    entries: BTreeMap<String, Archetype>,
}

impl ArchetypeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in roster.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert("blaze", Archetype {
            name: "BLAZE".into(),
            width: 50.0,
            height: 80.0,
            speed: 8.0,
            jump_power: 18.0,
            attack_power: 10.0,
            special_power: 25.0,
        });
        table.insert("verdant", Archetype {
            name: "VERDANT".into(),
            width: 50.0,
            height: 85.0,
            speed: 6.0,
            jump_power: 16.0,
            attack_power: 12.0,
            special_power: 30.0,
        });
        table.insert("nimbus", Archetype {
            name: "NIMBUS".into(),
            width: 45.0,
            height: 45.0,
            speed: 10.0,
            jump_power: 22.0,
            attack_power: 8.0,
            special_power: 20.0,
        });
        table.insert("shadow", Archetype {
            name: "SHADOW".into(),
            width: 48.0,
            height: 82.0,
            speed: 9.0,
            jump_power: 20.0,
            attack_power: 11.0,
            special_power: 28.0,
        });
        table.insert("crystal", Archetype {
            name: "CRYSTAL".into(),
            width: 52.0,
            height: 78.0,
            speed: 5.0,
            jump_power: 14.0,
            attack_power: 15.0,
            special_power: 35.0,
        });
        table.insert("phoenix", Archetype {
            name: "PHOENIX".into(),
            width: 55.0,
            height: 85.0,
            speed: 7.0,
            jump_power: 24.0,
            attack_power: 13.0,
            special_power: 40.0,
        });
        table.insert("void", Archetype {
            name: "VOID".into(),
            width: 60.0,
            height: 90.0,
            speed: 4.0,
            jump_power: 12.0,
            attack_power: 20.0,
            special_power: 50.0,
        });
        table
    }

    /// Add or replace an archetype.
    pub fn insert(&mut self, key: &str, archetype: Archetype) {
        self.entries.insert(key.to_string(), archetype);
    }

    /// Look up an archetype by key.
    pub fn get(&self, key: &str) -> Result<&Archetype, SetupError> {
        self.entries
            .get(key)
            .ok_or_else(|| SetupError::UnknownArchetype(key.to_string()))
    }

    /// Check whether a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
