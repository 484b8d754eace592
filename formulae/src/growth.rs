//! IV generation and EV accumulation

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::stats::MAX_IV;

/// Individual values, rolled once when a combatant is created (0-15 each)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvBlock {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub special_attack: u8,
    pub special_defense: u8,
    pub speed: u8,
}

impl IvBlock {
    /// Draw six independent IVs, each uniform in 0..=15.
    ///
    /// The rng is caller-supplied: hosts that need independently
    /// re-derivable results pass one seeded from agreed request state.
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            hp: rng.gen_range(0..=MAX_IV),
            attack: rng.gen_range(0..=MAX_IV),
            defense: rng.gen_range(0..=MAX_IV),
            special_attack: rng.gen_range(0..=MAX_IV),
            special_defense: rng.gen_range(0..=MAX_IV),
            speed: rng.gen_range(0..=MAX_IV),
        }
    }
}

/// Effort values accumulated through battle, capped at 65535 per stat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl EvBlock {
    /// EVs for a freshly caught combatant: all zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Elementwise sum of earned EVs onto the current block.
    ///
    /// The per-stat cap applies on every path; `u16::MAX` is exactly
    /// the 65535 ceiling, so saturating addition is the clamp.
    pub fn accumulate(&self, earned: &EvBlock) -> EvBlock {
        EvBlock {
            hp: self.hp.saturating_add(earned.hp),
            attack: self.attack.saturating_add(earned.attack),
            defense: self.defense.saturating_add(earned.defense),
            special_attack: self.special_attack.saturating_add(earned.special_attack),
            special_defense: self.special_defense.saturating_add(earned.special_defense),
            speed: self.speed.saturating_add(earned.speed),
        }
    }
}
