//! Stat derivation from base stats, IVs, EVs, and level

use serde::{Deserialize, Serialize};

use crate::FormulaError;
use crate::growth::{EvBlock, IvBlock};

/// Maximum individual value per stat
pub const MAX_IV: u8 = 15;

/// A six-stat block, used for both species base stats and derived stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl StatBlock {
    /// Create a stat block with every field set explicitly
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }
}

fn check_inputs(iv: u8, level: u8) -> Result<(), FormulaError> {
    if !(1..=100).contains(&level) {
        return Err(FormulaError::InvalidStatInput {
            field: "level",
            value: i64::from(level),
        });
    }
    if iv > MAX_IV {
        return Err(FormulaError::InvalidStatInput {
            field: "iv",
            value: i64::from(iv),
        });
    }
    Ok(())
}

/// Shared core of both formulae: `((base + iv) * 2 + floor(sqrt(ev)) / 4) * level / 100`.
/// Intermediate math stays real-valued; callers floor once at the end.
fn scaled_core(base: u32, iv: u8, ev: u16, level: u8) -> f64 {
    let genetics = f64::from((base + u32::from(iv)) * 2) + f64::from(ev).sqrt().floor() / 4.0;
    genetics * f64::from(level) / 100.0
}

/// Compute a non-HP stat: `floor(((base + iv) * 2 + floor(sqrt(ev)) / 4) * level / 100 + 5)`
pub fn compute_stat(base: u32, iv: u8, ev: u16, level: u8) -> Result<u32, FormulaError> {
    check_inputs(iv, level)?;
    Ok((scaled_core(base, iv, ev, level) + 5.0).floor() as u32)
}

/// Compute max HP: `floor(((base + iv) * 2 + floor(sqrt(ev)) / 4) * level / 100 + level + 10)`
pub fn compute_hp(base: u32, iv: u8, ev: u16, level: u8) -> Result<u32, FormulaError> {
    check_inputs(iv, level)?;
    Ok((scaled_core(base, iv, ev, level) + f64::from(level) + 10.0).floor() as u32)
}

/// Derive the full stat block for a combatant at a given level
pub fn derive_stats(
    base: &StatBlock,
    ivs: &IvBlock,
    evs: &EvBlock,
    level: u8,
) -> Result<StatBlock, FormulaError> {
    Ok(StatBlock {
        hp: compute_hp(base.hp, ivs.hp, evs.hp, level)?,
        attack: compute_stat(base.attack, ivs.attack, evs.attack, level)?,
        defense: compute_stat(base.defense, ivs.defense, evs.defense, level)?,
        special_attack: compute_stat(
            base.special_attack,
            ivs.special_attack,
            evs.special_attack,
            level,
        )?,
        special_defense: compute_stat(
            base.special_defense,
            ivs.special_defense,
            evs.special_defense,
            level,
        )?,
        speed: compute_stat(base.speed, ivs.speed, evs.speed, level)?,
    })
}
