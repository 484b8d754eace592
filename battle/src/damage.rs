//! Canonical damage resolution

use rand::Rng;

use crate::error::BattleError;
use crate::types::{Combatant, Move};

/// Probability that any attack lands a critical hit
const CRITICAL_CHANCE: f32 = 0.1;

/// Damage multiplier for a critical hit
const CRITICAL_MULTIPLIER: f32 = 1.5;

/// The outcome of one resolved attack
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    /// Damage to subtract from the defender's HP (already floored)
    pub damage: u32,

    /// Descriptive flavor text; empty for a neutral, non-critical hit
    pub message: String,

    /// Whether the critical roll landed
    pub critical: bool,

    /// Combined type effectiveness applied
    pub effectiveness: f32,
}

/// Resolve a damaging move against a defender.
///
/// `damage = (((2·level/5 + 2) · power · attack/defense) / 50 + 2)
///           · effectiveness · critical`, floored once when applied.
///
/// Fails with [`BattleError::MissingMoveData`] when the move carries
/// no power or type (status moves). The critical roll is the only
/// random draw: one uniform sample against a 10% chance.
pub fn resolve_attack(
    mv: &Move,
    attacker: &Combatant,
    defender: &Combatant,
    rng: &mut impl Rng,
) -> Result<AttackOutcome, BattleError> {
    let power = mv.power.ok_or(BattleError::MissingMoveData("power"))?;
    let kind = mv.kind.ok_or(BattleError::MissingMoveData("type"))?;

    let base = ((2.0 * f32::from(attacker.level) / 5.0 + 2.0)
        * power as f32
        * (attacker.attack() as f32 / defender.defense() as f32))
        / 50.0
        + 2.0;

    let effectiveness = kind.effectiveness_multi(&defender.types);
    let critical = rng.gen_range(0.0f32..1.0) < CRITICAL_CHANCE;
    let multiplier = if critical { CRITICAL_MULTIPLIER } else { 1.0 };

    let damage = (base * effectiveness * multiplier).floor().max(0.0) as u32;

    let mut message = String::new();
    if critical {
        message.push_str("A critical hit!");
    }
    if effectiveness == 2.0 {
        message.push_str(" It's super effective!");
    } else if effectiveness == 0.5 {
        message.push_str(" It's not very effective...");
    }

    Ok(AttackOutcome {
        damage,
        message,
        critical,
        effectiveness,
    })
}
