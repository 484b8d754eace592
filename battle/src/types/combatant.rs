//! Combatant and move data

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::elemental::Type;
use crate::error::BattleError;
use ketchum_formulae::{EvBlock, GrowthRate, IvBlock, StatBlock, derive_stats, exp_for_level};

/// Maximum number of moves a combatant carries
pub const MAX_MOVES: usize = 4;

/// Move data drawn from the collaborator's catalog.
///
/// Power and type are optional because catalogs legitimately omit them
/// for status moves; resolving an attack with such a move fails with
/// [`BattleError::MissingMoveData`]. Remaining uses (`pp`) are
/// bookkeeping for the collaborator and never consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub name: String,
    pub kind: Option<Type>,
    pub power: Option<u32>,
    pub pp: Option<u32>,
}

impl Move {
    /// Create a damaging move with its type and power set
    pub fn new(name: impl Into<String>, kind: Type, power: u32) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
            power: Some(power),
            pp: None,
        }
    }
}

/// A creature instance participating in battles.
///
/// Derived stats are computed once from base/IV/EV/level and refreshed
/// whenever the level or species changes, so `current_hp <= stats.hp`
/// holds at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Combatant {
    /// Species display name
    pub species: String,

    /// Level (1-100)
    pub level: u8,

    /// Species base stats
    pub base: StatBlock,

    /// Individual values, fixed at creation
    pub ivs: IvBlock,

    /// Effort values earned through battle
    pub evs: EvBlock,

    /// Growth curve this species levels on
    pub growth_rate: GrowthRate,

    /// Total experience accumulated
    pub exp: i64,

    /// Experience yield granted to whoever knocks this combatant out
    pub base_exp: i64,

    /// Effort yield granted alongside `base_exp`
    pub ev_yield: EvBlock,

    /// Elemental types (one or two)
    pub types: Vec<Type>,

    /// Known moves (at most [`MAX_MOVES`])
    pub moves: Vec<Move>,

    /// Current HP (0..=stats.hp)
    pub current_hp: u32,

    /// Derived stats, kept in sync with `level`
    pub stats: StatBlock,
}

impl Combatant {
    /// Create a combatant at full health.
    ///
    /// Stats are derived up front (validating level and IVs), starting
    /// experience matches the growth curve at `level`, and only the
    /// first four moves are kept.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        species: impl Into<String>,
        level: u8,
        base: StatBlock,
        ivs: IvBlock,
        evs: EvBlock,
        growth_rate: GrowthRate,
        types: Vec<Type>,
        mut moves: Vec<Move>,
    ) -> Result<Self, BattleError> {
        let stats = derive_stats(&base, &ivs, &evs, level)?;
        moves.truncate(MAX_MOVES);
        Ok(Self {
            species: species.into(),
            level,
            base,
            ivs,
            evs,
            growth_rate,
            exp: exp_for_level(growth_rate, level),
            base_exp: 0,
            ev_yield: EvBlock::new(),
            types,
            moves,
            current_hp: stats.hp,
            stats,
        })
    }

    /// Set the experience and effort yields granted for defeating this
    /// combatant
    pub fn with_yields(mut self, base_exp: i64, ev_yield: EvBlock) -> Self {
        self.base_exp = base_exp;
        self.ev_yield = ev_yield;
        self
    }

    /// Maximum HP at the current level
    pub fn max_hp(&self) -> u32 {
        self.stats.hp
    }

    /// Derived attack stat
    pub fn attack(&self) -> u32 {
        self.stats.attack
    }

    /// Derived defense stat
    pub fn defense(&self) -> u32 {
        self.stats.defense
    }

    /// Derived speed stat, used for initiative
    pub fn speed(&self) -> u32 {
        self.stats.speed
    }

    /// Remaining health as a true ratio in `0.0..=1.0`
    pub fn health_fraction(&self) -> f64 {
        if self.stats.hp == 0 {
            return 0.0;
        }
        f64::from(self.current_hp) / f64::from(self.stats.hp)
    }

    /// Whether this combatant has been knocked out
    pub fn is_knocked_out(&self) -> bool {
        self.current_hp == 0
    }

    /// Set current HP, clamped to the derived maximum
    pub fn set_current_hp(&mut self, hp: u32) {
        self.current_hp = hp.min(self.stats.hp);
    }

    /// Re-derive stats after a level or species change, keeping
    /// current HP within the new maximum.
    pub(crate) fn refresh_stats(&mut self) -> Result<(), BattleError> {
        self.stats = derive_stats(&self.base, &self.ivs, &self.evs, self.level)?;
        self.current_hp = self.current_hp.min(self.stats.hp);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> Combatant {
        Combatant::new(
            "Bulbasaur",
            5,
            StatBlock::new(45, 49, 49, 65, 65, 45),
            IvBlock::default(),
            EvBlock::new(),
            GrowthRate::MediumSlow,
            vec![Type::Grass, Type::Poison],
            vec![Move::new("Tackle", Type::Normal, 40)],
        )
        .unwrap()
    }

    #[test]
    fn test_new_starts_at_full_health() {
        let c = bulbasaur();
        assert_eq!(c.current_hp, c.max_hp());
        assert_eq!(c.exp, exp_for_level(GrowthRate::MediumSlow, 5));
        assert!(!c.is_knocked_out());
    }

    #[test]
    fn test_new_rejects_bad_level() {
        let err = Combatant::new(
            "Missingno",
            0,
            StatBlock::default(),
            IvBlock::default(),
            EvBlock::new(),
            GrowthRate::Medium,
            vec![Type::Normal],
            Vec::new(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_new_keeps_first_four_moves() {
        let moves: Vec<Move> = (0..6)
            .map(|i| Move::new(format!("Move {i}"), Type::Normal, 40))
            .collect();
        let c = Combatant::new(
            "Rattata",
            10,
            StatBlock::new(30, 56, 35, 25, 35, 72),
            IvBlock::default(),
            EvBlock::new(),
            GrowthRate::Medium,
            vec![Type::Normal],
            moves,
        )
        .unwrap();
        assert_eq!(c.moves.len(), MAX_MOVES);
        assert_eq!(c.moves[0].name, "Move 0");
    }

    #[test]
    fn test_health_fraction_is_a_true_ratio() {
        let mut c = bulbasaur();
        assert_eq!(c.health_fraction(), 1.0);
        c.set_current_hp(c.max_hp() - 1);
        let frac = c.health_fraction();
        assert!(frac < 1.0 && frac > 0.5);
    }

    #[test]
    fn test_set_current_hp_clamps_to_max() {
        let mut c = bulbasaur();
        c.set_current_hp(9999);
        assert_eq!(c.current_hp, c.max_hp());
        c.set_current_hp(0);
        assert!(c.is_knocked_out());
    }

    #[test]
    fn test_refresh_stats_after_level_change() {
        let mut c = bulbasaur();
        let old_hp = c.max_hp();
        c.level = 36;
        c.refresh_stats().unwrap();
        assert!(c.max_hp() > old_hp);
        // current hp was below the new max and stays put
        assert!(c.current_hp <= c.max_hp());
    }

    #[test]
    fn test_with_yields() {
        let c = bulbasaur().with_yields(
            64,
            EvBlock {
                special_attack: 1,
                ..EvBlock::new()
            },
        );
        assert_eq!(c.base_exp, 64);
        assert_eq!(c.ev_yield.special_attack, 1);
    }
}
