//! Data-driven species and evolution registry
//!
//! Each species is a sparse table keyed by the level at which a stage
//! takes over, replacing per-species code with catalog data.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::combatant::Move;
use super::elemental::Type;
use ketchum_formulae::StatBlock;

/// Display and battle data for one evolution stage
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolutionEntry {
    /// Species display name for this stage
    pub species: String,

    /// Ticker-style symbol for this stage
    pub symbol: String,

    /// Base stats for this stage
    pub base: StatBlock,

    /// Elemental types for this stage
    pub types: Vec<Type>,

    /// Moves learnable at this stage
    pub moves: Vec<Move>,

    /// Display image for this stage
    pub img_url: String,
}

/// Sparse evolution table: threshold level → stage data
pub type EvolutionTable = BTreeMap<u8, EvolutionEntry>;

/// Floor lookup over the sparse table: the stage with the greatest
/// threshold not exceeding `level`, or `None` when the level is below
/// every threshold.
pub fn evolution_for(level: u8, table: &EvolutionTable) -> Option<&EvolutionEntry> {
    table.range(..=level).next_back().map(|(_, entry)| entry)
}
