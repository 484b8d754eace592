//! First-generation stat, growth, and experience formulae.
//!
//! This crate holds the pure math underneath the battle engine: stat
//! derivation from base/IV/EV/level, IV and EV growth bookkeeping, and
//! the six experience curves with their level inversions.
//!
//! ```text
//! ketchum-formulae (stat/growth/exp math) ← THIS CRATE
//!        │
//!        ▼
//! ketchum-battle (type chart + damage + lifecycle)
//! ```
//!
//! Every function here is deterministic over its inputs; the only
//! randomness in the crate is [`IvBlock::generate`], which takes the
//! caller's [`rand::Rng`] so replay-sensitive hosts can seed it.

use thiserror::Error;

pub mod experience;
pub mod growth;
pub mod stats;

pub use experience::{GrowthRate, exp_award, exp_for_level, level_for_exp};
pub use growth::{EvBlock, IvBlock};
pub use stats::{MAX_IV, StatBlock, compute_hp, compute_stat, derive_stats};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("invalid stat input: {field} = {value}")]
    InvalidStatInput { field: &'static str, value: i64 },

    #[error("unknown growth rate: {0}")]
    UnknownGrowthRate(String),
}
