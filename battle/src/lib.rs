//! Deterministic battle engine for a creature-collecting game.
//!
//! This crate computes damage, critical hits, experience awards, and
//! stat growth, and drives a battle record through its lifecycle. It
//! holds no I/O, clock, or hidden randomness: every operation is a
//! pure function over supplied state, and every random draw comes from
//! the caller's [`rand::Rng`].
//!
//! # Overview
//!
//! `ketchum-battle` sits between `ketchum-formulae` (pure math) and
//! the collaborators that persist records and settle wagers:
//!
//! ```text
//! ketchum-formulae (stat/growth/exp math)
//!        │
//!        ▼
//! ketchum-battle (type chart + damage + lifecycle) ← THIS CRATE
//!        │
//!        └─> ledger/marketplace collaborators (persistence, wagers)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - The fifteen elemental types with their effectiveness chart
//! - [`Combatant`] - A creature instance with level, stats, types, and moves
//! - [`Move`] - Catalog move data (status moves carry no power)
//! - [`EvolutionEntry`] - One stage of a level-keyed species registry
//!
//! ## Lifecycle
//! - [`BattleRecord`] - One battle's persisted state and turn log
//! - [`BattleState`] - `initialized → betting → battling → finished`,
//!   with `canceled`/`declined` side exits
//!
//! # Example Usage
//!
//! ```ignore
//! use ketchum_battle::{BattleRecord, Slot};
//!
//! let record = BattleRecord::initialize("ash", pikachu, None, 100, &mut rng, now_ms);
//! let record = record.accept("misty", staryu, now_ms)?;
//! let record = record.apply_attack(&thunderbolt, Slot::Initiator, &evolutions, &mut rng, now_ms)?;
//!
//! if let Some(winner) = &record.winner {
//!     println!("{winner} takes the wager");
//! }
//! ```

pub mod damage;
pub mod error;
pub mod lifecycle;
pub mod types;

// Re-export main types at crate root for convenience
pub use damage::{AttackOutcome, resolve_attack};
pub use error::BattleError;
pub use lifecycle::{BattleKind, BattleRecord, BattleState, Participant, Slot};
pub use types::{
    Combatant, EvolutionEntry, EvolutionTable, Move, TurnEntry, Type, effectiveness_by_name,
    evolution_for,
};

// Re-export commonly used formulae types
pub use ketchum_formulae::{EvBlock, FormulaError, GrowthRate, IvBlock, StatBlock};
