//! Domain types for the battle engine

mod combatant;
mod elemental;
mod species;
mod turn;

pub use combatant::{Combatant, MAX_MOVES, Move};
pub use elemental::{TYPE_CHART, Type, effectiveness_by_name};
pub use species::{EvolutionEntry, EvolutionTable, evolution_for};
pub use turn::{AttackerSnapshot, DefenderSnapshot, MoveSnapshot, TurnEntry};
