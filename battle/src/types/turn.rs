//! Turn log entries
//!
//! Every applied attack appends one immutable snapshot to the record's
//! log; entries are never rewritten after the fact.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::elemental::Type;

/// Attacker state at the moment of the turn
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttackerSnapshot {
    pub name: String,
    pub level: u8,
    pub attack: u32,
}

/// Defender state after the blow landed
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DefenderSnapshot {
    pub name: String,
    pub current_hp: u32,
    pub types: Vec<Type>,
    pub defense: u32,
}

/// The move as it was used
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveSnapshot {
    pub name: String,
    pub kind: Type,
    pub power: u32,
}

/// One applied attack, frozen at the moment it resolved
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnEntry {
    pub attacker: AttackerSnapshot,
    pub defender: DefenderSnapshot,
    pub used: MoveSnapshot,
    pub damage: u32,
    pub message: String,
    pub timestamp_ms: u64,
}
