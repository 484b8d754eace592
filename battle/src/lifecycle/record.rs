//! Battle record and its read-only queries

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Combatant, TurnEntry};

/// Lifecycle states for a battle record.
///
/// The happy path runs `initialized → betting → battling → finished`;
/// `canceled` and `declined` are side exits from the first two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BattleState {
    Initialized,
    Betting,
    Battling,
    Finished,
    Canceled,
    Declined,
}

impl BattleState {
    /// Whether no further transition can leave this state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BattleState::Finished | BattleState::Canceled | BattleState::Declined
        )
    }

    /// Canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BattleState::Initialized => "initialized",
            BattleState::Betting => "betting",
            BattleState::Battling => "battling",
            BattleState::Finished => "finished",
            BattleState::Canceled => "canceled",
            BattleState::Declined => "declined",
        }
    }
}

impl fmt::Display for BattleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Open battles may be accepted by any second trainer; closed battles
/// name their invitee up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BattleKind {
    Open,
    Closed,
}

/// Which side of the record a participant occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Slot {
    Initiator,
    Challenger,
}

impl Slot {
    /// The other side of a 1v1 battle
    pub fn opponent(&self) -> Slot {
        match self {
            Slot::Initiator => Slot::Challenger,
            Slot::Challenger => Slot::Initiator,
        }
    }
}

/// One trainer and their combatant
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Participant {
    pub trainer: String,
    pub combatant: Combatant,
}

/// The persisted state of one battle.
///
/// Records are exclusively owned by the collaborator that created
/// them; every transition in [`crate::lifecycle`] borrows a record and
/// returns a fresh one, so a failed call leaves the original intact.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BattleRecord {
    /// Generated identifier
    pub id: String,

    /// Open or closed challenge
    pub kind: BattleKind,

    /// Lifecycle state
    pub state: BattleState,

    /// Wager amount, escrowed by the collaborator
    pub wager: u64,

    /// The trainer who opened the battle
    pub initiator: Participant,

    /// The second trainer, present once invited or accepted
    pub challenger: Option<Participant>,

    /// Initiative: which side moves first. Fixed once at acceptance by
    /// comparing speed stats, never re-evaluated per turn.
    pub first_move: Slot,

    /// Append-only turn log
    pub turns: Vec<TurnEntry>,

    pub created_at_ms: u64,
    pub updated_at_ms: u64,

    /// Winning trainer, set when the battle finishes
    pub winner: Option<String>,
}

impl BattleRecord {
    /// Participant occupying a slot
    pub fn participant(&self, slot: Slot) -> Option<&Participant> {
        match slot {
            Slot::Initiator => Some(&self.initiator),
            Slot::Challenger => self.challenger.as_ref(),
        }
    }

    pub(crate) fn participant_mut(&mut self, slot: Slot) -> Option<&mut Participant> {
        match slot {
            Slot::Initiator => Some(&mut self.initiator),
            Slot::Challenger => self.challenger.as_mut(),
        }
    }

    /// Combatant occupying a slot
    pub fn combatant(&self, slot: Slot) -> Option<&Combatant> {
        self.participant(slot).map(|p| &p.combatant)
    }

    /// Whether the record has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}
