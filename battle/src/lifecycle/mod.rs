//! Battle record lifecycle

mod record;
mod transitions;

pub use record::{BattleKind, BattleRecord, BattleState, Participant, Slot};
