//! Lifecycle transitions over battle records
//!
//! Every transition borrows the current record and returns a fresh
//! one. A failed call performs no mutation at all; the caller's record
//! is exactly as it was.

use rand::Rng;
use rand::distributions::Alphanumeric;
use tracing::debug;

use super::record::{BattleKind, BattleRecord, BattleState, Participant, Slot};
use crate::damage::resolve_attack;
use crate::error::BattleError;
use crate::types::{
    AttackerSnapshot, Combatant, DefenderSnapshot, EvolutionTable, MAX_MOVES, Move, MoveSnapshot,
    TurnEntry, evolution_for,
};
use ketchum_formulae::{exp_award, level_for_exp};

/// Length of generated battle identifiers
const BATTLE_ID_LEN: usize = 9;

impl BattleRecord {
    /// Open a new battle.
    ///
    /// With an invitee the battle is closed (only that trainer may
    /// accept); without one it is open to any second trainer. The
    /// initiator holds initiative until acceptance compares speeds.
    pub fn initialize(
        trainer: impl Into<String>,
        combatant: Combatant,
        invited: Option<(String, Combatant)>,
        wager: u64,
        rng: &mut impl Rng,
        now_ms: u64,
    ) -> Self {
        let id: String = rng
            .sample_iter(&Alphanumeric)
            .take(BATTLE_ID_LEN)
            .map(char::from)
            .collect();

        let (kind, challenger) = match invited {
            Some((invitee, their_combatant)) => (
                BattleKind::Closed,
                Some(Participant {
                    trainer: invitee,
                    combatant: their_combatant,
                }),
            ),
            None => (BattleKind::Open, None),
        };

        debug!(id = %id, ?kind, wager, "battle initialized");

        Self {
            id,
            kind,
            state: BattleState::Initialized,
            wager,
            initiator: Participant {
                trainer: trainer.into(),
                combatant,
            },
            challenger,
            first_move: Slot::Initiator,
            turns: Vec::new(),
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
            winner: None,
        }
    }

    /// Accept the challenge as the second trainer.
    ///
    /// Closed battles may only be accepted by the invited trainer
    /// (whose combatant data is re-supplied here); open battles by
    /// anyone but the initiator. Initiative goes to the challenger iff
    /// their combatant is strictly faster; a speed tie keeps it with
    /// the initiator.
    pub fn accept(
        &self,
        trainer: &str,
        combatant: Combatant,
        now_ms: u64,
    ) -> Result<Self, BattleError> {
        if self.state != BattleState::Initialized {
            return Err(BattleError::InvalidTransition {
                state: self.state,
                action: "accept",
            });
        }

        match self.kind {
            BattleKind::Closed => {
                let invited = self.challenger.as_ref().map(|p| p.trainer.as_str());
                if invited != Some(trainer) {
                    return Err(BattleError::UnauthorizedTransition {
                        trainer: trainer.to_string(),
                        action: "accept",
                    });
                }
            }
            BattleKind::Open => {
                if trainer == self.initiator.trainer {
                    return Err(BattleError::UnauthorizedTransition {
                        trainer: trainer.to_string(),
                        action: "accept",
                    });
                }
            }
        }

        let mut next = self.clone();
        if combatant.speed() > next.initiator.combatant.speed() {
            next.first_move = Slot::Challenger;
        }
        next.challenger = Some(Participant {
            trainer: trainer.to_string(),
            combatant,
        });
        next.state = BattleState::Betting;
        next.updated_at_ms = now_ms;

        debug!(id = %next.id, trainer, first_move = ?next.first_move, "battle accepted");
        Ok(next)
    }

    /// Withdraw the challenge. Only the initiator may cancel, and only
    /// before the battle starts.
    pub fn cancel(&self, trainer: &str, now_ms: u64) -> Result<Self, BattleError> {
        self.ensure_pending("cancel")?;
        if trainer != self.initiator.trainer {
            return Err(BattleError::UnauthorizedTransition {
                trainer: trainer.to_string(),
                action: "cancel",
            });
        }

        let mut next = self.clone();
        next.state = BattleState::Canceled;
        next.updated_at_ms = now_ms;
        debug!(id = %next.id, trainer, "battle canceled");
        Ok(next)
    }

    /// Turn down the challenge. Only the invited trainer of a closed
    /// battle may decline.
    pub fn decline(&self, trainer: &str, now_ms: u64) -> Result<Self, BattleError> {
        self.ensure_pending("decline")?;

        let invited = match self.kind {
            BattleKind::Closed => self.challenger.as_ref().map(|p| p.trainer.as_str()),
            BattleKind::Open => None,
        };
        if invited != Some(trainer) {
            return Err(BattleError::UnauthorizedTransition {
                trainer: trainer.to_string(),
                action: "decline",
            });
        }

        let mut next = self.clone();
        next.state = BattleState::Declined;
        next.updated_at_ms = now_ms;
        debug!(id = %next.id, trainer, "battle declined");
        Ok(next)
    }

    fn ensure_pending(&self, action: &'static str) -> Result<(), BattleError> {
        match self.state {
            BattleState::Initialized | BattleState::Betting => Ok(()),
            state => Err(BattleError::InvalidTransition { state, action }),
        }
    }

    /// Apply one attack from the combatant in `attacker` against the
    /// opposite slot.
    ///
    /// The first blow moves a betting record into `battling`. Driving
    /// the defender to exactly 0 HP finishes the battle: the winner is
    /// recorded, the attacker absorbs the defender's effort yield
    /// (capped), earns experience scaled by level difference and
    /// remaining health, and an evolution threshold crossed by the new
    /// level rewrites species data from the supplied table.
    pub fn apply_attack(
        &self,
        mv: &Move,
        attacker: Slot,
        evolutions: &EvolutionTable,
        rng: &mut impl Rng,
        now_ms: u64,
    ) -> Result<Self, BattleError> {
        match self.state {
            BattleState::Finished => return Err(BattleError::BattleAlreadyFinished),
            BattleState::Betting | BattleState::Battling => {}
            state => {
                return Err(BattleError::InvalidTransition {
                    state,
                    action: "attack",
                });
            }
        }

        let defender_slot = attacker.opponent();
        let attacker_side = self
            .participant(attacker)
            .ok_or(BattleError::InvalidTransition {
                state: self.state,
                action: "attack",
            })?;
        let defender_side = self
            .participant(defender_slot)
            .ok_or(BattleError::InvalidTransition {
                state: self.state,
                action: "attack",
            })?;

        let outcome = resolve_attack(mv, &attacker_side.combatant, &defender_side.combatant, rng)?;
        let new_hp = defender_side
            .combatant
            .current_hp
            .saturating_sub(outcome.damage);
        let knockout = new_hp == 0;

        // Award inputs snapshot before any mutation
        let earned_exp = if knockout {
            exp_award(
                defender_side.combatant.base_exp,
                defender_side.combatant.level,
                attacker_side.combatant.level,
                attacker_side.combatant.health_fraction(),
            )
        } else {
            0
        };
        let defender_yield = defender_side.combatant.ev_yield;
        let winner_trainer = attacker_side.trainer.clone();

        let entry = TurnEntry {
            attacker: AttackerSnapshot {
                name: attacker_side.combatant.species.clone(),
                level: attacker_side.combatant.level,
                attack: attacker_side.combatant.attack(),
            },
            defender: DefenderSnapshot {
                name: defender_side.combatant.species.clone(),
                current_hp: new_hp,
                types: defender_side.combatant.types.clone(),
                defense: defender_side.combatant.defense(),
            },
            used: MoveSnapshot {
                name: mv.name.clone(),
                kind: mv.kind.ok_or(BattleError::MissingMoveData("type"))?,
                power: mv.power.ok_or(BattleError::MissingMoveData("power"))?,
            },
            damage: outcome.damage,
            message: outcome.message.clone(),
            timestamp_ms: now_ms,
        };

        let mut next = self.clone();
        next.state = BattleState::Battling;
        if let Some(side) = next.participant_mut(defender_slot) {
            side.combatant.set_current_hp(new_hp);
        }
        next.turns.push(entry);

        if knockout {
            next.state = BattleState::Finished;
            next.winner = Some(winner_trainer.clone());
            if let Some(side) = next.participant_mut(attacker) {
                let winner = &mut side.combatant;
                winner.evs = winner.evs.accumulate(&defender_yield);
                winner.exp += earned_exp;
                let new_level = level_for_exp(winner.growth_rate, winner.exp);
                if new_level > winner.level {
                    winner.level = new_level;
                    if let Some(stage) = evolution_for(new_level, evolutions) {
                        if stage.species != winner.species {
                            debug!(from = %winner.species, to = %stage.species, "evolution threshold crossed");
                            winner.species = stage.species.clone();
                            winner.base = stage.base;
                            winner.types = stage.types.clone();
                            winner.moves = stage.moves.iter().take(MAX_MOVES).cloned().collect();
                        }
                    }
                    winner.refresh_stats()?;
                }
            }
            debug!(id = %next.id, winner = %winner_trainer, earned_exp, "battle finished");
        }

        next.updated_at_ms = now_ms;
        Ok(next)
    }
}
