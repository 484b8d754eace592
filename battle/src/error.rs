//! Battle engine errors

use thiserror::Error;

use crate::lifecycle::BattleState;
use ketchum_formulae::FormulaError;

#[derive(Error, Debug)]
pub enum BattleError {
    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("move is missing required data: {0}")]
    MissingMoveData(&'static str),

    #[error("battle has concluded")]
    BattleAlreadyFinished,

    #[error("trainer {trainer} may not {action} this battle")]
    UnauthorizedTransition {
        trainer: String,
        action: &'static str,
    },

    #[error("cannot {action} a battle in the {state} state")]
    InvalidTransition {
        state: BattleState,
        action: &'static str,
    },
}
