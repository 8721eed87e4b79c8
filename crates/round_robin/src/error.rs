//! Scheduling error types

use thiserror::Error;

use crate::player::PlayerNumber;

/// Errors returned by the scheduler and schedule lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid player count {requested}: at least 2 players are required")]
    InvalidPlayerCount { requested: u32 },

    #[error("round {round} out of range: schedule has rounds 1..={rounds}")]
    RoundOutOfRange { round: u32, rounds: u32 },

    #[error("unknown player {player}: players are numbered 1..={players}")]
    UnknownPlayer { player: PlayerNumber, players: u32 },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
