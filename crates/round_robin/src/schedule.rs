//! Schedule results and text rendering

use serde::Serialize;
use std::fmt;

use crate::error::{ScheduleError, ScheduleResult};
use crate::player::{PlayerCount, PlayerNumber};

/// Two real players meeting in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pairing {
    /// Lower-numbered side, which found the pairing
    pub player: PlayerNumber,
    pub opponent: PlayerNumber,
}

impl Pairing {
    pub fn involves(&self, player: PlayerNumber) -> bool {
        self.player == player || self.opponent == player
    }

    /// The other side of the pairing, if `player` is in it
    pub fn other(&self, player: PlayerNumber) -> Option<PlayerNumber> {
        if self.player == player {
            Some(self.opponent)
        } else if self.opponent == player {
            Some(self.player)
        } else {
            None
        }
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.player, self.opponent)
    }
}

/// One round of the tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    /// Round number, starting at 1
    pub number: u32,
    /// Real pairings, ordered by the lower player number
    pub pairings: Vec<Pairing>,
    /// Real player drawn against the bye, if any
    pub idle: Option<PlayerNumber>,
}

impl Round {
    pub fn opponent_of(&self, player: PlayerNumber) -> Option<PlayerNumber> {
        self.pairings.iter().find_map(|pairing| pairing.other(player))
    }

    pub fn is_idle(&self, player: PlayerNumber) -> bool {
        self.idle == Some(player)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Round {} :", self.number)?;
        for pairing in &self.pairings {
            write!(f, " {}", pairing)?;
        }
        Ok(())
    }
}

/// Complete round-robin schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub player_count: PlayerCount,
    /// Rounds in order, `rounds[0]` is round 1
    pub rounds: Vec<Round>,
}

impl Schedule {
    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn round(&self, number: u32) -> ScheduleResult<&Round> {
        let rounds = self.player_count.num_rounds();
        number
            .checked_sub(1)
            .and_then(|index| self.rounds.get(usize::try_from(index).ok()?))
            .ok_or(ScheduleError::RoundOutOfRange {
                round: number,
                rounds,
            })
    }

    pub fn bye(&self) -> Option<PlayerNumber> {
        self.player_count.bye()
    }

    /// Opponent of `player` in each round, `None` where the player sits out
    pub fn opponents_of(&self, player: PlayerNumber) -> ScheduleResult<Vec<Option<PlayerNumber>>> {
        self.check_player(player)?;
        Ok(self
            .rounds
            .iter()
            .map(|round| round.opponent_of(player))
            .collect())
    }

    /// Rounds in which `player` drew the bye
    pub fn idle_rounds(&self, player: PlayerNumber) -> ScheduleResult<Vec<u32>> {
        self.check_player(player)?;
        Ok(self
            .rounds
            .iter()
            .filter(|round| round.is_idle(player))
            .map(|round| round.number)
            .collect())
    }

    /// Generate the text rendering, one line per round
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        for round in &self.rounds {
            report.push_str(&round.to_string());
            report.push('\n');
        }
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        print!("{}", self.generate_report());
    }

    fn check_player(&self, player: PlayerNumber) -> ScheduleResult<()> {
        if self.player_count.is_real(player) {
            Ok(())
        } else {
            Err(ScheduleError::UnknownPlayer {
                player,
                players: self.player_count.requested(),
            })
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate_report())
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
