//! Round pairing by congruences modulo `n - 1`

use tracing::{debug, info, trace};

use crate::congruence::is_congruent_modulo;
use crate::error::{ScheduleError, ScheduleResult};
use crate::player::{PlayerCount, PlayerNumber, PlayerTable};
use crate::schedule::{Pairing, Round, Schedule};

/// Computes round-robin pairings for a fixed player count
#[derive(Debug, Clone)]
pub struct Scheduler {
    count: PlayerCount,
}

impl Scheduler {
    /// Create a scheduler for `player_count` players.
    ///
    /// Odd counts get a bye in the last slot; counts below 2 are rejected.
    pub fn new(player_count: u32) -> ScheduleResult<Self> {
        let count = PlayerCount::new(player_count)?;
        debug!(
            requested = count.requested(),
            total = count.total(),
            bye = ?count.bye(),
            "scheduler initialized"
        );
        Ok(Self { count })
    }

    pub fn player_count(&self) -> PlayerCount {
        self.count
    }

    pub fn num_rounds(&self) -> u32 {
        self.count.num_rounds()
    }

    /// Pair a single round on its own opponent table
    pub fn round(&self, round: u32) -> ScheduleResult<Round> {
        let rounds = self.num_rounds();
        if !(1..=rounds).contains(&round) {
            return Err(ScheduleError::RoundOutOfRange { round, rounds });
        }

        let mut table = PlayerTable::new(self.count.total());
        Ok(self.play_round(&mut table, round))
    }

    /// Iterate over every round in order, reusing one opponent table
    pub fn rounds(&self) -> Rounds<'_> {
        Rounds {
            scheduler: self,
            table: PlayerTable::new(self.count.total()),
            next: 1,
        }
    }

    /// Compute the whole tournament
    pub fn schedule(&self) -> Schedule {
        let rounds: Vec<Round> = self.rounds().collect();
        info!(
            players = self.count.requested(),
            bye = ?self.count.bye(),
            rounds = rounds.len(),
            "schedule computed"
        );
        Schedule {
            player_count: self.count,
            rounds,
        }
    }

    fn play_round(&self, table: &mut PlayerTable, round: u32) -> Round {
        table.reset();
        for player in 1..=self.count.total() {
            self.search_for_opponent(table, player, round);
        }

        let round = self.emit(table, round);
        debug!(
            round = round.number,
            pairings = round.pairings.len(),
            idle = ?round.idle,
            "round paired"
        );
        round
    }

    /// Assign `player` an opponent unless an earlier player already took it
    fn search_for_opponent(&self, table: &mut PlayerTable, player: PlayerNumber, round: u32) {
        if table.is_assigned(player) {
            return;
        }

        let last = self.count.total();
        if self.plays_last_player(player, round) {
            trace!(round, player, opponent = last, "paired with last player");
            table.pair(player, last);
            return;
        }

        // Every candidate below `player` was already paired by an earlier
        // iteration, so the scan only looks upwards.
        let opponent = (player + 1..=last).find(|&candidate| {
            !table.is_assigned(candidate) && self.is_matching_pair(player, candidate, round)
        });
        debug_assert!(
            opponent.is_some(),
            "no opponent for player {player} in round {round}"
        );

        if let Some(opponent) = opponent {
            trace!(round, player, opponent, "paired");
            table.pair(player, opponent);
        }
    }

    /// `2x ≡ r (mod n - 1)`: `x` plays the last player, `n`
    fn plays_last_player(&self, player: PlayerNumber, round: u32) -> bool {
        is_congruent_modulo(
            2 * u64::from(player),
            u64::from(round),
            u64::from(self.count.modulus()),
        )
    }

    /// `x + y ≡ r (mod n - 1)`
    fn is_matching_pair(&self, player: PlayerNumber, candidate: PlayerNumber, round: u32) -> bool {
        is_congruent_modulo(
            u64::from(player) + u64::from(candidate),
            u64::from(round),
            u64::from(self.count.modulus()),
        )
    }

    /// Report each real pairing once, from its lower-numbered side
    fn emit(&self, table: &PlayerTable, round: u32) -> Round {
        let mut pairings = Vec::new();
        let mut idle = None;

        for player in table.iter() {
            if self.count.is_bye(player.number) {
                continue;
            }
            let Some(opponent) = player.opponent else {
                continue;
            };
            if self.count.is_bye(opponent) {
                idle = Some(player.number);
                continue;
            }
            if opponent > player.number {
                pairings.push(Pairing {
                    player: player.number,
                    opponent,
                });
            }
        }

        Round {
            number: round,
            pairings,
            idle,
        }
    }
}

/// Iterator over a scheduler's rounds, see [`Scheduler::rounds`]
#[derive(Debug)]
pub struct Rounds<'a> {
    scheduler: &'a Scheduler,
    table: PlayerTable,
    next: u32,
}

impl Iterator for Rounds<'_> {
    type Item = Round;

    fn next(&mut self) -> Option<Round> {
        if self.next > self.scheduler.num_rounds() {
            return None;
        }
        let round = self.scheduler.play_round(&mut self.table, self.next);
        self.next += 1;
        Some(round)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.scheduler.num_rounds() + 1).saturating_sub(self.next);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Compute the full round-robin schedule for `player_count` players
pub fn compute_schedule(player_count: u32) -> ScheduleResult<Schedule> {
    Ok(Scheduler::new(player_count)?.schedule())
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
