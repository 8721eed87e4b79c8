//! Players and the bye-padded player count

use serde::Serialize;

use crate::error::{ScheduleError, ScheduleResult};

/// Player number, starting at 1
pub type PlayerNumber = u32;

/// Fewest players that still produce a round
pub const MIN_PLAYERS: u32 = 2;

/// Player count, padded to an even total with a bye when needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerCount {
    /// Count asked for by the caller
    requested: u32,
    /// Even total including the bye
    total: u32,
    /// Number of the phantom player, present only for odd requests
    bye: Option<PlayerNumber>,
}

impl PlayerCount {
    /// Validate `requested` and pad an odd count with a bye.
    ///
    /// The bye always takes the last slot, so it is the player that
    /// `2x ≡ r` pairs against.
    pub fn new(requested: u32) -> ScheduleResult<Self> {
        if requested < MIN_PLAYERS {
            return Err(ScheduleError::InvalidPlayerCount { requested });
        }

        let (total, bye) = if requested % 2 == 0 {
            (requested, None)
        } else {
            let total = requested
                .checked_add(1)
                .ok_or(ScheduleError::InvalidPlayerCount { requested })?;
            (total, Some(total))
        };

        Ok(Self {
            requested,
            total,
            bye,
        })
    }

    pub fn requested(&self) -> u32 {
        self.requested
    }

    /// Even number of slots, bye included
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn bye(&self) -> Option<PlayerNumber> {
        self.bye
    }

    pub fn is_bye(&self, player: PlayerNumber) -> bool {
        self.bye == Some(player)
    }

    /// Modulus for the pairing congruences
    pub fn modulus(&self) -> u32 {
        self.total - 1
    }

    /// One round per opponent
    pub fn num_rounds(&self) -> u32 {
        self.total - 1
    }

    /// Whether `player` is a real (non-bye) participant
    pub fn is_real(&self, player: PlayerNumber) -> bool {
        (1..=self.requested).contains(&player)
    }

    /// Real player numbers in increasing order
    pub fn real_players(&self) -> impl Iterator<Item = PlayerNumber> {
        1..=self.requested
    }
}

/// A player slot and its opponent for the round being paired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Player {
    pub number: PlayerNumber,
    /// `None` until assigned this round
    pub opponent: Option<PlayerNumber>,
}

/// Opponent table for one round, indexed by player number
#[derive(Debug, Clone)]
pub(crate) struct PlayerTable {
    players: Vec<Player>,
}

impl PlayerTable {
    /// Slots `1..=total`, all unassigned
    pub fn new(total: u32) -> Self {
        Self {
            players: (1..=total)
                .map(|number| Player {
                    number,
                    opponent: None,
                })
                .collect(),
        }
    }

    /// Clear every opponent before pairing a new round
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.opponent = None;
        }
    }

    pub fn opponent(&self, number: PlayerNumber) -> Option<PlayerNumber> {
        self.slot(number).and_then(|player| player.opponent)
    }

    pub fn is_assigned(&self, number: PlayerNumber) -> bool {
        self.opponent(number).is_some()
    }

    /// Record `a` and `b` as each other's opponent
    pub fn pair(&mut self, a: PlayerNumber, b: PlayerNumber) {
        debug_assert_ne!(a, b, "player paired with itself");
        debug_assert!(!self.is_assigned(a) && !self.is_assigned(b));

        if let Some(player) = self.slot_mut(a) {
            player.opponent = Some(b);
        }
        if let Some(player) = self.slot_mut(b) {
            player.opponent = Some(a);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    fn slot(&self, number: PlayerNumber) -> Option<&Player> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.players.get(index)
    }

    fn slot_mut(&mut self, number: PlayerNumber) -> Option<&mut Player> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.players.get_mut(index)
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
