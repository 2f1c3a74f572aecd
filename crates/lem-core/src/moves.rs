//! The move log produced by the scheduler.
//!
//! A [`MoveLog`] is an ordered sequence of [`Turn`]s.  Turn `k` (1-based in
//! output, index `k - 1` here) holds one [`Move`] per ant that advanced
//! during that turn, sorted by ascending [`AntId`].
//!
//! Room references are `RoomId`s; rendering to `L<id>-<room>` text needs the
//! colony's name table and lives in `lem-io`.

use crate::{AntId, RoomId};

/// One ant's single-step advance.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub ant: AntId,
    /// Room the ant entered.
    pub room: RoomId,
}

/// All moves made in one turn.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub moves: Vec<Move>,
}

impl Turn {
    /// Build a turn, sorting `moves` into presentation order (ascending ant).
    pub fn from_moves(mut moves: Vec<Move>) -> Self {
        moves.sort_unstable_by_key(|m| m.ant);
        Self { moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a Turn {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// The complete schedule: one entry per turn, in order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveLog {
    pub turns: Vec<Turn>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Number of turns until every ant reached the exit.
    pub fn makespan(&self) -> usize {
        self.turns.len()
    }

    /// Total number of moves over all turns.
    pub fn move_count(&self) -> usize {
        self.turns.iter().map(Turn::len).sum()
    }

    /// Rooms entered by `ant`, in turn order.
    pub fn path_of(&self, ant: AntId) -> Vec<RoomId> {
        self.turns
            .iter()
            .flat_map(|t| t.iter())
            .filter(|m| m.ant == ant)
            .map(|m| m.room)
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }
}
