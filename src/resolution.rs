//
// This file is part of gomoku_mcts.
//
// gomoku_mcts is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// gomoku_mcts is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with gomoku_mcts. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2016-2017 Chris Foster
//

/// The ways a game can end.
///
/// A resolution is always reported by the move that caused it, so `Win` means
/// the player who just moved has won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Resolution {
    /// The last move completed a winning line.
    Win,
    /// The board is full and nobody has a winning line.
    Tie,
}

impl Resolution {
    pub fn is_win(&self) -> bool {
        *self == Resolution::Win
    }

    pub fn is_draw(&self) -> bool {
        *self == Resolution::Tie
    }

    /// The fixed value of a finished game for the player to move in the
    /// resulting state, who is never the player that just won.
    pub fn value(&self) -> f32 {
        match *self {
            Resolution::Win => -1.0,
            Resolution::Tie => 0.0,
        }
    }
}
