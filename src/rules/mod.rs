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

//! The rules collaborator consumed by the search.

use crate::action::Action;
use crate::error::Result;
use crate::resolution::Resolution;
use crate::state::State;

/// Applies moves and reports whether they end the game.
pub trait Rules {
    /// Plays `action` for the player to move in `state`.
    ///
    /// Returns the resulting state from the next player's side, and the
    /// resolution caused by the move, if any.  `state` itself is not modified.
    ///
    /// # Errors
    /// Fails if `action` is off the board or its cell is occupied.
    fn apply(&self, state: &State, action: Action) -> Result<(State, Option<Resolution>)>;
}

impl<'a, R> Rules for &'a R where
    R: Rules {
    fn apply(&self, state: &State, action: Action) -> Result<(State, Option<Resolution>)> {
        (**self).apply(state, action)
    }
}

pub use self::gomoku::Gomoku;

mod gomoku;
