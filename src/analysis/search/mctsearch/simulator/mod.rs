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

use crate::error::Result;
use crate::state::State;

/// Estimates the value of a state by playing it out.
pub trait Simulator {
    /// Returns the outcome of a playout from `state` for the player to move there:
    /// 1 for a win, -1 for a loss, 0 for a tie.
    fn simulate(&mut self, state: &State) -> Result<f32>;
}

pub use self::random::RandomSimulator;

mod random;
