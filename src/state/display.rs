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

use std::fmt;

use crate::action::Action;
use crate::state::{State, OPPONENT, TO_MOVE};

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\n   ")?;
        for col in 0..self.cols() {
            write!(f, "{:>3}", col)?;
        }
        for row in 0..self.rows() {
            write!(f, "\n{:>3}", row)?;
            for col in 0..self.cols() {
                let action = Action::new(row, col);
                write!(f, "  {}", if self.has_stone(TO_MOVE, action) {
                    'X'
                } else if self.has_stone(OPPONENT, action) {
                    'O'
                } else {
                    '.'
                })?;
            }
        }
        Ok(())
    }
}
