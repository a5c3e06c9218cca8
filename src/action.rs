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

/// The placement of a stone on an empty cell.
///
/// Actions carry no owner; the stone always belongs to the player to move in
/// the state the action is applied to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Action {
        Action {
            row: row,
            col: col,
        }
    }

    /// The row-major index of this action on a board with `cols` columns.
    pub fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// The inverse of `index`.
    pub fn from_index(index: usize, cols: usize) -> Action {
        Action::new(index / cols, index % cols)
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Action {
        Action::new(row, col)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
