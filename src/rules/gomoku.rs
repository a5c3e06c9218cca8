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

use crate::action::Action;
use crate::error::{Error, Result};
use crate::resolution::Resolution;
use crate::rules::Rules;
use crate::state::{State, OPPONENT};

/// Horizontal, vertical, diagonal and anti-diagonal.
static DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Free-style gomoku: the first player to complete an unbroken line of
/// `win_length` stones wins, and a full board without one is a tie.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Gomoku {
    win_length: usize,
}

impl Gomoku {
    /// Five in a row.
    pub fn new() -> Gomoku {
        Gomoku {
            win_length: 5,
        }
    }

    pub fn with_win_length(win_length: usize) -> Result<Gomoku> {
        if win_length == 0 {
            return Err(Error::InvalidConfig(String::from("win length must be at least 1")));
        }

        Ok(Gomoku {
            win_length: win_length,
        })
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Checks only the lines through `action`, the cell just played in `state`.
    /// The stone belongs to the player who moved last, so it sits in the opponent grid.
    fn completes_line(&self, state: &State, action: Action) -> bool {
        DIRECTIONS.iter().any(|&direction| {
            let line = self.line_through(state, action, direction);
            contains_run(&line, self.win_length)
        })
    }

    /// The mover's occupancy along the on-board part of the line through `action`,
    /// reaching at most `win_length - 1` cells either side.
    fn line_through(&self, state: &State, action: Action, (d_row, d_col): (isize, isize)) -> Vec<u8> {
        let reach = self.win_length as isize - 1;
        (-reach..reach + 1).filter_map(|step| {
            let row = action.row as isize + step * d_row;
            let col = action.col as isize + step * d_col;
            if row < 0 || col < 0 {
                return None;
            }

            let cell = Action::new(row as usize, col as usize);
            if state.contains(cell) {
                Some(state.has_stone(OPPONENT, cell) as u8)
            } else {
                None
            }
        }).collect()
    }
}

impl Default for Gomoku {
    fn default() -> Gomoku {
        Gomoku::new()
    }
}

impl Rules for Gomoku {
    fn apply(&self, state: &State, action: Action) -> Result<(State, Option<Resolution>)> {
        let next = state.play(action)?;

        let resolution = if self.completes_line(&next, action) {
            Some(Resolution::Win)
        } else if next.is_full() {
            Some(Resolution::Tie)
        } else {
            None
        };

        Ok((next, resolution))
    }
}

/// Slides a window of `length` cells over `line`, keeping a running sum.
fn contains_run(line: &[u8], length: usize) -> bool {
    if line.len() < length {
        return false;
    }

    let mut sum = line[..length].iter().map(|&cell| cell as usize).sum::<usize>();
    if sum == length {
        return true;
    }

    for i in length..line.len() {
        sum = sum + line[i] as usize - line[i - length] as usize;
        if sum == length {
            return true;
        }
    }

    false
}
