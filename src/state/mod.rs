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

use ndarray::{Array2, Array3};

use crate::action::Action;
use crate::error::{Error, Result};

pub use self::bitboard::Bitboard;

/// Index of the grid belonging to the player about to move.
pub const TO_MOVE: usize = 0;
/// Index of the grid belonging to the player who moved last.
pub const OPPONENT: usize = 1;

/// The canonical state of the board.
///
/// A state holds two same-shape occupancy grids.  Grid `TO_MOVE` always
/// belongs to the player about to move, so playing a stone swaps the grids
/// and the resulting state is seen from the other player's side.  Two
/// positions that look the same to the player to move are equal and hash
/// the same, which is what the search keys its nodes on.
///
/// No cell is ever set in both grids.  A cell is a legal action exactly when
/// it is empty in both.
///
/// # Example
///
/// ```rust
/// # use gomoku_mcts::{Action, State};
/// let state = State::square(5).unwrap();
/// let next = state.play(Action::new(2, 2)).unwrap();
///
/// assert!(!next.is_legal(Action::new(2, 2)));
/// assert_eq!(next.legal_count(), 24);
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct State {
    rows: usize,
    cols: usize,
    grids: [Bitboard; 2],
}

impl State {
    /// Creates an empty `rows` by `cols` board.
    pub fn new(rows: usize, cols: usize) -> Result<State> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows: rows, cols: cols });
        }

        Ok(State {
            rows: rows,
            cols: cols,
            grids: [Bitboard::new(rows * cols), Bitboard::new(rows * cols)],
        })
    }

    /// Creates an empty square board.
    pub fn square(size: usize) -> Result<State> {
        State::new(size, size)
    }

    /// Builds a state from its wire shape: a `[2, rows, cols]` array of 0s and 1s,
    /// grid 0 being the player to move.
    pub fn from_array(array: &Array3<u8>) -> Result<State> {
        let (grids, rows, cols) = array.dim();
        if grids != 2 {
            return Err(Error::MalformedState(format!("expected 2 grids, found {}", grids)));
        }

        let mut state = State::new(rows, cols)?;
        for ((grid, row, col), &value) in array.indexed_iter() {
            match value {
                0 => (),
                1 => state.grids[grid].set(row * cols + col),
                _ => return Err(Error::MalformedState(format!(
                    "cell ({}, {}) of grid {} holds {}", row, col, grid, value,
                ))),
            }
        }

        if state.grids[TO_MOVE].intersects(&state.grids[OPPONENT]) {
            return Err(Error::MalformedState(String::from("a cell is occupied by both players")));
        }

        Ok(state)
    }

    /// The inverse of `from_array`.
    pub fn to_array(&self) -> Array3<u8> {
        Array3::from_shape_fn((2, self.rows, self.cols), |(grid, row, col)| {
            self.grids[grid].get(row * self.cols + col) as u8
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`, the shape of every per-action grid derived from this state.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, action: Action) -> bool {
        action.row < self.rows && action.col < self.cols
    }

    pub fn check_bounds(&self, action: Action) -> Result<()> {
        if self.contains(action) {
            Ok(())
        } else {
            Err(Error::OutOfBounds { action: action, rows: self.rows, cols: self.cols })
        }
    }

    pub fn is_occupied(&self, action: Action) -> Result<bool> {
        self.check_bounds(action)?;
        Ok(self.has_stone(TO_MOVE, action) || self.has_stone(OPPONENT, action))
    }

    /// Returns `true` if `action` is on the board and its cell is empty.
    pub fn is_legal(&self, action: Action) -> bool {
        self.is_occupied(action).map(|occupied| !occupied).unwrap_or(false)
    }

    /// Returns `true` if `grid` has a stone at `action`.  Cells off the board hold no stones.
    pub fn has_stone(&self, grid: usize, action: Action) -> bool {
        self.contains(action) && self.grids[grid].get(action.index(self.cols))
    }

    /// The empty cells in row-major order.
    pub fn legal_actions<'a>(&'a self) -> impl Iterator<Item = Action> + 'a {
        let cols = self.cols;
        (0..self.cells())
            .filter(move |&index| !self.grids[TO_MOVE].get(index) && !self.grids[OPPONENT].get(index))
            .map(move |index| Action::from_index(index, cols))
    }

    pub fn legal_mask(&self) -> Array2<bool> {
        Array2::from_shape_fn(self.shape(), |(row, col)| self.is_legal(Action::new(row, col)))
    }

    pub fn legal_count(&self) -> usize {
        self.cells() - self.stone_count()
    }

    pub fn stone_count(&self) -> usize {
        self.grids[TO_MOVE].get_population() + self.grids[OPPONENT].get_population()
    }

    pub fn is_full(&self) -> bool {
        self.stone_count() == self.cells()
    }

    /// Places a stone for the player to move and returns the resulting state,
    /// seen from the other player's side.
    pub fn play(&self, action: Action) -> Result<State> {
        if self.is_occupied(action)? {
            return Err(Error::Occupied(action));
        }

        let mut next = self.clone();
        next.grids[TO_MOVE].set(action.index(self.cols));
        next.grids.swap(TO_MOVE, OPPONENT);
        Ok(next)
    }
}

mod bitboard;
mod display;

#[cfg(test)]
mod test {
    use ndarray::Array3;

    use super::*;

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert!(matches!(State::new(0, 5), Err(Error::InvalidDimensions { rows: 0, cols: 5 })));
        assert!(State::new(3, 4).is_ok());
    }

    #[test]
    fn test_play_swaps_perspective() {
        let state = State::square(3).unwrap();
        let next = state.play(Action::new(1, 1)).unwrap();

        assert!(next.has_stone(OPPONENT, Action::new(1, 1)));
        assert!(!next.has_stone(TO_MOVE, Action::new(1, 1)));
        assert_eq!(state.stone_count(), 0);

        let after = next.play(Action::new(0, 0)).unwrap();
        assert!(after.has_stone(TO_MOVE, Action::new(1, 1)));
        assert!(after.has_stone(OPPONENT, Action::new(0, 0)));
    }

    #[test]
    fn test_play_rejects_occupied_and_out_of_bounds() {
        let state = State::square(3).unwrap().play(Action::new(0, 2)).unwrap();

        assert!(matches!(state.play(Action::new(0, 2)), Err(Error::Occupied(_))));
        assert!(matches!(state.play(Action::new(3, 0)), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_legal_actions_are_row_major() {
        let state = State::new(2, 3).unwrap()
            .play(Action::new(0, 1)).unwrap()
            .play(Action::new(1, 0)).unwrap();

        let actions = state.legal_actions().collect::<Vec<_>>();
        assert_eq!(actions, vec![
            Action::new(0, 0),
            Action::new(0, 2),
            Action::new(1, 1),
            Action::new(1, 2),
        ]);
        assert_eq!(state.legal_count(), 4);
        assert!(!state.legal_mask()[[0, 1]]);
    }

    #[test]
    fn test_array_round_trip() {
        let state = State::new(3, 4).unwrap()
            .play(Action::new(2, 3)).unwrap()
            .play(Action::new(0, 0)).unwrap();

        let array = state.to_array();
        assert_eq!(array.dim(), (2, 3, 4));
        assert_eq!(array[[0, 2, 3]], 1);
        assert_eq!(array[[1, 0, 0]], 1);
        assert_eq!(State::from_array(&array).unwrap(), state);
    }

    #[test]
    fn test_from_array_rejects_malformed_input() {
        let mut overlap = Array3::<u8>::zeros((2, 3, 3));
        overlap[[0, 1, 1]] = 1;
        overlap[[1, 1, 1]] = 1;
        assert!(matches!(State::from_array(&overlap), Err(Error::MalformedState(_))));

        let mut bad_value = Array3::<u8>::zeros((2, 3, 3));
        bad_value[[1, 0, 2]] = 2;
        assert!(matches!(State::from_array(&bad_value), Err(Error::MalformedState(_))));

        let three_grids = Array3::<u8>::zeros((3, 3, 3));
        assert!(matches!(State::from_array(&three_grids), Err(Error::MalformedState(_))));
    }

    #[test]
    fn test_full_board() {
        let mut state = State::new(1, 2).unwrap();
        assert!(!state.is_full());
        state = state.play(Action::new(0, 0)).unwrap().play(Action::new(0, 1)).unwrap();
        assert!(state.is_full());
        assert_eq!(state.legal_actions().count(), 0);
    }

    #[test]
    fn test_display_marks_player_to_move() {
        let state = State::square(2).unwrap().play(Action::new(0, 0)).unwrap();
        let text = format!("{}", state);
        assert!(text.contains("O  ."));
    }
}
