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

use ndarray::Array2;

use crate::action::Action;
use crate::error::{Error, Result};
use crate::state::State;

/// A search-tree record for one canonical state.
///
/// Values are always seen from the player to move at the node's state.
pub trait TreeNode {
    /// Returns `true` if the game is over at this node.
    fn is_terminal(&self) -> bool;

    /// The value of the node's state for the player to move there, in [-1, 1].
    fn value(&self) -> f32;

    /// Selects the legal action with the highest upper-confidence score and
    /// remembers it for the next `update`.  Ties go to the first action in
    /// row-major order.
    ///
    /// # Errors
    /// `Error::TerminalNode` on terminal nodes, `Error::NoLegalActions` if every cell is taken.
    fn find_action(&mut self) -> Result<Action>;

    /// Folds `value`, seen from this node's player, into the statistics of
    /// the action chosen by the last `find_action`.
    ///
    /// # Errors
    /// `Error::TerminalNode` on terminal nodes, `Error::NoPendingAction` if no
    /// action was selected since the last update.
    fn update(&mut self, value: f32) -> Result<()>;

    /// Per-action visit counts and mean values.
    fn statistics(&self) -> &Statistics;
}

/// Per-action bookkeeping shared by the node implementations.
#[derive(Clone, Debug)]
pub struct Statistics {
    legal: Array2<bool>,
    visits: Array2<u32>,
    values: Array2<f32>,
    total_visits: u32,
    pending: Option<Action>,
}

impl Statistics {
    pub fn new(state: &State) -> Statistics {
        Statistics {
            legal: state.legal_mask(),
            visits: Array2::zeros(state.shape()),
            values: Array2::zeros(state.shape()),
            total_visits: 0,
            pending: None,
        }
    }

    pub fn is_legal(&self, action: Action) -> bool {
        self.legal.get((action.row, action.col)).cloned().unwrap_or(false)
    }

    pub fn visits(&self, action: Action) -> u32 {
        self.visits.get((action.row, action.col)).cloned().unwrap_or(0)
    }

    /// The mean backed-up value of `action`, 0 if it was never visited.
    pub fn mean_value(&self, action: Action) -> f32 {
        self.values.get((action.row, action.col)).cloned().unwrap_or(0.0)
    }

    pub fn total_visits(&self) -> u32 {
        self.total_visits
    }

    /// Visit counts for every cell; occupied cells are always 0.
    pub fn visit_counts(&self) -> &Array2<u32> {
        &self.visits
    }

    pub fn pending(&self) -> Option<Action> {
        self.pending
    }

    /// Scores every legal action and keeps the first best one in row-major order.
    pub fn select<F>(&mut self, mut score: F) -> Result<Action> where
        F: FnMut(Action, &Statistics) -> f32 {
        let mut best: Option<(Action, f32)> = None;

        for ((row, col), &legal) in self.legal.indexed_iter() {
            if !legal {
                continue;
            }

            let action = Action::new(row, col);
            let action_score = score(action, self);
            if best.map_or(true, |(_, best_score)| action_score > best_score) {
                best = Some((action, action_score));
            }
        }

        match best {
            Some((action, _)) => {
                self.pending = Some(action);
                Ok(action)
            },
            None => Err(Error::NoLegalActions),
        }
    }

    /// Adds one visit with `value` to the pending action.
    pub fn record(&mut self, value: f32) -> Result<()> {
        let action = self.pending.take().ok_or(Error::NoPendingAction)?;
        let index = (action.row, action.col);

        let visits = self.visits[index] + 1;
        let old_value = self.values[index];
        self.values[index] = old_value + (value - old_value) / visits as f32;
        self.visits[index] = visits;
        self.total_visits += 1;
        Ok(())
    }
}

pub use self::puct::PuctNode;
pub use self::uct::UctNode;

mod puct;
mod uct;
