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
use crate::analysis::search::mctsearch::{MctsConfig, Statistics, TreeNode};
use crate::error::{Error, Result};
use crate::resolution::Resolution;
use crate::state::State;

/// A plain-rollout node.
///
/// The value comes from a random playout at expansion, and actions are
/// selected by UCB1: `Q(a) + C * sqrt(ln(ΣN + 1) / (N(a) + ε))`.  Unvisited
/// actions score far above visited ones, so every action is tried once
/// before any is tried twice.
#[derive(Clone, Debug)]
pub struct UctNode {
    statistics: Statistics,
    value: f32,
    terminal: bool,
    exploration: f32,
    epsilon: f32,
}

impl UctNode {
    pub fn new(state: &State, value: f32, config: &MctsConfig) -> UctNode {
        UctNode {
            statistics: Statistics::new(state),
            value: value.max(-1.0).min(1.0),
            terminal: false,
            exploration: config.exploration,
            epsilon: config.epsilon,
        }
    }

    pub fn terminal(state: &State, resolution: Resolution, config: &MctsConfig) -> UctNode {
        UctNode {
            statistics: Statistics::new(state),
            value: resolution.value(),
            terminal: true,
            exploration: config.exploration,
            epsilon: config.epsilon,
        }
    }
}

impl TreeNode for UctNode {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn value(&self) -> f32 {
        self.value
    }

    fn find_action(&mut self) -> Result<Action> {
        if self.terminal {
            return Err(Error::TerminalNode);
        }

        let exploration = self.exploration;
        let epsilon = self.epsilon;
        let log_total = (self.statistics.total_visits() as f32 + 1.0).ln();

        self.statistics.select(|action, statistics| {
            let visits = statistics.visits(action) as f32;
            statistics.mean_value(action) + exploration * (log_total / (visits + epsilon)).sqrt()
        })
    }

    fn update(&mut self, value: f32) -> Result<()> {
        if self.terminal {
            return Err(Error::TerminalNode);
        }
        self.statistics.record(value)
    }

    fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
