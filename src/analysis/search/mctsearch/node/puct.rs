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
use crate::analysis::Evaluation;
use crate::analysis::search::mctsearch::{MctsConfig, Statistics, TreeNode};
use crate::error::{Error, Result};
use crate::resolution::Resolution;
use crate::state::State;

/// An evaluator-guided node.
///
/// Selects by `Q(a) + C * P(a) * sqrt(ΣN + ε) / (1 + N(a))`, where `P` is the
/// prior handed out by the evaluator when the node was expanded.
#[derive(Clone, Debug)]
pub struct PuctNode {
    statistics: Statistics,
    priors: Array2<f32>,
    value: f32,
    terminal: bool,
    exploration: f32,
    epsilon: f32,
}

impl PuctNode {
    /// Creates a node from an evaluation of `state`.
    ///
    /// Priors on occupied cells are dropped and the remainder renormalised; if
    /// no prior mass is left on a legal cell, the prior becomes uniform.  The
    /// value is clamped to [-1, 1].
    pub fn new(state: &State, evaluation: Evaluation, config: &MctsConfig) -> Result<PuctNode> {
        if evaluation.priors.dim() != state.shape() {
            return Err(Error::Evaluation(format!(
                "prior shape {:?} does not match the {}x{} board",
                evaluation.priors.dim(), state.rows(), state.cols(),
            )));
        }

        if !evaluation.value.is_finite() {
            return Err(Error::Evaluation(format!("value {} is not finite", evaluation.value)));
        }

        if evaluation.priors.iter().any(|prior| !prior.is_finite() || *prior < 0.0) {
            return Err(Error::Evaluation(String::from("priors must be finite and non-negative")));
        }

        let legal = state.legal_mask();
        let mut priors = Array2::from_shape_fn(state.shape(), |index| {
            if legal[index] { evaluation.priors[index] } else { 0.0 }
        });

        let mass = priors.sum();
        if mass > 0.0 {
            priors /= mass;
        } else if state.legal_count() > 0 {
            let uniform = 1.0 / state.legal_count() as f32;
            priors = legal.mapv(|legal| if legal { uniform } else { 0.0 });
        }

        Ok(PuctNode {
            statistics: Statistics::new(state),
            priors: priors,
            value: evaluation.value.max(-1.0).min(1.0),
            terminal: false,
            exploration: config.exploration,
            epsilon: config.epsilon,
        })
    }

    /// Creates a finished-game node whose value is fixed by `resolution`.
    pub fn terminal(state: &State, resolution: Resolution, config: &MctsConfig) -> PuctNode {
        PuctNode {
            statistics: Statistics::new(state),
            priors: Array2::zeros(state.shape()),
            value: resolution.value(),
            terminal: true,
            exploration: config.exploration,
            epsilon: config.epsilon,
        }
    }

    pub fn prior(&self, action: Action) -> f32 {
        self.priors.get((action.row, action.col)).cloned().unwrap_or(0.0)
    }
}

impl TreeNode for PuctNode {
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

        let priors = &self.priors;
        let exploration = self.exploration;
        let tree_exploration_value = (self.statistics.total_visits() as f32 + self.epsilon).sqrt();

        self.statistics.select(|action, statistics| {
            let visits = statistics.visits(action) as f32;
            statistics.mean_value(action)
                + exploration * priors[[action.row, action.col]] * tree_exploration_value / (1.0 + visits)
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
