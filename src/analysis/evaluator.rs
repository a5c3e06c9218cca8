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

use crate::error::Result;
use crate::state::State;

/// The evaluator's opinion of a freshly expanded state.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Prior move probabilities, one per cell.  Must have the board's shape.
    pub priors: Array2<f32>,
    /// The expected outcome for the player to move, in [-1, 1].
    pub value: f32,
}

/// Evaluates a state the search has not seen before.
///
/// The search calls `evaluate` once per expanded state and caches the result
/// on the node; it never asks about the same state twice in one session.
///
/// Closures of the form `FnMut(&State) -> Result<Evaluation>` are evaluators:
///
/// ```rust
/// # use gomoku_mcts::{Evaluation, Evaluator, Result, State};
/// let mut evaluator = |state: &State| -> Result<Evaluation> {
///     Ok(Evaluation {
///         priors: state.legal_mask().mapv(|legal| legal as u8 as f32),
///         value: 0.0,
///     })
/// };
///
/// let evaluation = evaluator.evaluate(&State::square(3).unwrap()).unwrap();
/// assert_eq!(evaluation.priors.sum(), 9.0);
/// ```
pub trait Evaluator {
    fn evaluate(&mut self, state: &State) -> Result<Evaluation>;
}

impl<F> Evaluator for F where
    F: FnMut(&State) -> Result<Evaluation> {
    fn evaluate(&mut self, state: &State) -> Result<Evaluation> {
        self(state)
    }
}

/// Spreads the prior evenly over the legal cells and reports a fixed value.
#[derive(Clone, Copy, Debug)]
pub struct UniformEvaluator {
    value: f32,
}

impl UniformEvaluator {
    pub fn new(value: f32) -> UniformEvaluator {
        UniformEvaluator {
            value: value,
        }
    }
}

impl Default for UniformEvaluator {
    fn default() -> UniformEvaluator {
        UniformEvaluator::new(0.0)
    }
}

impl Evaluator for UniformEvaluator {
    fn evaluate(&mut self, state: &State) -> Result<Evaluation> {
        let legal_count = state.legal_count();
        let prior = if legal_count > 0 { 1.0 / legal_count as f32 } else { 0.0 };

        Ok(Evaluation {
            priors: state.legal_mask().mapv(|legal| if legal { prior } else { 0.0 }),
            value: self.value,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::action::Action;
    use super::*;

    #[test]
    fn test_uniform_priors_skip_occupied_cells() {
        let state = State::square(2).unwrap().play(Action::new(0, 1)).unwrap();
        let evaluation = UniformEvaluator::new(0.5).evaluate(&state).unwrap();

        assert_eq!(evaluation.value, 0.5);
        assert_eq!(evaluation.priors[[0, 1]], 0.0);
        assert!((evaluation.priors[[1, 1]] - 1.0 / 3.0).abs() < 1e-6);
        assert!((evaluation.priors.sum() - 1.0).abs() < 1e-6);
    }
}
