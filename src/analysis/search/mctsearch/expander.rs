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

use rand::Rng;

use crate::analysis::Evaluator;
use crate::analysis::search::mctsearch::{MctsConfig, PuctNode, RandomSimulator, Simulator, TreeNode, UctNode};
use crate::error::Result;
use crate::resolution::Resolution;
use crate::rules::Rules;
use crate::state::State;
use crate::util::JKiss32Rng;

/// Builds the node for a state the search has just reached for the first time.
///
/// The expander decides which kind of node the search runs on; `MctSearch`
/// only ever talks to the result through `TreeNode`.
pub trait Expander {
    type Node: TreeNode;

    /// Creates a node for `state`.  When `resolution` is present the node is
    /// terminal and its value is fixed by the resolution.
    fn expand(&mut self, state: &State, resolution: Option<Resolution>, config: &MctsConfig) -> Result<Self::Node>;
}

/// Evaluator-guided expansion into `PuctNode`s.
#[derive(Clone, Debug)]
pub struct PriorExpander<E> where
    E: Evaluator {
    evaluator: E,
}

impl<E> PriorExpander<E> where
    E: Evaluator {
    pub fn new(evaluator: E) -> PriorExpander<E> {
        PriorExpander {
            evaluator: evaluator,
        }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl<E> Expander for PriorExpander<E> where
    E: Evaluator {
    type Node = PuctNode;

    fn expand(&mut self, state: &State, resolution: Option<Resolution>, config: &MctsConfig) -> Result<PuctNode> {
        match resolution {
            Some(resolution) => Ok(PuctNode::terminal(state, resolution, config)),
            None => {
                let evaluation = self.evaluator.evaluate(state)?;
                PuctNode::new(state, evaluation, config)
            },
        }
    }
}

/// Plain Monte Carlo expansion into `UctNode`s, valued by one random playout each.
#[derive(Clone)]
pub struct RolloutExpander<R, G = JKiss32Rng> where
    R: Rules,
    G: Rng {
    simulator: RandomSimulator<R, G>,
}

impl<R> RolloutExpander<R, JKiss32Rng> where
    R: Rules {
    pub fn new(rules: R) -> RolloutExpander<R, JKiss32Rng> {
        RolloutExpander::with_simulator(RandomSimulator::new(rules))
    }

    pub fn with_seed(rules: R, seed: u64) -> RolloutExpander<R, JKiss32Rng> {
        RolloutExpander::with_simulator(RandomSimulator::with_seed(rules, seed))
    }
}

impl<R, G> RolloutExpander<R, G> where
    R: Rules,
    G: Rng {
    pub fn with_simulator(simulator: RandomSimulator<R, G>) -> RolloutExpander<R, G> {
        RolloutExpander {
            simulator: simulator,
        }
    }
}

impl<R, G> Expander for RolloutExpander<R, G> where
    R: Rules,
    G: Rng {
    type Node = UctNode;

    fn expand(&mut self, state: &State, resolution: Option<Resolution>, config: &MctsConfig) -> Result<UctNode> {
        match resolution {
            Some(resolution) => Ok(UctNode::terminal(state, resolution, config)),
            None => {
                let value = self.simulator.simulate(state)?;
                Ok(UctNode::new(state, value, config))
            },
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use crate::analysis::{Evaluation, UniformEvaluator};
    use crate::rules::Gomoku;
    use super::*;

    #[test]
    fn test_terminal_expansion_skips_evaluator() {
        let calls = Cell::new(0);
        let evaluator = |state: &State| -> Result<Evaluation> {
            calls.set(calls.get() + 1);
            UniformEvaluator::new(0.0).evaluate(state)
        };
        let mut expander = PriorExpander::new(evaluator);
        let state = State::square(3).unwrap();
        let config = MctsConfig::default();

        let node = expander.expand(&state, Some(Resolution::Win), &config).unwrap();
        assert!(node.is_terminal());
        assert_eq!(calls.get(), 0);

        let node = expander.expand(&state, None, &config).unwrap();
        assert!(!node.is_terminal());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_rollout_expansion_values_playout() {
        // The only move wins for the player to move.
        let rules = Gomoku::with_win_length(2).unwrap();
        let state = State::new(1, 3).unwrap()
            .play(crate::action::Action::new(0, 0)).unwrap()
            .play(crate::action::Action::new(0, 2)).unwrap();

        let mut expander = RolloutExpander::with_seed(rules, 3);
        let node = expander.expand(&state, None, &MctsConfig::default()).unwrap();
        assert_eq!(node.value(), 1.0);

        let node = expander.expand(&state, Some(Resolution::Tie), &MctsConfig::default()).unwrap();
        assert!(node.is_terminal());
        assert_eq!(node.value(), 0.0);
    }
}
