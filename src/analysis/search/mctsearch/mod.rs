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

//! Monte Carlo tree search over canonical states.

use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::time::Instant;

use fnv::FnvHasher;
use ndarray::Array2;
use tracing::{debug, trace};

use crate::action::Action;
use crate::error::{Error, Result};
use crate::resolution::Resolution;
use crate::rules::Rules;
use crate::state::State;

/// The search engine.
///
/// Nodes live in an arena and are found through a map from canonical state
/// to arena index.  The map is one search session: it grows with every
/// expansion and is only ever emptied by `reset`.
///
/// # Example
///
/// ```rust
/// # use gomoku_mcts::{Gomoku, MctSearch, MctsConfig, PriorExpander, State, UniformEvaluator};
/// let mut search = MctSearch::new(
///     Gomoku::new(),
///     PriorExpander::new(UniformEvaluator::new(0.0)),
///     MctsConfig::default(),
/// ).unwrap();
///
/// let state = State::square(5).unwrap();
/// let probabilities = search.action_probabilities(&state, 50).unwrap();
/// assert!((probabilities.sum() - 1.0).abs() < 1e-5);
/// ```
pub struct MctSearch<R, X> where
    R: Rules,
    X: Expander {
    rules: R,
    expander: X,
    config: MctsConfig,
    index: HashMap<State, usize, BuildHasherDefault<FnvHasher>>,
    nodes: Vec<X::Node>,
}

impl<R, X> MctSearch<R, X> where
    R: Rules,
    X: Expander {
    pub fn new(rules: R, expander: X, config: MctsConfig) -> Result<MctSearch<R, X>> {
        config.validate()?;

        Ok(MctSearch {
            rules: rules,
            expander: expander,
            config: config,
            index: HashMap::default(),
            nodes: Vec::new(),
        })
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The number of nodes in the current session.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discards every node, starting a new session.
    pub fn reset(&mut self) {
        debug!(nodes = self.nodes.len(), "Discarding search tree");
        self.index.clear();
        self.nodes.clear();
    }

    pub fn lookup(&self, state: &State) -> Option<&X::Node> {
        self.index.get(state).map(|&id| &self.nodes[id])
    }

    /// Creates the node for a state that has none yet.
    ///
    /// Non-terminal states are evaluated here, once; the result stays on the node.
    pub fn expand(&mut self, state: &State, resolution: Option<Resolution>) -> Result<&X::Node> {
        if self.index.contains_key(state) {
            return Err(Error::DuplicateNode);
        }

        let node = self.expander.expand(state, resolution, &self.config)?;
        trace!(terminal = node.is_terminal(), value = node.value(), stones = state.stone_count(), "Expanded node");

        let id = self.nodes.len();
        self.nodes.push(node);
        self.index.insert(state.clone(), id);
        Ok(&self.nodes[id])
    }

    /// Runs one playout from `state` and returns its value for the player who
    /// moved into `state`, i.e. the negation of its value for the player to move.
    ///
    /// A state without a node is expanded and ends the playout, as does a
    /// terminal node.  Otherwise the node selects an action, the playout
    /// recurses into the resulting state, and the child's result is recorded
    /// on the node before being negated and returned.
    pub fn playout(&mut self, state: &State, resolution: Option<Resolution>) -> Result<f32> {
        let id = match self.index.get(state).cloned() {
            Some(id) => id,
            None => {
                let node = self.expand(state, resolution)?;
                return Ok(-node.value());
            },
        };

        if self.nodes[id].is_terminal() {
            return Ok(-self.nodes[id].value());
        }

        let action = self.nodes[id].find_action()?;
        let (next_state, next_resolution) = self.rules.apply(state, action)?;

        let value = self.playout(&next_state, next_resolution)?;
        self.nodes[id].update(value)?;
        trace!(%action, value, "Backed up");

        Ok(-value)
    }

    /// Visit counts recorded at the node for `state`, zero everywhere if it has none.
    pub fn visit_counts(&self, state: &State) -> Array2<u32> {
        match self.lookup(state) {
            Some(node) => node.statistics().visit_counts().clone(),
            None => Array2::zeros(state.shape()),
        }
    }

    /// Runs `searches` playouts from `state` and normalises the root's visit
    /// counts into a move distribution.
    ///
    /// The root is expanded up front if needed, so every playout passes
    /// through it and the root's visit total grows by exactly `searches`.
    /// Counts accumulate over calls within a session; call `reset` between moves
    /// for independent searches.
    ///
    /// # Errors
    /// `Error::NoSearches` if `searches` is 0, `Error::NoLegalActions` if the
    /// board is full, `Error::TerminalNode` if the session already knows
    /// `state` as a finished game.
    pub fn action_probabilities(&mut self, state: &State, searches: usize) -> Result<Array2<f32>> {
        if searches == 0 {
            return Err(Error::NoSearches);
        }

        if state.legal_count() == 0 {
            return Err(Error::NoLegalActions);
        }

        let start = Instant::now();

        if !self.index.contains_key(state) {
            self.expand(state, None)?;
        }
        if self.lookup(state).map_or(false, |node| node.is_terminal()) {
            return Err(Error::TerminalNode);
        }

        for _ in 0..searches {
            self.playout(state, None)?;
        }

        let counts = self.visit_counts(state);
        let total = counts.sum();
        if total == 0 {
            return Err(Error::NoLegalActions);
        }

        debug!(
            searches = searches,
            nodes = self.nodes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Search complete"
        );

        Ok(counts.mapv(|count| count as f32 / total as f32))
    }

    /// The most probable action after `searches` playouts, the first in
    /// row-major order among equals.
    pub fn best_action(&mut self, state: &State, searches: usize) -> Result<Action> {
        let probabilities = self.action_probabilities(state, searches)?;

        let mut best: Option<(Action, f32)> = None;
        for ((row, col), &probability) in probabilities.indexed_iter() {
            let action = Action::new(row, col);
            if !state.is_legal(action) {
                continue;
            }
            if best.map_or(true, |(_, best_probability)| probability > best_probability) {
                best = Some((action, probability));
            }
        }

        best.map(|(action, _)| action).ok_or(Error::NoLegalActions)
    }

    /// Picks a move for the player to move in `state` with a fresh tree and
    /// the configured number of searches.
    pub fn choose_action(&mut self, state: &State) -> Result<Action> {
        self.reset();
        let searches = self.config.searches;
        self.best_action(state, searches)
    }
}

pub use self::config::MctsConfig;
pub use self::expander::{Expander, PriorExpander, RolloutExpander};
pub use self::node::{PuctNode, Statistics, TreeNode, UctNode};
pub use self::simulator::{RandomSimulator, Simulator};

mod config;
mod expander;
mod node;
mod simulator;

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use ndarray::{Array2, Array3};

    use crate::analysis::{Evaluation, Evaluator, UniformEvaluator};
    use crate::rules::Gomoku;
    use super::*;

    type GuidedSearch = MctSearch<Gomoku, PriorExpander<UniformEvaluator>>;

    fn guided_search() -> GuidedSearch {
        MctSearch::new(Gomoku::new(), PriorExpander::new(UniformEvaluator::new(0.0)), MctsConfig::default()).unwrap()
    }

    /// The player to move has four in a row along the bottom edge, missing the last cell.
    fn open_four() -> State {
        let mut array = Array3::<u8>::zeros((2, 5, 5));
        for col in 0..4 {
            array[[0, 4, col]] = 1;
        }
        for &(row, col) in &[(0, 0), (0, 1), (1, 0), (2, 2)] {
            array[[1, row, col]] = 1;
        }
        State::from_array(&array).unwrap()
    }

    #[test]
    fn test_visit_total_matches_searches() {
        for &searches in &[1, 7, 40] {
            let mut search = guided_search();
            let state = State::square(5).unwrap();

            let probabilities = search.action_probabilities(&state, searches).unwrap();
            assert_eq!(search.visit_counts(&state).sum() as usize, searches);
            assert!((probabilities.sum() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_occupied_cells_get_no_visits() {
        let mut search = guided_search();
        let state = open_four();

        let probabilities = search.action_probabilities(&state, 60).unwrap();
        let counts = search.visit_counts(&state);
        for ((row, col), &count) in counts.indexed_iter() {
            if !state.is_legal(Action::new(row, col)) {
                assert_eq!(count, 0);
                assert_eq!(probabilities[[row, col]], 0.0);
            }
        }
    }

    #[test]
    fn test_reset_forgets_nodes() {
        let mut search = guided_search();
        let state = State::square(5).unwrap();
        search.action_probabilities(&state, 20).unwrap();
        let child = state.play(Action::new(0, 0)).unwrap();
        assert!(search.lookup(&state).is_some());
        assert!(search.lookup(&child).is_some());

        search.reset();
        assert!(search.is_empty());
        assert!(search.lookup(&state).is_none());
        assert!(search.lookup(&child).is_none());
        assert_eq!(search.visit_counts(&state).sum(), 0);

        search.action_probabilities(&state, 5).unwrap();
        assert_eq!(search.visit_counts(&state).sum(), 5);
    }

    #[test]
    fn test_counts_accumulate_within_session() {
        let mut search = guided_search();
        let state = State::square(5).unwrap();
        search.action_probabilities(&state, 10).unwrap();
        search.action_probabilities(&state, 15).unwrap();
        assert_eq!(search.visit_counts(&state).sum(), 25);
    }

    #[test]
    fn test_negamax_sign_law() {
        const LEAF_VALUE: f32 = 0.25;

        // All prior mass on the first empty cell keeps every playout on one line.
        let evaluator = |state: &State| -> Result<Evaluation> {
            let mut priors = Array2::zeros(state.shape());
            if let Some(action) = state.legal_actions().next() {
                priors[[action.row, action.col]] = 1.0;
            }
            Ok(Evaluation { priors: priors, value: LEAF_VALUE })
        };
        let mut search = MctSearch::new(Gomoku::new(), PriorExpander::new(evaluator), MctsConfig::default()).unwrap();

        let root = State::square(5).unwrap();
        let first = Action::new(0, 0);
        let child = root.play(first).unwrap();

        // Expanding the root ends the first playout.
        assert_eq!(search.playout(&root, None).unwrap(), -LEAF_VALUE);

        // Leaf one ply below the root: the root sees -v.
        assert_eq!(search.playout(&root, None).unwrap(), LEAF_VALUE);
        let after_odd = search.lookup(&root).unwrap().statistics().mean_value(first);
        assert_eq!(after_odd, -LEAF_VALUE);

        // Leaf two plies below the root: the root sees v.
        assert_eq!(search.playout(&root, None).unwrap(), -LEAF_VALUE);
        let statistics = search.lookup(&root).unwrap().statistics();
        assert_eq!(statistics.visits(first), 2);
        let received = 2.0 * statistics.mean_value(first) - after_odd;
        assert!((received - LEAF_VALUE).abs() < 1e-6);

        let child_statistics = search.lookup(&child).unwrap().statistics();
        assert_eq!(child_statistics.mean_value(Action::new(0, 1)), -LEAF_VALUE);
    }

    #[test]
    fn test_terminal_win_backs_up_positive() {
        let mut search = guided_search();
        let state = open_four();

        let action = search.best_action(&state, 100).unwrap();
        assert_eq!(action, Action::new(4, 4));

        let root = search.lookup(&state).unwrap();
        assert_eq!(root.statistics().mean_value(Action::new(4, 4)), 1.0);

        let (won, resolution) = Gomoku::new().apply(&state, Action::new(4, 4)).unwrap();
        assert_eq!(resolution, Some(Resolution::Win));
        let terminal = search.lookup(&won).unwrap();
        assert!(terminal.is_terminal());
        assert_eq!(terminal.value(), -1.0);
    }

    #[test]
    fn test_rollout_search_records_win() {
        let mut search = MctSearch::new(
            Gomoku::new(),
            RolloutExpander::with_seed(Gomoku::new(), 5),
            MctsConfig::default(),
        ).unwrap();
        let state = open_four();

        search.action_probabilities(&state, 80).unwrap();
        let statistics = search.lookup(&state).unwrap().statistics();
        assert_eq!(statistics.total_visits(), 80);
        assert!(statistics.visits(Action::new(4, 4)) > 0);
        assert_eq!(statistics.mean_value(Action::new(4, 4)), 1.0);
    }

    #[test]
    fn test_deterministic_with_deterministic_evaluator() {
        let state = State::square(5).unwrap().play(Action::new(2, 2)).unwrap();

        let mut first = guided_search();
        let mut second = guided_search();
        first.action_probabilities(&state, 60).unwrap();
        second.action_probabilities(&state, 60).unwrap();
        assert_eq!(first.visit_counts(&state), second.visit_counts(&state));

        let rollout = || MctSearch::new(Gomoku::new(), RolloutExpander::with_seed(Gomoku::new(), 9), MctsConfig::default()).unwrap();
        let mut first = rollout();
        let mut second = rollout();
        first.action_probabilities(&state, 60).unwrap();
        second.action_probabilities(&state, 60).unwrap();
        assert_eq!(first.visit_counts(&state), second.visit_counts(&state));
    }

    #[test]
    fn test_empty_five_by_five_hundred_searches() {
        let mut search = guided_search();
        let state = State::square(5).unwrap();

        let probabilities = search.action_probabilities(&state, 100).unwrap();
        let counts = search.visit_counts(&state);
        assert_eq!(counts.dim(), (5, 5));
        assert_eq!(counts.sum(), 100);
        assert!(counts.iter().filter(|&&count| count > 0).count() >= 1);
        assert!(probabilities.iter().all(|&p| p >= 0.0 && p <= 1.0));
    }

    #[test]
    fn test_evaluator_called_once_per_node() {
        let calls = Cell::new(0);
        let evaluator = |state: &State| -> Result<Evaluation> {
            calls.set(calls.get() + 1);
            UniformEvaluator::new(0.1).evaluate(state)
        };
        let mut search = MctSearch::new(Gomoku::new(), PriorExpander::new(evaluator), MctsConfig::default()).unwrap();

        search.action_probabilities(&State::square(5).unwrap(), 50).unwrap();
        assert_eq!(calls.get(), search.len());
    }

    #[test]
    fn test_query_errors() {
        let mut search = guided_search();
        let state = State::square(3).unwrap();
        assert!(matches!(search.action_probabilities(&state, 0), Err(Error::NoSearches)));

        let mut full = State::new(1, 2).unwrap();
        full = full.play(Action::new(0, 0)).unwrap().play(Action::new(0, 1)).unwrap();
        assert!(matches!(search.action_probabilities(&full, 10), Err(Error::NoLegalActions)));

        search.expand(&state, Some(Resolution::Win)).unwrap();
        assert!(matches!(search.expand(&state, None), Err(Error::DuplicateNode)));
        assert!(matches!(search.action_probabilities(&state, 10), Err(Error::TerminalNode)));
    }

    #[test]
    fn test_visit_counts_of_unknown_state() {
        let search = guided_search();
        let state = State::new(3, 4).unwrap();
        assert_eq!(search.visit_counts(&state), Array2::<u32>::zeros((3, 4)));
        assert!(search.lookup(&state).is_none());
    }

    #[test]
    fn test_choose_action_starts_fresh() {
        let mut search = MctSearch::new(
            Gomoku::new(),
            PriorExpander::new(UniformEvaluator::new(0.0)),
            MctsConfig::default().with_searches(30),
        ).unwrap();
        let state = open_four();

        let first = search.choose_action(&state).unwrap();
        let nodes = search.len();
        let second = search.choose_action(&state).unwrap();
        assert_eq!(first, second);
        assert_eq!(search.len(), nodes);
        assert_eq!(search.visit_counts(&state).sum(), 30);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MctsConfig::default().with_exploration(f32::NAN);
        assert!(MctSearch::new(Gomoku::new(), PriorExpander::new(UniformEvaluator::new(0.0)), config).is_err());
    }
}
