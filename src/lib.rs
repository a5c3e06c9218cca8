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

//! A Monte Carlo tree search engine for five-in-a-row games.
//!
//! The engine picks moves for two-player, alternating-turn games played by
//! placing stones on a grid.  It is built from a few small pieces:
//!
//! * `State`, the canonical board: grid 0 always belongs to the player to
//!   move, so every position is stored from the mover's side.
//! * `Rules`, which applies a move and reports whether it ended the game.
//!   `Gomoku` is the five-in-a-row implementation.
//! * `Evaluator`, which supplies move priors and a value for a new state.
//! * `TreeNode`, the per-state record the search keeps, and the `Expander`
//!   that decides which kind of node to build: `PriorExpander` for
//!   evaluator-guided search, `RolloutExpander` for plain random playouts.
//! * `MctSearch`, the engine itself.
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! gomoku_mcts = "0.1"
//! ```
//!
//! # Example
//!
//! ```rust
//! use gomoku_mcts::{Gomoku, MctSearch, MctsConfig, PriorExpander, State, UniformEvaluator};
//!
//! let mut search = MctSearch::new(
//!     Gomoku::new(),
//!     PriorExpander::new(UniformEvaluator::default()),
//!     MctsConfig::default().with_searches(200),
//! ).unwrap();
//!
//! let state = State::square(9).unwrap();
//! let action = search.choose_action(&state).unwrap();
//! assert!(state.is_legal(action));
//! ```

pub use self::action::Action;
pub use self::analysis::{Evaluation, Evaluator, UniformEvaluator};
pub use self::analysis::search::{
    Expander, MctSearch, MctsConfig, PriorExpander, PuctNode, RandomSimulator,
    RolloutExpander, Simulator, Statistics, TreeNode, UctNode,
};
pub use self::error::{Error, Result};
pub use self::resolution::Resolution;
pub use self::rules::{Gomoku, Rules};
pub use self::state::State;
pub use self::util::JKiss32Rng;

pub mod analysis;
pub mod rules;
pub mod state;

mod action;
mod error;
mod resolution;
mod util;
