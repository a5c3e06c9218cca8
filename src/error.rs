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

use thiserror::Error;

use crate::action::Action;

/// Errors reported by the board, the rules and the search engine.
///
/// Variants from `Occupied` onward describe broken contracts between the
/// search and its collaborators.  They are returned rather than recovered,
/// and the engine propagates them out of the current playout unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid board dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Malformed state: {0}")]
    MalformedState(String),

    #[error("Action {action} is outside the {rows}x{cols} board")]
    OutOfBounds { action: Action, rows: usize, cols: usize },

    #[error("Cell {0} is already occupied")]
    Occupied(Action),

    #[error("No legal actions available")]
    NoLegalActions,

    #[error("At least one search is required")]
    NoSearches,

    #[error("Terminal nodes have no actions to select or update")]
    TerminalNode,

    #[error("Update called without a preceding action selection")]
    NoPendingAction,

    #[error("A node already exists for this state")]
    DuplicateNode,

    #[error("Evaluation failed: {0}")]
    Evaluation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
