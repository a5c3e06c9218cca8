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

//! Tools for analysing positions: the evaluator seam and the tree search.

pub use self::evaluator::{Evaluation, Evaluator, UniformEvaluator};

pub mod search;

mod evaluator;
