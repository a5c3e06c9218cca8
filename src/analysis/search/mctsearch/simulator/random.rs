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
use rand::seq::SliceRandom;

use crate::action::Action;
use crate::analysis::search::mctsearch::Simulator;
use crate::error::Result;
use crate::resolution::Resolution;
use crate::rules::Rules;
use crate::state::State;
use crate::util::JKiss32Rng;

/// Plays uniformly random legal moves until the game ends.
#[derive(Clone)]
pub struct RandomSimulator<R, G = JKiss32Rng> where
    R: Rules,
    G: Rng {
    rules: R,
    rng: G,
    actions: Vec<Action>,
}

impl<R> RandomSimulator<R, JKiss32Rng> where
    R: Rules {
    /// Seeds the generator from the thread-local RNG.
    pub fn new(rules: R) -> RandomSimulator<R, JKiss32Rng> {
        RandomSimulator::with_rng(rules, JKiss32Rng::new())
    }

    /// A reproducible simulator.
    pub fn with_seed(rules: R, seed: u64) -> RandomSimulator<R, JKiss32Rng> {
        RandomSimulator::with_rng(rules, JKiss32Rng::from_u64(seed))
    }
}

impl<R, G> RandomSimulator<R, G> where
    R: Rules,
    G: Rng {
    pub fn with_rng(rules: R, rng: G) -> RandomSimulator<R, G> {
        RandomSimulator {
            rules: rules,
            rng: rng,
            actions: Vec::new(),
        }
    }
}

impl<R, G> Simulator for RandomSimulator<R, G> where
    R: Rules,
    G: Rng {
    fn simulate(&mut self, state: &State) -> Result<f32> {
        let mut current_state = state.clone();
        let mut steps = 0;

        loop {
            self.actions.clear();
            self.actions.extend(current_state.legal_actions());
            let action = match self.actions.choose(&mut self.rng) {
                Some(&action) => action,
                None => return Ok(0.0),
            };

            let (next_state, resolution) = self.rules.apply(&current_state, action)?;
            steps += 1;

            match resolution {
                // Odd plies are played by the player to move at `state`
                Some(Resolution::Win) => return Ok(if steps % 2 == 1 { 1.0 } else { -1.0 }),
                Some(Resolution::Tie) => return Ok(0.0),
                None => current_state = next_state,
            }
        }
    }
}
