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

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tuning for `MctSearch`.
///
/// Missing fields take their defaults when deserialized, so a partial
/// `[search]`-style table is enough:
///
/// ```rust
/// # use gomoku_mcts::MctsConfig;
/// let config = MctsConfig::from_toml_str("exploration = 1.5").unwrap();
/// assert_eq!(config.exploration, 1.5);
/// assert_eq!(config.searches, 100);
/// ```
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct MctsConfig {
    /// The exploration constant `C` in the selection score.
    pub exploration: f32,
    /// Keeps the exploration term defined before any action has been visited.
    pub epsilon: f32,
    /// Playouts per move for `MctSearch::choose_action`.
    pub searches: usize,
}

impl Default for MctsConfig {
    fn default() -> MctsConfig {
        MctsConfig {
            exploration: 1.0,
            epsilon: 1e-8,
            searches: 100,
        }
    }
}

impl MctsConfig {
    pub fn with_exploration(mut self, exploration: f32) -> MctsConfig {
        self.exploration = exploration;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> MctsConfig {
        self.epsilon = epsilon;
        self
    }

    pub fn with_searches(mut self, searches: usize) -> MctsConfig {
        self.searches = searches;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<MctsConfig> {
        let config: MctsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(Error::InvalidConfig(format!("exploration must be finite and non-negative, got {}", self.exploration)));
        }

        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(Error::InvalidConfig(format!("epsilon must be finite and positive, got {}", self.epsilon)));
        }

        if self.searches == 0 {
            return Err(Error::InvalidConfig(String::from("searches must be at least 1")));
        }

        Ok(())
    }
}
