use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::evaluation::{Evaluation, PacmanState};
use crate::search::{self, Algorithm};

/// Parameters shared by all search agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of full rounds, in which pacman and every ghost move once.
    #[serde(deserialize_with = "positive")]
    pub depth: usize,
    pub evaluation: Evaluation,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            evaluation: Evaluation::Score,
        }
    }
}

fn positive<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let depth = usize::deserialize(deserializer)?;
    if depth == 0 {
        return Err(de::Error::custom("The search depth has to be positive"));
    }
    Ok(depth)
}

/// Pacman agents that choose their moves with a tree search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agent {
    /// Assumes the ghosts play optimally against pacman.
    Minimax(SearchConfig),
    /// Minimax with alpha-beta pruning.
    AlphaBeta(SearchConfig),
    /// Assumes the ghosts move uniformly at random.
    Expectimax(SearchConfig),
}

impl Default for Agent {
    fn default() -> Self {
        Self::AlphaBeta(SearchConfig::default())
    }
}

impl Agent {
    pub fn config(&self) -> &SearchConfig {
        match self {
            Agent::Minimax(config) | Agent::AlphaBeta(config) | Agent::Expectimax(config) => {
                config
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Agent::Minimax(_) => Algorithm::Minimax,
            Agent::AlphaBeta(_) => Algorithm::AlphaBeta,
            Agent::Expectimax(_) => Algorithm::Expectimax,
        }
    }

    /// Chooses the next move of pacman.
    ///
    /// Returns `None` only if pacman has no legal move.
    pub fn choose_action<G: PacmanState>(&self, game: &G) -> Option<G::Action> {
        let config = self.config();
        assert!(config.depth > 0, "The search depth has to be positive");

        let start = Instant::now();
        let (action, value) = self
            .algorithm()
            .search(game, config.depth, &config.evaluation);

        info!(
            ">>> {:?} {} {:?}ms {:?} {:?}",
            self.algorithm(),
            config.depth,
            start.elapsed().as_millis(),
            action,
            value
        );
        action.or_else(|| fallback(game))
    }

    /// Chooses the next move of pacman, searching the subtrees of all
    /// possible moves in parallel.
    pub async fn step<G>(&self, game: &G) -> Option<G::Action>
    where
        G: PacmanState + Send + 'static,
        G::Action: Send,
    {
        let config = *self.config();
        assert!(config.depth > 0, "The search depth has to be positive");

        let start = Instant::now();
        let (action, value) = search::async_search(
            game,
            config.depth,
            self.algorithm(),
            Arc::new(config.evaluation),
        )
        .await;

        info!(
            ">>> async {:?} {} {:?}ms {:?} {:?}",
            self.algorithm(),
            config.depth,
            start.elapsed().as_millis(),
            action,
            value
        );
        action.or_else(|| fallback(game))
    }
}

fn fallback<G: PacmanState>(game: &G) -> Option<G::Action> {
    warn!(">>> none");
    game.legal_actions(0).first().copied()
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
