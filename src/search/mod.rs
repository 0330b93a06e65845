mod alphabeta;
pub use alphabeta::*;
mod expectimax;
pub use expectimax::*;
mod minimax;
pub use minimax::*;
mod parallel;
pub use parallel::*;

#[cfg(test)]
pub(crate) mod tree;

use std::fmt::Debug;

/// The game contract consumed by the tree searches.
///
/// Agent 0 is the maximizing player, all other agents are its adversaries.
/// States are never mutated by the search, every move produces a new state.
pub trait GameState: Clone {
    type Action: Copy + PartialEq + Debug;

    /// Number of agents, including the maximizing player.
    fn num_agents(&self) -> usize;
    /// Legal actions of an agent.
    /// The order is relevant, ties are resolved in favour of earlier actions.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;
    /// Returns the state after `agent` executed `action`.
    fn successor(&self, agent: usize, action: Self::Action) -> Self;
    fn is_win(&self) -> bool;
    fn is_lose(&self) -> bool;
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
    fn score(&self) -> f64;
}

/// A heuristic that evaluates the game state at the leafs of a tree search.
pub trait Heuristic<G> {
    fn eval(&self, game: &G) -> f64;
}

impl<G, F> Heuristic<G> for F
where
    F: Fn(&G) -> f64,
{
    fn eval(&self, game: &G) -> f64 {
        self(game)
    }
}

/// Returns the agent and remaining depth of the next ply.
///
/// The depth counts full rounds and only decreases when the turn wraps
/// around to the maximizing agent.
#[inline]
pub fn next_turn(agent: usize, depth: usize, num_agents: usize) -> (usize, usize) {
    let next_agent = (agent + 1) % num_agents;
    if next_agent == 0 {
        (next_agent, depth.saturating_sub(1))
    } else {
        (next_agent, depth)
    }
}

/// The available tree search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl Algorithm {
    /// Performs the search and returns the chosen action of agent 0 and its value.
    pub fn search<G: GameState>(
        self,
        game: &G,
        depth: usize,
        heuristic: &dyn Heuristic<G>,
    ) -> (Option<G::Action>, f64) {
        match self {
            Algorithm::Minimax => minimax(game, depth, heuristic),
            Algorithm::AlphaBeta => alphabeta(game, depth, heuristic),
            Algorithm::Expectimax => expectimax(game, depth, heuristic),
        }
    }

    /// Value of a subtree where `agent` is the next to move.
    pub(crate) fn value<G: GameState>(
        self,
        game: &G,
        depth: usize,
        agent: usize,
        heuristic: &dyn Heuristic<G>,
    ) -> f64 {
        match self {
            Algorithm::Minimax => minimax_rec(game, depth, agent, heuristic).1,
            Algorithm::AlphaBeta => alphabeta_rec(
                game,
                depth,
                agent,
                f64::NEG_INFINITY,
                f64::INFINITY,
                heuristic,
            )
            .1,
            Algorithm::Expectimax => expectimax_rec(game, depth, agent, heuristic).1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn turn_order() {
        // pacman and two ghosts
        assert_eq!(next_turn(0, 2, 3), (1, 2));
        assert_eq!(next_turn(1, 2, 3), (2, 2));
        assert_eq!(next_turn(2, 2, 3), (0, 1));
        // pacman alone
        assert_eq!(next_turn(0, 2, 1), (0, 1));
    }

    #[test]
    fn closure_heuristic() {
        let h = |v: &i32| *v as f64 * 2.0;
        assert_eq!(Heuristic::<i32>::eval(&h, &4), 8.0);
    }
}
