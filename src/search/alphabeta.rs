use super::{next_turn, GameState, Heuristic};

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - Assumes the maximizing agent has id 0
/// - Every other agent is minimizing
///
/// Chooses the same action with the same value as [super::minimax],
/// only fewer nodes are visited.
pub fn alphabeta<G: GameState>(
    game: &G,
    depth: usize,
    heuristic: &dyn Heuristic<G>,
) -> (Option<G::Action>, f64) {
    assert!(game.num_agents() >= 1, "At least one agent is required");
    alphabeta_rec(
        game,
        depth,
        0,
        f64::NEG_INFINITY,
        f64::INFINITY,
        heuristic,
    )
}

pub(crate) fn alphabeta_rec<G: GameState>(
    game: &G,
    depth: usize,
    agent: usize,
    mut alpha: f64,
    mut beta: f64,
    heuristic: &dyn Heuristic<G>,
) -> (Option<G::Action>, f64) {
    if game.is_terminal() || depth == 0 {
        return (None, heuristic.eval(game));
    }

    let (next_agent, next_depth) = next_turn(agent, depth, game.num_agents());

    if agent == 0 {
        let mut value = (None, f64::NEG_INFINITY);
        for action in game.legal_actions(agent) {
            let child = game.successor(agent, action);
            let (_, newval) =
                alphabeta_rec(&child, next_depth, next_agent, alpha, beta, heuristic);
            if newval > value.1 {
                value = (Some(action), newval);
            }
            // beta cutoff, the minimizing parent will not choose this node
            if value.1 > beta {
                return value;
            }
            alpha = alpha.max(value.1);
        }
        value
    } else {
        let mut value = (None, f64::INFINITY);
        for action in game.legal_actions(agent) {
            let child = game.successor(agent, action);
            let (_, newval) =
                alphabeta_rec(&child, next_depth, next_agent, alpha, beta, heuristic);
            if newval < value.1 {
                value = (Some(action), newval);
            }
            // alpha cutoff
            if value.1 < alpha {
                return value;
            }
            beta = beta.min(value.1);
        }
        value
    }
}
