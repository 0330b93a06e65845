use super::{next_turn, GameState, Heuristic};

/// Minimax tree search with multiple agents.
/// The agent with id 0 is the maximizing agent, all others are minimizing.
///
/// `depth` is the number of full rounds where every agent moves once.
/// Returns the best action of the maximizing agent and its value.
/// Ties are resolved in favour of the first action.
pub fn minimax<G: GameState>(
    game: &G,
    depth: usize,
    heuristic: &dyn Heuristic<G>,
) -> (Option<G::Action>, f64) {
    assert!(game.num_agents() >= 1, "At least one agent is required");
    minimax_rec(game, depth, 0, heuristic)
}

pub(crate) fn minimax_rec<G: GameState>(
    game: &G,
    depth: usize,
    agent: usize,
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
            let (_, newval) = minimax_rec(&child, next_depth, next_agent, heuristic);
            if newval > value.1 {
                value = (Some(action), newval);
            }
        }
        value
    } else {
        let mut value = (None, f64::INFINITY);
        for action in game.legal_actions(agent) {
            let child = game.successor(agent, action);
            let (_, newval) = minimax_rec(&child, next_depth, next_agent, heuristic);
            if newval < value.1 {
                value = (Some(action), newval);
            }
        }
        value
    }
}
