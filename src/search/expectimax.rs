use super::{next_turn, GameState, Heuristic};

/// Expectimax tree search.
///
/// The agent with id 0 maximizes, the other agents are modeled as choosing
/// uniformly at random from their legal actions.
/// Their nodes are valued with the expectation over all children.
pub fn expectimax<G: GameState>(
    game: &G,
    depth: usize,
    heuristic: &dyn Heuristic<G>,
) -> (Option<G::Action>, f64) {
    assert!(game.num_agents() >= 1, "At least one agent is required");
    expectimax_rec(game, depth, 0, heuristic)
}

pub(crate) fn expectimax_rec<G: GameState>(
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
            let (_, newval) = expectimax_rec(&child, next_depth, next_agent, heuristic);
            if newval > value.1 {
                value = (Some(action), newval);
            }
        }
        value
    } else {
        let actions = game.legal_actions(agent);
        assert!(!actions.is_empty(), "Agent {agent} has no legal actions");

        let probability = 1.0 / actions.len() as f64;
        let mut total = 0.0;
        for action in actions {
            let child = game.successor(agent, action);
            let (_, newval) = expectimax_rec(&child, next_depth, next_agent, heuristic);
            total += probability * newval;
        }
        (None, total)
    }
}
