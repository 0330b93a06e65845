use std::sync::Arc;

use log::error;

use super::{next_turn, Algorithm, GameState, Heuristic};

/// Tree search that explores the moves of the maximizing agent in parallel.
///
/// Every subtree below the root is searched on its own blocking task.
/// The results are reduced in the order of the legal actions, so the chosen
/// action and value are the same as for [Algorithm::search].
pub async fn async_search<G>(
    game: &G,
    depth: usize,
    algorithm: Algorithm,
    heuristic: Arc<dyn Heuristic<G> + Send + Sync>,
) -> (Option<G::Action>, f64)
where
    G: GameState + Send + 'static,
    G::Action: Send,
{
    assert!(game.num_agents() >= 1, "At least one agent is required");
    if game.is_terminal() || depth == 0 {
        return (None, heuristic.eval(game));
    }

    let (next_agent, next_depth) = next_turn(0, depth, game.num_agents());

    // Create tasks for subtrees.
    let mut tasks = Vec::new();
    for action in game.legal_actions(0) {
        let child = game.successor(0, action);
        let heuristic = heuristic.clone();
        tasks.push((
            action,
            tokio::task::spawn_blocking(move || {
                algorithm.value(&child, next_depth, next_agent, &*heuristic)
            }),
        ));
    }

    let mut value = (None, f64::NEG_INFINITY);
    for (action, task) in tasks {
        match task.await {
            Ok(newval) => {
                if newval > value.1 {
                    value = (Some(action), newval);
                }
            }
            // a missing subtree would change the result, so failed tasks are fatal
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                error!("search task for {:?} failed: {}", action, e);
                panic!("Search task failed: {e}");
            }
        }
    }
    value
}
