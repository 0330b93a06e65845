//! Static evaluation of pacman game states.

use serde::{Deserialize, Serialize};

use crate::env::Vec2D;
use crate::search::{GameState, Heuristic};

/// Position and vulnerability of a ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostState {
    pub position: Vec2D,
    /// Number of moves the ghost stays scared, 0 if it is dangerous.
    pub scared_timer: u32,
}

impl GhostState {
    pub fn scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// The parts of a game state the evaluation functions look at.
pub trait PacmanState: GameState {
    fn pacman_position(&self) -> Vec2D;
    fn food_positions(&self) -> Vec<Vec2D>;
    fn ghost_states(&self) -> Vec<GhostState>;
    fn capsule_positions(&self) -> Vec<Vec2D>;
}

/// Default evaluation: the game score.
pub fn score<G: GameState>(game: &G) -> f64 {
    game.score()
}

/// Hand-tuned evaluation that chases food, capsules and scared ghosts
/// while keeping away from dangerous ghosts.
pub fn better<G: PacmanState>(game: &G) -> f64 {
    let pacman = game.pacman_position();
    let food = game.food_positions();
    let capsules = game.capsule_positions();

    let mut score = game.score();

    if let Some(closest) = closest(pacman, &food) {
        score += 10.0 / closest;
    }

    for ghost in game.ghost_states() {
        let distance = pacman.distance(ghost.position) as f64;
        if ghost.scared() {
            score += 200.0 / distance;
        } else if distance > 0.0 {
            score -= 10.0 / distance;
        }
    }

    if let Some(closest) = closest(pacman, &capsules) {
        score += 20.0 / closest;
    }

    score -= 4.0 * food.len() as f64;
    score -= 20.0 * capsules.len() as f64;
    score
}

fn closest(from: Vec2D, targets: &[Vec2D]) -> Option<f64> {
    targets
        .iter()
        .map(|&p| from.distance(p))
        .min()
        .map(|d| d as f64)
}

/// Selects the evaluation function of an agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluation {
    #[default]
    Score,
    Better,
}

impl<G: PacmanState> Heuristic<G> for Evaluation {
    fn eval(&self, game: &G) -> f64 {
        match self {
            Evaluation::Score => score(game),
            Evaluation::Better => better(game),
        }
    }
}
