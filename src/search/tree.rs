//! Synthetic games for testing the tree searches.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::GameState;

#[derive(Debug)]
pub struct Node {
    pub value: f64,
    pub children: Vec<Arc<Node>>,
}

pub fn leaf(value: f64) -> Arc<Node> {
    Arc::new(Node {
        value,
        children: Vec::new(),
    })
}

pub fn branch(children: Vec<Arc<Node>>) -> Arc<Node> {
    Arc::new(Node {
        value: 0.0,
        children,
    })
}

/// Random tree with `plies` levels.
/// Some subtrees end early, their leafs are terminal states.
/// Values are small integers to provoke ties.
pub fn random_tree(rng: &mut SmallRng, plies: usize, branching: usize) -> Arc<Node> {
    if plies == 0 || rng.gen_bool(0.1) {
        return leaf(rng.gen_range(-20..20) as f64);
    }
    let n = rng.gen_range(1..=branching);
    branch((0..n).map(|_| random_tree(rng, plies - 1, branching)).collect())
}

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Explicit game tree. Leafs are terminal, the actions are child indices.
#[derive(Debug, Clone)]
pub struct TreeGame {
    node: Arc<Node>,
    agents: usize,
    expanded: Arc<AtomicUsize>,
}

impl TreeGame {
    pub fn new(agents: usize, root: Arc<Node>) -> TreeGame {
        TreeGame {
            node: root,
            agents,
            expanded: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn value(&self) -> f64 {
        self.node.value
    }

    /// Number of generated successors, shared by all states of this tree.
    pub fn expanded(&self) -> usize {
        self.expanded.load(Ordering::SeqCst)
    }
}

impl GameState for TreeGame {
    type Action = usize;

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, _agent: usize) -> Vec<usize> {
        (0..self.node.children.len()).collect()
    }

    fn successor(&self, _agent: usize, action: usize) -> TreeGame {
        self.expanded.fetch_add(1, Ordering::SeqCst);
        TreeGame {
            node: self.node.children[action].clone(),
            agents: self.agents,
            expanded: self.expanded.clone(),
        }
    }

    fn is_win(&self) -> bool {
        self.node.children.is_empty()
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn score(&self) -> f64 {
        self.node.value
    }
}

/// Game without an end, that fails if the search goes deeper than allowed.
#[derive(Debug, Clone)]
pub struct EndlessGame {
    agents: usize,
    branching: usize,
    ghost_branching: usize,
    max_plies: usize,
    ply: usize,
    value: f64,
    won: bool,
    deepest: Arc<AtomicUsize>,
    evaluated: Arc<AtomicUsize>,
}

impl EndlessGame {
    pub fn new(agents: usize, branching: usize, rounds: usize) -> EndlessGame {
        EndlessGame {
            agents,
            branching,
            ghost_branching: branching,
            max_plies: rounds * agents,
            ply: 0,
            value: 0.0,
            won: false,
            deepest: Arc::new(AtomicUsize::new(0)),
            evaluated: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn won(mut self) -> EndlessGame {
        self.won = true;
        self
    }

    /// The ghosts have no legal actions, which breaks the game contract.
    pub fn ghosts_stuck(mut self) -> EndlessGame {
        self.ghost_branching = 0;
        self
    }

    /// Counts the evaluation and returns the sum of the chosen actions.
    pub fn value(&self) -> f64 {
        self.evaluated.fetch_add(1, Ordering::SeqCst);
        self.value
    }

    pub fn deepest(&self) -> usize {
        self.deepest.load(Ordering::SeqCst)
    }

    pub fn evaluated(&self) -> usize {
        self.evaluated.load(Ordering::SeqCst)
    }
}

impl GameState for EndlessGame {
    type Action = usize;

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, agent: usize) -> Vec<usize> {
        assert!(!self.won, "Actions of a terminal state requested");
        assert_eq!(agent, self.ply % self.agents, "Wrong turn order");
        if agent == 0 {
            (0..self.branching).collect()
        } else {
            (0..self.ghost_branching).collect()
        }
    }

    fn successor(&self, agent: usize, action: usize) -> EndlessGame {
        assert!(!self.won, "Successor of a terminal state requested");
        assert_eq!(agent, self.ply % self.agents, "Wrong turn order");
        assert!(self.ply < self.max_plies, "Search exceeds its depth");
        self.deepest.fetch_max(self.ply + 1, Ordering::SeqCst);
        EndlessGame {
            ply: self.ply + 1,
            value: self.value + action as f64,
            ..self.clone()
        }
    }

    fn is_win(&self) -> bool {
        self.won
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn score(&self) -> f64 {
        self.value
    }
}
