use std::fmt::{self, Debug};

use owo_colors::{OwoColorize, Style};

use super::{Cell, Grid};
use crate::env::{Direction, Vec2D};
use crate::evaluation::{GhostState, PacmanState};
use crate::search::GameState;

/// Points lost for every move of pacman.
pub const TIME_PENALTY: f64 = 1.0;
pub const FOOD_REWARD: f64 = 10.0;
pub const GHOST_REWARD: f64 = 200.0;
pub const WIN_REWARD: f64 = 500.0;
pub const LOSE_PENALTY: f64 = 500.0;
/// Number of ghost moves a capsule scares the ghosts.
pub const SCARED_TIME: u32 = 40;

/// The outcome of a simulated game.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Win,
    Lose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ghost {
    /// Eaten ghosts respawn here.
    pub start: Vec2D,
    pub pos: Vec2D,
    pub scared_timer: u32,
}

impl Ghost {
    pub fn new(start: Vec2D) -> Ghost {
        Ghost {
            start,
            pos: start,
            scared_timer: 0,
        }
    }
}

/// Game holds the complete game state.
/// This also provides methods to execute moves and evaluate their outcome.
///
/// Pacman has the agent id 0, the ghosts follow with the ids 1 to n.
#[derive(Clone)]
pub struct Game {
    pub grid: Grid,
    pub pacman: Vec2D,
    pub ghosts: Vec<Ghost>,
    pub score: f64,
    outcome: Outcome,
}

impl Game {
    pub fn new(grid: Grid, pacman: Vec2D, ghosts: Vec<Ghost>) -> Game {
        let mut game = Game {
            grid,
            pacman,
            ghosts,
            score: 0.0,
            outcome: Outcome::None,
        };
        game.check_collisions();
        game
    }

    /// Returns if the game has ended and if pacman won or lost.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns all valid moves of an agent.
    ///
    /// Pacman may move into every direction without a wall or stop.
    /// Ghosts may not stop unless they are trapped.
    pub fn valid_moves(&self, agent: usize) -> Vec<Direction> {
        assert!(agent <= self.ghosts.len(), "Unknown agent {agent}");
        if agent == 0 {
            Direction::iter()
                .filter(|&d| self.grid.available(self.pacman.apply(d)))
                .chain(Some(Direction::Stop))
                .collect()
        } else {
            let pos = self.ghosts[agent - 1].pos;
            let moves: Vec<_> = Direction::iter()
                .filter(|&d| self.grid.available(pos.apply(d)))
                .collect();
            if moves.is_empty() {
                vec![Direction::Stop]
            } else {
                moves
            }
        }
    }

    /// Executes the move of a single agent.
    /// This also checks for eating and collisions with the ghosts.
    pub fn step(&mut self, agent: usize, dir: Direction) {
        assert_eq!(self.outcome, Outcome::None, "The game is already over");
        assert!(agent <= self.ghosts.len(), "Unknown agent {agent}");

        if agent == 0 {
            let next = self.pacman.apply(dir);
            assert!(self.grid.available(next), "Illegal move {dir:?}");
            self.pacman = next;
            self.score -= TIME_PENALTY;

            let cell = self.grid[next];
            match cell {
                Cell::Food => {
                    self.grid[next] = Cell::Free;
                    self.score += FOOD_REWARD;
                    if self.grid.count(Cell::Food) == 0 {
                        self.score += WIN_REWARD;
                        self.outcome = Outcome::Win;
                    }
                }
                Cell::Capsule => {
                    self.grid[next] = Cell::Free;
                    for ghost in &mut self.ghosts {
                        ghost.scared_timer = SCARED_TIME;
                    }
                }
                _ => {}
            }
        } else {
            let ghost = &mut self.ghosts[agent - 1];
            let next = ghost.pos.apply(dir);
            assert!(self.grid.available(next), "Illegal move {dir:?}");
            ghost.pos = next;
            ghost.scared_timer = ghost.scared_timer.saturating_sub(1);
        }

        self.check_collisions();
    }

    fn check_collisions(&mut self) {
        for ghost in &mut self.ghosts {
            if ghost.pos != self.pacman || self.outcome != Outcome::None {
                continue;
            }
            if ghost.scared_timer > 0 {
                self.score += GHOST_REWARD;
                ghost.pos = ghost.start;
                ghost.scared_timer = 0;
            }
            // an eaten ghost may respawn right on pacman
            if ghost.pos == self.pacman {
                self.score -= LOSE_PENALTY;
                self.outcome = Outcome::Lose;
            }
        }
    }
}

impl GameState for Game {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        self.ghosts.len() + 1
    }

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        if self.outcome != Outcome::None {
            return Vec::new();
        }
        self.valid_moves(agent)
    }

    fn successor(&self, agent: usize, action: Direction) -> Game {
        let mut game = self.clone();
        game.step(agent, action);
        game
    }

    fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.outcome == Outcome::Lose
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl PacmanState for Game {
    fn pacman_position(&self) -> Vec2D {
        self.pacman
    }

    fn food_positions(&self) -> Vec<Vec2D> {
        self.grid.positions(Cell::Food).collect()
    }

    fn ghost_states(&self) -> Vec<GhostState> {
        self.ghosts
            .iter()
            .map(|g| GhostState {
                position: g.pos,
                scared_timer: g.scared_timer,
            })
            .collect()
    }

    fn capsule_positions(&self) -> Vec<Vec2D> {
        self.grid.positions(Cell::Capsule).collect()
    }
}

impl Game {
    /// Parses a textual layout.
    ///
    /// `%` are walls, `.` food, `o` capsules, `P` pacman and `G` ghosts.
    /// Lines are trimmed, so the rows have to be enclosed by walls.
    pub fn parse(txt: &str) -> Option<Game> {
        let lines: Vec<&str> = txt
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let height = lines.len();
        let width = lines.first()?.chars().count();
        if width > i16::MAX as usize || height > i16::MAX as usize {
            return None;
        }
        if lines.iter().any(|l| l.chars().count() != width) {
            return None;
        }

        let mut grid = Grid::new(width, height);
        let mut pacman = None;
        let mut ghosts = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let y = (height - row - 1) as i16;
            for (x, c) in line.chars().enumerate() {
                let p = Vec2D::new(x as _, y);
                grid[p] = match c {
                    '%' => Cell::Wall,
                    '.' => Cell::Food,
                    'o' => Cell::Capsule,
                    'P' if pacman.is_none() => {
                        pacman = Some(p);
                        Cell::Free
                    }
                    'G' => {
                        ghosts.push(Ghost::new(p));
                        Cell::Free
                    }
                    ' ' => Cell::Free,
                    _ => return None,
                };
            }
        }

        Some(Game::new(grid, pacman?, ghosts))
    }
}

impl Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game {{")?;

        for y in (0..self.grid.height as i16).rev() {
            write!(f, "  ")?;
            for x in 0..self.grid.width as i16 {
                let p = Vec2D::new(x, y);
                if p == self.pacman {
                    write!(f, "{}", "P".yellow())?;
                } else if let Some(ghost) = self.ghosts.iter().find(|g| g.pos == p) {
                    let style = if ghost.scared_timer > 0 {
                        Style::new().bright_blue()
                    } else {
                        Style::new().red()
                    };
                    write!(f, "{}", "G".style(style))?;
                } else {
                    match self.grid[p] {
                        Cell::Wall => write!(f, "{}", "%".blue())?,
                        cell => write!(f, "{:?}", cell)?,
                    }
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "  Score: {} {:?}", self.score, self.outcome)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}
