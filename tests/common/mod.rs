//! A small open-grid chase game used by the integration tests.
//!
//! Agent 0 collects food while the remaining agents chase it. Touching an
//! active adversary loses the game, touching a scared one sends it home.

#![allow(dead_code)]

use adversarial_search::{Action, AdversaryView, AgentIndex, GridView, Outcome, Position, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Action for Direction {}

impl Direction {
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    fn apply(self, (x, y): Position) -> Position {
        match self {
            Direction::North => (x, y + 1),
            Direction::South => (x, y - 1),
            Direction::East => (x + 1, y),
            Direction::West => (x - 1, y),
            Direction::Stop => (x, y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    Illegal { agent: AgentIndex, action: Direction },
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Ghost {
    pub position: Position,
    pub start: Position,
    pub scared_timer: u32,
}

#[derive(Debug, Clone)]
pub struct Maze {
    pub width: i32,
    pub height: i32,
    pub pacman: Position,
    pub ghosts: Vec<Ghost>,
    pub food: Vec<Position>,
    pub score: f64,
    pub outcome: Option<Outcome>,
}

pub const FOOD_REWARD: f64 = 10.0;
pub const GHOST_REWARD: f64 = 200.0;
pub const WIN_REWARD: f64 = 500.0;
pub const LOSS_PENALTY: f64 = 500.0;
pub const TIME_PENALTY: f64 = 1.0;

impl Maze {
    pub fn new(width: i32, height: i32, pacman: Position) -> Self {
        Self {
            width,
            height,
            pacman,
            ghosts: Vec::new(),
            food: Vec::new(),
            score: 0.0,
            outcome: None,
        }
    }

    pub fn with_ghost(mut self, position: Position, scared_timer: u32) -> Self {
        self.ghosts.push(Ghost {
            position,
            start: position,
            scared_timer,
        });
        self
    }

    pub fn with_food(mut self, position: Position) -> Self {
        self.food.push(position);
        self
    }

    fn in_bounds(&self, (x, y): Position) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    fn position_of(&self, agent: AgentIndex) -> Option<Position> {
        match agent {
            0 => Some(self.pacman),
            _ => self.ghosts.get(agent - 1).map(|ghost| ghost.position),
        }
    }

    fn resolve_collisions(&mut self) {
        for ghost in &mut self.ghosts {
            if ghost.position != self.pacman {
                continue;
            }
            if ghost.scared_timer > 0 {
                self.score += GHOST_REWARD;
                ghost.position = ghost.start;
                ghost.scared_timer = 0;
            } else if self.outcome.is_none() {
                self.score -= LOSS_PENALTY;
                self.outcome = Some(Outcome::Loss);
            }
        }
    }
}

impl State for Maze {
    type Action = Direction;
    type Error = MazeError;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        let Some(position) = self.position_of(agent) else {
            return Vec::new();
        };

        let mut actions: Vec<Direction> = Direction::MOVES
            .into_iter()
            .filter(|direction| self.in_bounds(direction.apply(position)))
            .collect();
        if agent == 0 {
            actions.push(Direction::Stop);
        }
        actions
    }

    fn successor(&self, agent: AgentIndex, action: &Direction) -> Result<Self, MazeError> {
        if self.outcome.is_some() {
            return Err(MazeError::GameOver);
        }
        if !self.legal_actions(agent).contains(action) {
            return Err(MazeError::Illegal {
                agent,
                action: *action,
            });
        }

        let mut next = self.clone();
        if agent == 0 {
            next.pacman = action.apply(next.pacman);
            next.score -= TIME_PENALTY;
            if let Some(i) = next.food.iter().position(|food| *food == next.pacman) {
                next.food.swap_remove(i);
                next.score += FOOD_REWARD;
                if next.food.is_empty() {
                    next.score += WIN_REWARD;
                    next.outcome = Some(Outcome::Win);
                }
            }
        } else {
            let ghost = &mut next.ghosts[agent - 1];
            ghost.position = action.apply(ghost.position);
            ghost.scared_timer = ghost.scared_timer.saturating_sub(1);
        }
        next.resolve_collisions();

        Ok(next)
    }

    fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }

    fn is_loss(&self) -> bool {
        self.outcome == Some(Outcome::Loss)
    }

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn grid_view(&self) -> Option<&dyn GridView> {
        Some(self)
    }
}

impl GridView for Maze {
    fn agent_position(&self) -> Position {
        self.pacman
    }

    fn adversaries(&self) -> Vec<AdversaryView> {
        self.ghosts
            .iter()
            .map(|ghost| AdversaryView {
                position: ghost.position,
                scared_timer: ghost.scared_timer,
            })
            .collect()
    }

    fn collectibles(&self) -> Vec<Position> {
        self.food.clone()
    }
}
