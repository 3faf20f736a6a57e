//! Static evaluation functions.
//!
//! An evaluator maps a state to a real number where higher is better for
//! agent 0. Searchers call it on terminal states and on states at the horizon.

use serde::{Deserialize, Serialize};

use crate::config::{EvaluationKind, SearchConfig};
use crate::{Outcome, State};

pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> f64;

    /// Value of a state that ended the game. Game scores usually already
    /// reflect the outcome, so this defaults to [`Evaluator::evaluate`].
    fn evaluate_terminal(&self, state: &S, _outcome: Outcome) -> f64 {
        self.evaluate(state)
    }
}

impl<S, E: Evaluator<S> + ?Sized> Evaluator<S> for &E {
    fn evaluate(&self, state: &S) -> f64 {
        (**self).evaluate(state)
    }

    fn evaluate_terminal(&self, state: &S, outcome: Outcome) -> f64 {
        (**self).evaluate_terminal(state, outcome)
    }
}

/// The raw game score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluator;

impl<S: State> Evaluator<S> for ScoreEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}

pub type Position = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdversaryView {
    pub position: Position,
    /// Moves left during which the adversary is vulnerable; 0 when it is not.
    pub scared_timer: u32,
}

impl AdversaryView {
    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// Grid layout of a state, as needed by positional heuristics.
pub trait GridView {
    fn agent_position(&self) -> Position;
    fn adversaries(&self) -> Vec<AdversaryView>;
    fn collectibles(&self) -> Vec<Position>;
}

pub fn manhattan_distance(a: Position, b: Position) -> u64 {
    u64::from(a.0.abs_diff(b.0)) + u64::from(a.1.abs_diff(b.1))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendedWeights {
    pub food_distance: f64,
    pub scared_ghost: f64,
    pub ghost_distance: f64,
    /// Flat bonus while any adversary is scared.
    pub any_scared_bonus: f64,
    /// Bonus per scared adversary within `hunt_radius`.
    pub hunt_bonus: f64,
    pub hunt_radius: u32,
    /// Scared adversaries are only hunted while their timer is below this.
    pub hunt_timer_limit: u32,
    pub danger_radius: u32,
}

impl Default for BlendedWeights {
    fn default() -> Self {
        Self {
            food_distance: 1.5,
            scared_ghost: 1.0,
            ghost_distance: 1.0,
            any_scared_bonus: 100.0,
            hunt_bonus: 1000.0,
            hunt_radius: 4,
            hunt_timer_limit: 10,
            danger_radius: 2,
        }
    }
}

/// Game score blended with adversary and collectible positions.
#[derive(Debug, Clone, Default)]
pub struct BlendedEvaluator {
    weights: BlendedWeights,
}

impl BlendedEvaluator {
    pub fn new(weights: BlendedWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &BlendedWeights {
        &self.weights
    }

    /// Adjusts a game score by the positions in `grid`.
    pub fn blend(&self, mut score: f64, grid: &dyn GridView) -> f64 {
        let w = &self.weights;
        let position = grid.agent_position();
        let adversaries = grid.adversaries();

        if adversaries.iter().any(AdversaryView::is_scared) {
            score += w.any_scared_bonus;
        }

        for adversary in &adversaries {
            let distance = manhattan_distance(position, adversary.position);
            let huntable = adversary.is_scared() && adversary.scared_timer < w.hunt_timer_limit;

            if distance < u64::from(w.hunt_radius) && huntable {
                score += w.hunt_bonus;
                score -= distance as f64 * w.scared_ghost;
            } else if distance < u64::from(w.danger_radius) {
                score += distance as f64 * w.ghost_distance;
            }
        }

        for food in grid.collectibles() {
            let distance = manhattan_distance(position, food);
            score -= (distance as f64).sqrt() * w.food_distance;
        }

        score
    }
}

impl<S: State + GridView> Evaluator<S> for BlendedEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        self.blend(state.score(), state)
    }
}

/// Evaluator selected by name in a [`SearchConfig`].
///
/// `Better` reads positions through [`State::grid_view`]; on a state without
/// a grid it scores like `Score`. [`AdversarialAgent`](crate::AdversarialAgent)
/// refuses that combination up front.
#[derive(Debug, Clone)]
pub enum NamedEvaluator {
    Score(ScoreEvaluator),
    Better(BlendedEvaluator),
}

impl NamedEvaluator {
    pub fn needs_grid(&self) -> bool {
        matches!(self, NamedEvaluator::Better(_))
    }
}

impl From<&SearchConfig> for NamedEvaluator {
    fn from(config: &SearchConfig) -> Self {
        match config.evaluation {
            EvaluationKind::Score => NamedEvaluator::Score(ScoreEvaluator),
            EvaluationKind::Better => NamedEvaluator::Better(BlendedEvaluator::new(config.weights)),
        }
    }
}

impl From<EvaluationKind> for NamedEvaluator {
    fn from(kind: EvaluationKind) -> Self {
        match kind {
            EvaluationKind::Score => NamedEvaluator::Score(ScoreEvaluator),
            EvaluationKind::Better => NamedEvaluator::Better(BlendedEvaluator::default()),
        }
    }
}

impl<S: State> Evaluator<S> for NamedEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        match (self, state.grid_view()) {
            (NamedEvaluator::Better(evaluator), Some(grid)) => evaluator.blend(state.score(), grid),
            _ => state.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    #[derive(Debug, Clone)]
    struct Step;

    impl Action for Step {}

    #[derive(Debug, Clone)]
    struct Board {
        score: f64,
        pacman: Position,
        ghosts: Vec<AdversaryView>,
        food: Vec<Position>,
    }

    impl State for Board {
        type Action = Step;
        type Error = ();

        fn legal_actions(&self, _agent: usize) -> Vec<Step> {
            Vec::new()
        }

        fn successor(&self, _agent: usize, _action: &Step) -> Result<Self, ()> {
            Err(())
        }

        fn is_win(&self) -> bool {
            false
        }

        fn is_loss(&self) -> bool {
            false
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

    impl GridView for Board {
        fn agent_position(&self) -> Position {
            self.pacman
        }

        fn adversaries(&self) -> Vec<AdversaryView> {
            self.ghosts.clone()
        }

        fn collectibles(&self) -> Vec<Position> {
            self.food.clone()
        }
    }

    fn ghost(x: i32, y: i32, scared_timer: u32) -> AdversaryView {
        AdversaryView {
            position: (x, y),
            scared_timer,
        }
    }

    fn board(ghosts: Vec<AdversaryView>, food: Vec<Position>) -> Board {
        Board {
            score: 10.0,
            pacman: (0, 0),
            ghosts,
            food,
        }
    }

    #[test]
    fn manhattan() {
        assert_eq!(manhattan_distance((0, 0), (3, 4)), 7);
        assert_eq!(manhattan_distance((-2, 5), (1, 1)), 7);
        assert_eq!(manhattan_distance((1, 1), (1, 1)), 0);
    }

    #[test]
    fn manhattan_spans_the_whole_coordinate_range() {
        let far = manhattan_distance((i32::MIN, i32::MIN), (i32::MAX, i32::MAX));
        assert_eq!(far, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn score_evaluator_is_the_game_score() {
        let state = board(vec![ghost(1, 0, 0)], vec![(5, 5)]);
        assert_eq!(ScoreEvaluator.evaluate(&state), 10.0);
    }

    #[test]
    fn food_distance_costs_its_square_root() {
        let state = board(vec![], vec![(4, 0), (0, 9)]);
        let value = BlendedEvaluator::default().evaluate(&state);
        assert!((value - (10.0 - 1.5 * 2.0 - 1.5 * 3.0)).abs() < 1e-9);
    }

    #[test]
    fn closing_in_on_a_scared_adversary_pays() {
        let evaluator = BlendedEvaluator::default();
        let near = evaluator.evaluate(&board(vec![ghost(1, 0, 5)], vec![]));
        let far = evaluator.evaluate(&board(vec![ghost(3, 0, 5)], vec![]));
        let out_of_reach = evaluator.evaluate(&board(vec![ghost(6, 0, 5)], vec![]));

        assert_eq!(near, 10.0 + 100.0 + 1000.0 - 1.0);
        assert_eq!(far, 10.0 + 100.0 + 1000.0 - 3.0);
        assert_eq!(out_of_reach, 10.0 + 100.0);
        assert!(near > far && far > out_of_reach);
    }

    #[test]
    fn long_scare_is_not_hunted() {
        let value = BlendedEvaluator::default().evaluate(&board(vec![ghost(1, 0, 12)], vec![]));
        // still counts as scared for the flat bonus, falls into the danger branch
        assert_eq!(value, 10.0 + 100.0 + 1.0);
    }

    #[test]
    fn adjacent_active_adversary_adds_its_distance() {
        let evaluator = BlendedEvaluator::default();
        assert_eq!(evaluator.evaluate(&board(vec![ghost(1, 0, 0)], vec![])), 11.0);
        assert_eq!(evaluator.evaluate(&board(vec![ghost(0, 0, 0)], vec![])), 10.0);
        assert_eq!(evaluator.evaluate(&board(vec![ghost(2, 0, 0)], vec![])), 10.0);
    }

    #[test]
    fn named_evaluators_follow_their_kind() {
        let state = board(vec![], vec![(1, 0)]);
        let score = NamedEvaluator::from(EvaluationKind::Score);
        let better = NamedEvaluator::from(EvaluationKind::Better);
        assert_eq!(score.evaluate(&state), 10.0);
        assert_eq!(better.evaluate(&state), 8.5);
    }

    #[test]
    fn better_falls_back_to_the_score_without_a_grid() {
        let mut tree = crate::GameTree::new(2);
        let root = tree.root();
        tree.set_score(root, 42.0);

        let better = NamedEvaluator::from(EvaluationKind::Better);
        assert!(better.needs_grid());
        assert_eq!(better.evaluate(&tree.state()), 42.0);
    }

    #[test]
    fn terminal_evaluation_defaults_to_the_heuristic() {
        let state = board(vec![], vec![]);
        assert_eq!(ScoreEvaluator.evaluate_terminal(&state, Outcome::Win), 10.0);
    }
}
