//! Depth-limited adversarial search for deterministic, perfect-information,
//! multi-agent turn-based games.
//!
//! Agent 0 maximizes, every other agent minimizes, and agents move in
//! increasing index order within a round. Games plug in through [`State`];
//! heuristics plug in through [`Evaluator`].

mod ai;
pub mod config;
pub mod error;

use std::fmt::Debug;

pub use ai::{
    agent::AdversarialAgent,
    alpha_beta::{AlphaBetaSearcher, Bounds},
    evaluation::{
        manhattan_distance, AdversaryView, BlendedEvaluator, BlendedWeights, Evaluator, GridView,
        NamedEvaluator, Position, ScoreEvaluator,
    },
    game_tree::{
        edge::GameTreeEdge, node::GameTreeNode, GameTree, TreeAction, TreeError, TreeState,
    },
    minimax::MinimaxSearcher,
    reflex::ReflexPolicy,
    search::{Decision, SearchStats, Searcher},
    turn_order::{Role, TurnOrder},
};
pub use config::{EvaluationKind, SearchConfig, SearcherKind};
pub use error::{ConfigError, SearchError};

/// Index of an agent; 0 is the maximizer.
pub type AgentIndex = usize;

/// One single-agent move counted from the root of a search.
pub type Ply = usize;

pub trait Action: Clone + Debug {}

pub trait State: Sized {
    type Action: Action;
    type Error: Debug;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;
    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Result<Self, Self::Error>;

    fn is_win(&self) -> bool;
    fn is_loss(&self) -> bool;

    fn num_agents(&self) -> usize;
    fn score(&self) -> f64;

    fn outcome(&self) -> Option<Outcome> {
        if self.is_win() {
            Some(Outcome::Win)
        } else if self.is_loss() {
            Some(Outcome::Loss)
        } else {
            None
        }
    }

    /// Grid layout for positional heuristics. Games without one keep the
    /// default and can still be searched with the raw score.
    fn grid_view(&self) -> Option<&dyn GridView> {
        None
    }
}

/// Terminal result from the maximizer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}
