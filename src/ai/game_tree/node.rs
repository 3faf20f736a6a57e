use crate::{Outcome, Ply};

#[derive(Debug, Clone, PartialEq)]
pub struct GameTreeNode {
    pub score: f64,
    pub outcome: Option<Outcome>,
    /// Distance from the root, which fixes the agent to move here.
    pub ply: Ply,
}

impl GameTreeNode {
    pub fn new(score: f64, ply: Ply) -> Self {
        Self {
            score,
            outcome: None,
            ply,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}
