use crate::ai::game_tree::TreeAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTreeEdge {
    pub action: TreeAction,
}

impl GameTreeEdge {
    pub fn new(action: TreeAction) -> Self {
        Self { action }
    }
}
