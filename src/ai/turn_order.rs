use crate::{AgentIndex, Ply};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Maximizer,
    Minimizer(AgentIndex),
}

/// Maps a ply counter to the acting agent and decides where the horizon lies.
///
/// `depth_limit` counts full rounds, so the horizon sits at
/// `depth_limit * num_agents` plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    depth_limit: u32,
    num_agents: usize,
}

impl TurnOrder {
    pub fn new(depth_limit: u32, num_agents: usize) -> Self {
        debug_assert!(num_agents > 0);
        Self {
            depth_limit,
            num_agents,
        }
    }

    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    pub fn agent(&self, ply: Ply) -> AgentIndex {
        ply % self.num_agents
    }

    pub fn role(&self, ply: Ply) -> Role {
        match self.agent(ply) {
            0 => Role::Maximizer,
            agent => Role::Minimizer(agent),
        }
    }

    pub fn horizon(&self) -> Ply {
        (self.depth_limit as Ply).saturating_mul(self.num_agents)
    }

    pub fn is_horizon(&self, ply: Ply) -> bool {
        ply >= self.horizon()
    }
}
