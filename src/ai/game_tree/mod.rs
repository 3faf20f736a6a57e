//! Explicit game trees.
//!
//! A [`GameTree`] spells out every position of a small game by hand, which is
//! handy for checking searchers against trees with known minimax values.
//! [`TreeState`] walks such a tree through the [`State`] interface.

pub mod edge;
pub mod node;

use std::fmt;
use std::sync::Arc;

use petgraph::prelude::*;
use thiserror::Error;

use crate::ai::game_tree::edge::GameTreeEdge;
use crate::ai::game_tree::node::GameTreeNode;
use crate::{Action, AgentIndex, Outcome, Ply, State};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeAction(String);

impl TreeAction {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Action for TreeAction {}

impl From<&str> for TreeAction {
    fn from(label: &str) -> Self {
        TreeAction(label.to_string())
    }
}

impl fmt::Display for TreeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("no edge labelled {0} leaves this node")]
    UnknownAction(TreeAction),

    #[error("agent {agent} moved out of turn, agent {expected} is to move")]
    OutOfTurn {
        agent: AgentIndex,
        expected: AgentIndex,
    },
}

#[derive(Debug, Clone)]
pub struct GameTree {
    root_node_idx: NodeIndex,
    graph: Graph<GameTreeNode, GameTreeEdge, Directed>,
    num_agents: usize,
}

impl GameTree {
    pub fn new(num_agents: usize) -> Self {
        let mut graph = Graph::new();
        let root_node_idx = graph.add_node(GameTreeNode::new(0.0, 0));
        Self {
            root_node_idx,
            graph,
            num_agents,
        }
    }

    /// Builds a complete tree where every interior node has `branching`
    /// children and leaves sit `plies` below the root. Leaf scores are taken
    /// from `leaves` left to right, wrapping around when it runs out.
    pub fn uniform(num_agents: usize, branching: usize, plies: Ply, leaves: &[f64]) -> Self {
        let mut tree = Self::new(num_agents);
        let mut frontier = vec![tree.root_node_idx];

        for _ in 0..plies {
            let mut next = Vec::with_capacity(frontier.len() * branching);
            for parent in frontier {
                for child in 0..branching {
                    next.push(tree.add_child(parent, &child.to_string(), 0.0));
                }
            }
            frontier = next;
        }

        if !leaves.is_empty() {
            for (i, leaf) in frontier.into_iter().enumerate() {
                tree.set_score(leaf, leaves[i % leaves.len()]);
            }
        }

        tree
    }

    pub fn root(&self) -> NodeIndex {
        self.root_node_idx
    }

    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    pub fn graph(&self) -> &Graph<GameTreeNode, GameTreeEdge, Directed> {
        &self.graph
    }

    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeIndex, label: &str, score: f64) -> NodeIndex {
        let ply = self.graph[parent].ply + 1;
        let child = self.graph.add_node(GameTreeNode::new(score, ply));
        self.graph
            .add_edge(parent, child, GameTreeEdge::new(TreeAction::from(label)));
        child
    }

    pub fn add_terminal(
        &mut self,
        parent: NodeIndex,
        label: &str,
        score: f64,
        outcome: Outcome,
    ) -> NodeIndex {
        let child = self.add_child(parent, label, score);
        self.set_outcome(child, Some(outcome));
        child
    }

    pub fn set_outcome(&mut self, node_idx: NodeIndex, outcome: Option<Outcome>) {
        if let Some(node) = self.graph.node_weight_mut(node_idx) {
            node.outcome = outcome;
        }
    }

    pub fn set_score(&mut self, node_idx: NodeIndex, score: f64) {
        if let Some(node) = self.graph.node_weight_mut(node_idx) {
            node.score = score;
        }
    }

    /// Children of `node_idx` in the order they were added.
    pub fn node_children(&self, node_idx: NodeIndex) -> Vec<(NodeIndex, &GameTreeEdge)> {
        let mut edges: Vec<_> = self.graph.edges_directed(node_idx, Outgoing).collect();
        // petgraph lists outgoing edges newest first
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| (edge.target(), edge.weight()))
            .collect()
    }

    /// A state positioned at the root of a snapshot of this tree.
    pub fn state(&self) -> TreeState {
        Arc::new(self.clone()).into()
    }
}

/// Cursor into a shared [`GameTree`]. Successors share the tree and only
/// move the cursor.
#[derive(Debug, Clone)]
pub struct TreeState {
    tree: Arc<GameTree>,
    node_idx: NodeIndex,
}

impl From<Arc<GameTree>> for TreeState {
    fn from(tree: Arc<GameTree>) -> Self {
        let node_idx = tree.root();
        Self { tree, node_idx }
    }
}

impl TreeState {
    pub fn node_idx(&self) -> NodeIndex {
        self.node_idx
    }

    pub fn ply(&self) -> Ply {
        self.node().ply
    }

    pub fn agent_to_move(&self) -> Option<AgentIndex> {
        self.ply().checked_rem(self.tree.num_agents)
    }

    fn node(&self) -> &GameTreeNode {
        &self.tree.graph[self.node_idx]
    }
}

impl State for TreeState {
    type Action = TreeAction;
    type Error = TreeError;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<TreeAction> {
        if self.agent_to_move() != Some(agent) {
            return Vec::new();
        }

        self.tree
            .node_children(self.node_idx)
            .into_iter()
            .map(|(_, edge)| edge.action.clone())
            .collect()
    }

    fn successor(&self, agent: AgentIndex, action: &TreeAction) -> Result<Self, TreeError> {
        let expected = self.agent_to_move().unwrap_or(0);
        if agent != expected {
            return Err(TreeError::OutOfTurn { agent, expected });
        }

        let child = self
            .tree
            .node_children(self.node_idx)
            .into_iter()
            .find(|(_, edge)| &edge.action == action)
            .map(|(child, _)| child)
            .ok_or_else(|| TreeError::UnknownAction(action.clone()))?;

        Ok(Self {
            tree: Arc::clone(&self.tree),
            node_idx: child,
        })
    }

    fn is_win(&self) -> bool {
        self.node().outcome == Some(Outcome::Win)
    }

    fn is_loss(&self) -> bool {
        self.node().outcome == Some(Outcome::Loss)
    }

    fn num_agents(&self) -> usize {
        self.tree.num_agents
    }

    fn score(&self) -> f64 {
        self.node().score
    }
}
