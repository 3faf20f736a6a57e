use crate::ai::evaluation::Evaluator;
use crate::ai::turn_order::TurnOrder;
use crate::error::SearchError;
use crate::{AgentIndex, Ply, State};

/// Counters collected during a single decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, including the root and every leaf.
    pub nodes: u64,
    /// Calls into the evaluation function at terminal or horizon nodes.
    pub evaluations: u64,
    /// Nodes whose remaining actions were skipped by a bound cutoff.
    pub prunes: u64,
}

#[derive(Debug, Clone)]
pub struct Decision<A> {
    pub action: A,
    pub value: f64,
    pub stats: SearchStats,
}

pub trait Searcher<S: State> {
    /// Searches from `state`, where agent 0 is to move, and reports the chosen
    /// action with its backed-up value.
    fn search(&self, state: &S) -> Result<Decision<S::Action>, SearchError<S::Error>>;

    fn decide(&self, state: &S) -> Result<S::Action, SearchError<S::Error>> {
        self.search(state).map(|decision| decision.action)
    }
}

/// Checks the preconditions of a decision and returns agent 0's actions.
pub(crate) fn root_actions<S: State>(
    state: &S,
    depth_limit: u32,
) -> Result<(TurnOrder, Vec<S::Action>), SearchError<S::Error>> {
    if state.outcome().is_some() {
        return Err(SearchError::TerminalState);
    }

    let num_agents = state.num_agents();
    if num_agents == 0 {
        return Err(SearchError::NoAgents);
    }

    let actions = state.legal_actions(0);
    if actions.is_empty() {
        return Err(SearchError::NoLegalActions { agent: 0, ply: 0 });
    }

    Ok((TurnOrder::new(depth_limit, num_agents), actions))
}

/// Returns the static value of `state` if recursion must stop at `ply`.
///
/// Terminal states are tested before the horizon, so a terminal state sitting
/// exactly on the horizon is still scored as terminal.
pub(crate) fn cutoff<S: State, E: Evaluator<S>>(
    evaluator: &E,
    state: &S,
    order: &TurnOrder,
    ply: Ply,
    stats: &mut SearchStats,
) -> Option<f64> {
    if let Some(outcome) = state.outcome() {
        stats.evaluations += 1;
        return Some(evaluator.evaluate_terminal(state, outcome));
    }

    if order.is_horizon(ply) {
        stats.evaluations += 1;
        return Some(evaluator.evaluate(state));
    }

    None
}

pub(crate) fn successor<S: State>(
    state: &S,
    agent: AgentIndex,
    action: &S::Action,
) -> Result<S, SearchError<S::Error>> {
    state
        .successor(agent, action)
        .map_err(|error| SearchError::Successor { agent, error })
}
