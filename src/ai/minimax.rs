use log::debug;

use crate::ai::evaluation::Evaluator;
use crate::ai::search::{cutoff, root_actions, successor, Decision, SearchStats, Searcher};
use crate::ai::turn_order::{Role, TurnOrder};
use crate::error::SearchError;
use crate::{AgentIndex, Ply, State};

/// Exhaustive minimax down to the configured number of rounds.
#[derive(Debug, Clone)]
pub struct MinimaxSearcher<E> {
    depth: u32,
    evaluator: E,
}

impl<E> MinimaxSearcher<E> {
    /// `depth` counts full rounds of moves. A depth of zero is accepted and
    /// scores agent 0's immediate successors without looking at any reply;
    /// [`SearchConfig::validate`](crate::SearchConfig::validate) rejects it
    /// for configured agents.
    pub fn new(depth: u32, evaluator: E) -> Self {
        Self { depth, evaluator }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    fn value<S>(
        &self,
        state: &S,
        order: &TurnOrder,
        ply: Ply,
        stats: &mut SearchStats,
    ) -> Result<f64, SearchError<S::Error>>
    where
        S: State,
        E: Evaluator<S>,
    {
        stats.nodes += 1;

        if let Some(value) = cutoff(&self.evaluator, state, order, ply, stats) {
            return Ok(value);
        }

        match order.role(ply) {
            Role::Maximizer => self.max_value(state, order, ply, stats),
            Role::Minimizer(agent) => self.min_value(state, agent, order, ply, stats),
        }
    }

    fn max_value<S>(
        &self,
        state: &S,
        order: &TurnOrder,
        ply: Ply,
        stats: &mut SearchStats,
    ) -> Result<f64, SearchError<S::Error>>
    where
        S: State,
        E: Evaluator<S>,
    {
        let mut v = f64::NEG_INFINITY;
        for action in state.legal_actions(0) {
            let child = successor(state, 0, &action)?;
            v = v.max(self.value(&child, order, ply + 1, stats)?);
        }
        Ok(v)
    }

    fn min_value<S>(
        &self,
        state: &S,
        agent: AgentIndex,
        order: &TurnOrder,
        ply: Ply,
        stats: &mut SearchStats,
    ) -> Result<f64, SearchError<S::Error>>
    where
        S: State,
        E: Evaluator<S>,
    {
        let mut v = f64::INFINITY;
        for action in state.legal_actions(agent) {
            let child = successor(state, agent, &action)?;
            v = v.min(self.value(&child, order, ply + 1, stats)?);
        }
        Ok(v)
    }
}

impl<S, E> Searcher<S> for MinimaxSearcher<E>
where
    S: State,
    E: Evaluator<S>,
{
    fn search(&self, state: &S) -> Result<Decision<S::Action>, SearchError<S::Error>> {
        let (order, actions) = root_actions(state, self.depth)?;
        let mut stats = SearchStats {
            nodes: 1,
            ..Default::default()
        };

        let mut best_action = None;
        let mut best_value = f64::NEG_INFINITY;

        for action in actions {
            let child = successor(state, 0, &action)?;
            let value = self.value(&child, &order, 1, &mut stats)?;

            // ties go to the later action
            if value >= best_value {
                best_action = Some(action);
                best_value = value;
            }
        }

        let action = best_action.ok_or(SearchError::NoLegalActions { agent: 0, ply: 0 })?;

        debug!(
            "minimax depth {} chose {:?} with value {} ({} nodes, {} evaluations)",
            self.depth, action, best_value, stats.nodes, stats.evaluations
        );

        Ok(Decision {
            action,
            value: best_value,
            stats,
        })
    }
}
