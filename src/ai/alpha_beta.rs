use log::{debug, trace};

use crate::ai::evaluation::Evaluator;
use crate::ai::search::{cutoff, root_actions, successor, Decision, SearchStats, Searcher};
use crate::ai::turn_order::{Role, TurnOrder};
use crate::error::SearchError;
use crate::{AgentIndex, Ply, State};

/// Path-local search window.
///
/// `alpha` is the value the maximizer can already guarantee on the path to the
/// root, `beta` the value the minimizers can already hold it to. The window is
/// passed by value, so a child only ever narrows its own copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub alpha: f64,
    pub beta: f64,
}

impl Bounds {
    pub fn full() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::full()
    }
}

/// Minimax with alpha-beta pruning. Chooses the same action as
/// [`MinimaxSearcher`](crate::MinimaxSearcher) whenever the root values are
/// free of ties, while visiting a subset of its nodes.
#[derive(Debug, Clone)]
pub struct AlphaBetaSearcher<E> {
    depth: u32,
    evaluator: E,
}

impl<E> AlphaBetaSearcher<E> {
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
        bounds: Bounds,
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
            Role::Maximizer => {
                let actions = state.legal_actions(0);
                self.max_value(state, actions, order, ply, bounds, stats)
                    .map(|(value, _)| value)
            }
            Role::Minimizer(agent) => self.min_value(state, agent, order, ply, bounds, stats),
        }
    }

    /// Returns the node value together with the first action that reached it.
    fn max_value<S>(
        &self,
        state: &S,
        actions: Vec<S::Action>,
        order: &TurnOrder,
        ply: Ply,
        mut bounds: Bounds,
        stats: &mut SearchStats,
    ) -> Result<(f64, Option<S::Action>), SearchError<S::Error>>
    where
        S: State,
        E: Evaluator<S>,
    {
        let mut v = f64::NEG_INFINITY;
        let mut best_action = None;

        for action in actions {
            let child = successor(state, 0, &action)?;
            let candidate = self.value(&child, order, ply + 1, bounds, stats)?;

            if candidate > v || best_action.is_none() {
                v = candidate;
                best_action = Some(action);
            }

            if v > bounds.beta {
                stats.prunes += 1;
                trace!("beta cutoff at ply {}: {} > {}", ply, v, bounds.beta);
                return Ok((v, best_action));
            }
            bounds.alpha = bounds.alpha.max(v);
        }

        Ok((v, best_action))
    }

    fn min_value<S>(
        &self,
        state: &S,
        agent: AgentIndex,
        order: &TurnOrder,
        ply: Ply,
        mut bounds: Bounds,
        stats: &mut SearchStats,
    ) -> Result<f64, SearchError<S::Error>>
    where
        S: State,
        E: Evaluator<S>,
    {
        let mut v = f64::INFINITY;

        for action in state.legal_actions(agent) {
            let child = successor(state, agent, &action)?;
            v = v.min(self.value(&child, order, ply + 1, bounds, stats)?);

            if v < bounds.alpha {
                stats.prunes += 1;
                trace!("alpha cutoff at ply {} (agent {}): {} < {}", ply, agent, v, bounds.alpha);
                return Ok(v);
            }
            bounds.beta = bounds.beta.min(v);
        }

        Ok(v)
    }
}

impl<S, E> Searcher<S> for AlphaBetaSearcher<E>
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

        let (value, best_action) =
            self.max_value(state, actions, &order, 0, Bounds::full(), &mut stats)?;
        let action = best_action.ok_or(SearchError::NoLegalActions { agent: 0, ply: 0 })?;

        debug!(
            "alpha-beta depth {} chose {:?} with value {} ({} nodes, {} evaluations, {} prunes)",
            self.depth, action, value, stats.nodes, stats.evaluations, stats.prunes
        );

        Ok(Decision {
            action,
            value,
            stats,
        })
    }
}
