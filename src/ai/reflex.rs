use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::evaluation::Evaluator;
use crate::ai::search::{root_actions, successor};
use crate::error::SearchError;
use crate::State;

/// One-ply baseline: scores each of agent 0's immediate successors and picks
/// uniformly among the best.
#[derive(Debug, Clone)]
pub struct ReflexPolicy<E> {
    evaluator: E,
}

impl<E> ReflexPolicy<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn decide<R, S>(&self, rng: &mut R, state: &S) -> Result<S::Action, SearchError<S::Error>>
    where
        R: Rng,
        S: State,
        E: Evaluator<S>,
    {
        let (_, actions) = root_actions(state, 1)?;

        let mut scored = Vec::with_capacity(actions.len());
        for action in actions {
            let child = successor(state, 0, &action)?;
            scored.push((action, self.evaluator.evaluate(&child)));
        }

        let best_score = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);

        let best: Vec<S::Action> = scored
            .into_iter()
            .filter(|(_, score)| *score == best_score)
            .map(|(action, _)| action)
            .collect();

        best.choose(rng)
            .cloned()
            .ok_or(SearchError::NoLegalActions { agent: 0, ply: 0 })
    }
}
