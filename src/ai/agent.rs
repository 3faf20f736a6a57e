use crate::ai::alpha_beta::AlphaBetaSearcher;
use crate::ai::evaluation::NamedEvaluator;
use crate::ai::minimax::MinimaxSearcher;
use crate::ai::search::{Decision, Searcher};
use crate::config::{SearchConfig, SearcherKind};
use crate::error::{ConfigError, SearchError};
use crate::State;

/// A searcher picked at construction time, driven by a [`SearchConfig`].
#[derive(Debug, Clone)]
pub struct AdversarialAgent {
    kind: SearcherKind,
    config: SearchConfig,
    evaluator: NamedEvaluator,
}

impl AdversarialAgent {
    pub fn new(kind: SearcherKind, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            kind,
            evaluator: NamedEvaluator::from(&config),
            config,
        })
    }

    /// e.g. `AdversarialAgent::from_options("alphabeta", "depth=3,evalFn=better")`
    pub fn from_options(kind: &str, options: &str) -> Result<Self, ConfigError> {
        Self::new(kind.parse()?, SearchConfig::from_options(options)?)
    }

    pub fn kind(&self) -> SearcherKind {
        self.kind
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Fails with [`SearchError::NoGridView`] when the configured evaluation
    /// reads positions and `state` does not expose a grid.
    pub fn search<S>(&self, state: &S) -> Result<Decision<S::Action>, SearchError<S::Error>>
    where
        S: State,
    {
        if self.evaluator.needs_grid() && state.grid_view().is_none() {
            return Err(SearchError::NoGridView);
        }
        match self.kind {
            SearcherKind::Minimax => {
                MinimaxSearcher::new(self.config.depth, &self.evaluator).search(state)
            }
            SearcherKind::AlphaBeta => {
                AlphaBetaSearcher::new(self.config.depth, &self.evaluator).search(state)
            }
        }
    }

    pub fn decide<S>(&self, state: &S) -> Result<S::Action, SearchError<S::Error>>
    where
        S: State,
    {
        self.search(state).map(|decision| decision.action)
    }
}
