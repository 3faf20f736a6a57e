//! Searcher configuration.
//!
//! A configuration can be built in code, deserialized with serde, or parsed
//! from an agent-argument string such as `"depth=3,evalFn=better"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ai::evaluation::BlendedWeights;
use crate::error::ConfigError;

pub const DEFAULT_DEPTH: u32 = 2;

/// Named static evaluation functions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationKind {
    /// Raw game score.
    #[default]
    Score,
    /// Blended positional heuristic, see [`BlendedEvaluator`](crate::BlendedEvaluator).
    Better,
}

impl FromStr for EvaluationKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "score" | "scoreevaluationfunction" => Ok(EvaluationKind::Score),
            "better" | "betterevaluationfunction" => Ok(EvaluationKind::Better),
            _ => Err(ConfigError::UnknownEvaluation(s.to_string())),
        }
    }
}

impl fmt::Display for EvaluationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationKind::Score => write!(f, "score"),
            EvaluationKind::Better => write!(f, "better"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearcherKind {
    Minimax,
    AlphaBeta,
}

impl FromStr for SearcherKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearcherKind::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(SearcherKind::AlphaBeta),
            _ => Err(ConfigError::UnknownSearcher(s.to_string())),
        }
    }
}

impl fmt::Display for SearcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearcherKind::Minimax => write!(f, "minimax"),
            SearcherKind::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of full rounds searched before falling back to static evaluation.
    pub depth: u32,
    pub evaluation: EvaluationKind,
    /// Weights for [`EvaluationKind::Better`]; ignored by the raw score.
    pub weights: BlendedWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            evaluation: EvaluationKind::default(),
            weights: BlendedWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_evaluation(mut self, evaluation: EvaluationKind) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn with_weights(mut self, weights: BlendedWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Parses comma separated `key=value` pairs on top of the defaults.
    ///
    /// Recognized keys are `depth` and `evalFn` (alias `evaluation`). An empty
    /// string yields the default configuration.
    pub fn from_options(options: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for option in options.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            let Some((key, value)) = option.split_once('=') else {
                return Err(ConfigError::MalformedOption(option.to_string()));
            };

            match key.trim() {
                "depth" => config.depth = parse_depth(value)?,
                "evalFn" | "evaluation" => config.evaluation = value.parse()?,
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidDepth(self.depth.to_string()));
        }
        Ok(())
    }
}

fn parse_depth(value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(ConfigError::InvalidDepth(value.to_string())),
    }
}
