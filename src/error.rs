use std::fmt::Debug;
use thiserror::Error;
use crate::{AgentIndex, Ply};

#[derive(Error, Debug)]
pub enum SearchError<E: Debug> {
    #[error("cannot decide from a terminal state")]
    TerminalState,

    #[error("agent {agent} has no legal actions at ply {ply}")]
    NoLegalActions { agent: AgentIndex, ply: Ply },

    #[error("state reports zero agents")]
    NoAgents,

    #[error("the better evaluation needs a grid view of the state")]
    NoGridView,

    #[error("successor generation failed for agent {agent}: {error:?}")]
    Successor { agent: AgentIndex, error: E },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("depth must be a positive number of rounds, got {0:?}")]
    InvalidDepth(String),

    #[error("unknown evaluation function {0:?}")]
    UnknownEvaluation(String),

    #[error("unknown searcher {0:?}")]
    UnknownSearcher(String),

    #[error("unknown option {0:?}")]
    UnknownOption(String),

    #[error("option {0:?} is not of the form key=value")]
    MalformedOption(String),
}
