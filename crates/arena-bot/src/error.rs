use std::path::PathBuf;

use arena_core::Coords;
use arena_nav::CompileError;
use thiserror::Error;

/// Precondition violations in what the host hands the controller.
///
/// Unobserved cells and an unreachable menhir are not errors; the controller
/// handles both by exploring and retrying on later cycles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("decide called before reset; no menhir position is known")]
    NotReset,

    #[error("arena `{arena}` does not describe a menhir position")]
    MissingGoal { arena: String },

    #[error("observation does not include the agent's own tile at {position}")]
    MissingSelfTile { position: Coords },

    #[error("the agent's own tile at {position} has no character on it")]
    MissingSelfCharacter { position: Coords },

    #[error("route compilation failed: {0}")]
    Route(#[from] CompileError),
}

pub type Result<T> = std::result::Result<T, ControllerError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read controller config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid controller config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
