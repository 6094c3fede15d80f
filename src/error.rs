use crate::common::defs::Discrete;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridWorldError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    #[error("State {state} is outside a grid of {n_s} states")]
    InvalidState { state: Discrete, n_s: usize },
    #[error("Invalid grid configuration: {0}")]
    Configuration(String),
    #[error("Malformed config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GridWorldError>;
