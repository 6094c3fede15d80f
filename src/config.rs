use crate::common::defs::Discrete;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SIZE: usize = 4;

/// Construction parameters for a [`crate::GridWorld`].
///
/// Missing fields fall back to the default 4 x 4 world: the built-in reward
/// layout, terminal states at both corners of the main diagonal, and an
/// undiscounted return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridWorldConfig {
    pub n: usize,
    pub gamma: f32,
    /// Row-major `n x n` rewards. Replaces the built-in layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_states: Option<Vec<Discrete>>,
}

impl Default for GridWorldConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_SIZE,
            gamma: 1.,
            rewards: None,
            terminal_states: None,
        }
    }
}

impl GridWorldConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
