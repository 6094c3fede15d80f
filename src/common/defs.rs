use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Discrete = i32;

/// One outcome of taking an action in a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub next_state: Discrete,
    pub probability: f64,
    pub reward: f64,
    pub done: bool,
}

/// Outcome distributions keyed by (state, action code).
pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;
