//! Noisy n x n gridworld, modelled as a finite MDP whose transition
//! distribution is enumerated exactly.

pub mod common;
pub mod config;
pub mod envs;
pub mod error;
pub mod mdps;

pub use common::defs::{Discrete, Transition, Transitions};
pub use config::GridWorldConfig;
pub use envs::{
    action::Action,
    grid_world::{Coord, GridWorld},
};
pub use error::{GridWorldError, Result};
pub use mdps::{
    mdp::Mdp,
    mdp_simulator::{pick_next, Weighted},
};
