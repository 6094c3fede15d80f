use super::action::Action;
use crate::common::defs::*;
use crate::config::GridWorldConfig;
use crate::error::{GridWorldError, Result};
use crate::mdps::{mdp::Mdp, mdp_simulator::pick_next};
use itertools::{iproduct, Itertools};
use ndarray::{s, Array2};
use rand::Rng;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// (row, col)
pub type Coord = (Discrete, Discrete);

const INTENDED_PROBABILITY: f64 = 0.7;
const SLIP_PROBABILITY: f64 = 0.1;

const STEP_REWARD: f64 = -1.;
const PENALTY_REWARD: f64 = -10.;

/// Simple n x n gridworld with a slippery actuator.
///
/// The intended move is taken with probability 0.7, each of the other three
/// with 0.1. A move that would leave the grid keeps the agent in place.
/// Terminal states are absorbing and every move into one pays 0.
///
/// States are numbered row-major. A 3 x 3 grid:
///
/// ```text
///   | 0 | 1 | 2 |
///   | 3 | 4 | 5 |
///   | 6 | 7 | 8 |
/// ```
#[derive(Debug, Clone)]
pub struct GridWorld {
    n: usize,
    gamma: f32,
    rewards: Array2<f64>,
    terminal_states: Vec<Discrete>,
}

impl GridWorld {
    /// Grid with the built-in reward layout and terminal states `0` and `n*n - 1`.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_layout(n, default_rewards(n)?, default_terminal_states(n))
    }

    pub fn with_layout(
        n: usize,
        rewards: Array2<f64>,
        terminal_states: Vec<Discrete>,
    ) -> Result<Self> {
        if n == 0 {
            return Err(GridWorldError::Configuration(
                "grid must have at least one cell".to_string(),
            ));
        }

        if rewards.dim() != (n, n) {
            return Err(GridWorldError::Configuration(format!(
                "reward layout is {:?}, expected ({n}, {n})",
                rewards.dim()
            )));
        }

        let n_s = n * n;
        if let Some(s) = terminal_states
            .iter()
            .find(|&&s| usize::try_from(s).map_or(true, |s| s >= n_s))
        {
            return Err(GridWorldError::Configuration(format!(
                "terminal state {s} is outside a grid of {n_s} states"
            )));
        }

        let terminal_states = terminal_states.into_iter().unique().collect::<Vec<_>>();
        debug!(n, ?terminal_states, "gridworld created");

        Ok(Self {
            n,
            gamma: 1.,
            rewards,
            terminal_states,
        })
    }

    pub fn from_config(config: &GridWorldConfig) -> Result<Self> {
        let n = config.n;
        let rewards = match &config.rewards {
            Some(rows) => rewards_from_rows(n, rows)?,
            None => default_rewards(n)?,
        };
        let terminal_states = config
            .terminal_states
            .clone()
            .unwrap_or_else(|| default_terminal_states(n));

        Self::with_layout(n, rewards, terminal_states)?.with_gamma(config.gamma)
    }

    /// Discount handed to solvers through [`Mdp::gamma`].
    pub fn with_gamma(mut self, gamma: f32) -> Result<Self> {
        if !(0. ..=1.).contains(&gamma) {
            return Err(GridWorldError::Configuration(format!(
                "discount {gamma} is outside [0, 1]"
            )));
        }

        self.gamma = gamma;
        Ok(self)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn n_states(&self) -> usize {
        self.n * self.n
    }

    pub fn terminal_states(&self) -> &[Discrete] {
        &self.terminal_states
    }

    /// The reward paid for entering each cell, before the terminal override.
    pub fn rewards(&self) -> &Array2<f64> {
        &self.rewards
    }

    /// Coordinate to state number. Coordinates outside the grid are not checked.
    pub fn state(&self, (row, col): Coord) -> Discrete {
        row * self.side() + col
    }

    /// Inverse of [`GridWorld::state`].
    pub fn location(&self, s: Discrete) -> Coord {
        (s.div_euclid(self.side()), s.rem_euclid(self.side()))
    }

    pub fn in_bounds(&self, row: Discrete, col: Discrete) -> bool {
        (0..self.side()).contains(&row) && (0..self.side()).contains(&col)
    }

    pub fn is_terminal(&self, s: Discrete) -> bool {
        self.terminal_states.contains(&s)
    }

    /// Probability of actually taking each action, in canonical order, when
    /// `intended` is requested.
    pub fn action_probability(&self, intended: Action) -> [(Action, f64); 4] {
        Action::ALL.map(|a| {
            if a == intended {
                (a, INTENDED_PROBABILITY)
            } else {
                (a, SLIP_PROBABILITY)
            }
        })
    }

    /// Outcome distribution of action code `a` in state `s`.
    pub fn transitions(&self, s: Discrete, a: Discrete) -> Result<Vec<Transition>> {
        let action = Action::try_from(a)?;
        if !self.is_valid_state(s) {
            return Err(GridWorldError::InvalidState {
                state: s,
                n_s: self.n_states(),
            });
        }

        Ok(self.outcomes(s, action))
    }

    /// Outcome distribution of `action` in state `s`.
    ///
    /// Outcomes are keyed by (next state, reward): noisy moves that end in the
    /// same cell with the same reward are merged into one entry. Entries keep
    /// the order in which they were first reached and probabilities are
    /// rounded to one decimal.
    ///
    /// # Panics
    ///
    /// If `s` is not a state of this grid.
    pub fn outcomes(&self, s: Discrete, action: Action) -> Vec<Transition> {
        if self.is_terminal(s) {
            return vec![Transition {
                next_state: s,
                probability: 1.,
                reward: 0.,
                done: true,
            }];
        }

        let (row, col) = self.location(s);
        let mut outcomes: Vec<Transition> = Vec::with_capacity(Action::ALL.len());
        for (next_action, probability) in self.action_probability(action) {
            let (dr, dc) = next_action.delta();
            let mut next = (row + dr, col + dc);
            if !self.in_bounds(next.0, next.1) {
                next = (row, col);
            }

            let next_state = self.state(next);
            let done = self.is_terminal(next_state);
            let reward = if done { 0. } else { self.reward_at(next) };

            match outcomes
                .iter_mut()
                .find(|t| t.next_state == next_state && t.reward == reward)
            {
                Some(t) => t.probability += probability,
                None => outcomes.push(Transition {
                    next_state,
                    probability,
                    reward,
                    done,
                }),
            }
        }

        for t in outcomes.iter_mut() {
            t.probability = (t.probability * 10.).round() / 10.;
        }

        debug!(s, %action, n_outcomes = outcomes.len(), "transitions enumerated");
        outcomes
    }

    /// Samples a single step from [`GridWorld::outcomes`].
    pub fn step<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        s: Discrete,
        action: Action,
    ) -> Option<Transition> {
        pick_next(rng, &self.outcomes(s, action))
    }

    fn side(&self) -> Discrete {
        self.n as Discrete
    }

    fn is_valid_state(&self, s: Discrete) -> bool {
        usize::try_from(s).map_or(false, |s| s < self.n_states())
    }

    fn reward_at(&self, (row, col): Coord) -> f64 {
        self.rewards[[row as usize, col as usize]]
    }
}

impl Mdp for GridWorld {
    fn n_s(&self) -> usize {
        self.n_states()
    }

    fn n_a(&self) -> usize {
        Action::ALL.len()
    }

    fn transitions(&self) -> Rc<Transitions> {
        let table = iproduct!(0..self.n_states() as Discrete, Action::ALL)
            .map(|(s, a)| ((s, a.code()), self.outcomes(s, a)))
            .collect::<Transitions>();

        Rc::new(table)
    }

    fn gamma(&self) -> f32 {
        self.gamma
    }
}

/// The reward layout as `n` bracketed rows.
impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .rewards
            .rows()
            .into_iter()
            .map(|row| format!("[{}]", row.iter().map(|r| format!("{r:>4}")).join(" ")))
            .join("\n");

        f.write_str(&rows)
    }
}

/// -1 everywhere, 0 at the origin, -10 along the top row and along the
/// second-to-last row except its final cell. Later rules overwrite earlier ones.
fn default_rewards(n: usize) -> Result<Array2<f64>> {
    if n < 2 {
        return Err(GridWorldError::Configuration(format!(
            "grid size {n} is too small for the default reward layout, need at least 2"
        )));
    }

    let mut grid = Array2::from_elem((n, n), STEP_REWARD);
    grid[[0, 0]] = 0.;
    grid.slice_mut(s![0, 1..n]).fill(PENALTY_REWARD);
    grid.slice_mut(s![n - 2, 0..n - 1]).fill(PENALTY_REWARD);

    Ok(grid)
}

fn default_terminal_states(n: usize) -> Vec<Discrete> {
    vec![0, (n * n) as Discrete - 1]
}

fn rewards_from_rows(n: usize, rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    if rows.len() != n || rows.iter().any(|r| r.len() != n) {
        return Err(GridWorldError::Configuration(format!(
            "reward layout must be {n} rows of {n} values"
        )));
    }

    Array2::from_shape_vec((n, n), rows.concat())
        .map_err(|e| GridWorldError::Configuration(e.to_string()))
}
