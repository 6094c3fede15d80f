use crate::common::defs::Discrete;
use crate::error::{GridWorldError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass moves, available in every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Action {
    /// Canonical order. Outcomes are accumulated in this order.
    pub const ALL: [Action; 4] = [Action::North, Action::East, Action::South, Action::West];

    /// (row, col) offsets, indexed by action code.
    const DELTAS: [(Discrete, Discrete); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

    pub fn code(self) -> Discrete {
        self as Discrete
    }

    pub fn delta(self) -> (Discrete, Discrete) {
        Self::DELTAS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::North => "north",
            Action::East => "east",
            Action::South => "south",
            Action::West => "west",
        }
    }
}

impl TryFrom<Discrete> for Action {
    type Error = GridWorldError;

    fn try_from(code: Discrete) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| GridWorldError::InvalidAction(code.to_string()))
    }
}

/// Accepts the lower-case names as well as the numeric codes.
impl FromStr for Action {
    type Err = GridWorldError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(a) = Self::ALL.into_iter().find(|a| a.name().eq_ignore_ascii_case(s)) {
            return Ok(a);
        }

        s.parse::<Discrete>()
            .map_err(|_| GridWorldError::InvalidAction(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Action::North, (-1, 0))]
    #[case(Action::East, (0, 1))]
    #[case(Action::South, (1, 0))]
    #[case(Action::West, (0, -1))]
    fn deltas(#[case] a: Action, #[case] delta: (Discrete, Discrete)) {
        assert_eq!(a.delta(), delta);
    }

    #[test]
    fn codes_follow_canonical_order() {
        for (i, a) in Action::ALL.into_iter().enumerate() {
            assert_eq!(a.code(), i as Discrete);
            assert_eq!(Action::try_from(i as Discrete).unwrap(), a);
        }
    }

    #[rstest]
    #[case(-1)]
    #[case(4)]
    #[case(Discrete::MAX)]
    fn out_of_range_codes_are_rejected(#[case] code: Discrete) {
        assert!(matches!(
            Action::try_from(code),
            Err(GridWorldError::InvalidAction(c)) if c == code.to_string()
        ));
    }

    #[rstest]
    #[case("north", Action::North)]
    #[case("East", Action::East)]
    #[case(" south ", Action::South)]
    #[case("3", Action::West)]
    fn parse(#[case] s: &str, #[case] a: Action) {
        assert_eq!(s.parse::<Action>().unwrap(), a);
    }

    #[test]
    fn parse_unknown_name() {
        assert!(matches!(
            "up".parse::<Action>(),
            Err(GridWorldError::InvalidAction(s)) if s == "up"
        ));
        assert!("7".parse::<Action>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for a in Action::ALL {
            assert_eq!(a.to_string().parse::<Action>().unwrap(), a);
        }
    }
}
