//! Rule sets: one turn instruction per cell state.

use crate::heading::Turn;
use std::error::Error;
use std::fmt;

/// Errors from parsing a rule string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The rule string has no symbols, so there would be no cell states.
    Empty,
    /// The rule string defines more states than a `u32` cell can hold.
    TooManyStates {
        /// Number of symbols in the rejected rule string.
        len: usize,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "rule string must contain at least one symbol"),
            Self::TooManyStates { len } => {
                write!(f, "rule string has {len} symbols, exceeds u32::MAX states")
            }
        }
    }
}

impl Error for RuleError {}

/// An ordered list of turns, indexed by cell state.
///
/// The length `S` of the rule set is the number of distinct cell states;
/// a cell in state `s` advances to `(s + 1) % S` when visited. A rule set
/// always has at least one state.
///
/// # Examples
///
/// ```
/// use turmite_core::{RuleSet, Turn};
///
/// let rules = RuleSet::parse("RL").unwrap();
/// assert_eq!(rules.state_count(), 2);
/// assert_eq!(rules.turn(0), Turn::Right);
/// assert_eq!(rules.advance(1), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    turns: Vec<Turn>,
    source: String,
}

impl RuleSet {
    /// Parse a rule string, one state per character.
    ///
    /// Returns [`RuleError::Empty`] for an empty string.
    pub fn parse(rules: &str) -> Result<Self, RuleError> {
        let turns: Vec<Turn> = rules.chars().map(Turn::from_symbol).collect();
        if turns.is_empty() {
            return Err(RuleError::Empty);
        }
        if u32::try_from(turns.len()).is_err() {
            return Err(RuleError::TooManyStates { len: turns.len() });
        }
        Ok(Self {
            turns,
            source: rules.to_string(),
        })
    }

    /// Number of distinct cell states (`S`). Always at least 1.
    pub fn state_count(&self) -> u32 {
        self.turns.len() as u32
    }

    /// Turn for a cell in `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state >= state_count()`.
    pub fn turn(&self, state: u32) -> Turn {
        self.turns[state as usize]
    }

    /// The state a cell moves to after being visited in `state`.
    pub fn advance(&self, state: u32) -> u32 {
        let next = state + 1;
        if next >= self.state_count() {
            0
        } else {
            next
        }
    }

    /// All turns, in state order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The rule string this set was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
