//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for constructing an
//! [`AntSimulation`](crate::AntSimulation). [`validate()`](SimConfig::validate)
//! checks every invariant up front; the same checks guard later calls to
//! [`configure()`](crate::AntSimulation::configure).

use std::error::Error;
use std::fmt;

use turmite_core::{RuleError, RuleSet};
use turmite_grid::{GridError, GridState};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while constructing or reconfiguring a simulation.
///
/// Construction errors are fatal. Reconfiguration errors leave the
/// running simulation exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions are zero or too large.
    Grid(GridError),
    /// The rule string is empty or defines too many states.
    InvalidRuleString(RuleError),
    /// The requested ant count is negative.
    InvalidAntCount {
        /// The rejected value.
        value: i64,
    },
    /// The requested ant count exceeds [`SimConfig::MAX_ANTS`].
    TooManyAnts {
        /// The rejected value.
        value: i64,
        /// The largest accepted count.
        max: usize,
    },
    /// The ant count text is not an integer.
    UnparsableAntCount {
        /// The rejected text.
        text: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidRuleString(e) => write!(f, "invalid rule string: {e}"),
            Self::InvalidAntCount { value } => {
                write!(f, "ant count must be non-negative, got {value}")
            }
            Self::TooManyAnts { value, max } => {
                write!(f, "ant count {value} exceeds maximum {max}")
            }
            Self::UnparsableAntCount { text } => {
                write!(f, "ant count {text:?} is not an integer")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::InvalidRuleString(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::InvalidRuleString(e)
    }
}

// ── Shared checks ──────────────────────────────────────────────────

pub(crate) fn parse_rules(rules: &str) -> Result<RuleSet, ConfigError> {
    Ok(RuleSet::parse(rules)?)
}

pub(crate) fn check_ant_count(value: i64) -> Result<usize, ConfigError> {
    let count = usize::try_from(value).map_err(|_| ConfigError::InvalidAntCount { value })?;
    if count > SimConfig::MAX_ANTS {
        return Err(ConfigError::TooManyAnts {
            value,
            max: SimConfig::MAX_ANTS,
        });
    }
    Ok(count)
}

pub(crate) fn parse_ant_count(text: &str) -> Result<i64, ConfigError> {
    text.trim()
        .parse()
        .map_err(|_| ConfigError::UnparsableAntCount {
            text: text.to_string(),
        })
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation.
///
/// Defaults mirror the classic setup: a 512×512 canvas, the `"RL"` rule,
/// one ant, one step per tick and a random palette seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Grid width in cells. Fixed for the simulation's lifetime.
    pub width: u32,
    /// Grid height in cells. Fixed for the simulation's lifetime.
    pub height: u32,
    /// Rule string: `L` turns left, `R` turns right, anything else goes
    /// straight. One cell state per character.
    pub rules: String,
    /// Number of ants. Must be in `0..=MAX_ANTS`; zero is allowed.
    pub ant_count: i64,
    /// Steps run by each [`run_tick()`](crate::AntSimulation::run_tick).
    pub steps_per_tick: u32,
    /// Seed for palette colors. `None` draws a fresh random seed.
    ///
    /// Only colors depend on this seed; simulation state never does.
    pub palette_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            rules: "RL".to_string(),
            ant_count: 1,
            steps_per_tick: 1,
            palette_seed: None,
        }
    }
}

impl SimConfig {
    /// Largest accepted ant count.
    pub const MAX_ANTS: usize = 1 << 20;

    /// Validate all invariants without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        GridState::validate_dims(self.width, self.height)?;
        parse_rules(&self.rules)?;
        check_ant_count(self.ant_count)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SimConfig {
        SimConfig {
            width: 8,
            height: 8,
            rules: "RL".into(),
            ant_count: 1,
            steps_per_tick: 1,
            palette_seed: Some(7),
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_width_rejected() {
        let cfg = SimConfig {
            width: 0,
            ..valid()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Grid(GridError::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn empty_rules_rejected() {
        let cfg = SimConfig {
            rules: String::new(),
            ..valid()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidRuleString(RuleError::Empty))
        );
    }

    #[test]
    fn negative_ant_count_rejected() {
        let cfg = SimConfig {
            ant_count: -3,
            ..valid()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidAntCount { value: -3 })
        );
    }

    #[test]
    fn ant_count_above_maximum_rejected() {
        let cfg = SimConfig {
            ant_count: i64::MAX,
            ..valid()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooManyAnts {
                value: i64::MAX,
                max: SimConfig::MAX_ANTS,
            })
        );
        assert_eq!(check_ant_count(SimConfig::MAX_ANTS as i64), Ok(SimConfig::MAX_ANTS));
    }

    #[test]
    fn zero_ants_allowed() {
        let cfg = SimConfig {
            ant_count: 0,
            ..valid()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn ant_count_text_is_trimmed() {
        assert_eq!(parse_ant_count(" 12\n"), Ok(12));
        assert_eq!(parse_ant_count("-1"), Ok(-1));
        assert_eq!(
            parse_ant_count("lots"),
            Err(ConfigError::UnparsableAntCount {
                text: "lots".into()
            })
        );
    }

    #[test]
    fn error_source_chains_to_inner_error() {
        let err = ConfigError::from(RuleError::Empty);
        assert!(err.source().is_some());
        assert!(ConfigError::InvalidAntCount { value: -1 }.source().is_none());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ConfigError::InvalidAntCount { value: -2 }.to_string(),
            "ant count must be non-negative, got -2"
        );
        assert_eq!(
            ConfigError::from(RuleError::Empty).to_string(),
            "invalid rule string: rule string must contain at least one symbol"
        );
    }
}
