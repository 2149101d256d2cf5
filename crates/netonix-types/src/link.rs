//! Port link state as reported by `Ports[].Link` in the status tree.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Link state of a switch port.
///
/// The set is closed: any other name reported by the switch is an
/// [`ParseError::UnknownLinkState`] rather than a guessed speed.
///
/// # Examples
///
/// ```
/// use netonix_types::LinkState;
///
/// let link: LinkState = "1G".parse().unwrap();
/// assert_eq!(link.speed_mbps(), 1000.0);
/// assert!(link.is_up());
///
/// assert!("10G".parse::<LinkState>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LinkState {
    /// Gigabit link (`"1G"`).
    Gigabit,
    /// Megabit link, full duplex (`"1M-F"`).
    MegabitFull,
    /// Megabit link, half duplex (`"1M-H"`).
    MegabitHalf,
    /// No link (`"Down"`).
    Down,
}

impl LinkState {
    /// All known link states.
    pub const ALL: [LinkState; 4] = [
        LinkState::Gigabit,
        LinkState::MegabitFull,
        LinkState::MegabitHalf,
        LinkState::Down,
    ];

    /// Returns the name the switch uses for this state.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LinkState::Gigabit => "1G",
            LinkState::MegabitFull => "1M-F",
            LinkState::MegabitHalf => "1M-H",
            LinkState::Down => "Down",
        }
    }

    /// Returns the negotiated speed in Mbit/s. A down link reports 0.
    pub const fn speed_mbps(&self) -> f64 {
        match self {
            LinkState::Gigabit => 1000.0,
            LinkState::MegabitFull | LinkState::MegabitHalf => 1.0,
            LinkState::Down => 0.0,
        }
    }

    /// Returns true if the port has link.
    pub const fn is_up(&self) -> bool {
        !matches!(self, LinkState::Down)
    }
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkState {
    type Err = ParseError;

    // Names are matched exactly; the switch never varies their case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1G" => Ok(LinkState::Gigabit),
            "1M-F" => Ok(LinkState::MegabitFull),
            "1M-H" => Ok(LinkState::MegabitHalf),
            "Down" => Ok(LinkState::Down),
            _ => Err(ParseError::UnknownLinkState(s.to_string())),
        }
    }
}

impl TryFrom<String> for LinkState {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LinkState> for String {
    fn from(link: LinkState) -> String {
        link.as_str().to_string()
    }
}
