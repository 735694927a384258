use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TabParseError;

/// A destination in the root tab shell. The set and order are fixed; the
/// screens behind them are placeholders until product features land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabDestination {
    Home,
    Pump,
    Diapers,
    Calendar,
    Profile,
}

impl TabDestination {
    /// Presentation order of the tab strip, left to right.
    pub const ALL: [TabDestination; 5] = [
        TabDestination::Home,
        TabDestination::Pump,
        TabDestination::Diapers,
        TabDestination::Calendar,
        TabDestination::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TabDestination::Home => "Home",
            TabDestination::Pump => "Pump",
            TabDestination::Diapers => "Diapers",
            TabDestination::Calendar => "Calendar",
            TabDestination::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TabDestination::Home => "🏠",
            TabDestination::Pump => "⏱",
            TabDestination::Diapers => "💧",
            TabDestination::Calendar => "📅",
            TabDestination::Profile => "👤",
        }
    }
}

impl fmt::Display for TabDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TabDestination {
    type Err = TabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| TabParseError::UnknownTab(name.to_string()))
    }
}
