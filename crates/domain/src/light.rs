//! Lights: the fixed set of indicator lights and their on/off bank.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the panel's indicator lights.
///
/// The set is closed: names outside it are rejected by [`FromStr`] rather
/// than added to the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightColor {
    Red,
    Yellow,
    Green,
}

impl LightColor {
    /// Every light on the panel, in display order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    /// Lowercase name used in URLs and JSON keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl std::fmt::Display for LightColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LightColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownLight {
                name: s.to_string(),
            })
    }
}

/// On/off state of every panel light. All lights start off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightBank {
    red: bool,
    yellow: bool,
    green: bool,
}

impl LightBank {
    /// Whether `color` is currently on.
    #[must_use]
    pub fn is_on(&self, color: LightColor) -> bool {
        match color {
            LightColor::Red => self.red,
            LightColor::Yellow => self.yellow,
            LightColor::Green => self.green,
        }
    }

    /// Overwrite the state of a single light.
    pub fn set(&mut self, color: LightColor, on: bool) {
        let slot = match color {
            LightColor::Red => &mut self.red,
            LightColor::Yellow => &mut self.yellow,
            LightColor::Green => &mut self.green,
        };
        *slot = on;
    }

    /// Iterate over `(color, on)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (LightColor, bool)> + '_ {
        LightColor::ALL
            .into_iter()
            .map(move |color| (color, self.is_on(color)))
    }
}
