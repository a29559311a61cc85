//! Cell color annotations and the click cycle

use serde::{Deserialize, Serialize};

/// Guess feedback for a single cell. `White` means "not annotated yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellColor {
    #[default]
    White,
    Gray,
    Yellow,
    Green,
}

/// Order of the click cycle once a cell has been annotated
const CYCLE: [CellColor; 3] = [CellColor::Gray, CellColor::Yellow, CellColor::Green];

impl CellColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Gray => "gray",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }

    /// Parse a host-supplied color name. Returns `None` for anything that is
    /// not one of the four names (including the empty string).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "white" => Some(Self::White),
            "gray" => Some(Self::Gray),
            "yellow" => Some(Self::Yellow),
            "green" => Some(Self::Green),
            _ => None,
        }
    }

    /// Color after one click on the indicator.
    ///
    /// An unannotated cell becomes gray; annotated cells wrap through
    /// gray, yellow, green. White is never re-entered by clicking.
    pub fn next(self) -> Self {
        match CYCLE.iter().position(|c| *c == self) {
            Some(i) => CYCLE[(i + 1) % CYCLE.len()],
            None => CellColor::Gray,
        }
    }

    pub fn is_annotated(&self) -> bool {
        *self != Self::White
    }
}

impl std::fmt::Display for CellColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
