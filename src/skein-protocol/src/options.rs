//! Option sets offered at a dialogue decision point.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a dialogue option, unique within one presentation batch.
///
/// The runner assigns ids when it builds an option set; a view reports the
/// id of the chosen option back through its selection callback.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct OptionId(pub u32);

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for OptionId {
    fn from(raw: u32) -> Self {
        OptionId(raw)
    }
}

/// One selectable dialogue option.
///
/// Options are immutable once built. Availability reflects whether the
/// option's condition passed in the runner; unavailable options may still be
/// shown (greyed out) depending on view configuration, but the runner
/// decides availability, never the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueOption {
    /// Identifier reported back when this option is chosen.
    pub id: OptionId,
    /// Display text for the option.
    pub text: String,
    /// Whether the option's condition passed and it can be chosen.
    pub is_available: bool,
}

impl DialogueOption {
    /// Creates an available option.
    pub fn new(id: impl Into<OptionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_available: true,
        }
    }

    /// Overrides the availability flag.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.is_available = available;
        self
    }
}
