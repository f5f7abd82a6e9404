//! Skein Protocol - dialogue data shared between the runner and its views
//!
//! This crate defines the plain data types that flow from a dialogue runner
//! to the presentation layer: spoken lines and the option sets offered at a
//! decision point. Views never mutate these values; they receive them, show
//! them, and hand back an [`OptionId`] when the player commits a choice.

pub mod lines;
pub mod options;

// Re-exports
pub use lines::DialogueLine;
pub use options::{DialogueOption, OptionId};
