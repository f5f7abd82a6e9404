//! Error types for the options view.

use thiserror::Error;

/// Errors surfaced to the dialogue runner by the options view.
///
/// Only structural faults land here. Fade faults never do: they are caught
/// where the fade runs, logged, and swallowed (see [`crate::effects`]).
#[derive(Debug, Error)]
pub enum OptionsViewError {
    /// The host widget factory could not produce a new option widget.
    ///
    /// Fatal for the presentation that requested the capacity: without the
    /// widget the option set cannot be shown correctly.
    #[error("failed to create option widget: {0}")]
    WidgetCreation(String),
}

/// Failure of an alpha fade transition.
#[derive(Debug, Clone, Error)]
#[error("fade transition failed: {0}")]
pub struct FadeError(pub String);
