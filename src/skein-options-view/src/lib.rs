//! # Skein Options View
//!
//! Option-presentation component for the Skein dialogue runtime: shows a
//! set of selectable options, recaps the last spoken line above them, fades
//! the surface in and out, and reports exactly one selection back to the
//! runner.
//!
//! ## Core pieces
//!
//! - **[`OptionsView`]**: the orchestrator. Receives lines and option sets
//!   from the runner, drives the pool/recap/fade lifecycle, and owns the
//!   single-fire selection handoff.
//! - **[`OptionPool`]**: lazily grown, never-shrinking pool of reusable
//!   option widgets.
//! - **[`RecapPresenter`]**: re-display of the previously spoken line,
//!   with optional speaker label and markup palette.
//! - **[`TimedFade`]**: stock tick-driven implementation of the
//!   [`FadeEffect`] transition seam.
//!
//! The rendering host stays behind the trait seams in [`host`]: the view
//! drives visibility, alpha, text, binding, and focus through opaque
//! handles and never touches a scene graph itself.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use skein_options_view::{HostSurfaces, OptionsView, OptionsViewConfig};
//!
//! let view = OptionsView::new(
//!     OptionsViewConfig::new().with_show_unavailable(false),
//!     HostSurfaces::new(container, widget_factory)
//!         .with_recap_text(recap_label)
//!         .with_speaker_text(speaker_label),
//! );
//!
//! view.deliver_line(line, || {});
//! view.present_options(&options, move |chosen| runner.resume(chosen))?;
//! // ... player picks an option; the callback fires after the fade-out.
//! view.dialogue_complete();
//! ```

pub mod config;
pub mod effects;
pub mod error;
pub mod host;
pub mod pool;
pub mod recap;
pub mod view;

// Re-exports
pub use config::{HostSurfaces, OptionsViewConfig};
pub use effects::{FadeEffect, TimedFade};
pub use error::{FadeError, OptionsViewError};
pub use host::{
    FadeSurface, MarkupPalette, OptionBinding, OptionWidget, OptionWidgetFactory, SelectionHook,
    TextSurface,
};
pub use pool::OptionPool;
pub use recap::RecapPresenter;
pub use view::{OptionsView, SelectionCallback};
