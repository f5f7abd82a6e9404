//! Host collaborator seams.
//!
//! The options view never talks to a renderer directly. The host hands it
//! opaque handles behind the traits in this module: a fadeable container,
//! text labels for the recap, a factory for option widgets, and an optional
//! markup palette. Anything that can satisfy these traits - a game scene
//! graph, a terminal UI, or the recording doubles used in tests - can host
//! the view unchanged.

use std::sync::Arc;

use skein_protocol::DialogueOption;

use crate::error::OptionsViewError;

/// A visual surface whose visibility and alpha the view drives.
///
/// Alpha is in `0.0..=1.0`. Visibility and alpha are independent: the view
/// toggles visibility synchronously and animates alpha around it.
pub trait FadeSurface: Send + Sync {
    fn set_visible(&self, visible: bool);
    fn is_visible(&self) -> bool;
    fn alpha(&self) -> f32;
    fn set_alpha(&self, alpha: f32);
}

/// A text label surface, used for the recap body and the speaker name.
pub trait TextSurface: Send + Sync {
    fn set_visible(&self, visible: bool);
    fn set_text(&self, text: &str);
}

/// Decorates raw dialogue text with host-specific markup styling.
pub trait MarkupPalette: Send + Sync {
    fn decorate(&self, text: &str) -> String;
}

/// The data a pooled widget is (re)bound to for one presentation cycle.
///
/// `display_text` is the option text after palette decoration, ready to
/// render. The cycle tag is opaque to widgets; they hand the binding back
/// unchanged through the selection hook, which lets the view drop
/// notifications that outlived their presentation.
#[derive(Debug, Clone)]
pub struct OptionBinding {
    /// The option this slot currently represents.
    pub option: DialogueOption,
    /// Palette-decorated text to render.
    pub display_text: String,
    pub(crate) cycle: u64,
}

/// Shared notification hook a widget fires when its option is committed.
///
/// Registered once per widget at creation time and fired at most once per
/// activation, with the binding the widget currently holds.
pub type SelectionHook = Arc<dyn Fn(OptionBinding) + Send + Sync>;

/// One pooled option widget owned by the host's scene graph.
///
/// The widget owns its own input handling; the view only rebinds it, shows
/// or hides it, and hands it default focus.
pub trait OptionWidget: Send + Sync {
    /// Registers the shared selection hook. Called once, right after creation.
    fn connect_selected(&self, hook: SelectionHook);
    /// Rebinds the widget to an option for the current cycle.
    fn bind(&self, binding: OptionBinding);
    fn set_visible(&self, visible: bool);
    /// Gives the widget input focus.
    fn grab_focus(&self);
}

/// Creates option widgets on demand.
///
/// `instantiate` is also responsible for attaching the new widget to the
/// option container's layout; the pool stays free of layout knowledge.
pub trait OptionWidgetFactory: Send + Sync {
    fn instantiate(&self) -> Result<Arc<dyn OptionWidget>, OptionsViewError>;
}
