//! Host configuration for the options view.

use std::sync::Arc;
use std::time::Duration;

use crate::host::{FadeSurface, MarkupPalette, OptionWidgetFactory, TextSurface};

/// Static presentation settings, fixed at construction.
#[derive(Debug, Clone)]
pub struct OptionsViewConfig {
    fade_duration: Duration,
    show_unavailable: bool,
}

impl OptionsViewConfig {
    pub fn new() -> Self {
        Self {
            fade_duration: Duration::from_millis(100),
            show_unavailable: false,
        }
    }

    /// Sets the duration of the show/hide alpha fades.
    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Also shows options whose availability condition failed.
    pub fn with_show_unavailable(mut self, show: bool) -> Self {
        self.show_unavailable = show;
        self
    }

    pub fn fade_duration(&self) -> Duration {
        self.fade_duration
    }

    pub fn show_unavailable(&self) -> bool {
        self.show_unavailable
    }
}

impl Default for OptionsViewConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles into the host's scene graph consumed by the options view.
///
/// The container and the widget factory are mandatory; recap surfaces and
/// the markup palette are host choices and may be absent.
pub struct HostSurfaces {
    pub(crate) container: Arc<dyn FadeSurface>,
    pub(crate) factory: Arc<dyn OptionWidgetFactory>,
    pub(crate) recap_text: Option<Arc<dyn TextSurface>>,
    pub(crate) speaker_text: Option<Arc<dyn TextSurface>>,
    pub(crate) palette: Option<Arc<dyn MarkupPalette>>,
}

impl HostSurfaces {
    pub fn new(container: Arc<dyn FadeSurface>, factory: Arc<dyn OptionWidgetFactory>) -> Self {
        Self {
            container,
            factory,
            recap_text: None,
            speaker_text: None,
            palette: None,
        }
    }

    /// Surface that re-displays the last spoken line above the options.
    pub fn with_recap_text(mut self, surface: Arc<dyn TextSurface>) -> Self {
        self.recap_text = Some(surface);
        self
    }

    /// Separate label for the recap line's speaker name.
    pub fn with_speaker_text(mut self, surface: Arc<dyn TextSurface>) -> Self {
        self.speaker_text = Some(surface);
        self
    }

    /// Markup palette applied to option and recap text.
    pub fn with_palette(mut self, palette: Arc<dyn MarkupPalette>) -> Self {
        self.palette = Some(palette);
        self
    }
}
