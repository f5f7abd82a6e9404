//! Last-line recap above the option list.

use std::sync::Arc;

use skein_protocol::DialogueLine;

use crate::host::{MarkupPalette, TextSurface};

/// Re-displays the most recently spoken line alongside the options that
/// follow it.
///
/// Both surfaces are optional host configuration: with no recap surface the
/// presenter is inert, and the speaker label is only consulted when one is
/// configured. `show` is idempotent - repeating it with the same line
/// produces the same visible state.
pub struct RecapPresenter {
    text: Option<Arc<dyn TextSurface>>,
    speaker: Option<Arc<dyn TextSurface>>,
    palette: Option<Arc<dyn MarkupPalette>>,
}

impl RecapPresenter {
    /// Builds the presenter and hides its surfaces until the first `show`.
    pub fn new(
        text: Option<Arc<dyn TextSurface>>,
        speaker: Option<Arc<dyn TextSurface>>,
        palette: Option<Arc<dyn MarkupPalette>>,
    ) -> Self {
        if let Some(surface) = &text {
            surface.set_visible(false);
        }
        if let Some(surface) = &speaker {
            surface.set_visible(false);
        }
        Self {
            text,
            speaker,
            palette,
        }
    }

    /// Shows `line` on the recap surface.
    ///
    /// With a speaker label configured and a named line, the label carries
    /// the name and the body drops its speaker prefix; otherwise the label
    /// is hidden and the body is the full text. The palette, when
    /// configured, decorates the body.
    pub fn show(&self, line: &DialogueLine) {
        let Some(text) = &self.text else {
            tracing::trace!("no recap surface configured, skipping last-line recap");
            return;
        };
        text.set_visible(true);

        let mut body = line.text();
        if let Some(speaker) = &self.speaker {
            match line.character_name() {
                Some(name) => {
                    body = line.text_without_character_name();
                    speaker.set_visible(true);
                    speaker.set_text(name);
                }
                None => speaker.set_visible(false),
            }
        }

        match &self.palette {
            Some(palette) => text.set_text(&palette.decorate(body)),
            None => text.set_text(body),
        }
    }

    /// Clears the recap and speaker surfaces.
    pub fn hide(&self) {
        if let Some(surface) = &self.text {
            surface.set_visible(false);
        }
        if let Some(surface) = &self.speaker {
            surface.set_visible(false);
        }
    }
}
