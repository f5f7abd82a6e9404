//! Spoken lines and the speaker-name view used by recaps.

use serde::{Deserialize, Serialize};

/// A single spoken line of dialogue.
///
/// `text` is the full display text as the runner produced it, which may
/// begin with a `Speaker:` prefix. The speaker name is carried separately so
/// views can render it in its own label; [`DialogueLine::text_without_character_name`]
/// gives the body with the prefix removed for exactly that layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    text: String,
    character_name: Option<String>,
}

impl DialogueLine {
    /// Creates a line with no speaker attribution.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            character_name: None,
        }
    }

    /// Attributes the line to a speaker.
    pub fn with_character_name(mut self, name: impl Into<String>) -> Self {
        self.character_name = Some(name.into());
        self
    }

    /// Full display text, including any speaker prefix.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Speaker name, if present and non-blank.
    ///
    /// A whitespace-only name counts as absent, so views can treat the
    /// result as "show a speaker label or not" without their own trimming.
    pub fn character_name(&self) -> Option<&str> {
        self.character_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Line text with the leading `Speaker:` prefix removed.
    ///
    /// Falls back to the full text when the line has no speaker or the text
    /// does not actually start with the speaker's name.
    pub fn text_without_character_name(&self) -> &str {
        let Some(name) = self.character_name() else {
            return &self.text;
        };
        match self.text.strip_prefix(name).and_then(|rest| rest.strip_prefix(':')) {
            Some(body) => body.trim_start(),
            None => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_line_without_speaker() {
        let line = DialogueLine::new("The cave mouth yawns.");
        assert_eq!(line.character_name(), None);
        assert_eq!(line.text_without_character_name(), "The cave mouth yawns.");
    }

    #[test]
    fn test_speaker_prefix_is_stripped() {
        let line = DialogueLine::new("Mae: We should head back.").with_character_name("Mae");
        assert_eq!(line.character_name(), Some("Mae"));
        assert_eq!(line.text_without_character_name(), "We should head back.");
    }

    #[test]
    fn test_blank_speaker_counts_as_absent() {
        let line = DialogueLine::new("…").with_character_name("   ");
        assert_eq!(line.character_name(), None);
        assert_eq!(line.text_without_character_name(), "…");
    }

    #[test]
    fn test_mismatched_prefix_keeps_full_text() {
        let line = DialogueLine::new("We should head back.").with_character_name("Mae");
        assert_eq!(line.text_without_character_name(), "We should head back.");
    }
}
