//! Structured input events delivered to the surface by its host.

/// Input event delivered to components.
///
/// Notes:
/// - `key_id` is a normalized identifier ("enter", "ctrl+enter", "up", ...)
///   matched against keybindings; the host is responsible for decoding its
///   native key representation into one.
/// - Composition events bracket IME input; text arriving between them is
///   provisional and must not be interpreted until the composition commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key { key_id: String },
    Text { text: String },
    Paste { text: String },
    CompositionStart,
    CompositionEnd,
    SuggestionClick { index: usize },
}

impl InputEvent {
    pub fn key(key_id: impl Into<String>) -> Self {
        InputEvent::Key {
            key_id: key_id.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        InputEvent::Text { text: text.into() }
    }

    pub fn paste(text: impl Into<String>) -> Self {
        InputEvent::Paste { text: text.into() }
    }
}
