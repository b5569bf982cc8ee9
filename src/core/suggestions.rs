//! Suggestion entries and overlay selection state.

use once_cell::sync::Lazy;

/// One row of the suggestion overlay. Labels carry their trigger character
/// so acceptance can splice them verbatim over the typed trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub description: String,
}

impl Suggestion {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

static SLASH_SUGGESTIONS: Lazy<Vec<Suggestion>> = Lazy::new(|| {
    vec![
        Suggestion::new("/help", "List available commands"),
        Suggestion::new("/clear", "Clear the conversation"),
        Suggestion::new("/compact", "Summarize and compact the conversation"),
    ]
});

static MENTION_SUGGESTIONS: Lazy<Vec<Suggestion>> = Lazy::new(|| {
    vec![
        Suggestion::new("@workspace", "Attach workspace context"),
        Suggestion::new("@terminal", "Attach the active terminal output"),
        Suggestion::new("@selection", "Attach the current selection"),
    ]
});

pub fn default_slash_suggestions() -> Vec<Suggestion> {
    SLASH_SUGGESTIONS.clone()
}

pub fn default_mention_suggestions() -> Vec<Suggestion> {
    MENTION_SUGGESTIONS.clone()
}

/// Overlay state: the current suggestion set plus the highlighted row.
///
/// The set is regenerated wholesale on each trigger detection, never patched
/// in place. `None` selection means no row is highlighted; navigation clamps
/// at both ends instead of wrapping.
#[derive(Debug, Default)]
pub struct SuggestionMenu {
    items: Vec<Suggestion>,
    selected: Option<usize>,
}

impl SuggestionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn get(&self, index: usize) -> Option<&Suggestion> {
        self.items.get(index)
    }

    pub fn replace(&mut self, items: Vec<Suggestion>) {
        self.items = items;
        self.selected = None;
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    pub fn move_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1).min(self.items.len() - 1),
            None => 0,
        });
    }

    pub fn move_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => index.saturating_sub(1),
            None => 0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{default_slash_suggestions, Suggestion, SuggestionMenu};

    fn menu_with(count: usize) -> SuggestionMenu {
        let mut menu = SuggestionMenu::new();
        menu.replace(
            (0..count)
                .map(|index| Suggestion::new(format!("/cmd{index}"), ""))
                .collect(),
        );
        menu
    }

    #[test]
    fn default_slash_list_has_three_entries() {
        assert_eq!(default_slash_suggestions().len(), 3);
    }

    #[test]
    fn replace_resets_selection() {
        let mut menu = menu_with(3);
        menu.move_down();
        assert_eq!(menu.selected(), Some(0));

        menu.replace(default_slash_suggestions());
        assert_eq!(menu.selected(), None);
        assert!(menu.is_visible());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut menu = menu_with(2);

        menu.move_up();
        assert_eq!(menu.selected(), Some(0));
        menu.move_up();
        assert_eq!(menu.selected(), Some(0));

        menu.move_down();
        assert_eq!(menu.selected(), Some(1));
        menu.move_down();
        assert_eq!(menu.selected(), Some(1));
    }

    #[test]
    fn empty_menu_ignores_navigation() {
        let mut menu = SuggestionMenu::new();
        menu.move_down();
        menu.move_up();
        assert_eq!(menu.selected(), None);
        assert!(!menu.is_visible());
    }
}
