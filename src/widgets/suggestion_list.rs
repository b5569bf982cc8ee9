//! Suggestion overlay list rendering.

use crate::core::suggestions::SuggestionMenu;
use crate::core::text::{truncate_to_width, visible_width};

pub struct SuggestionListTheme {
    pub selected_text: Box<dyn Fn(&str) -> String>,
    pub description: Box<dyn Fn(&str) -> String>,
    pub scroll_info: Box<dyn Fn(&str) -> String>,
}

impl Default for SuggestionListTheme {
    fn default() -> Self {
        Self {
            selected_text: Box::new(|text| format!("\x1b[7m{text}\x1b[27m")),
            description: Box::new(|text| format!("\x1b[2m{text}\x1b[22m")),
            scroll_info: Box::new(|text| format!("\x1b[2m{text}\x1b[22m")),
        }
    }
}

/// Renders a [`SuggestionMenu`] as overlay lines below the prompt.
pub struct SuggestionList {
    max_visible: usize,
    theme: SuggestionListTheme,
}

const LABEL_COLUMN: usize = 18;

impl SuggestionList {
    pub fn new(max_visible: usize, theme: SuggestionListTheme) -> Self {
        Self {
            max_visible: max_visible.max(1),
            theme,
        }
    }

    pub fn render(&self, menu: &SuggestionMenu, width: usize) -> Vec<String> {
        if !menu.is_visible() {
            return Vec::new();
        }

        let total = menu.len();
        let max_visible = self.max_visible.min(total);
        let selected = menu.selected();

        let start_index = match selected {
            Some(index) if total > max_visible => {
                let half = max_visible / 2;
                index.saturating_sub(half).min(total - max_visible)
            }
            _ => 0,
        };
        let end_index = (start_index + max_visible).min(total);

        let mut lines = Vec::new();
        for idx in start_index..end_index {
            let Some(item) = menu.get(idx) else {
                continue;
            };

            let marker = if selected == Some(idx) { "→ " } else { "  " };
            let label_width = LABEL_COLUMN.min(width.saturating_sub(marker.len()));
            let label = truncate_to_width(&item.label, label_width);
            let padding = " ".repeat(label_width.saturating_sub(visible_width(&label)));

            let remaining = width.saturating_sub(marker.len() + label_width + 1);
            let description = if item.description.is_empty() || remaining < 4 {
                String::new()
            } else {
                let truncated = truncate_to_width(&item.description, remaining);
                format!(" {}", (self.theme.description)(&truncated))
            };

            let row = format!("{marker}{label}{padding}{description}");
            if selected == Some(idx) {
                lines.push((self.theme.selected_text)(&row));
            } else {
                lines.push(row);
            }
        }

        if start_index > 0 || end_index < total {
            let position = selected.map(|index| index + 1).unwrap_or(0);
            lines.push((self.theme.scroll_info)(&format!("  ({position}/{total})")));
        }

        lines
    }
}
