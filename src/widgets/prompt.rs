//! Prompt surface: the IME-aware input state machine.

use std::sync::mpsc::Sender;

use crate::core::component::{Component, Focusable};
use crate::core::cursor::CursorPos;
use crate::core::input_event::InputEvent;
use crate::core::keybindings::{PromptAction, PromptKeybindingsHandle};
use crate::core::message::{InboundMsg, OutboundMsg};
use crate::core::suggestions::{
    default_mention_suggestions, default_slash_suggestions, Suggestion, SuggestionMenu,
};
use crate::core::text::{
    grapheme_segments, is_punctuation_char, is_whitespace_char, visible_width,
};
use crate::core::trigger::{
    escalation_char, last_trigger_index, normalize_half_width, trigger_before_cursor, TriggerKind,
};
use crate::widgets::suggestion_list::{SuggestionList, SuggestionListTheme};

/// How committed input is interpreted after an edit.
///
/// The two policies are mutually exclusive; each surface instance is
/// constructed with exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpretPolicy {
    /// A buffer consisting of exactly one trigger character is normalized
    /// to half-width, forwarded to the console, and removed from the
    /// buffer. No suggestion overlay.
    EscalateFirstChar,
    /// The character immediately before the cursor selects a suggestion
    /// list: `/`/`／` the slash commands, `@`/`＠` the mentions, anything
    /// else clears the overlay.
    #[default]
    CursorOverlay,
}

pub struct PromptOptions {
    pub policy: InterpretPolicy,
    /// Host-supplied slash-command suggestions; `None` uses the defaults.
    pub slash_suggestions: Option<Vec<Suggestion>>,
    /// Host-supplied mention suggestions; `None` uses the defaults.
    pub mention_suggestions: Option<Vec<Suggestion>>,
    pub suggestion_max_visible: usize,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            policy: InterpretPolicy::default(),
            slash_suggestions: None,
            mention_suggestions: None,
            suggestion_max_visible: 5,
        }
    }
}

/// Multi-line input surface with IME composition tracking, trigger
/// interception, and a suggestion overlay.
///
/// One instance exists per open panel. All state transitions happen on the
/// host's event loop; the only deferred work is the post-composition
/// interpretation, which the owner must release via [`flush_deferred`]
/// after the current event turn.
///
/// [`flush_deferred`]: PromptSurface::flush_deferred
pub struct PromptSurface {
    buffer: String,
    cursor: usize,
    composing: bool,
    pending_interpret: bool,
    focused: bool,
    policy: InterpretPolicy,
    slash_suggestions: Vec<Suggestion>,
    mention_suggestions: Vec<Suggestion>,
    menu: SuggestionMenu,
    suggestion_list: SuggestionList,
    keybindings: PromptKeybindingsHandle,
    outbound: Sender<OutboundMsg>,
    last_cursor_pos: Option<CursorPos>,
}

impl PromptSurface {
    pub fn new(
        keybindings: PromptKeybindingsHandle,
        outbound: Sender<OutboundMsg>,
        options: PromptOptions,
    ) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            composing: false,
            pending_interpret: false,
            focused: true,
            policy: options.policy,
            slash_suggestions: options
                .slash_suggestions
                .unwrap_or_else(default_slash_suggestions),
            mention_suggestions: options
                .mention_suggestions
                .unwrap_or_else(default_mention_suggestions),
            menu: SuggestionMenu::new(),
            suggestion_list: SuggestionList::new(
                options.suggestion_max_visible,
                SuggestionListTheme::default(),
            ),
            keybindings,
            outbound,
            last_cursor_pos: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn menu(&self) -> &SuggestionMenu {
        &self.menu
    }

    pub fn has_pending_interpret(&self) -> bool {
        self.pending_interpret
    }

    /// Runs the interpretation deferred by a composition end.
    ///
    /// Ordering guarantee: the owner calls this after the current event
    /// turn completes, so the buffer reflects the committed text before
    /// interpretation runs.
    pub fn flush_deferred(&mut self) {
        if self.pending_interpret {
            self.pending_interpret = false;
            self.interpret();
        }
    }

    pub fn handle_message(&mut self, message: &InboundMsg) {
        match message {
            InboundMsg::Clear => {
                self.buffer.clear();
                self.cursor = 0;
                self.menu.clear();
                self.focused = true;
            }
            InboundMsg::Focus => {
                self.focused = true;
            }
        }
    }

    fn after_edit(&mut self) {
        if !self.composing {
            self.interpret();
        }
    }

    fn interpret(&mut self) {
        match self.policy {
            InterpretPolicy::EscalateFirstChar => {
                let Some(trigger) = escalation_char(&self.buffer) else {
                    return;
                };
                let normalized = normalize_half_width(trigger);
                let _ = self
                    .outbound
                    .send(OutboundMsg::SendToTerminal(normalized.to_string()));
                self.buffer.clear();
                self.cursor = 0;
            }
            InterpretPolicy::CursorOverlay => {
                match trigger_before_cursor(&self.buffer, self.cursor) {
                    Some(TriggerKind::Slash) => self.menu.replace(self.slash_suggestions.clone()),
                    Some(TriggerKind::Mention) => {
                        self.menu.replace(self.mention_suggestions.clone())
                    }
                    None => self.menu.clear(),
                }
            }
        }
    }

    fn submit(&mut self) {
        // Composition text is provisional; it can never be submitted.
        if self.composing {
            return;
        }
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            return;
        }
        let _ = self.outbound.send(OutboundMsg::Submit(trimmed.to_string()));
    }

    fn accept_suggestion(&mut self, index: usize) {
        let Some(label) = self.menu.get(index).map(|item| item.label.clone()) else {
            return;
        };

        if let Some(start) = last_trigger_index(&self.buffer[..self.cursor]) {
            let replacement = format!("{label} ");
            self.buffer.replace_range(start..self.cursor, &replacement);
            self.cursor = start + label.len() + 1;
        }

        self.menu.clear();
        self.focused = true;
    }

    fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
        true
    }

    fn handle_paste(&mut self, pasted_text: &str) -> bool {
        let normalized = pasted_text.replace("\r\n", "\n").replace('\r', "\n");
        self.insert_text(&normalized)
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let before_cursor = &self.buffer[..self.cursor];
        let grapheme_len = grapheme_segments(before_cursor)
            .next_back()
            .map(|segment| segment.len())
            .unwrap_or(1);
        let start = self.cursor - grapheme_len;
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    fn forward_delete(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        let after_cursor = &self.buffer[self.cursor..];
        let grapheme_len = grapheme_segments(after_cursor)
            .next()
            .map(|segment| segment.len())
            .unwrap_or(1);
        let end = (self.cursor + grapheme_len).min(self.buffer.len());
        self.buffer.replace_range(self.cursor..end, "");
        true
    }

    fn delete_word_backwards(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let old_cursor = self.cursor;
        self.move_word_backwards();
        let start = self.cursor;
        self.buffer.replace_range(start..old_cursor, "");
        self.cursor = start;
        start != old_cursor
    }

    fn is_whitespace_segment(segment: &str) -> bool {
        segment.chars().any(is_whitespace_char)
    }

    fn is_punctuation_segment(segment: &str) -> bool {
        segment.chars().any(is_punctuation_char)
    }

    fn move_word_backwards(&mut self) {
        let text_before_cursor = &self.buffer[..self.cursor];
        let mut graphemes: Vec<&str> = grapheme_segments(text_before_cursor).collect();

        while let Some(last) = graphemes.last() {
            if Self::is_whitespace_segment(last) {
                self.cursor -= last.len();
                graphemes.pop();
            } else {
                break;
            }
        }

        let skip_punctuation = graphemes
            .last()
            .map(|last| Self::is_punctuation_segment(last))
            .unwrap_or(false);
        while let Some(last) = graphemes.last() {
            let same_class = if skip_punctuation {
                Self::is_punctuation_segment(last)
            } else {
                !Self::is_whitespace_segment(last) && !Self::is_punctuation_segment(last)
            };
            if same_class {
                self.cursor -= last.len();
                graphemes.pop();
            } else {
                break;
            }
        }
    }

    fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let before_cursor = &self.buffer[..self.cursor];
        let grapheme_len = grapheme_segments(before_cursor)
            .next_back()
            .map(|segment| segment.len())
            .unwrap_or(1);
        self.cursor -= grapheme_len;
    }

    fn move_right(&mut self) {
        if self.cursor >= self.buffer.len() {
            return;
        }
        let after_cursor = &self.buffer[self.cursor..];
        let grapheme_len = grapheme_segments(after_cursor)
            .next()
            .map(|segment| segment.len())
            .unwrap_or(1);
        self.cursor = (self.cursor + grapheme_len).min(self.buffer.len());
    }

    fn line_start(&self, pos: usize) -> usize {
        self.buffer[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.buffer[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.buffer.len())
    }

    fn offset_at_col(&self, start: usize, end: usize, col: usize) -> usize {
        let mut offset = start;
        let mut seen = 0;
        for grapheme in grapheme_segments(&self.buffer[start..end]) {
            if seen == col {
                break;
            }
            offset += grapheme.len();
            seen += 1;
        }
        offset
    }

    fn move_vertical(&mut self, delta: isize) {
        let start = self.line_start(self.cursor);
        let col = grapheme_segments(&self.buffer[start..self.cursor]).count();

        if delta < 0 {
            if start == 0 {
                self.cursor = 0;
                return;
            }
            let prev_start = self.line_start(start - 1);
            let prev_end = start - 1;
            self.cursor = self.offset_at_col(prev_start, prev_end, col);
        } else {
            let end = self.line_end(self.cursor);
            if end == self.buffer.len() {
                self.cursor = end;
                return;
            }
            let next_start = end + 1;
            let next_end = self.line_end(next_start);
            self.cursor = self.offset_at_col(next_start, next_end, col);
        }
    }

    fn handle_key(&mut self, key_id: &str) {
        let (
            is_submit,
            is_cancel,
            is_new_line,
            is_select_up,
            is_select_down,
            is_select_confirm,
            is_select_cancel,
            is_up,
            is_down,
            is_left,
            is_right,
            is_line_start,
            is_line_end,
            is_backspace,
            is_forward_delete,
            is_delete_word,
        ) = {
            let kb = self
                .keybindings
                .lock()
                .expect("prompt keybindings lock poisoned");
            (
                kb.matches(key_id, PromptAction::Submit),
                kb.matches(key_id, PromptAction::Cancel),
                kb.matches(key_id, PromptAction::NewLine),
                kb.matches(key_id, PromptAction::SelectUp),
                kb.matches(key_id, PromptAction::SelectDown),
                kb.matches(key_id, PromptAction::SelectConfirm),
                kb.matches(key_id, PromptAction::SelectCancel),
                kb.matches(key_id, PromptAction::CursorUp),
                kb.matches(key_id, PromptAction::CursorDown),
                kb.matches(key_id, PromptAction::CursorLeft),
                kb.matches(key_id, PromptAction::CursorRight),
                kb.matches(key_id, PromptAction::CursorLineStart),
                kb.matches(key_id, PromptAction::CursorLineEnd),
                kb.matches(key_id, PromptAction::DeleteCharBackward),
                kb.matches(key_id, PromptAction::DeleteCharForward),
                kb.matches(key_id, PromptAction::DeleteWordBackward),
            )
        };

        // The overlay handles its key subset first; everything else falls
        // through to the idle handling below. Submit never lands here
        // because ctrl modifies the key's identity.
        if self.menu.is_visible() {
            if is_select_down {
                self.menu.move_down();
                return;
            }
            if is_select_up {
                self.menu.move_up();
                return;
            }
            if is_select_confirm {
                if let Some(index) = self.menu.selected() {
                    self.accept_suggestion(index);
                }
                return;
            }
            if is_select_cancel {
                self.menu.clear();
                return;
            }
        }

        if is_submit {
            self.submit();
            return;
        }

        if is_cancel {
            let _ = self.outbound.send(OutboundMsg::Cancel);
            return;
        }

        if is_new_line {
            if self.insert_text("\n") {
                self.after_edit();
            }
            return;
        }

        if is_backspace {
            if self.backspace() {
                self.after_edit();
            }
            return;
        }
        if is_forward_delete {
            if self.forward_delete() {
                self.after_edit();
            }
            return;
        }
        if is_delete_word {
            if self.delete_word_backwards() {
                self.after_edit();
            }
            return;
        }

        if is_up {
            self.move_vertical(-1);
            return;
        }
        if is_down {
            self.move_vertical(1);
            return;
        }
        if is_left {
            self.move_left();
            return;
        }
        if is_right {
            self.move_right();
            return;
        }
        if is_line_start {
            self.cursor = self.line_start(self.cursor);
            return;
        }
        if is_line_end {
            self.cursor = self.line_end(self.cursor);
        }
    }
}

impl Component for PromptSurface {
    fn render(&mut self, width: usize) -> Vec<String> {
        let width = width.max(1);
        self.last_cursor_pos = None;

        let mut lines = Vec::new();
        let mut line_start = 0;

        for (row, line) in self.buffer.split('\n').enumerate() {
            let line_end = line_start + line.len();
            let holds_cursor = self.cursor >= line_start && self.cursor <= line_end;

            let mut display = line.to_string();
            if holds_cursor {
                let col = self.cursor - line_start;
                let before = &line[..col];
                let after = &line[col..];

                if self.focused {
                    self.last_cursor_pos = Some(CursorPos {
                        row,
                        col: visible_width(before),
                    });
                    let (at_cursor, rest) = match grapheme_segments(after).next() {
                        Some(grapheme) => (grapheme, &after[grapheme.len()..]),
                        None => (" ", ""),
                    };
                    display = format!("{before}\x1b[7m{at_cursor}\x1b[27m{rest}");
                }
            }

            let padding = " ".repeat(width.saturating_sub(visible_width(&display)));
            lines.push(format!("{display}{padding}"));
            line_start = line_end + 1;
        }

        lines.extend(self.suggestion_list.render(&self.menu, width));
        lines
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::CompositionStart => {
                self.composing = true;
            }
            InputEvent::CompositionEnd => {
                // The buffer may not reflect the committed text yet, so
                // interpretation is deferred to flush_deferred().
                self.composing = false;
                self.pending_interpret = true;
            }
            InputEvent::Text { text } => {
                if self.insert_text(text) {
                    self.after_edit();
                }
            }
            InputEvent::Paste { text } => {
                if self.handle_paste(text) {
                    self.after_edit();
                }
            }
            InputEvent::SuggestionClick { index } => {
                self.accept_suggestion(*index);
            }
            InputEvent::Key { key_id } => self.handle_key(key_id),
        }
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        self.last_cursor_pos
    }

    fn invalidate(&mut self) {
        // No cached state to invalidate.
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl Focusable for PromptSurface {
    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::{InterpretPolicy, PromptOptions, PromptSurface};
    use crate::core::component::{Component, Focusable};
    use crate::core::input_event::InputEvent;
    use crate::core::keybindings::default_prompt_keybindings_handle;
    use crate::core::message::{InboundMsg, OutboundMsg};
    use std::sync::mpsc::{channel, Receiver};

    fn surface_with(policy: InterpretPolicy) -> (PromptSurface, Receiver<OutboundMsg>) {
        let (tx, rx) = channel();
        let options = PromptOptions {
            policy,
            ..PromptOptions::default()
        };
        let surface = PromptSurface::new(default_prompt_keybindings_handle(), tx, options);
        (surface, rx)
    }

    fn type_text(surface: &mut PromptSurface, text: &str) {
        for ch in text.chars() {
            surface.handle_event(&InputEvent::text(ch.to_string()));
        }
    }

    #[test]
    fn edits_and_moves_cursor_over_graphemes() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "heあllo");
        assert_eq!(surface.text(), "heあllo");

        surface.handle_event(&InputEvent::key("left"));
        surface.handle_event(&InputEvent::key("left"));
        surface.handle_event(&InputEvent::key("left"));
        surface.handle_event(&InputEvent::key("backspace"));
        assert_eq!(surface.text(), "hello");
        assert_eq!(surface.cursor(), 2);

        surface.handle_event(&InputEvent::key("end"));
        assert_eq!(surface.cursor(), 5);
    }

    #[test]
    fn enter_inserts_newline_and_vertical_moves_track_columns() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "first");
        surface.handle_event(&InputEvent::key("enter"));
        type_text(&mut surface, "second");
        assert_eq!(surface.text(), "first\nsecond");

        surface.handle_event(&InputEvent::key("up"));
        assert_eq!(surface.cursor(), 5);

        surface.handle_event(&InputEvent::key("home"));
        surface.handle_event(&InputEvent::key("down"));
        assert_eq!(surface.cursor(), 6);
    }

    #[test]
    fn paste_preserves_newlines() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        surface.handle_event(&InputEvent::paste("one\r\ntwo\rthree"));
        assert_eq!(surface.text(), "one\ntwo\nthree");
    }

    #[test]
    fn whitespace_only_submission_is_dropped() {
        let (mut surface, rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "  \n ");
        surface.handle_event(&InputEvent::key("ctrl+enter"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submission_trims_and_keeps_buffer() {
        let (mut surface, rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "  hello world ");
        surface.handle_event(&InputEvent::key("ctrl+enter"));

        assert_eq!(
            rx.try_recv(),
            Ok(OutboundMsg::Submit("hello world".to_string()))
        );
        assert_eq!(surface.text(), "  hello world ");
    }

    #[test]
    fn escalation_normalizes_each_trigger() {
        for (typed, expected) in [
            ("/", "/"),
            ("／", "/"),
            ("@", "@"),
            ("＠", "@"),
            ("#", "#"),
            ("＃", "#"),
        ] {
            let (mut surface, rx) = surface_with(InterpretPolicy::EscalateFirstChar);
            surface.handle_event(&InputEvent::text(typed));
            assert_eq!(
                rx.try_recv(),
                Ok(OutboundMsg::SendToTerminal(expected.to_string())),
                "trigger {typed}"
            );
            assert_eq!(surface.text(), "");
            assert_eq!(surface.cursor(), 0);
        }
    }

    #[test]
    fn escalation_ignores_longer_buffers() {
        let (mut surface, rx) = surface_with(InterpretPolicy::EscalateFirstChar);
        type_text(&mut surface, "/x");
        assert!(rx.try_recv().is_err());
        assert_eq!(surface.text(), "/x");
    }

    #[test]
    fn composition_defers_interpretation_until_flush() {
        let (mut surface, rx) = surface_with(InterpretPolicy::EscalateFirstChar);

        surface.handle_event(&InputEvent::CompositionStart);
        assert!(surface.is_composing());
        surface.handle_event(&InputEvent::text("／"));
        assert!(rx.try_recv().is_err(), "interpreted mid-composition");

        surface.handle_event(&InputEvent::CompositionEnd);
        assert!(!surface.is_composing());
        assert!(rx.try_recv().is_err(), "interpreted inline at composition end");
        assert!(surface.has_pending_interpret());

        surface.flush_deferred();
        assert_eq!(rx.try_recv(), Ok(OutboundMsg::SendToTerminal("/".to_string())));
        assert_eq!(surface.text(), "");
    }

    #[test]
    fn slash_opens_fixed_overlay_with_no_selection() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        surface.handle_event(&InputEvent::text("/"));

        assert!(surface.menu().is_visible());
        assert_eq!(surface.menu().len(), 3);
        assert_eq!(surface.menu().selected(), None);
    }

    #[test]
    fn overlay_clears_when_trigger_no_longer_precedes_cursor() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "note @");
        assert!(surface.menu().is_visible());

        surface.handle_event(&InputEvent::key("backspace"));
        assert!(!surface.menu().is_visible());
    }

    #[test]
    fn overlay_navigation_clamps_and_keeps_text_cursor() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        surface.handle_event(&InputEvent::text("/"));
        let cursor = surface.cursor();

        surface.handle_event(&InputEvent::key("down"));
        surface.handle_event(&InputEvent::key("down"));
        surface.handle_event(&InputEvent::key("down"));
        surface.handle_event(&InputEvent::key("down"));
        assert_eq!(surface.menu().selected(), Some(2));
        assert_eq!(surface.cursor(), cursor);

        surface.handle_event(&InputEvent::key("up"));
        surface.handle_event(&InputEvent::key("up"));
        surface.handle_event(&InputEvent::key("up"));
        assert_eq!(surface.menu().selected(), Some(0));
    }

    #[test]
    fn enter_with_selection_accepts_and_enter_without_is_swallowed() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        surface.handle_event(&InputEvent::text("/"));

        surface.handle_event(&InputEvent::key("enter"));
        assert_eq!(surface.text(), "/", "enter with no selection edited the buffer");
        assert!(surface.menu().is_visible());

        surface.handle_event(&InputEvent::key("down"));
        surface.handle_event(&InputEvent::key("enter"));
        assert_eq!(surface.text(), "/help ");
        assert_eq!(surface.cursor(), 6);
        assert!(!surface.menu().is_visible());
    }

    #[test]
    fn acceptance_replaces_from_right_most_trigger() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "please @");

        surface.handle_event(&InputEvent::SuggestionClick { index: 0 });
        assert_eq!(surface.text(), "please @workspace ");
        assert_eq!(surface.cursor(), "please @workspace ".len());
        assert!(!surface.menu().is_visible());
    }

    #[test]
    fn click_out_of_range_is_guarded() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "please @");

        surface.handle_event(&InputEvent::SuggestionClick { index: 99 });
        assert_eq!(surface.text(), "please @");
        assert!(surface.menu().is_visible());
    }

    #[test]
    fn escape_clears_overlay_without_cancelling() {
        let (mut surface, rx) = surface_with(InterpretPolicy::CursorOverlay);
        surface.handle_event(&InputEvent::text("/"));
        assert!(surface.menu().is_visible());

        surface.handle_event(&InputEvent::key("escape"));
        assert!(!surface.menu().is_visible());
        assert!(rx.try_recv().is_err());
        assert_eq!(surface.text(), "/");
    }

    #[test]
    fn escape_without_overlay_cancels_and_keeps_buffer() {
        let (mut surface, rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "hello");

        surface.handle_event(&InputEvent::key("escape"));
        assert_eq!(rx.try_recv(), Ok(OutboundMsg::Cancel));
        assert_eq!(surface.text(), "hello");
    }

    #[test]
    fn ctrl_enter_submits_while_overlay_is_open() {
        let (mut surface, rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "run /");
        assert!(surface.menu().is_visible());

        surface.handle_event(&InputEvent::key("ctrl+enter"));
        assert_eq!(rx.try_recv(), Ok(OutboundMsg::Submit("run /".to_string())));
    }

    #[test]
    fn clear_message_resets_buffer_and_focus() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "draft /");
        surface.set_focused(false);

        surface.handle_message(&InboundMsg::Clear);
        assert_eq!(surface.text(), "");
        assert_eq!(surface.cursor(), 0);
        assert!(!surface.menu().is_visible());
        assert!(surface.is_focused());
    }

    #[test]
    fn focus_message_keeps_content() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "draft");
        surface.set_focused(false);

        surface.handle_message(&InboundMsg::Focus);
        assert_eq!(surface.text(), "draft");
        assert!(surface.is_focused());
    }

    #[test]
    fn render_marks_cursor_and_appends_overlay() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "/");

        let lines = surface.render(20);
        assert!(lines[0].starts_with("/\x1b[7m \x1b[27m"));
        assert_eq!(lines.len(), 4, "expected buffer line plus 3 overlay rows");
        assert_eq!(surface.cursor_pos(), Some(crate::core::cursor::CursorPos { row: 0, col: 1 }));
    }

    #[test]
    fn delete_word_backwards_stops_at_word_start() {
        let (mut surface, _rx) = surface_with(InterpretPolicy::CursorOverlay);
        type_text(&mut surface, "hello world  ");
        surface.handle_event(&InputEvent::key("ctrl+w"));
        assert_eq!(surface.text(), "hello ");
    }
}
