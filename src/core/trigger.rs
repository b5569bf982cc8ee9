//! Trigger-character detection and normalization.
//!
//! Both the half-width and full-width forms count as triggers so a user
//! typing through a Japanese IME does not have to leave composition mode to
//! reach the console.

/// Characters that escalate a single-character buffer to the console.
pub const ESCALATION_TRIGGERS: [char; 6] = ['/', '／', '@', '＠', '#', '＃'];

/// Characters scanned for during suggestion acceptance.
pub const ACCEPTANCE_TRIGGERS: [char; 4] = ['/', '／', '@', '＠'];

/// Trigger class found immediately before the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Slash,
    Mention,
}

/// Maps full-width trigger forms to their half-width equivalents.
pub fn normalize_half_width(ch: char) -> char {
    match ch {
        '／' => '/',
        '＠' => '@',
        '＃' => '#',
        other => other,
    }
}

/// Returns the trigger character when `text` is exactly one trigger
/// character and nothing else.
pub fn escalation_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    ESCALATION_TRIGGERS.contains(&first).then_some(first)
}

/// Classifies the character immediately before `cursor`, if it is a trigger.
pub fn trigger_before_cursor(text: &str, cursor: usize) -> Option<TriggerKind> {
    let before = text.get(..cursor)?;
    match before.chars().next_back()? {
        '/' | '／' => Some(TriggerKind::Slash),
        '@' | '＠' => Some(TriggerKind::Mention),
        _ => None,
    }
}

/// Byte offset of the right-most acceptance trigger in `text`, if any.
pub fn last_trigger_index(text: &str) -> Option<usize> {
    text.char_indices()
        .rev()
        .find(|(_, ch)| ACCEPTANCE_TRIGGERS.contains(ch))
        .map(|(index, _)| index)
}
