//! Prompt keybindings.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptAction {
    Submit,
    Cancel,
    NewLine,
    SelectUp,
    SelectDown,
    SelectConfirm,
    SelectCancel,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorLineStart,
    CursorLineEnd,
    DeleteCharBackward,
    DeleteCharForward,
    DeleteWordBackward,
}

pub type KeyId = String;

#[derive(Debug, Clone)]
pub enum KeyBinding {
    Single(KeyId),
    Multiple(Vec<KeyId>),
}

impl From<&str> for KeyBinding {
    fn from(value: &str) -> Self {
        KeyBinding::Single(value.to_string())
    }
}

impl From<Vec<&str>> for KeyBinding {
    fn from(value: Vec<&str>) -> Self {
        KeyBinding::Multiple(value.into_iter().map(|item| item.to_string()).collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptKeybindingsConfig {
    entries: HashMap<PromptAction, KeyBinding>,
}

impl PromptKeybindingsConfig {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn set<K: Into<KeyBinding>>(&mut self, action: PromptAction, keys: K) {
        self.entries.insert(action, keys.into());
    }
}

pub static DEFAULT_PROMPT_KEYBINDINGS: Lazy<HashMap<PromptAction, Vec<KeyId>>> = Lazy::new(|| {
    use PromptAction::*;

    let mut map = HashMap::new();
    map.insert(Submit, vec!["ctrl+enter".to_string()]);
    map.insert(Cancel, vec!["escape".to_string()]);
    map.insert(NewLine, vec!["enter".to_string(), "shift+enter".to_string()]);
    map.insert(SelectUp, vec!["up".to_string()]);
    map.insert(SelectDown, vec!["down".to_string()]);
    map.insert(SelectConfirm, vec!["enter".to_string()]);
    map.insert(SelectCancel, vec!["escape".to_string()]);
    map.insert(CursorUp, vec!["up".to_string()]);
    map.insert(CursorDown, vec!["down".to_string()]);
    map.insert(CursorLeft, vec!["left".to_string(), "ctrl+b".to_string()]);
    map.insert(CursorRight, vec!["right".to_string(), "ctrl+f".to_string()]);
    map.insert(
        CursorLineStart,
        vec!["home".to_string(), "ctrl+a".to_string()],
    );
    map.insert(CursorLineEnd, vec!["end".to_string(), "ctrl+e".to_string()]);
    map.insert(DeleteCharBackward, vec!["backspace".to_string()]);
    map.insert(
        DeleteCharForward,
        vec!["delete".to_string(), "ctrl+d".to_string()],
    );
    map.insert(
        DeleteWordBackward,
        vec!["ctrl+w".to_string(), "alt+backspace".to_string()],
    );

    map
});

pub struct PromptKeybindingsManager {
    action_to_keys: HashMap<PromptAction, Vec<KeyId>>,
}

impl PromptKeybindingsManager {
    pub fn new(config: PromptKeybindingsConfig) -> Self {
        let mut manager = Self {
            action_to_keys: HashMap::new(),
        };
        manager.build_maps(&config);
        manager
    }

    fn build_maps(&mut self, config: &PromptKeybindingsConfig) {
        self.action_to_keys.clear();

        for (action, keys) in DEFAULT_PROMPT_KEYBINDINGS.iter() {
            self.action_to_keys.insert(*action, keys.clone());
        }

        for (action, binding) in config.entries.iter() {
            let key_list = match binding {
                KeyBinding::Single(key) => vec![key.clone()],
                KeyBinding::Multiple(keys) => keys.clone(),
            };
            self.action_to_keys.insert(*action, key_list);
        }
    }

    pub fn matches(&self, key_id: &str, action: PromptAction) -> bool {
        let Some(keys) = self.action_to_keys.get(&action) else {
            return false;
        };
        keys.iter().any(|key| key == key_id)
    }

    pub fn get_keys(&self, action: PromptAction) -> Vec<KeyId> {
        self.action_to_keys.get(&action).cloned().unwrap_or_default()
    }

    pub fn set_config(&mut self, config: PromptKeybindingsConfig) {
        self.build_maps(&config);
    }
}

pub type PromptKeybindingsHandle = Arc<Mutex<PromptKeybindingsManager>>;

pub fn default_prompt_keybindings_handle() -> PromptKeybindingsHandle {
    Arc::new(Mutex::new(PromptKeybindingsManager::new(
        PromptKeybindingsConfig::default(),
    )))
}

#[cfg(test)]
mod tests {
    use super::{PromptAction, PromptKeybindingsConfig, PromptKeybindingsManager};

    #[test]
    fn defaults_match_expected_keys() {
        let manager = PromptKeybindingsManager::new(PromptKeybindingsConfig::default());
        assert!(manager.matches("ctrl+enter", PromptAction::Submit));
        assert!(manager.matches("escape", PromptAction::Cancel));
        assert!(manager.matches("enter", PromptAction::NewLine));
        assert!(manager.matches("shift+enter", PromptAction::NewLine));
        assert!(!manager.matches("enter", PromptAction::Submit));
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut config = PromptKeybindingsConfig::default();
        config.set(PromptAction::Submit, "ctrl+s");
        let manager = PromptKeybindingsManager::new(config);
        assert!(manager.matches("ctrl+s", PromptAction::Submit));
        assert!(!manager.matches("ctrl+enter", PromptAction::Submit));
    }
}
