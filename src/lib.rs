//! Floating prompt pane with IME-safe input handling.
//!
//! Invariant: committed buffer interpretation never runs while an IME
//! composition is active; a composition end defers it by one event turn.
//!
//! # Public API Overview
//! - Embed a [`PromptSurface`] and drive it with [`InputEvent`]s, or let a
//!   [`PromptSession`] wire the surface to a [`PanelController`].
//! - Connect an external console by implementing [`Console`].
//! - Customize trigger suggestions via [`PromptOptions`].

pub mod config;
pub mod logging;

pub mod core;
pub mod runtime;
pub mod widgets;

/// Prompt surface and its construction options.
pub use crate::widgets::prompt::{InterpretPolicy, PromptOptions, PromptSurface};

/// Suggestion overlay rendering.
pub use crate::widgets::suggestion_list::{SuggestionList, SuggestionListTheme};

/// Suggestion data and the overlay selection model.
pub use crate::core::suggestions::{
    default_mention_suggestions, default_slash_suggestions, Suggestion, SuggestionMenu,
};

/// Surface/controller message protocol.
pub use crate::core::message::{InboundMsg, OutboundMsg};

/// Keybinding configuration and default mappings.
pub use crate::core::keybindings::{
    default_prompt_keybindings_handle, KeyBinding, KeyId, PromptAction, PromptKeybindingsConfig,
    PromptKeybindingsHandle, PromptKeybindingsManager, DEFAULT_PROMPT_KEYBINDINGS,
};

/// Runtime component traits and input events.
pub use crate::core::component::{Component, Focusable};
pub use crate::core::cursor::CursorPos;
pub use crate::core::input_event::InputEvent;

/// Trigger character classification helpers.
pub use crate::core::trigger::{normalize_half_width, TriggerKind};

/// Controller and session runtime.
pub use crate::runtime::panel::{Console, PanelController, NO_CONSOLE_WARNING};
pub use crate::runtime::session::PromptSession;

/// Visible width helper that ignores ANSI control sequences.
pub use crate::core::text::visible_width;
