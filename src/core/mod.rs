//! Core interfaces and types.

pub mod component;
pub mod cursor;
pub mod input_event;
pub mod keybindings;
pub mod message;
pub mod suggestions;
pub mod text;
pub mod trigger;
