//! Widgets built on the component model.

pub mod prompt;
pub mod suggestion_list;

pub use prompt::{InterpretPolicy, PromptOptions, PromptSurface};
pub use suggestion_list::{SuggestionList, SuggestionListTheme};
