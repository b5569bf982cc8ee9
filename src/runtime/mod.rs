//! Panel runtime: controller and session pump.

pub mod panel;
pub mod session;

pub use panel::{Console, PanelController, NO_CONSOLE_WARNING};
pub use session::PromptSession;
