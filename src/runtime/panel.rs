//! Panel controller: drives the external console and answers the surface.

use std::sync::mpsc::{Receiver, Sender};

use crate::core::message::{InboundMsg, OutboundMsg};
use crate::logging::DebugLogger;

/// External interactive console collaborator.
///
/// Implementations are assumed reliable once invoked; availability is the
/// only failure mode the controller handles.
pub trait Console {
    /// Activate/reveal the console.
    fn show(&mut self);

    /// Write text into the console without a trailing newline.
    fn send_text(&mut self, text: &str);

    /// Confirm the written text (press enter).
    fn confirm(&mut self);

    /// Move input focus to the console.
    fn focus(&mut self);
}

pub const NO_CONSOLE_WARNING: &str =
    "No active console. Start the interactive console and retry.";

/// Receives outbound surface messages and forwards them to the console.
///
/// A missing console is surfaced as a non-blocking warning and leaves the
/// surface untouched so the user can retry; it is never an error.
pub struct PanelController {
    outbound: Receiver<OutboundMsg>,
    inbound: Sender<InboundMsg>,
    console: Option<Box<dyn Console>>,
    on_warning: Option<Box<dyn FnMut(&str)>>,
    disposed: bool,
    trace: bool,
    logger: DebugLogger,
}

impl PanelController {
    pub fn new(outbound: Receiver<OutboundMsg>, inbound: Sender<InboundMsg>) -> Self {
        let config = crate::config::EnvConfig::from_env();
        Self {
            outbound,
            inbound,
            console: None,
            on_warning: None,
            disposed: false,
            trace: config.debug,
            logger: DebugLogger::new(&config),
        }
    }

    pub fn set_console(&mut self, console: Option<Box<dyn Console>>) {
        self.console = console;
    }

    pub fn set_on_warning(&mut self, handler: Option<Box<dyn FnMut(&str)>>) {
        self.on_warning = handler;
    }

    /// Whether the panel has been disposed by a `Cancel`. A disposed panel
    /// stops processing; the surface simply stops receiving events.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Re-reveal of an already-open panel: focus the surface, keep content.
    pub fn reveal(&mut self) {
        let _ = self.inbound.send(InboundMsg::Focus);
    }

    /// Drains the outbound channel, handling each message in send order.
    pub fn process(&mut self) {
        while let Ok(message) = self.outbound.try_recv() {
            if self.disposed {
                return;
            }
            if self.trace {
                self.logger.log(&format!("outbound: {message:?}"));
            }
            match message {
                OutboundMsg::Submit(text) => self.forward_submission(&text),
                OutboundMsg::Cancel => self.disposed = true,
                OutboundMsg::SendToTerminal(text) => self.forward_to_console(&text),
            }
        }
    }

    fn forward_submission(&mut self, text: &str) {
        let Some(console) = self.console.as_mut() else {
            self.warn(NO_CONSOLE_WARNING);
            return;
        };
        console.show();
        console.send_text(text);
        console.confirm();

        // Confirms the round trip instead of assuming success: the surface
        // clears its buffer only on receipt.
        let _ = self.inbound.send(InboundMsg::Clear);
    }

    fn forward_to_console(&mut self, text: &str) {
        let Some(console) = self.console.as_mut() else {
            self.warn(NO_CONSOLE_WARNING);
            return;
        };
        console.show();
        console.send_text(text);
        console.focus();
    }

    fn warn(&mut self, message: &str) {
        self.logger.log(&format!("warning: {message}"));
        if let Some(handler) = self.on_warning.as_mut() {
            handler(message);
        }
    }
}
