//! Prompt session: the event pump coupling one surface to one controller.

use std::sync::mpsc::{channel, Receiver};

use crate::core::component::Component;
use crate::core::input_event::InputEvent;
use crate::core::keybindings::default_prompt_keybindings_handle;
use crate::core::message::InboundMsg;
use crate::runtime::panel::PanelController;
use crate::widgets::prompt::{PromptOptions, PromptSurface};

/// Owns a [`PromptSurface`] and its [`PanelController`] plus the two
/// message channels between them, and enforces the per-turn ordering:
/// dispatch the event, flush the surface's deferred interpretation, let
/// the controller drain the outbound channel, deliver inbound messages.
pub struct PromptSession {
    surface: PromptSurface,
    controller: PanelController,
    inbound: Receiver<InboundMsg>,
}

impl PromptSession {
    pub fn new(options: PromptOptions) -> Self {
        let (out_tx, out_rx) = channel();
        let (in_tx, in_rx) = channel();

        let surface = PromptSurface::new(default_prompt_keybindings_handle(), out_tx, options);
        let controller = PanelController::new(out_rx, in_tx);

        Self {
            surface,
            controller,
            inbound: in_rx,
        }
    }

    pub fn surface(&self) -> &PromptSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut PromptSurface {
        &mut self.surface
    }

    pub fn controller_mut(&mut self) -> &mut PanelController {
        &mut self.controller
    }

    pub fn is_disposed(&self) -> bool {
        self.controller.is_disposed()
    }

    /// Dispatches one input event through the full turn.
    ///
    /// Disposal is implicit cancellation: a disposed panel stops event
    /// delivery, so events after `Cancel` are dropped here.
    pub fn dispatch(&mut self, event: &InputEvent) {
        if self.controller.is_disposed() {
            return;
        }

        self.surface.handle_event(event);
        self.surface.flush_deferred();
        self.controller.process();
        self.deliver_inbound();
    }

    /// Host re-revealed an already-open panel.
    pub fn reveal(&mut self) {
        if self.controller.is_disposed() {
            return;
        }
        self.controller.reveal();
        self.deliver_inbound();
    }

    fn deliver_inbound(&mut self) {
        while let Ok(message) = self.inbound.try_recv() {
            self.surface.handle_message(&message);
        }
    }
}
