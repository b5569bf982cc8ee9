//! Message protocol between the input surface and its panel controller.
//!
//! Two independent one-directional channels, each carrying a closed enum so
//! both directions get compile-time exhaustiveness checking. Delivery is
//! order-preserving, at-most-once, fire-and-forget.

/// Surface → controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMsg {
    /// User-finalized prompt, already trimmed.
    Submit(String),
    /// User aborted.
    Cancel,
    /// Single normalized trigger character to forward immediately.
    SendToTerminal(String),
}

/// Controller → surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundMsg {
    /// Reset buffer and focus.
    Clear,
    /// Focus only.
    Focus,
}
