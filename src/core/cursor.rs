//! Cursor position metadata for host-side IME cursor placement.

/// Position of the text cursor relative to a component's rendered lines.
///
/// Hosts use this to park the hardware cursor on the cell being edited so
/// the IME candidate window opens at the right spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub row: usize,
    pub col: usize,
}
