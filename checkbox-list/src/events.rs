//! Host event handling result.

/// Result of handling a host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event did not target this widget, try other handlers.
    Ignored,
    /// Event was handled by this widget.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
