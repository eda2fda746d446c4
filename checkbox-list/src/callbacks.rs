//! Outbound callback slots.

use std::fmt;

use crate::engine::Notification;

pub type SelectAllCallback = Box<dyn FnMut(bool)>;
pub type SearchCallback = Box<dyn FnMut(&str)>;
pub type ChangeCallback = Box<dyn FnMut(&[String], Option<&str>)>;
pub type ApplyCallback = Box<dyn FnMut(&[String])>;
pub type CancelCallback = Box<dyn FnMut()>;

/// The five caller-supplied callbacks. Each defaults to a no-op.
///
/// Callbacks are owned by the widget instance, so a callback cannot hold
/// a mutable borrow of that same instance.
pub struct Callbacks {
    pub on_select_all: SelectAllCallback,
    pub on_search: SearchCallback,
    pub on_change: ChangeCallback,
    pub on_apply: ApplyCallback,
    pub on_cancel: CancelCallback,
}

impl Default for Callbacks {
    fn default() -> Self {
        Self {
            on_select_all: Box::new(|_| {}),
            on_search: Box::new(|_| {}),
            on_change: Box::new(|_, _| {}),
            on_apply: Box::new(|_| {}),
            on_cancel: Box::new(|| {}),
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callbacks(..)")
    }
}

impl Callbacks {
    /// Invoke the callback matching a notification.
    pub fn dispatch(&mut self, notification: &Notification) {
        match notification {
            Notification::SelectAll(value) => (self.on_select_all)(*value),
            Notification::Search(text) => (self.on_search)(text.as_str()),
            Notification::Change { selected, changed } => {
                (self.on_change)(selected.as_slice(), changed.as_deref())
            }
            Notification::Apply(selected) => (self.on_apply)(selected.as_slice()),
            Notification::Cancel => (self.on_cancel)(),
        }
    }
}
