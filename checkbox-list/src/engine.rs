//! Selection state engine.
//!
//! The engine is the single owner of selection state: the checkbox and
//! hidden flag of every item, the select-all indicator, the search text and
//! the committed [`Selection`]. Everything the view shows is projected from
//! here. Operations hand each notification to a [`Sink`] the moment it is
//! produced, together with the engine state it describes.

use log::debug;

use crate::config::Config;
use crate::selection::Selection;

/// Visual state of one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemState {
    pub checked: bool,
    /// Excluded by the active search filter.
    pub hidden: bool,
}

/// Outbound event produced by an engine operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    SelectAll(bool),
    Search(String),
    Change {
        selected: Vec<String>,
        changed: Option<String>,
    },
    Apply(Vec<String>),
    Cancel,
}

/// Receiver of engine notifications.
///
/// `emit` sees the engine exactly as it was when the notification was
/// produced, so a view can be brought up to date before delivery.
pub trait Sink {
    fn emit(&mut self, engine: &Engine, notification: Notification);
}

/// Collects notifications in order, ignoring state.
impl Sink for Vec<Notification> {
    fn emit(&mut self, _engine: &Engine, notification: Notification) {
        self.push(notification);
    }
}

/// Counts and aggregate flags derived from the current item states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub total: usize,
    pub hidden: usize,
    pub checked: usize,
    /// Checked and not hidden.
    pub filtered_checked: usize,
    pub some_checked: bool,
    pub all_checked: bool,
    pub all_unchecked: bool,
    /// Every visible item is checked.
    pub all_filtered_checked: bool,
}

impl Flags {
    pub fn visible(&self) -> usize {
        self.total - self.hidden
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    /// Lowercased label for matching.
    needle: String,
    state: ItemState,
}

#[derive(Debug, Clone)]
pub struct Engine {
    entries: Vec<Entry>,
    selected: Selection,
    search_text: String,
    select_all_checked: bool,
    select_all_enabled: bool,
    save_on_apply: bool,
    call_on_change_for_each_item: bool,
}

impl Engine {
    /// Initial state: items marked `checked` are selected, or all of them
    /// when select-all starts checked. Produces no notifications.
    pub fn new(config: &Config) -> Self {
        let all = config.select_all.checked;
        let entries: Vec<Entry> = config
            .items
            .iter()
            .map(|item| Entry {
                value: item.value.clone(),
                needle: item.label.to_lowercase(),
                state: ItemState {
                    checked: item.checked || all,
                    hidden: false,
                },
            })
            .collect();

        let selected = Selection::from_values(
            entries
                .iter()
                .filter(|e| e.state.checked)
                .map(|e| e.value.clone()),
        );

        let mut engine = Self {
            entries,
            selected,
            search_text: String::new(),
            select_all_checked: all,
            select_all_enabled: config.select_all.enabled,
            save_on_apply: config.apply.save_on_apply,
            call_on_change_for_each_item: config.select_all.call_on_change_for_each_item,
        };
        engine.sync_select_all();
        engine
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Filter items by case-insensitive label substring. Items that stop
    /// matching are hidden and unchecked; clearing the filter later does not
    /// re-check them.
    pub fn search(&mut self, text: &str, sink: &mut impl Sink) {
        debug!("search '{}'", text);
        self.search_text = text.to_string();
        let needle = text.to_lowercase();

        for entry in &mut self.entries {
            let is_match = entry.needle.contains(&needle);
            entry.state.hidden = !is_match;
            if !is_match {
                entry.state.checked = false;
            }
        }

        sink.emit(self, Notification::Search(text.to_string()));
        self.sync_change(None, sink);
    }

    /// Check or uncheck every visible item. Hidden items end up unchecked.
    ///
    /// The closing `Change` notification carries no changed value; only the
    /// per-item ones (with `call_on_change_for_each_item`) name their item.
    pub fn select_all(&mut self, value: bool, sink: &mut impl Sink) {
        debug!("select_all {}", value);
        self.select_all_checked = value;

        for index in 0..self.entries.len() {
            let state = &mut self.entries[index].state;
            state.checked = value && !state.hidden;

            if self.call_on_change_for_each_item {
                let changed = self.entries[index].value.clone();
                self.sync_change(Some(changed), sink);
            }
        }

        sink.emit(self, Notification::SelectAll(value));
        self.sync_change(None, sink);
    }

    /// Set one item's checkbox. Unknown values are ignored.
    ///
    /// A hidden item stays unchecked while the filter excludes it.
    pub fn change(&mut self, value: &str, checked: bool, sink: &mut impl Sink) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.value == value) else {
            debug!("change: no item with value '{}'", value);
            return;
        };

        entry.state.checked = checked && !entry.state.hidden;
        self.sync_change(Some(value.to_string()), sink);
    }

    /// Commit the current checkbox states as the selection.
    pub fn apply(&mut self, sink: &mut impl Sink) {
        self.commit_checkboxes();
        self.sync_select_all();
        debug!("apply {:?}", self.selected.values());
        sink.emit(self, Notification::Apply(self.selected.values().to_vec()));
    }

    /// Restore checkboxes from the committed selection and clear the filter.
    pub fn cancel(&mut self, sink: &mut impl Sink) {
        debug!("cancel, restoring {:?}", self.selected.values());
        for entry in &mut self.entries {
            entry.state.checked = self.selected.contains(&entry.value);
        }

        self.search("", sink);
        self.sync_select_all();
        sink.emit(self, Notification::Cancel);
    }

    // -------------------------------------------------------------------------
    // Pipeline
    // -------------------------------------------------------------------------

    fn sync_change(&mut self, changed: Option<String>, sink: &mut impl Sink) {
        if !self.save_on_apply {
            self.commit_checkboxes();
        }
        self.sync_select_all();

        let notification = Notification::Change {
            selected: self.selected.values().to_vec(),
            changed,
        };
        sink.emit(self, notification);
    }

    fn commit_checkboxes(&mut self) {
        for entry in &self.entries {
            if entry.state.checked {
                self.selected.insert(entry.value.as_str());
            } else {
                self.selected.remove(&entry.value);
            }
        }
    }

    fn sync_select_all(&mut self) {
        if !self.select_all_enabled {
            return;
        }
        let flags = self.flags();
        self.select_all_checked = flags.all_filtered_checked || flags.all_checked;
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    /// Recompute counts and aggregate flags from the item states.
    pub fn flags(&self) -> Flags {
        let total = self.entries.len();
        let mut hidden = 0;
        let mut checked = 0;
        let mut filtered_checked = 0;

        for ItemState { checked: is_checked, hidden: is_hidden } in self.states() {
            if is_checked {
                checked += 1;
            }
            if is_checked && !is_hidden {
                filtered_checked += 1;
            }
            if is_hidden {
                hidden += 1;
            }
        }

        Flags {
            total,
            hidden,
            checked,
            filtered_checked,
            some_checked: checked > 0,
            all_checked: checked == total,
            all_unchecked: checked == 0,
            all_filtered_checked: filtered_checked == total - hidden,
        }
    }

    /// Item states in item order.
    pub fn states(&self) -> impl Iterator<Item = ItemState> + '_ {
        self.entries.iter().map(|e| e.state)
    }

    pub fn state(&self, value: &str) -> Option<ItemState> {
        self.entries.iter().find(|e| e.value == value).map(|e| e.state)
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.state(value).is_some_and(|s| s.checked)
    }

    pub fn is_hidden(&self, value: &str) -> bool {
        self.state(value).is_some_and(|s| s.hidden)
    }

    /// Committed selection.
    pub fn selected(&self) -> &[String] {
        self.selected.values()
    }

    /// Number of checked checkboxes (the summary count).
    pub fn checked_count(&self) -> usize {
        self.states().filter(|s| s.checked).count()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn select_all_checked(&self) -> bool {
        self.select_all_checked
    }

    /// A non-empty filter hides every item.
    pub fn nothing_found(&self) -> bool {
        !self.search_text.is_empty() && self.states().all(|s| s.hidden)
    }
}
